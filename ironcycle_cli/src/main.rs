use clap::{Parser, Subcommand};
use ironcycle_core::prescription::DeloadStyle;
use ironcycle_core::strength::{deload_tier, DeloadTier};
use ironcycle_core::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ironcycle")]
#[command(about = "Training load analysis and prescription engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze workout history: weekly stats, volume zones, recovery
    Analyze {
        /// JSON file with workout logs, newest first
        #[arg(long)]
        history: PathBuf,

        /// JSON file with anchor-lift 1RMs
        #[arg(long)]
        profiles: Option<PathBuf>,

        /// Bodyweight in kg, needed for strength-scaled thresholds
        #[arg(long)]
        bodyweight: Option<f64>,

        /// Emit the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Prescribe sets, reps and a load window for one exercise
    Prescribe {
        /// Exercise name from the catalog
        #[arg(long)]
        exercise: String,

        /// Periodization phase id (e.g. accumulation, undulating)
        #[arg(long)]
        phase: String,

        /// 1-based week within the phase
        #[arg(long, default_value_t = 1)]
        week: u32,

        /// Working sets planned before phase adjustment
        #[arg(long, default_value_t = 3)]
        sets: u32,

        /// JSON file with anchor-lift 1RMs
        #[arg(long)]
        profiles: PathBuf,

        /// Layoff length for return-to-training (1-2_weeks, 2-4_weeks,
        /// 4-12_weeks, more_12_weeks)
        #[arg(long)]
        time_away: Option<TimeAway>,

        /// Prescribe a deload session instead of the phase scheme
        #[arg(long)]
        deload: bool,

        /// Bodyweight in kg, used to pick the deload style
        #[arg(long)]
        bodyweight: Option<f64>,

        /// Emit the prescription as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score anchor-lift strength against bodyweight standards
    Strength {
        /// Bodyweight in kg
        #[arg(long)]
        bodyweight: f64,

        /// JSON file with anchor-lift 1RMs
        #[arg(long)]
        profiles: PathBuf,
    },

    /// Reorder a session for recovery-aware sequencing
    Sort {
        /// JSON file with an array of exercise names
        #[arg(long)]
        session: PathBuf,
    },
}

fn main() -> Result<()> {
    ironcycle_core::logging::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Analyze {
            history,
            profiles,
            bodyweight,
            json,
        } => cmd_analyze(&history, profiles.as_deref(), bodyweight, json, &config),
        Commands::Prescribe {
            exercise,
            phase,
            week,
            sets,
            profiles,
            time_away,
            deload,
            bodyweight,
            json,
        } => cmd_prescribe(
            &exercise, &phase, week, sets, &profiles, time_away, deload, bodyweight, json,
        ),
        Commands::Strength {
            bodyweight,
            profiles,
        } => cmd_strength(bodyweight, &profiles),
        Commands::Sort { session } => cmd_sort(&session),
    }
}

fn load_profiles(path: &Path) -> Result<StrengthProfiles> {
    let contents = std::fs::read_to_string(path)?;
    let profiles: StrengthProfiles = serde_json::from_str(&contents)?;
    Ok(profiles)
}

fn load_history(path: &Path) -> Result<Vec<WorkoutLog>> {
    let contents = std::fs::read_to_string(path)?;
    let history: Vec<WorkoutLog> = serde_json::from_str(&contents)?;
    Ok(history)
}

fn validated_catalog() -> Result<&'static Catalog> {
    let catalog = get_default_catalog();
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }
    Ok(catalog)
}

fn global_score(profiles: Option<&StrengthProfiles>, bodyweight: Option<f64>) -> u32 {
    match (profiles, bodyweight) {
        (Some(p), Some(bw)) if bw > 0.0 => global_strength(p, bw).score,
        // nominal mid-range capacity when there is nothing to score against
        _ => 50,
    }
}

fn cmd_analyze(
    history_path: &Path,
    profiles_path: Option<&Path>,
    bodyweight: Option<f64>,
    json: bool,
    config: &Config,
) -> Result<()> {
    let catalog = validated_catalog()?;
    let history = load_history(history_path)?;
    let profiles = profiles_path.map(load_profiles).transpose()?;

    let score = global_score(profiles.as_ref(), bodyweight);
    let stats = weekly_statistics(&history);
    let report = analyze_trends(&history, score, &config.recovery, catalog);

    // weekly volume per muscle from the most recent ISO week
    use chrono::Datelike;
    let latest_week = stats.last().map(|s| (s.year, s.week));
    let mut week_volume: HashMap<Muscle, f64> = HashMap::new();
    for log in &history {
        let iso = log.date.iso_week();
        if Some((iso.year(), iso.week())) != latest_week {
            continue;
        }
        for (muscle, metrics) in muscle_metrics(log, catalog) {
            *week_volume.entry(muscle).or_default() += metrics.weighted_volume;
        }
    }

    let zones: Vec<(Muscle, f64, VolumeZone)> = Muscle::ALL
        .into_iter()
        .map(|m| {
            let series = week_volume.get(&m).copied().unwrap_or(0.0);
            (m, series, classify_volume(m, series, score))
        })
        .collect();

    if json {
        let out = serde_json::json!({
            "weekly_stats": stats,
            "zones": zones
                .iter()
                .map(|(m, series, zone)| {
                    serde_json::json!({
                        "muscle": m,
                        "weekly_series": series,
                        "zone": zone,
                    })
                })
                .collect::<Vec<_>>(),
            "trends": report,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Weekly statistics");
    for stat in &stats {
        let rir = stat
            .avg_rir
            .map(|r| format!("{:.1}", r))
            .unwrap_or_else(|| "-".into());
        println!(
            "  {}  {:>5.1} series  {:>8.0} kg  avg RIR {}  ({} sessions)",
            stat.label, stat.volume, stat.workload, rir, stat.sessions
        );
    }

    println!("\nVolume zones (latest week)");
    for (muscle, series, zone) in &zones {
        if *series > 0.0 {
            println!("  {:<22} {:>5.1} sets  {}", muscle.to_string(), series, zone);
        }
    }

    if let Some(report) = report {
        println!("\nRecovery score: {}/100", report.recovery_score);
        for warning in &report.warnings {
            println!("  ! {}", warning);
        }
    } else {
        println!("\nNo history to analyze");
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_prescribe(
    exercise_name: &str,
    phase_str: &str,
    week: u32,
    sets: u32,
    profiles_path: &Path,
    time_away: Option<TimeAway>,
    deload: bool,
    bodyweight: Option<f64>,
    json: bool,
) -> Result<()> {
    let catalog = validated_catalog()?;
    let profiles = load_profiles(profiles_path)?;

    let Some(exercise) = catalog.find_exercise(exercise_name) else {
        return Err(Error::Other(format!(
            "exercise '{}' is not in the catalog",
            exercise_name
        )));
    };

    // an unknown phase is not fatal: fall back to the generic manual scheme
    let phase_id = PhaseId::parse(phase_str).unwrap_or_else(|| {
        eprintln!(
            "Unknown phase '{}'. Falling back to the manual scheme.",
            phase_str
        );
        PhaseId::Manual
    });
    let phase = catalog
        .find_phase(phase_id)
        .ok_or_else(|| Error::Other(format!("phase {:?} missing from catalog", phase_id)))?;

    let ctx = SessionContext {
        week,
        planned_working_sets: sets,
        time_away,
    };

    let result = if deload {
        let style = match bodyweight {
            Some(bw) if bw > 0.0 => match deload_tier(&global_strength(&profiles, bw)) {
                DeloadTier::Advanced => DeloadStyle::Systemic,
                DeloadTier::Beginner => DeloadStyle::Technique,
            },
            _ => DeloadStyle::Technique,
        };
        deload_prescription(exercise, style, &ctx, &profiles, Some(phase))
    } else {
        prescribe(exercise, phase, &ctx, &profiles)
    };

    let Some(prescription) = result else {
        println!(
            "No prescription for {}: no anchor 1RM on file for its primary muscle",
            exercise.name
        );
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&prescription)?);
        return Ok(());
    }

    println!("{} ({}, week {})", exercise.name, phase.name, week);
    println!(
        "  {} x {} @ {:.0} kg  (window {:.0}-{:.0} kg)",
        prescription.sets,
        prescription.reps,
        prescription.load,
        prescription.min_load,
        prescription.max_load
    );
    if let Some(rir) = prescription.target_rir {
        println!("  target RIR {}", rir);
    }
    if let Some(note) = &prescription.note {
        println!("  {}", note);
    }
    if prescription.pr_test {
        println!("  PR TEST: single max attempt");
    }

    Ok(())
}

fn cmd_strength(bodyweight: f64, profiles_path: &Path) -> Result<()> {
    if bodyweight <= 0.0 {
        return Err(Error::Other("bodyweight must be positive".into()));
    }
    let profiles = load_profiles(profiles_path)?;

    println!("Anchor lifts (bodyweight {:.1} kg)", bodyweight);
    for anchor in AnchorLift::ALL {
        match profiles.get(&anchor) {
            Some(&one_rm) => {
                match assess_strength(anchor.display_name(), bodyweight, one_rm, 1) {
                    Some(assessment) => println!(
                        "  {:<14} {:>6.1} kg  ratio {:.2}  {}  (target {} sets/week)",
                        anchor.display_name(),
                        one_rm,
                        assessment.ratio,
                        assessment.class.label(),
                        assessment.weekly_set_target
                    ),
                    None => println!("  {:<14} unscored", anchor.display_name()),
                }
            }
            None => println!("  {:<14} no 1RM on file", anchor.display_name()),
        }
    }

    let global = global_strength(&profiles, bodyweight);
    println!("\nGlobal: {} ({}/100)", global.label(), global.score);
    if global.populated < AnchorLift::ALL.len() {
        println!("  (partial profile: missing lifts count as zero)");
    }

    Ok(())
}

fn cmd_sort(session_path: &Path) -> Result<()> {
    let catalog = validated_catalog()?;
    let contents = std::fs::read_to_string(session_path)?;
    let names: Vec<String> = serde_json::from_str(&contents)?;

    let sorted = smart_sort(&names, catalog);
    for (i, name) in sorted.iter().enumerate() {
        println!("{}. {}", i + 1, name);
    }

    Ok(())
}
