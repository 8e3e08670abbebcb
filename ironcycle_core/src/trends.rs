//! Weekly aggregation and recovery-risk analysis over workout history.

use crate::catalog::Catalog;
use crate::config::RecoveryConfig;
use crate::types::{Muscle, WorkoutLog};
use crate::volume::muscle_metrics;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Totals for one ISO week of training
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WeeklyStat {
    /// ISO week label, e.g. "2026-W35"
    pub label: String,
    pub year: i32,
    pub week: u32,
    /// Sum of logged working series
    pub volume: f64,
    /// Sum of load x reps over working sets
    pub workload: f64,
    /// Mean RIR over sets that recorded one
    pub avg_rir: Option<f64>,
    pub sessions: u32,
}

/// Aggregate history into per-ISO-week totals, oldest week first.
pub fn weekly_statistics(history: &[WorkoutLog]) -> Vec<WeeklyStat> {
    #[derive(Default)]
    struct Accum {
        volume: f64,
        workload: f64,
        rir_sum: f64,
        rir_count: u32,
        sessions: u32,
    }

    let mut weeks: BTreeMap<(i32, u32), Accum> = BTreeMap::new();

    for log in history {
        let iso = log.date.iso_week();
        let acc = weeks.entry((iso.year(), iso.week())).or_default();

        acc.volume += f64::from(log.total_series);
        acc.sessions += 1;

        for item in log.split.values().flatten() {
            if item.sets.iter().any(|s| s.is_working()) {
                for set in item.working_sets() {
                    acc.workload += set.load.unwrap_or(0.0) * f64::from(set.reps);
                    if let Some(rir) = set.rir {
                        acc.rir_sum += f64::from(rir);
                        acc.rir_count += 1;
                    }
                }
            } else {
                acc.workload += f64::from(item.series)
                    * f64::from(item.reps)
                    * item.load.unwrap_or(0.0);
            }
        }
    }

    weeks
        .into_iter()
        .map(|((year, week), acc)| WeeklyStat {
            label: format!("{}-W{:02}", year, week),
            year,
            week,
            volume: acc.volume,
            workload: acc.workload,
            avg_rir: (acc.rir_count > 0).then(|| acc.rir_sum / f64::from(acc.rir_count)),
            sessions: acc.sessions,
        })
        .collect()
}

/// Per-muscle volume and workload series plus a recovery verdict
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrendReport {
    /// Weighted weekly volume per muscle, oldest log first
    pub muscle_volume: HashMap<Muscle, Vec<f64>>,
    /// Weighted workload per muscle, oldest log first
    pub muscle_workload: HashMap<Muscle, Vec<f64>>,
    /// 0-100, higher is safer
    pub recovery_score: u8,
    pub warnings: Vec<String>,
}

/// Analyze the most recent logs (newest first) for recovery risk.
///
/// The score starts at 95. Each muscle whose latest volume breaches the
/// absolute ceiling costs 30 points; each sharp week-over-week spike costs
/// 15. The spike tolerance widens with the lifter's global strength score.
/// Returns None when the history is empty.
pub fn analyze_trends(
    history: &[WorkoutLog],
    strength_score: u32,
    recovery: &RecoveryConfig,
    catalog: &Catalog,
) -> Option<TrendReport> {
    if history.is_empty() {
        return None;
    }

    // last four sessions, chronological
    let recent: Vec<&WorkoutLog> = history.iter().take(4).rev().collect();

    let mut muscle_volume: HashMap<Muscle, Vec<f64>> = HashMap::new();
    let mut muscle_workload: HashMap<Muscle, Vec<f64>> = HashMap::new();

    for log in &recent {
        let metrics = muscle_metrics(log, catalog);
        for muscle in Muscle::ALL {
            let m = metrics.get(&muscle).copied().unwrap_or_default();
            muscle_volume.entry(muscle).or_default().push(m.weighted_volume);
            muscle_workload.entry(muscle).or_default().push(m.workload);
        }
    }

    let mut score: i32 = 95;
    let mut warnings: Vec<String> = Vec::new();
    let warn = |warnings: &mut Vec<String>, message: String| {
        if !warnings.contains(&message) {
            warnings.push(message);
        }
    };

    let spike_threshold =
        recovery.spike_base + f64::from(strength_score) / recovery.spike_score_divisor;

    for muscle in Muscle::ALL {
        let series = &muscle_volume[&muscle];
        let Some(&last) = series.last() else { continue };

        if last > recovery.volume_ceiling {
            score -= 30;
            warn(
                &mut warnings,
                format!(
                    "DANGER: {} volume ({:.1} sets) exceeds the recoverable ceiling",
                    muscle, last
                ),
            );
        }

        if series.len() >= 2 {
            let prev = series[series.len() - 2];
            if prev > 4.0 && (last - prev) / prev > spike_threshold {
                score -= 15;
                warn(
                    &mut warnings,
                    format!("Sharp volume spike for {}", muscle),
                );
            }
        }
    }

    let recovery_score = score.clamp(0, 100) as u8;
    tracing::debug!(recovery_score, warnings = warnings.len(), "trend analysis done");

    Some(TrendReport {
        muscle_volume,
        muscle_workload,
        recovery_score,
        warnings,
    })
}
