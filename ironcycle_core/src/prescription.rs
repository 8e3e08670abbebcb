//! Phase-aware set and load prescription.
//!
//! Each periodization phase prescribes its own scheme: rep targets, set
//! counts (sometimes week-dependent), a load window around the smart-load
//! suggestion, and flags the session view renders (fixed load, PR test,
//! superset pairing). A missing anchor profile means no prescription, never
//! a made-up load.

use crate::transfer::{round_load, smart_load};
use crate::types::{
    Exercise, PeriodizationPhase, PhaseId, SetKind, StrengthProfiles, TimeAway, WorkoutSet,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A concrete load and volume target for one exercise in one session
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Prescription {
    /// Recommended working load in kg
    pub load: f64,
    /// Lower edge of the acceptable load window
    pub min_load: f64,
    /// Upper edge of the acceptable load window
    pub max_load: f64,
    pub sets: u32,
    pub reps: u32,
    pub target_rir: Option<u8>,
    /// Short scheme note for the session view
    pub note: Option<String>,
    /// Load must not change across sets (descending-rep schemes)
    pub fixed_load: bool,
    /// Load is set by the phase, not the rep target
    pub fixed_intensity: bool,
    /// Candidate for superset pairing (metabolic undulating work)
    pub superset_candidate: bool,
    /// This is a max-attempt test set
    pub pr_test: bool,
}

impl Prescription {
    fn new(load: f64, sets: u32, reps: u32, rir: u8) -> Self {
        Self {
            load,
            min_load: load,
            max_load: load,
            sets,
            reps,
            target_rir: Some(rir),
            note: None,
            fixed_load: false,
            fixed_intensity: false,
            superset_candidate: false,
            pr_test: false,
        }
    }

    fn with_window(mut self, lower: f64, upper: f64) -> Self {
        self.min_load = (self.load * lower).round();
        self.max_load = (self.load * upper).round();
        self
    }

    fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }
}

/// Per-session inputs the phase schemes depend on
#[derive(Clone, Copy, Debug)]
pub struct SessionContext {
    /// 1-based week within the phase
    pub week: u32,
    /// Working sets the lifter had planned before phase adjustment
    pub planned_working_sets: u32,
    /// Layoff length, only meaningful during return-to-training
    pub time_away: Option<TimeAway>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self {
            week: 1,
            planned_working_sets: 3,
            time_away: None,
        }
    }
}

/// Deload flavor, chosen from the lifter's strength class
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeloadStyle {
    /// Halve the volume, keep the load
    Systemic,
    /// Keep the volume, drop the load
    Technique,
}

// Week-indexed schemes. Weeks past the table clamp to the last entry.
// Volume base entries are (sets, reps): heavy doubles at week 1, sets taper as reps rise.
const VOLUME_BASE_SCHEME: [(u32, u32); 4] = [(8, 2), (6, 3), (5, 4), (4, 5)];
const REP_PROGRESSION_REPS: [u32; 4] = [8, 9, 10, 12];
const INTENSIFICATION_REPS: [u32; 4] = [8, 6, 4, 3];
const INTENSIFICATION_SETS: [u32; 4] = [4, 3, 2, 2];

fn week_index(week: u32) -> usize {
    (week.clamp(1, 4) - 1) as usize
}

/// Prescribe sets, reps and a load window for an exercise under a phase.
///
/// Returns None when the smart-load chain has no anchor data for the
/// exercise, or when the phase has nothing to prescribe (realization
/// week 3 and beyond is free).
pub fn prescribe(
    exercise: &Exercise,
    phase: &PeriodizationPhase,
    ctx: &SessionContext,
    profiles: &StrengthProfiles,
) -> Option<Prescription> {
    let smart = |reps: u32| smart_load(exercise, reps, profiles, Some(phase), ctx.time_away);
    let rir = phase.rir_target;

    match phase.id {
        PhaseId::Adaptation => {
            let load = smart(15)?;
            Some(Prescription::new(load, 3, 15, rir).with_window(0.8, 1.2))
        }

        PhaseId::VolumeBase => {
            let (sets, reps) = VOLUME_BASE_SCHEME[week_index(ctx.week)];
            let load = smart(reps)?;
            let mut p = Prescription::new(load, sets, reps, rir).with_window(0.95, 1.05);
            p.fixed_intensity = true;
            Some(p.with_note("Fixed 80% intensity: reps climb as sets taper"))
        }

        PhaseId::RepProgression => {
            let reps = REP_PROGRESSION_REPS[week_index(ctx.week)];
            let load = smart(reps)?;
            let note = format!("Week {} target: {} reps (top set)", ctx.week, reps);
            Some(
                Prescription::new(load, 3, reps, rir)
                    .with_window(0.95, 1.05)
                    .with_note(&note),
            )
        }

        PhaseId::DropSets => {
            let load = smart(10)?;
            if exercise.is_tensional() {
                Some(
                    Prescription::new(load, 3, 10, rir)
                        .with_window(0.9, 1.1)
                        .with_note("Top set + back-off"),
                )
            } else {
                Some(
                    Prescription::new(load, 4, 12, rir)
                        .with_window(0.9, 1.1)
                        .with_note("Straight sets + drop on the last set"),
                )
            }
        }

        PhaseId::Undulating => {
            if exercise.is_tensional() {
                let load = smart(6)?;
                Some(
                    Prescription::new(load, 3, 6, rir)
                        .with_window(0.95, 1.05)
                        .with_note("Tensional: top set + back-off (80% 1RM)"),
                )
            } else {
                let load = smart(12)?;
                let mut p = Prescription::new(load, 4, 12, rir)
                    .with_window(0.9, 1.1)
                    .with_note("Metabolic: straight sets (super set)");
                p.superset_candidate = true;
                Some(p)
            }
        }

        PhaseId::FalsePyramid => {
            let load = smart(12)?;
            let mut p = Prescription::new(load, 4, 12, 0)
                .with_note("False pyramid: fixed load, descending reps (RIR 0)");
            p.fixed_load = true;
            Some(p)
        }

        PhaseId::Overreaching => {
            let load = smart(12)?;
            let mut p = Prescription::new(load, 4, 12, 0)
                .with_note("Volume peak: fixed load to failure (RIR 0)");
            p.fixed_load = true;
            Some(p)
        }

        PhaseId::Accumulation => {
            let load = smart(10)?;
            let sets = 3 + (ctx.week.clamp(1, 4) - 1);
            Some(Prescription::new(load, sets, 10, rir).with_window(0.9, 1.1))
        }

        PhaseId::Intensification => {
            let idx = week_index(ctx.week);
            let reps = if exercise.is_compound {
                INTENSIFICATION_REPS[idx]
            } else {
                10
            };
            let load = smart(reps)?;
            Some(
                Prescription::new(load, INTENSIFICATION_SETS[idx], reps, rir)
                    .with_window(0.95, 1.05),
            )
        }

        PhaseId::Realization => match ctx.week {
            1 => {
                let load = smart(10)?;
                let sets =
                    (((f64::from(ctx.planned_working_sets)) * 0.75).floor() as u32).max(1);
                Some(
                    Prescription::new(load, sets, 10, 2)
                        .with_window(0.9, 1.1)
                        .with_note("Deload week: recovery focus (RPE 7-8)"),
                )
            }
            2 => {
                if exercise.is_compound {
                    let load = smart(1)?;
                    let mut p =
                        Prescription::new(load, 1, 1, 0).with_note("Max-attempt test set");
                    p.pr_test = true;
                    Some(p)
                } else {
                    let load = smart(10)?;
                    let sets =
                        ((f64::from(ctx.planned_working_sets) * 0.5).ceil() as u32).max(1);
                    Some(
                        Prescription::new(load, sets, 10, 1)
                            .with_window(0.9, 1.1)
                            .with_note("Reduced volume (main lift focus)"),
                    )
                }
            }
            _ => None,
        },

        PhaseId::ReturnToTraining => {
            let suggested = smart(12)?;
            let mut p = Prescription::new(
                (suggested * 0.8).round(),
                ctx.planned_working_sets,
                12,
                rir,
            );
            p.min_load = (suggested * 0.7).round();
            p.max_load = (suggested * 0.9).round();
            Some(p.with_note("Rebuild volume tolerance before chasing load"))
        }

        PhaseId::Manual => {
            let load = smart(10)?;
            Some(Prescription::new(load, ctx.planned_working_sets, 10, rir).with_window(0.8, 1.2))
        }
    }
}

/// Prescribe a deload session for an exercise.
///
/// Systemic deloads suit advanced lifters: volume halves while intensity
/// stays, so the load window hugs the working load. Technique deloads keep
/// the planned volume at 60% load for joint recovery.
pub fn deload_prescription(
    exercise: &Exercise,
    style: DeloadStyle,
    ctx: &SessionContext,
    profiles: &StrengthProfiles,
    phase: Option<&PeriodizationPhase>,
) -> Option<Prescription> {
    let suggested = smart_load(exercise, 10, profiles, phase, None)?;

    match style {
        DeloadStyle::Systemic => {
            let sets = ((f64::from(ctx.planned_working_sets) / 2.0).ceil() as u32).max(1);
            Some(
                Prescription::new(suggested, sets, 10, 3)
                    .with_window(0.9, 1.1)
                    .with_note("Systemic deload: low volume, preserved load"),
            )
        }
        DeloadStyle::Technique => {
            let mut p = Prescription::new(
                (suggested * 0.6).round(),
                ctx.planned_working_sets,
                12,
                3,
            );
            p.min_load = (suggested * 0.5).round();
            p.max_load = (suggested * 0.7).round();
            Some(p.with_note("Technique deload: light load for joint restoration"))
        }
    }
}

/// Load for a preparation set leading into a working load.
///
/// Returns None for set kinds that are not preparation work.
pub fn prep_load(target_load: f64, kind: SetKind) -> Option<f64> {
    let ratio = match kind {
        SetKind::Warmup => 0.45,
        SetKind::Feeder => 0.75,
        _ => return None,
    };
    Some(round_load(target_load * ratio))
}

/// Standard four-step ramp from an empty-ish bar to the working load.
///
/// Two warmup sets then two feeder sets, descending reps and RIR.
pub fn warmup_ladder(target_load: f64) -> Vec<WorkoutSet> {
    if target_load <= 0.0 {
        return Vec::new();
    }

    let step = |ratio: f64, reps: u32, rir: u8, kind: SetKind| WorkoutSet {
        id: Uuid::new_v4(),
        reps,
        load: Some(round_load(target_load * ratio)),
        rir: Some(rir),
        kind,
    };

    vec![
        step(0.40, 15, 5, SetKind::Warmup),
        step(0.50, 10, 4, SetKind::Warmup),
        step(0.60, 6, 3, SetKind::Feeder),
        step(0.75, 4, 2, SetKind::Feeder),
    ]
}

/// Scale a previous working load for a lifter coming back from a layoff
pub fn recovery_load(previous_load: Option<f64>, time_away: TimeAway) -> Option<f64> {
    previous_load.map(|load| round_load(load * time_away.multiplier()))
}
