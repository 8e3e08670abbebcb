//! Strength assessment: 1RM estimation, per-lift tiering and the composite
//! global strength score.
//!
//! Tier thresholds are bodyweight-ratio tables per movement family. Each tier
//! carries a prescribed weekly-set target used by the volume planner.

use crate::types::{AnchorLift, StrengthProfiles};
use serde::{Deserialize, Serialize};

/// Epley estimate of a one-rep max.
///
/// Returns the load itself for a true single, and 0.0 for any non-positive
/// input: callers must treat 0 as "no estimate", never as zero strength.
pub fn estimate_1rm(load: f64, reps: u32) -> f64 {
    if load <= 0.0 || reps == 0 {
        return 0.0;
    }
    if reps == 1 {
        return load;
    }
    load * (1.0 + reps as f64 / 30.0)
}

/// The seven ordered strength tiers
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum StrengthClass {
    Rookie1,
    Rookie2,
    Brute1,
    Brute2,
    Monster1,
    Monster2,
    Legend,
}

impl StrengthClass {
    /// Tier points, 1..=7, averaged into the global score
    pub fn score(self) -> u8 {
        match self {
            StrengthClass::Rookie1 => 1,
            StrengthClass::Rookie2 => 2,
            StrengthClass::Brute1 => 3,
            StrengthClass::Brute2 => 4,
            StrengthClass::Monster1 => 5,
            StrengthClass::Monster2 => 6,
            StrengthClass::Legend => 7,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthClass::Rookie1 => "Rookie 1",
            StrengthClass::Rookie2 => "Rookie 2",
            StrengthClass::Brute1 => "Brute 1",
            StrengthClass::Brute2 => "Brute 2",
            StrengthClass::Monster1 => "Monster 1",
            StrengthClass::Monster2 => "Monster 2",
            StrengthClass::Legend => "Legend",
        }
    }

    /// Family name without the tier number
    pub fn family(self) -> &'static str {
        match self {
            StrengthClass::Rookie1 | StrengthClass::Rookie2 => "Rookie",
            StrengthClass::Brute1 | StrengthClass::Brute2 => "Brute",
            StrengthClass::Monster1 | StrengthClass::Monster2 => "Monster",
            StrengthClass::Legend => "Legend",
        }
    }

    fn from_weekly_target(target: u32) -> StrengthClass {
        match target {
            0..=8 => StrengthClass::Rookie1,
            9..=10 => StrengthClass::Rookie2,
            11..=12 => StrengthClass::Brute1,
            13..=14 => StrengthClass::Brute2,
            15..=16 => StrengthClass::Monster1,
            17..=18 => StrengthClass::Monster2,
            _ => StrengthClass::Legend,
        }
    }
}

/// Result of assessing one lift against bodyweight
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StrengthAssessment {
    pub one_rm: f64,
    pub ratio: f64,
    pub class: StrengthClass,
    /// Safe weekly working-set target for the primary muscle
    pub weekly_set_target: u32,
}

impl StrengthAssessment {
    pub fn score(&self) -> u8 {
        self.class.score()
    }
}

/// Ratio cutoffs to weekly-set targets per movement family.
/// Cutoffs are strictly increasing; targets climb 8 to 20.
const BENCH_TABLE: [f64; 6] = [0.80, 1.20, 1.35, 1.50, 1.80, 2.00];
const SQUAT_TABLE: [f64; 6] = [1.00, 1.60, 1.80, 2.00, 2.30, 2.60];
const DEADLIFT_TABLE: [f64; 6] = [1.40, 2.00, 2.25, 2.50, 2.80, 3.20];
const DEFAULT_TABLE: [f64; 6] = [0.60, 0.90, 1.05, 1.20, 1.40, 1.60];

fn family_table(exercise_name: &str) -> &'static [f64; 6] {
    if AnchorLift::BenchPress.matches_name(exercise_name) {
        &BENCH_TABLE
    } else if AnchorLift::Squat.matches_name(exercise_name) {
        &SQUAT_TABLE
    } else if AnchorLift::Deadlift.matches_name(exercise_name) {
        &DEADLIFT_TABLE
    } else {
        &DEFAULT_TABLE
    }
}

fn weekly_target_for_ratio(table: &[f64; 6], ratio: f64) -> u32 {
    const TARGETS: [u32; 7] = [8, 10, 12, 14, 16, 18, 20];
    for (i, cutoff) in table.iter().enumerate() {
        if ratio < *cutoff {
            return TARGETS[i];
        }
    }
    TARGETS[6]
}

/// Classify one lift's strength relative to bodyweight.
///
/// Returns None when any input is non-positive ("incomplete data").
pub fn assess_strength(
    exercise_name: &str,
    bodyweight: f64,
    load: f64,
    reps: u32,
) -> Option<StrengthAssessment> {
    if bodyweight <= 0.0 || load <= 0.0 || reps == 0 {
        return None;
    }

    let one_rm = estimate_1rm(load, reps);
    let ratio = one_rm / bodyweight;
    let weekly_set_target = weekly_target_for_ratio(family_table(exercise_name), ratio);
    let class = StrengthClass::from_weekly_target(weekly_set_target);

    tracing::debug!(
        exercise = exercise_name,
        one_rm,
        ratio,
        target = weekly_set_target,
        "strength assessed"
    );

    Some(StrengthAssessment {
        one_rm,
        ratio,
        class,
        weekly_set_target,
    })
}

/// Composite strength level across the four anchor lifts
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GlobalStrength {
    /// 0-100 percentage of the maximum attainable average tier
    pub score: u32,
    /// Composite class; None when no anchor has a recorded 1RM
    pub class: Option<StrengthClass>,
    /// How many of the four anchors have data
    pub populated: usize,
}

impl GlobalStrength {
    pub fn label(&self) -> &'static str {
        match self.class {
            Some(class) => class.label(),
            None => "Novice",
        }
    }
}

/// Average the four anchor tiers into a 0-100 global score.
///
/// Missing anchors count as zero: the divisor is always four, so an
/// incomplete profile reads as a weaker composite rather than an
/// optimistic one.
pub fn global_strength(profiles: &StrengthProfiles, bodyweight: f64) -> GlobalStrength {
    let mut total: f64 = 0.0;
    let mut populated = 0usize;

    for anchor in AnchorLift::ALL {
        let Some(&one_rm) = profiles.get(&anchor) else {
            continue;
        };
        if let Some(res) = assess_strength(anchor.display_name(), bodyweight, one_rm, 1) {
            total += f64::from(res.score());
            populated += 1;
        }
    }

    if populated == 0 {
        return GlobalStrength {
            score: 0,
            class: None,
            populated: 0,
        };
    }

    let avg = total / AnchorLift::ALL.len() as f64;
    let percent = ((avg / 7.0) * 100.0).min(100.0).round() as u32;

    let class = if avg < 1.5 {
        StrengthClass::Rookie1
    } else if avg < 2.0 {
        StrengthClass::Rookie2
    } else if avg < 3.0 {
        StrengthClass::Brute1
    } else if avg < 4.0 {
        StrengthClass::Brute2
    } else if avg < 5.0 {
        StrengthClass::Monster1
    } else if avg < 6.0 {
        StrengthClass::Monster2
    } else {
        StrengthClass::Legend
    };

    GlobalStrength {
        score: percent,
        class: Some(class),
        populated,
    }
}

/// Deload protocol tier
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeloadTier {
    /// Halve the sets, keep the load (systemic deload)
    Advanced,
    /// Keep the sets, cut the load (technique deload)
    Beginner,
}

/// Which deload protocol a lifter qualifies for
pub fn deload_tier(global: &GlobalStrength) -> DeloadTier {
    match global.class {
        Some(class) if class >= StrengthClass::Brute1 => DeloadTier::Advanced,
        _ => DeloadTier::Beginner,
    }
}
