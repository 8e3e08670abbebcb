//! Core domain types for the Ironcycle training-load engine.
//!
//! This module defines the fundamental types used throughout the system:
//! - Muscles, contributions and exercises
//! - Workout sets, exercises and immutable logs
//! - Anchor lifts and strength profiles
//! - Periodization phases and their parameters

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use uuid::Uuid;

// ============================================================================
// Muscles
// ============================================================================

/// Every muscle tracked by the volume accountant
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Muscle {
    Chest,
    Lats,
    Traps,
    LowerBack,
    FrontDelts,
    SideDelts,
    RearDelts,
    Triceps,
    Biceps,
    Quads,
    Hamstrings,
    Adductors,
    Glutes,
    Calves,
    Abs,
    Forearms,
    Stabilizers,
    ShoulderStabilizers,
    Brachialis,
}

impl Muscle {
    /// All muscles in report order
    pub const ALL: [Muscle; 19] = [
        Muscle::Chest,
        Muscle::Lats,
        Muscle::Traps,
        Muscle::LowerBack,
        Muscle::FrontDelts,
        Muscle::SideDelts,
        Muscle::RearDelts,
        Muscle::Triceps,
        Muscle::Biceps,
        Muscle::Quads,
        Muscle::Hamstrings,
        Muscle::Adductors,
        Muscle::Glutes,
        Muscle::Calves,
        Muscle::Abs,
        Muscle::Forearms,
        Muscle::Stabilizers,
        Muscle::ShoulderStabilizers,
        Muscle::Brachialis,
    ];

    /// Large muscle groups use higher weekly-volume thresholds
    pub fn is_large_group(self) -> bool {
        matches!(
            self,
            Muscle::Chest | Muscle::Lats | Muscle::Quads | Muscle::Glutes | Muscle::Hamstrings
        )
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Muscle::Chest => "Chest",
            Muscle::Lats => "Lats",
            Muscle::Traps => "Traps",
            Muscle::LowerBack => "Lower Back",
            Muscle::FrontDelts => "Front Delts",
            Muscle::SideDelts => "Side Delts",
            Muscle::RearDelts => "Rear Delts",
            Muscle::Triceps => "Triceps",
            Muscle::Biceps => "Biceps",
            Muscle::Quads => "Quads",
            Muscle::Hamstrings => "Hamstrings",
            Muscle::Adductors => "Adductors",
            Muscle::Glutes => "Glutes",
            Muscle::Calves => "Calves",
            Muscle::Abs => "Abs",
            Muscle::Forearms => "Forearms",
            Muscle::Stabilizers => "Stabilizers",
            Muscle::ShoulderStabilizers => "Shoulder Stabilizers",
            Muscle::Brachialis => "Brachialis",
        }
    }
}

impl std::fmt::Display for Muscle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// How a muscle participates in an exercise
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MuscleRole {
    Principal,
    Synergist,
}

/// A single muscle's share of an exercise's stimulus.
///
/// Contributions are exercise-local and intentionally not normalized: a big
/// compound can load several muscles near-maximally at once.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MuscleContribution {
    pub muscle: Muscle,
    pub role: MuscleRole,
    pub contribution: f64,
}

// ============================================================================
// Exercises
// ============================================================================

/// Static reference data for one catalog exercise
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub muscles: Vec<MuscleContribution>,
    #[serde(default)]
    pub is_compound: bool,
    #[serde(default)]
    pub is_guided: bool,
}

impl Exercise {
    /// Primary mover: first principal contribution, else the first muscle
    /// pulling at least half the stimulus.
    pub fn primary_muscle(&self) -> Option<Muscle> {
        self.muscles
            .iter()
            .find(|m| m.role == MuscleRole::Principal || m.contribution >= 0.5)
            .map(|m| m.muscle)
    }

    /// Tensional exercises are free-weight compounds; they lead a session.
    pub fn is_tensional(&self) -> bool {
        self.is_compound && !self.is_guided
    }

    pub fn muscle_set(&self) -> HashSet<Muscle> {
        self.muscles.iter().map(|m| m.muscle).collect()
    }

    pub fn principal_muscles(&self) -> Vec<Muscle> {
        self.muscles
            .iter()
            .filter(|m| m.role == MuscleRole::Principal)
            .map(|m| m.muscle)
            .collect()
    }
}

// ============================================================================
// Sets, workout exercises and logs
// ============================================================================

/// Kind of a performed or planned set
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SetKind {
    Warmup,
    Feeder,
    #[default]
    Normal,
    Top,
    Backoff,
}

/// One set of one exercise
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkoutSet {
    pub id: Uuid,
    pub reps: u32,
    pub load: Option<f64>,
    pub rir: Option<u8>,
    #[serde(default)]
    pub kind: SetKind,
}

impl WorkoutSet {
    /// Working sets count toward volume and load targets;
    /// warmup and feeder sets do not.
    pub fn is_working(&self) -> bool {
        !matches!(self.kind, SetKind::Warmup | SetKind::Feeder)
    }
}

/// An exercise inside a session: a name reference into the catalog plus the
/// ordered sets performed (or planned) for it.
///
/// The scalar `series`/`reps`/`load` fields are a legacy representation used
/// as a fallback when no per-set detail was recorded.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkoutExercise {
    pub name: String,
    #[serde(default)]
    pub sets: Vec<WorkoutSet>,
    #[serde(default)]
    pub series: u32,
    #[serde(default)]
    pub reps: u32,
    #[serde(default)]
    pub load: Option<f64>,
    #[serde(default)]
    pub superset_id: Option<String>,
}

impl WorkoutExercise {
    pub fn working_sets(&self) -> impl Iterator<Item = &WorkoutSet> {
        self.sets.iter().filter(|s| s.is_working())
    }

    /// Working-set count, falling back to the legacy scalar
    pub fn effective_series(&self) -> u32 {
        let n = self.working_sets().count() as u32;
        if n > 0 {
            n
        } else {
            self.series
        }
    }

    /// Representative reps: first working set, else the legacy scalar
    pub fn representative_reps(&self) -> u32 {
        self.working_sets()
            .next()
            .map(|s| s.reps)
            .filter(|&r| r > 0)
            .unwrap_or(self.reps)
    }

    /// Representative load: first working set, else the legacy scalar.
    /// A zero load is "not recorded", same as the zero-rep filter above.
    pub fn representative_load(&self) -> f64 {
        self.working_sets()
            .next()
            .and_then(|s| s.load)
            .filter(|l| *l > 0.0)
            .or(self.load)
            .unwrap_or(0.0)
    }
}

/// Mapping from day name to the exercises performed that day
pub type WorkoutSplit = BTreeMap<String, Vec<WorkoutExercise>>;

/// Canonical day ordering for split schedules
pub const DAYS_OF_WEEK: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// An immutable, append-only snapshot of one saved session.
///
/// Logs are created once at save time and never mutated afterwards; every
/// aggregate in the engine is derived from them on demand.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkoutLog {
    pub date: DateTime<Utc>,
    pub name: String,
    pub total_series: u32,
    pub split: WorkoutSplit,
    #[serde(default)]
    pub week: Option<u32>,
    #[serde(default)]
    pub phase: Option<String>,
}

// ============================================================================
// Anchor lifts and strength profiles
// ============================================================================

/// The four canonical lifts whose 1RMs anchor every load estimate
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AnchorLift {
    BenchPress,
    Squat,
    BentOverRow,
    Deadlift,
}

impl AnchorLift {
    pub const ALL: [AnchorLift; 4] = [
        AnchorLift::BenchPress,
        AnchorLift::Squat,
        AnchorLift::BentOverRow,
        AnchorLift::Deadlift,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            AnchorLift::BenchPress => "Bench Press",
            AnchorLift::Squat => "Back Squat",
            AnchorLift::BentOverRow => "Bent-Over Row",
            AnchorLift::Deadlift => "Deadlift",
        }
    }

    /// Keyword used to recognize anchor-family exercises by name
    pub fn keyword(self) -> &'static str {
        match self {
            AnchorLift::BenchPress => "bench",
            AnchorLift::Squat => "squat",
            AnchorLift::BentOverRow => "row",
            AnchorLift::Deadlift => "deadlift",
        }
    }

    /// Whether an exercise name belongs to this anchor's movement family
    pub fn matches_name(self, exercise_name: &str) -> bool {
        exercise_name.to_lowercase().contains(self.keyword())
    }
}

impl std::fmt::Display for AnchorLift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Best-known 1RM per anchor lift, in kilograms
pub type StrengthProfiles = HashMap<AnchorLift, f64>;

/// How long the lifter has been away from training
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TimeAway {
    OneToTwoWeeks,
    TwoToFourWeeks,
    FourToTwelveWeeks,
    MoreThanTwelveWeeks,
}

impl TimeAway {
    /// Load retention multiplier applied on return to training
    pub fn multiplier(self) -> f64 {
        match self {
            TimeAway::OneToTwoWeeks => 0.85,
            TimeAway::TwoToFourWeeks => 0.75,
            TimeAway::FourToTwelveWeeks => 0.60,
            TimeAway::MoreThanTwelveWeeks => 0.50,
        }
    }
}

impl std::str::FromStr for TimeAway {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1-2_weeks" => Ok(TimeAway::OneToTwoWeeks),
            "2-4_weeks" => Ok(TimeAway::TwoToFourWeeks),
            "4-12_weeks" => Ok(TimeAway::FourToTwelveWeeks),
            "more_12_weeks" => Ok(TimeAway::MoreThanTwelveWeeks),
            other => Err(format!("unknown time-away tier: {}", other)),
        }
    }
}

// ============================================================================
// Periodization phases
// ============================================================================

/// Identifier of a known periodization phase.
///
/// Unknown phase strings deliberately do not parse: an unrecognized phase
/// yields no prescription and the caller falls back to a generic heuristic.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PhaseId {
    Adaptation,
    ReturnToTraining,
    Manual,
    Accumulation,
    Intensification,
    Realization,
    FalsePyramid,
    Overreaching,
    VolumeBase,
    RepProgression,
    DropSets,
    Undulating,
}

impl PhaseId {
    pub const ALL: [PhaseId; 12] = [
        PhaseId::Adaptation,
        PhaseId::ReturnToTraining,
        PhaseId::Manual,
        PhaseId::Accumulation,
        PhaseId::Intensification,
        PhaseId::Realization,
        PhaseId::FalsePyramid,
        PhaseId::Overreaching,
        PhaseId::VolumeBase,
        PhaseId::RepProgression,
        PhaseId::DropSets,
        PhaseId::Undulating,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PhaseId::Adaptation => "adaptation",
            PhaseId::ReturnToTraining => "return_to_training",
            PhaseId::Manual => "manual",
            PhaseId::Accumulation => "accumulation",
            PhaseId::Intensification => "intensification",
            PhaseId::Realization => "realization",
            PhaseId::FalsePyramid => "false_pyramid",
            PhaseId::Overreaching => "overreaching",
            PhaseId::VolumeBase => "volume_base",
            PhaseId::RepProgression => "rep_progression",
            PhaseId::DropSets => "drop_sets",
            PhaseId::Undulating => "undulating",
        }
    }

    /// Parse a phase id; returns None for anything unrecognized
    pub fn parse(s: &str) -> Option<PhaseId> {
        PhaseId::ALL.into_iter().find(|p| p.as_str() == s)
    }
}

/// Macro-level training block a phase belongs to
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Intro,
    Strength,
    Realization,
    Endurance,
    Hypertrophy,
}

/// What a phase primarily progresses week over week
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProgressionRule {
    Load,
    Reps,
    Volume,
    Mixed,
    Technique,
}

/// Weekly-volume zone a phase aims for
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TargetVolume {
    Maintenance,
    Productive,
    Optimized,
    Limit,
    Any,
}

/// Parameters of one periodization phase
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PeriodizationPhase {
    pub id: PhaseId,
    pub name: String,
    pub stage: Stage,
    pub rir_target: u8,
    pub progression_rule: ProgressionRule,
    pub tensional_ratio: f64,
    pub target_volume: TargetVolume,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_working_set_kinds() {
        let mk = |kind| WorkoutSet {
            id: Uuid::new_v4(),
            reps: 10,
            load: Some(60.0),
            rir: Some(2),
            kind,
        };

        assert!(!mk(SetKind::Warmup).is_working());
        assert!(!mk(SetKind::Feeder).is_working());
        assert!(mk(SetKind::Normal).is_working());
        assert!(mk(SetKind::Top).is_working());
        assert!(mk(SetKind::Backoff).is_working());
    }

    #[test]
    fn test_effective_series_falls_back_to_legacy_scalar() {
        let ex = WorkoutExercise {
            name: "Bench Press".into(),
            sets: vec![],
            series: 4,
            reps: 8,
            load: Some(80.0),
            superset_id: None,
        };

        assert_eq!(ex.effective_series(), 4);
        assert_eq!(ex.representative_reps(), 8);
        assert_eq!(ex.representative_load(), 80.0);
    }

    #[test]
    fn test_representative_values_use_first_working_set() {
        let warmup = WorkoutSet {
            id: Uuid::new_v4(),
            reps: 15,
            load: Some(20.0),
            rir: Some(5),
            kind: SetKind::Warmup,
        };
        let top = WorkoutSet {
            id: Uuid::new_v4(),
            reps: 6,
            load: Some(100.0),
            rir: Some(1),
            kind: SetKind::Top,
        };
        let ex = WorkoutExercise {
            name: "Bench Press".into(),
            sets: vec![warmup, top],
            series: 0,
            reps: 0,
            load: None,
            superset_id: None,
        };

        assert_eq!(ex.effective_series(), 1);
        assert_eq!(ex.representative_reps(), 6);
        assert_eq!(ex.representative_load(), 100.0);
    }

    #[test]
    fn test_zero_load_set_falls_back_to_legacy_scalar() {
        let set = WorkoutSet {
            id: Uuid::new_v4(),
            reps: 10,
            load: Some(0.0),
            rir: Some(2),
            kind: SetKind::Normal,
        };
        let ex = WorkoutExercise {
            name: "Bench Press".into(),
            sets: vec![set],
            series: 0,
            reps: 0,
            load: Some(80.0),
            superset_id: None,
        };

        assert_eq!(ex.representative_load(), 80.0);
    }

    #[test]
    fn test_phase_id_parse_round_trip() {
        for id in PhaseId::ALL {
            assert_eq!(PhaseId::parse(id.as_str()), Some(id));
        }
        assert_eq!(PhaseId::parse("block_periodization"), None);
    }

    #[test]
    fn test_anchor_name_matching() {
        assert!(AnchorLift::BenchPress.matches_name("Incline Bench Press"));
        assert!(AnchorLift::BentOverRow.matches_name("T-Bar Row"));
        assert!(!AnchorLift::Deadlift.matches_name("Barbell RDL"));
        assert!(AnchorLift::Squat.matches_name("Back Squat"));
    }

    #[test]
    fn test_time_away_multipliers_decrease() {
        assert!(TimeAway::OneToTwoWeeks.multiplier() > TimeAway::TwoToFourWeeks.multiplier());
        assert!(TimeAway::TwoToFourWeeks.multiplier() > TimeAway::FourToTwelveWeeks.multiplier());
        assert!(
            TimeAway::FourToTwelveWeeks.multiplier()
                > TimeAway::MoreThanTwelveWeeks.multiplier()
        );
    }
}
