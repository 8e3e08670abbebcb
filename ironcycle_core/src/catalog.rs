//! Built-in reference catalog: exercises and periodization phases.
//!
//! Catalog tables are configuration data, not code. They are built once,
//! cached behind a `Lazy`, and validated independently of the engine logic
//! that consumes them.

use crate::types::*;
use once_cell::sync::Lazy;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// The complete catalog of exercises and periodization phases
#[derive(Clone, Debug)]
pub struct Catalog {
    pub exercises: Vec<Exercise>,
    pub phases: Vec<PeriodizationPhase>,
}

impl Catalog {
    pub fn find_exercise(&self, name: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.name == name)
    }

    pub fn find_phase(&self, id: PhaseId) -> Option<&PeriodizationPhase> {
        self.phases.iter().find(|p| p.id == id)
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let mut seen = std::collections::HashSet::new();
        for ex in &self.exercises {
            if ex.name.is_empty() {
                errors.push("Exercise has empty name".to_string());
            }
            if !seen.insert(ex.name.as_str()) {
                errors.push(format!("Duplicate exercise name '{}'", ex.name));
            }
            if ex.primary_muscle().is_none() {
                errors.push(format!("Exercise '{}' has no primary muscle", ex.name));
            }
            for m in &ex.muscles {
                if m.contribution <= 0.0 || m.contribution > 1.0 {
                    errors.push(format!(
                        "Exercise '{}': contribution {} for {} outside (0, 1]",
                        ex.name, m.contribution, m.muscle
                    ));
                }
            }
        }

        for id in PhaseId::ALL {
            let count = self.phases.iter().filter(|p| p.id == id).count();
            if count != 1 {
                errors.push(format!(
                    "Phase '{}' appears {} times (expected exactly once)",
                    id.as_str(),
                    count
                ));
            }
        }
        for phase in &self.phases {
            if phase.name.is_empty() {
                errors.push(format!("Phase '{}' has empty name", phase.id.as_str()));
            }
            if phase.tensional_ratio <= 0.0 || phase.tensional_ratio > 1.0 {
                errors.push(format!(
                    "Phase '{}': tensional ratio {} outside (0, 1]",
                    phase.id.as_str(),
                    phase.tensional_ratio
                ));
            }
            if phase.rir_target > 5 {
                errors.push(format!(
                    "Phase '{}': RIR target {} out of range",
                    phase.id.as_str(),
                    phase.rir_target
                ));
            }
        }

        // Every anchor lift must exist as a catalog exercise
        for anchor in AnchorLift::ALL {
            if self.find_exercise(anchor.display_name()).is_none() {
                errors.push(format!("Anchor lift '{}' missing from catalog", anchor));
            }
        }

        errors
    }
}

/// Builds the default catalog with built-in exercises and phases
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns
/// a cached reference. This function is retained for testing and custom
/// catalog creation.
pub fn build_default_catalog() -> Catalog {
    Catalog {
        exercises: build_exercises(),
        phases: build_phases(),
    }
}

const P: MuscleRole = MuscleRole::Principal;
const S: MuscleRole = MuscleRole::Synergist;

fn ex(
    name: &str,
    is_compound: bool,
    is_guided: bool,
    muscles: &[(Muscle, MuscleRole, f64)],
) -> Exercise {
    Exercise {
        name: name.into(),
        muscles: muscles
            .iter()
            .map(|&(muscle, role, contribution)| MuscleContribution {
                muscle,
                role,
                contribution,
            })
            .collect(),
        is_compound,
        is_guided,
    }
}

#[rustfmt::skip]
fn build_exercises() -> Vec<Exercise> {
    use Muscle::*;
    vec![
        // --- Chest ---
        ex("Bench Press", true, false, &[(Chest, P, 1.0), (Triceps, S, 0.25), (FrontDelts, S, 0.33), (Stabilizers, S, 0.20)]),
        ex("Incline Bench Press", true, false, &[(Chest, P, 1.0), (FrontDelts, S, 0.50), (Triceps, S, 0.40), (Stabilizers, S, 0.20)]),
        ex("Dumbbell Fly", false, false, &[(Chest, P, 1.0), (FrontDelts, S, 0.20)]),
        ex("Push-Up", true, false, &[(Chest, P, 1.0), (Triceps, S, 0.45), (FrontDelts, S, 0.25), (Stabilizers, S, 0.30)]),
        ex("Dips", true, false, &[(Triceps, P, 1.0), (Chest, P, 0.60), (FrontDelts, S, 0.25), (Stabilizers, S, 0.20)]),
        ex("Machine Fly", false, true, &[(Chest, P, 1.0), (FrontDelts, S, 0.20), (Biceps, S, 0.10), (Stabilizers, S, 0.10)]),
        ex("Hammer-Grip Machine Bench Press", true, true, &[(Chest, P, 1.0), (Triceps, S, 0.35), (FrontDelts, S, 0.20), (Stabilizers, S, 0.10)]),
        ex("Machine Bench Press", true, true, &[(Chest, P, 1.0), (Triceps, S, 0.40), (FrontDelts, S, 0.20)]),

        // --- Back ---
        ex("Bent-Over Row", true, false, &[(Lats, P, 1.0), (Biceps, S, 0.45), (Traps, S, 0.35), (RearDelts, S, 0.30), (LowerBack, S, 0.40)]),
        ex("Lat Pulldown", true, true, &[(Lats, P, 1.0), (Biceps, S, 0.50)]),
        ex("T-Bar Row", true, false, &[(Lats, P, 1.0), (Biceps, S, 0.40), (RearDelts, S, 0.35), (Traps, S, 0.30)]),
        ex("Straight-Arm Pulldown", false, true, &[(Lats, P, 1.0), (Biceps, S, 0.10), (Brachialis, S, 0.10), (Traps, S, 0.10)]),
        ex("Assisted Pull-Up", true, true, &[(Lats, P, 1.0), (Biceps, S, 0.50), (Brachialis, S, 0.20), (Traps, S, 0.20)]),
        ex("Single-Arm Hammer Pulldown", true, true, &[(Lats, P, 1.0), (Brachialis, S, 0.30), (Biceps, S, 0.30), (Traps, S, 0.20)]),
        ex("Chest-Supported Dumbbell Row", true, false, &[(Lats, P, 1.0), (Traps, S, 0.40), (Biceps, S, 0.30), (Brachialis, S, 0.20)]),
        ex("Close-Grip Pulldown", true, true, &[(Lats, P, 1.0), (Biceps, S, 0.50), (Brachialis, S, 0.30), (Traps, S, 0.20)]),
        ex("Hack Pull", true, true, &[(LowerBack, P, 1.0), (Glutes, S, 0.60), (Hamstrings, S, 0.40), (Traps, S, 0.40), (Forearms, S, 0.40)]),
        ex("Single-Arm Pulldown", false, true, &[(Lats, P, 1.0), (Traps, S, 0.10), (Biceps, S, 0.10), (Brachialis, S, 0.10)]),
        ex("Cable Upright Row", true, true, &[(Traps, P, 1.0), (SideDelts, S, 0.60), (Forearms, S, 0.30)]),

        // --- Shoulders ---
        ex("Dumbbell Shoulder Press", true, false, &[(FrontDelts, P, 1.0), (SideDelts, S, 0.50), (Triceps, S, 0.40), (Stabilizers, S, 0.30)]),
        ex("Machine Shoulder Press", true, true, &[(FrontDelts, P, 1.0), (SideDelts, S, 0.40), (Triceps, S, 0.40), (Stabilizers, S, 0.10)]),
        ex("Lateral Raise", false, false, &[(SideDelts, P, 1.0), (Stabilizers, S, 0.10)]),
        ex("Machine Lateral Raise", false, true, &[(SideDelts, P, 1.0), (Stabilizers, S, 0.05), (Traps, S, 0.10)]),
        ex("Front Raise", false, false, &[(FrontDelts, P, 1.0), (Stabilizers, S, 0.10)]),
        ex("Barbell Upright Row", true, false, &[(SideDelts, P, 1.0), (Traps, P, 0.80), (Biceps, S, 0.40), (Forearms, S, 0.30)]),
        ex("Overhead Press", true, false, &[(FrontDelts, P, 1.0), (SideDelts, S, 0.40), (Traps, S, 0.30), (Triceps, S, 0.40)]),
        ex("Incline Lateral Raise", false, false, &[(SideDelts, P, 1.0), (RearDelts, S, 0.30), (Stabilizers, S, 0.20)]),
        ex("Reverse Machine Fly", false, true, &[(RearDelts, P, 1.0), (Traps, S, 0.30)]),
        ex("Face Pull", true, true, &[(Traps, P, 1.0), (RearDelts, S, 0.80), (ShoulderStabilizers, S, 0.40)]),

        // --- Triceps ---
        ex("Skull Crusher", false, false, &[(Triceps, P, 1.0), (Forearms, S, 0.15)]),
        ex("Rope Pushdown", false, true, &[(Triceps, P, 1.0), (RearDelts, S, 0.10), (Traps, S, 0.10)]),
        ex("Overhead Rope Extension", false, true, &[(Triceps, P, 1.0), (Abs, S, 0.20), (ShoulderStabilizers, S, 0.20)]),
        ex("Seated Machine Triceps Extension", true, true, &[(Triceps, P, 1.0), (Chest, S, 0.20), (FrontDelts, S, 0.20)]),
        ex("Cable Pushdown", false, true, &[(Triceps, P, 1.0), (Stabilizers, S, 0.10)]),
        ex("Dumbbell Kickback", false, false, &[(Triceps, P, 1.0), (RearDelts, S, 0.15)]),
        ex("Seated Overhead Extension", false, false, &[(Triceps, P, 1.0), (Abs, S, 0.15), (Stabilizers, S, 0.15)]),

        // --- Biceps ---
        ex("Barbell Curl", false, false, &[(Biceps, P, 1.0), (Forearms, S, 0.20)]),
        ex("Dumbbell Curl", false, false, &[(Biceps, P, 1.0), (Brachialis, S, 0.40), (Forearms, S, 0.20)]),
        ex("Incline Dumbbell Curl", false, false, &[(Biceps, P, 1.0), (Brachialis, S, 0.30), (Forearms, S, 0.20)]),
        ex("Machine Curl", false, true, &[(Biceps, P, 1.0), (Brachialis, S, 0.20), (Forearms, S, 0.10)]),

        // --- Legs ---
        ex("Back Squat", true, false, &[(Quads, P, 1.0), (Glutes, P, 0.80), (Hamstrings, S, 0.40), (LowerBack, S, 0.40), (Abs, S, 0.30), (Calves, S, 0.20)]),
        ex("Deadlift", true, false, &[(Hamstrings, P, 1.0), (Glutes, P, 1.0), (LowerBack, P, 0.80), (Traps, S, 0.60), (Forearms, S, 0.50), (Abs, S, 0.40), (Lats, S, 0.30)]),
        ex("Barbell RDL", true, false, &[(Hamstrings, P, 1.0), (Glutes, P, 0.80), (LowerBack, S, 0.60), (Stabilizers, S, 0.30)]),
        ex("Leg Press", true, true, &[(Quads, P, 1.0), (Glutes, P, 0.70), (Hamstrings, S, 0.40), (Calves, S, 0.20)]),
        ex("Leg Extension", false, true, &[(Quads, P, 1.0)]),
        ex("Seated Leg Curl", false, true, &[(Hamstrings, P, 1.0), (Calves, S, 0.20)]),
        ex("Lying Leg Curl", false, true, &[(Hamstrings, P, 1.0), (Calves, S, 0.30), (Glutes, S, 0.20)]),
        ex("Standing Calf Raise", false, false, &[(Calves, P, 1.0)]),
        ex("Seated Calf Raise", false, true, &[(Calves, P, 1.0)]),
        ex("Standing Machine Calf Raise", false, true, &[(Calves, P, 1.0)]),
        ex("Smith Machine Calf Raise", false, true, &[(Calves, P, 1.0), (Stabilizers, S, 0.20)]),
        ex("Back Extension", false, true, &[(LowerBack, P, 1.0), (Glutes, S, 0.60), (Hamstrings, S, 0.60)]),

        // --- Core ---
        ex("Crunch", false, false, &[(Abs, P, 1.0), (LowerBack, S, 0.10)]),
        ex("Plank", false, false, &[(Abs, P, 1.0), (LowerBack, S, 0.60), (Glutes, S, 0.40), (ShoulderStabilizers, S, 0.40), (Stabilizers, S, 0.50)]),
        ex("Decline Sit-Up", false, false, &[(Abs, P, 1.0), (Quads, S, 0.40)]),
        ex("Oblique Crunch", false, false, &[(Abs, P, 1.0), (LowerBack, S, 0.20)]),
    ]
}

fn phase(
    id: PhaseId,
    name: &str,
    stage: Stage,
    rir_target: u8,
    progression_rule: ProgressionRule,
    tensional_ratio: f64,
    target_volume: TargetVolume,
) -> PeriodizationPhase {
    PeriodizationPhase {
        id,
        name: name.into(),
        stage,
        rir_target,
        progression_rule,
        tensional_ratio,
        target_volume,
    }
}

fn build_phases() -> Vec<PeriodizationPhase> {
    use ProgressionRule as R;
    use TargetVolume as V;
    vec![
        phase(
            PhaseId::Adaptation,
            "Phase 0: Anatomical Adaptation",
            Stage::Intro,
            3,
            R::Technique,
            0.2,
            V::Maintenance,
        ),
        phase(
            PhaseId::ReturnToTraining,
            "Phase R: Return and Readaptation",
            Stage::Intro,
            4,
            R::Technique,
            0.3,
            V::Maintenance,
        ),
        phase(
            PhaseId::Manual,
            "Phase M: Manual Control",
            Stage::Intro,
            1,
            R::Mixed,
            0.5,
            V::Any,
        ),
        phase(
            PhaseId::Accumulation,
            "Phase 1: Accumulation",
            Stage::Strength,
            2,
            R::Volume,
            0.4,
            V::Optimized,
        ),
        phase(
            PhaseId::Intensification,
            "Phase 2: Intensification",
            Stage::Strength,
            1,
            R::Load,
            0.7,
            V::Productive,
        ),
        phase(
            PhaseId::Realization,
            "Phase 3: Realization",
            Stage::Realization,
            0,
            R::Mixed,
            0.8,
            V::Limit,
        ),
        phase(
            PhaseId::FalsePyramid,
            "Meso: False Pyramid",
            Stage::Hypertrophy,
            0,
            R::Mixed,
            0.4,
            V::Optimized,
        ),
        phase(
            PhaseId::Overreaching,
            "Meso: The Peak (Overreaching)",
            Stage::Hypertrophy,
            0,
            R::Volume,
            0.3,
            V::Limit,
        ),
        phase(
            PhaseId::VolumeBase,
            "Meso: Volume Base",
            Stage::Endurance,
            1,
            R::Load,
            0.4,
            V::Productive,
        ),
        phase(
            PhaseId::RepProgression,
            "Meso: Rep Progression",
            Stage::Endurance,
            1,
            R::Reps,
            0.4,
            V::Optimized,
        ),
        phase(
            PhaseId::DropSets,
            "Meso: Drop Sets",
            Stage::Endurance,
            0,
            R::Mixed,
            0.4,
            V::Limit,
        ),
        phase(
            PhaseId::Undulating,
            "Meso: Undulating (Super Sets)",
            Stage::Endurance,
            1,
            R::Mixed,
            0.4,
            V::Optimized,
        ),
    ]
}
