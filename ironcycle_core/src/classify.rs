//! Exercise classification: body-part category and push/pull/legs grouping.

use crate::catalog::Catalog;
use crate::types::{Exercise, Muscle};
use serde::{Deserialize, Serialize};

/// Body-part category derived from the primary muscle
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Chest,
    Back,
    Shoulders,
    Arms,
    Legs,
    Core,
    Other,
}

impl Category {
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Chest => "Chest",
            Category::Back => "Back",
            Category::Shoulders => "Shoulders",
            Category::Arms => "Arms",
            Category::Legs => "Legs",
            Category::Core => "Core",
            Category::Other => "Other",
        }
    }
}

/// Push/pull/legs grouping used by the sequencer
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PplGroup {
    Legs,
    Pull,
    Push,
    CoreAccessory,
}

/// Category of an exercise, from its primary muscle
pub fn exercise_category(exercise: &Exercise) -> Category {
    let Some(primary) = exercise.primary_muscle() else {
        return Category::Other;
    };

    match primary {
        Muscle::Chest => Category::Chest,
        Muscle::Lats | Muscle::Traps => Category::Back,
        Muscle::FrontDelts | Muscle::SideDelts | Muscle::RearDelts => Category::Shoulders,
        Muscle::Biceps | Muscle::Triceps | Muscle::Forearms | Muscle::Brachialis => Category::Arms,
        Muscle::Quads
        | Muscle::Hamstrings
        | Muscle::Glutes
        | Muscle::Calves
        | Muscle::Adductors => Category::Legs,
        Muscle::Abs | Muscle::LowerBack => Category::Core,
        _ => Category::Other,
    }
}

/// Push/pull/legs group of a named exercise.
///
/// Membership is tested against every contributing muscle, legs first:
/// a squat hits the lower back but still belongs to the legs day.
pub fn ppl_group(exercise_name: &str, catalog: &Catalog) -> PplGroup {
    let Some(ex) = catalog.find_exercise(exercise_name) else {
        return PplGroup::CoreAccessory;
    };

    let muscles = ex.muscle_set();

    const LEGS: [Muscle; 5] = [
        Muscle::Quads,
        Muscle::Glutes,
        Muscle::Hamstrings,
        Muscle::Calves,
        Muscle::Adductors,
    ];
    const PULL: [Muscle; 4] = [
        Muscle::Lats,
        Muscle::Biceps,
        Muscle::RearDelts,
        Muscle::Traps,
    ];
    const PUSH: [Muscle; 4] = [
        Muscle::Chest,
        Muscle::Triceps,
        Muscle::FrontDelts,
        Muscle::SideDelts,
    ];

    if LEGS.iter().any(|m| muscles.contains(m)) {
        PplGroup::Legs
    } else if PULL.iter().any(|m| muscles.contains(m)) {
        PplGroup::Pull
    } else if PUSH.iter().any(|m| muscles.contains(m)) {
        PplGroup::Push
    } else {
        PplGroup::CoreAccessory
    }
}
