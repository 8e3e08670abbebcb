//! Session ordering and split-schedule conflict checks.

use crate::catalog::Catalog;
use crate::classify::{ppl_group, PplGroup};
use crate::types::{Muscle, WorkoutSplit, DAYS_OF_WEEK};
use std::collections::{BTreeMap, HashSet};

/// Anything the sequencer can order by exercise name
pub trait Named {
    fn exercise_name(&self) -> &str;
}

impl Named for String {
    fn exercise_name(&self) -> &str {
        self
    }
}

impl Named for &str {
    fn exercise_name(&self) -> &str {
        self
    }
}

impl Named for crate::types::WorkoutExercise {
    fn exercise_name(&self) -> &str {
        &self.name
    }
}

struct PoolEntry {
    index: usize,
    tensional: bool,
    compound: bool,
    muscle_count: usize,
    muscles: HashSet<Muscle>,
    group: PplGroup,
    name: String,
}

/// Reorder a session so heavy tensional work leads and adjacent exercises
/// interleave muscle groups.
///
/// Exercises are first ranked (tensional, then compound, then muscle count,
/// then name), then placed greedily: each slot prefers an exercise from a
/// different push/pull/legs group sharing no muscles with the previous one,
/// relaxing to a different group, then to whatever ranks highest. The result
/// is always a permutation of the input.
pub fn smart_sort<T: Named + Clone>(items: &[T], catalog: &Catalog) -> Vec<T> {
    if items.len() <= 1 {
        return items.to_vec();
    }

    let mut pool: Vec<PoolEntry> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let name = item.exercise_name().to_string();
            match catalog.find_exercise(&name) {
                Some(ex) => PoolEntry {
                    index,
                    tensional: ex.is_tensional(),
                    compound: ex.is_compound,
                    muscle_count: ex.muscles.len(),
                    muscles: ex.muscle_set(),
                    group: ppl_group(&name, catalog),
                    name,
                },
                None => PoolEntry {
                    index,
                    tensional: false,
                    compound: false,
                    muscle_count: 0,
                    muscles: HashSet::new(),
                    group: PplGroup::CoreAccessory,
                    name,
                },
            }
        })
        .collect();

    // sort_by is stable, so ties keep input order
    pool.sort_by(|a, b| {
        b.tensional
            .cmp(&a.tensional)
            .then(b.compound.cmp(&a.compound))
            .then(b.muscle_count.cmp(&a.muscle_count))
            .then(a.name.cmp(&b.name))
    });

    let mut ordered: Vec<usize> = Vec::with_capacity(pool.len());
    let mut last: Option<PoolEntry> = None;
    let mut remaining = pool;

    while !remaining.is_empty() {
        let pick = match &last {
            None => 0,
            Some(prev) => remaining
                .iter()
                .position(|e| e.group != prev.group && e.muscles.is_disjoint(&prev.muscles))
                .or_else(|| remaining.iter().position(|e| e.group != prev.group))
                .unwrap_or(0),
        };
        let entry = remaining.remove(pick);
        ordered.push(entry.index);
        last = Some(entry);
    }

    ordered.into_iter().map(|i| items[i].clone()).collect()
}

/// Find principal-muscle overlap between adjacent days of a split.
///
/// Returns, keyed by the later day, the muscles whose principal movers were
/// already trained the day before. Days absent from the split are rest days
/// and break adjacency.
pub fn consecutive_day_conflicts(
    split: &WorkoutSplit,
    catalog: &Catalog,
) -> BTreeMap<String, Vec<Muscle>> {
    let principals_for = |day: &str| -> HashSet<Muscle> {
        split
            .get(day)
            .into_iter()
            .flatten()
            .filter_map(|item| catalog.find_exercise(&item.name))
            .flat_map(|ex| ex.principal_muscles())
            .collect()
    };

    let mut conflicts = BTreeMap::new();

    for pair in DAYS_OF_WEEK.windows(2) {
        let today = principals_for(pair[0]);
        if today.is_empty() {
            continue;
        }
        let tomorrow = principals_for(pair[1]);

        let mut shared: Vec<Muscle> = today.intersection(&tomorrow).copied().collect();
        if !shared.is_empty() {
            shared.sort();
            conflicts.insert(pair[1].to_string(), shared);
        }
    }

    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_default_catalog;
    use crate::types::WorkoutExercise;

    fn names(items: &[String]) -> Vec<&str> {
        items.iter().map(|s| s.as_str()).collect()
    }

    fn session(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sort_is_a_permutation() {
        let catalog = build_default_catalog();
        let input = session(&[
            "Crunch",
            "Bench Press",
            "Lateral Raise",
            "Back Squat",
            "Bent-Over Row",
            "Unknown Movement",
        ]);
        let sorted = smart_sort(&input, &catalog);
        assert_eq!(sorted.len(), input.len());

        let mut a = input.clone();
        let mut b = sorted.clone();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn test_tensional_compounds_lead() {
        let catalog = build_default_catalog();
        let input = session(&["Machine Curl", "Lateral Raise", "Back Squat"]);
        let sorted = smart_sort(&input, &catalog);
        assert_eq!(sorted[0], "Back Squat");
    }

    #[test]
    fn test_groups_interleave_when_possible() {
        let catalog = build_default_catalog();
        let input = session(&[
            "Bench Press",
            "Incline Bench Press",
            "Bent-Over Row",
            "Back Squat",
        ]);
        let sorted = smart_sort(&input, &catalog);
        let groups: Vec<PplGroup> =
            names(&sorted).iter().map(|n| ppl_group(n, &catalog)).collect();

        // the two bench variants must not end up adjacent
        for pair in groups.windows(2) {
            assert_ne!(pair[0], pair[1], "adjacent same-group exercises in {:?}", sorted);
        }

        // nor may neighbors share a primary muscle
        let primaries: Vec<_> = names(&sorted)
            .iter()
            .map(|n| catalog.find_exercise(n).unwrap().primary_muscle().unwrap())
            .collect();
        for pair in primaries.windows(2) {
            assert_ne!(pair[0], pair[1], "adjacent same-muscle exercises in {:?}", sorted);
        }
    }

    #[test]
    fn test_single_group_session_keeps_ranking() {
        let catalog = build_default_catalog();
        let input = session(&["Dumbbell Fly", "Bench Press", "Incline Bench Press"]);
        let sorted = smart_sort(&input, &catalog);
        // all push: greedy falls through to rank order, benches first
        assert_eq!(sorted[0], "Bench Press");
        assert_eq!(sorted[2], "Dumbbell Fly");
    }

    #[test]
    fn test_conflict_on_consecutive_days() {
        let catalog = build_default_catalog();
        let mut split = WorkoutSplit::new();
        let ex = |name: &str| WorkoutExercise {
            name: name.into(),
            sets: vec![],
            series: 3,
            reps: 10,
            load: None,
            superset_id: None,
        };
        split.insert("Monday".into(), vec![ex("Bench Press")]);
        split.insert("Tuesday".into(), vec![ex("Push-Up")]);
        split.insert("Thursday".into(), vec![ex("Bench Press")]);
        split.insert("Saturday".into(), vec![ex("Back Squat")]);

        let conflicts = consecutive_day_conflicts(&split, &catalog);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts["Tuesday"], vec![Muscle::Chest]);
        // Thursday's chest work is followed by a rest day, Saturday's legs
        // by nothing
        assert!(!conflicts.contains_key("Friday"));
        assert!(!conflicts.contains_key("Sunday"));
    }

    #[test]
    fn test_no_conflicts_for_well_spaced_split() {
        let catalog = build_default_catalog();
        let mut split = WorkoutSplit::new();
        let ex = |name: &str| WorkoutExercise {
            name: name.into(),
            sets: vec![],
            series: 3,
            reps: 10,
            load: None,
            superset_id: None,
        };
        split.insert("Monday".into(), vec![ex("Bench Press")]);
        split.insert("Tuesday".into(), vec![ex("Back Squat")]);
        split.insert("Wednesday".into(), vec![ex("Bent-Over Row")]);

        let conflicts = consecutive_day_conflicts(&split, &catalog);
        assert!(conflicts.is_empty());
    }
}
