//! Weekly-volume zone classification with strength-scaled thresholds.

use crate::types::Muscle;
use serde::{Deserialize, Serialize};

/// Zone of a muscle's weekly working-set count
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum VolumeZone {
    NoTraining,
    Maintenance,
    Productive,
    Optimized,
    Limit,
    Overtraining,
}

impl VolumeZone {
    pub fn label(self) -> &'static str {
        match self {
            VolumeZone::NoTraining => "NO TRAINING",
            VolumeZone::Maintenance => "MAINTENANCE",
            VolumeZone::Productive => "PRODUCTIVE",
            VolumeZone::Optimized => "OPTIMIZED",
            VolumeZone::Limit => "LIMIT",
            VolumeZone::Overtraining => "OVERTRAINING",
        }
    }
}

impl std::fmt::Display for VolumeZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a muscle's weekly series count into a zone.
///
/// Stronger lifters tolerate more volume: thresholds scale by
/// `0.75 + score/200`, so a 50-score lifter sits at the nominal bases and a
/// 100-score lifter gets 25% more headroom. Large muscle groups use a higher
/// base threshold set. Zero series is always NoTraining regardless of score.
pub fn classify_volume(muscle: Muscle, weekly_series: f64, strength_score: u32) -> VolumeZone {
    if weekly_series <= 0.0 {
        return VolumeZone::NoTraining;
    }

    let capacity = 0.75 + f64::from(strength_score.min(100)) / 200.0;

    let (base, productive, optimized, limit) = if muscle.is_large_group() {
        (6.0, 10.0, 14.0, 18.0)
    } else {
        (4.0, 8.0, 10.0, 13.0)
    };

    let base = base * capacity;
    let productive = productive * capacity;
    let optimized = optimized * capacity;
    let limit = limit * capacity;

    if weekly_series < base {
        VolumeZone::Maintenance
    } else if weekly_series < productive {
        VolumeZone::Productive
    } else if weekly_series <= optimized {
        VolumeZone::Optimized
    } else if weekly_series <= limit {
        VolumeZone::Limit
    } else {
        VolumeZone::Overtraining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_series_is_always_no_training() {
        for score in [0, 50, 100] {
            assert_eq!(
                classify_volume(Muscle::Chest, 0.0, score),
                VolumeZone::NoTraining
            );
            assert_eq!(
                classify_volume(Muscle::Biceps, 0.0, score),
                VolumeZone::NoTraining
            );
        }
    }

    #[test]
    fn test_zone_non_decreasing_in_series() {
        let mut prev = VolumeZone::NoTraining;
        for series in 1..=30 {
            let zone = classify_volume(Muscle::Chest, f64::from(series), 50);
            assert!(zone >= prev, "zone must not drop as series grow");
            prev = zone;
        }
        assert_eq!(prev, VolumeZone::Overtraining);
    }

    #[test]
    fn test_large_groups_get_more_headroom() {
        // 12 weekly sets: optimized for chest, limit zone for biceps
        // at the nominal 50-score capacity
        assert_eq!(
            classify_volume(Muscle::Chest, 12.0, 50),
            VolumeZone::Optimized
        );
        assert_eq!(classify_volume(Muscle::Biceps, 12.0, 50), VolumeZone::Limit);
    }

    #[test]
    fn test_stronger_lifters_tolerate_more() {
        // 19 sets overtrains a weak lifter's chest but only flags the
        // limit zone for a strong one
        assert_eq!(
            classify_volume(Muscle::Chest, 19.0, 0),
            VolumeZone::Overtraining
        );
        assert_eq!(classify_volume(Muscle::Chest, 19.0, 100), VolumeZone::Limit);
    }

    #[test]
    fn test_score_50_matches_nominal_bases() {
        // capacity factor is exactly 1.0 at score 50
        assert_eq!(
            classify_volume(Muscle::Chest, 5.9, 50),
            VolumeZone::Maintenance
        );
        assert_eq!(
            classify_volume(Muscle::Chest, 6.0, 50),
            VolumeZone::Productive
        );
        assert_eq!(
            classify_volume(Muscle::Chest, 14.0, 50),
            VolumeZone::Optimized
        );
        assert_eq!(classify_volume(Muscle::Chest, 18.0, 50), VolumeZone::Limit);
        assert_eq!(
            classify_volume(Muscle::Chest, 18.1, 50),
            VolumeZone::Overtraining
        );
    }
}
