//! Per-muscle volume accounting over a single workout log.
//!
//! This is the base unit every higher aggregate (zones, trends, recovery)
//! is built from.

use crate::catalog::Catalog;
use crate::types::{MuscleRole, WorkoutLog};
use crate::Muscle;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Accumulated stimulus for one muscle over one log
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct MuscleVolumeMetrics {
    /// Working sets scaled by contribution factor
    pub weighted_volume: f64,
    /// Working sets where this muscle is a principal mover
    pub direct_sets: f64,
    /// sets x reps x load, scaled by contribution
    pub workload: f64,
}

/// Detailed per-muscle metrics for one workout log.
///
/// Every tracked muscle is present in the output, zeroed when untouched.
/// Representative reps/load come from the first working set of each
/// exercise, falling back to the legacy scalar fields.
pub fn muscle_metrics(log: &WorkoutLog, catalog: &Catalog) -> HashMap<Muscle, MuscleVolumeMetrics> {
    let mut metrics: HashMap<Muscle, MuscleVolumeMetrics> = Muscle::ALL
        .into_iter()
        .map(|m| (m, MuscleVolumeMetrics::default()))
        .collect();

    for item in log.split.values().flatten() {
        let Some(ex) = catalog.find_exercise(&item.name) else {
            tracing::debug!(name = %item.name, "exercise not in catalog, skipping");
            continue;
        };

        let series = f64::from(item.effective_series());
        let reps = f64::from(item.representative_reps());
        let load = item.representative_load();

        for m in &ex.muscles {
            let entry = metrics.entry(m.muscle).or_default();
            entry.weighted_volume += series * m.contribution;
            entry.workload += series * reps * load * m.contribution;
            if m.role == MuscleRole::Principal {
                entry.direct_sets += series;
            }
        }
    }

    metrics
}

/// Weighted volume only, per muscle, for one log
pub fn weighted_volume(log: &WorkoutLog, catalog: &Catalog) -> HashMap<Muscle, f64> {
    muscle_metrics(log, catalog)
        .into_iter()
        .map(|(m, v)| (m, v.weighted_volume))
        .collect()
}
