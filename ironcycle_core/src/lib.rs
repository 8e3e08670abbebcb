#![forbid(unsafe_code)]

//! Core domain model and computation engine for the Ironcycle system.
//!
//! This crate provides:
//! - Domain types (muscles, exercises, sets, logs, phases)
//! - The default exercise and phase catalog
//! - Strength scoring against bodyweight-relative standards
//! - Per-muscle volume accounting and zone classification
//! - Anchor-lift load transfer and phase-aware prescription
//! - Trend and recovery analysis
//! - Session sequencing and split conflict checks

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod classify;
pub mod strength;
pub mod volume;
pub mod zones;
pub mod transfer;
pub mod prescription;
pub mod trends;
pub mod sequence;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog, Catalog};
pub use config::Config;
pub use strength::{assess_strength, global_strength, GlobalStrength, StrengthAssessment};
pub use transfer::smart_load;
pub use prescription::{deload_prescription, prescribe, Prescription, SessionContext};
pub use trends::{analyze_trends, weekly_statistics, TrendReport};
pub use sequence::smart_sort;
pub use volume::muscle_metrics;
pub use zones::{classify_volume, VolumeZone};
