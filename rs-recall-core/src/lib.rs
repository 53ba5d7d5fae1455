//! Utility library for free-recall / semantic-fluency data analysis.
//!
//! This crate provides a set of independent, standalone helpers including:
//! - Ex-Gaussian parameter estimation and sampling for reaction-time data
//! - Pearson correlation
//! - N-gram window generation over recall sequences
//! - One-level flattening, perseveration removal
//! - Group-to-local label-space remapping and label translation
//! - Analysis configuration and timing instrumentation
//!
//! Each function is a leaf utility: there is no shared state, no I/O and
//! no concurrency. Callers compose them freely from analysis scripts.

/// Statistical routines: ex-Gaussian moment fitting and sampling,
/// Pearson correlation.
pub mod stats;

/// Sequence helpers: n-gram windows, one-level flattening over a tagged
/// container variant, perseveration removal.
pub mod sequence;

/// Label-space helpers: group-to-local index remapping, index/label
/// translation in both directions.
pub mod lexicon;

/// Explicit analysis configuration with named fields.
pub mod config;

/// Timing instrumentation for batch analysis scripts.
pub mod instrument;
