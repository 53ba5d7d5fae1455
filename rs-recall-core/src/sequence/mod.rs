//! Helpers over recall sequences.
//!
//! - `ngrams`: lazy contiguous windows of a fixed size
//! - `Entry` / `flatten_once`: one-level flattening over a tagged variant
//! - `drop_perseverations`: keep only the first occurrence of each item

/// Lazy n-gram window generation.
pub mod ngrams;

/// One-level flattening over a tagged container variant.
pub mod flatten;

/// Perseveration removal (first-occurrence filter).
pub mod persev;

pub use flatten::{Entry, flatten_once};
pub use ngrams::ngrams;
pub use persev::drop_perseverations;
