//! Label-space helpers.
//!
//! Items in a dataset live in a shared "group" index space (one index per
//! item across all subjects). Per-subject analyses want a compact "local"
//! space covering only the items that subject actually recalled. This
//! module translates between the two, and between indices and labels.

/// Group-to-local index remapping.
pub mod remap;

/// Index/label translation in both directions.
pub mod labels;

pub use labels::{apply_labels, reverse_labels};
pub use remap::to_local_space;
