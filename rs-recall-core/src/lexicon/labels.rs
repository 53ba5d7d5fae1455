use std::collections::HashMap;
use std::hash::Hash;

/// Translates index sequences into label sequences using an index-to-label
/// map (e.g. `1 -> "dog"`, `2 -> "cat"`).
///
/// # Errors
/// Returns an error if a sequence contains an index with no label.
pub fn apply_labels<L: Clone>(
	sequences: &[Vec<usize>],
	labels: &HashMap<usize, L>,
) -> Result<Vec<Vec<L>>, String> {
	sequences
		.iter()
		.map(|sequence| {
			sequence
				.iter()
				.map(|index| {
					labels
						.get(index)
						.cloned()
						.ok_or_else(|| format!("Index {} has no label", index))
				})
				.collect()
		})
		.collect()
}

/// Reverses an index-to-label map into a label-to-index map.
///
/// # Notes
/// - Labels are assumed unique; if two indices share a label, one of them
///   wins arbitrarily.
pub fn reverse_labels<L: Eq + Hash + Clone>(labels: &HashMap<usize, L>) -> HashMap<L, usize> {
	labels
		.iter()
		.map(|(index, label)| (label.clone(), *index))
		.collect()
}
