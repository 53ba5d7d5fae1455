use std::collections::HashSet;
use std::hash::Hash;

/// Removes perseverations from a recall sequence: keeps only the first
/// occurrence of each distinct item, preserving the original order.
pub fn drop_perseverations<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
	let mut seen = HashSet::new();
	items
		.iter()
		.filter(|item| seen.insert((*item).clone()))
		.cloned()
		.collect()
}
