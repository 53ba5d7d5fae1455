use std::collections::{HashMap, HashSet};

/// Translates recall sequences from a shared group index space into a
/// compact local index space.
///
/// # Behavior
/// - Collects the set of distinct group indices actually used across all
///   sequences.
/// - Assigns each a local index starting at 0, in arbitrary set-iteration
///   order.
/// - Rewrites every sequence into local indices and builds the mapping
///   from local index to the original label.
///
/// # Invariants
/// - Every index appearing in the output sequences is a key of the
///   returned label map.
/// - The number of distinct indices used equals the returned map's size.
///
/// # Errors
/// Returns an error if a used index has no entry in `labels`.
pub fn to_local_space<L: Clone>(
	sequences: &[Vec<usize>],
	labels: &HashMap<usize, L>,
) -> Result<(Vec<Vec<usize>>, HashMap<usize, L>), String> {
	let used: HashSet<usize> = sequences.iter().flatten().copied().collect();

	let mut local_labels = HashMap::new();
	let mut to_local = HashMap::new();
	for (local, group) in used.into_iter().enumerate() {
		let label = labels
			.get(&group)
			.ok_or_else(|| format!("Index {} has no label", group))?;
		local_labels.insert(local, label.clone());
		to_local.insert(group, local);
	}

	let remapped = sequences
		.iter()
		.map(|sequence| {
			sequence
				.iter()
				.map(|group| to_local[group])
				.collect()
		})
		.collect();

	Ok((remapped, local_labels))
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	fn labels() -> HashMap<usize, &'static str> {
		HashMap::from([(5, "a"), (7, "b"), (9, "c")])
	}

	#[test]
	fn remapped_indices_are_compact_and_labeled() {
		let sequences = vec![vec![5, 5, 7], vec![7, 9]];
		let (remapped, local) = to_local_space(&sequences, &labels()).unwrap();

		// Three distinct items, so local indices are exactly {0, 1, 2}.
		assert_eq!(local.len(), 3);
		let used: HashSet<usize> = remapped.iter().flatten().copied().collect();
		assert_eq!(used, HashSet::from([0, 1, 2]));

		// Every output index resolves to a label, and the label set is
		// preserved with no extra entries.
		for index in &used {
			assert!(local.contains_key(index));
		}
		let recovered: HashSet<&str> = local.values().copied().collect();
		assert_eq!(recovered, HashSet::from(["a", "b", "c"]));
	}

	#[test]
	fn structure_is_preserved() {
		let sequences = vec![vec![5, 5, 7], vec![7, 9]];
		let (remapped, local) = to_local_space(&sequences, &labels()).unwrap();

		assert_eq!(remapped.len(), 2);
		assert_eq!(remapped[0].len(), 3);
		assert_eq!(remapped[1].len(), 2);

		// Repeats stay repeats, shared items stay shared.
		assert_eq!(remapped[0][0], remapped[0][1]);
		assert_eq!(remapped[0][2], remapped[1][0]);
		assert_eq!(local[&remapped[0][0]], "a");
		assert_eq!(local[&remapped[1][1]], "c");
	}

	#[test]
	fn unused_labels_are_not_carried() {
		let sequences = vec![vec![5]];
		let (_, local) = to_local_space(&sequences, &labels()).unwrap();
		assert_eq!(local.len(), 1);
		assert_eq!(local[&0], "a");
	}

	#[test]
	fn missing_label_is_an_error() {
		let sequences = vec![vec![5, 11]];
		assert!(to_local_space(&sequences, &labels()).is_err());
	}

	#[test]
	fn empty_input() {
		let (remapped, local) =
			to_local_space(&Vec::new(), &labels()).unwrap();
		assert!(remapped.is_empty());
		assert!(local.is_empty());
	}
}
