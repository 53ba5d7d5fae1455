/// An element of a one-level-nested sequence.
///
/// Analysis scripts hand over mixed rows: a trial can produce a burst of
/// items (a nested sequence) or a single bare item. The tag makes the two
/// shapes explicit rather than inspecting element types; anything that is
/// not a `Seq` passes through untouched.
#[derive(Clone, Debug, PartialEq)]
pub enum Entry<T> {
	/// A nested sequence whose items are spliced into the output.
	Seq(Vec<T>),
	/// A bare item passed through unchanged.
	Scalar(T),
}

/// Removes one level of nesting from a sequence of tagged entries.
///
/// # Behavior
/// - Items of `Seq` entries come first, in input order, followed by all
///   `Scalar` items in input order (flattened first, passthrough second).
/// - Only one level is removed; the items themselves are never inspected.
pub fn flatten_once<T>(entries: Vec<Entry<T>>) -> Vec<T> {
	let mut flat = Vec::new();
	let mut passthrough = Vec::new();

	for entry in entries {
		match entry {
			Entry::Seq(items) => flat.extend(items),
			Entry::Scalar(item) => passthrough.push(item),
		}
	}

	flat.extend(passthrough);
	flat
}
