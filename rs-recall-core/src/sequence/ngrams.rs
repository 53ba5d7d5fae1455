/// Returns a lazy iterator over all contiguous length-`n` windows of a
/// sequence.
///
/// # Behavior
/// - Produces `items.len() - n + 1` windows, in order.
/// - Produces nothing when `n == 0` or `n > items.len()`.
///
/// # Notes
/// - Windows borrow from the input; nothing is cloned.
pub fn ngrams<T>(items: &[T], n: usize) -> impl Iterator<Item = &[T]> {
	let count = if n == 0 || n > items.len() {
		0
	} else {
		items.len() - n + 1
	};
	(0..count).map(move |i| &items[i..i + n])
}
