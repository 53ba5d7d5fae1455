use std::time::Instant;

/// Runs a closure and prints its elapsed wall-clock time with a label.
///
/// Intended for single-threaded batch scripts; the closure's value is
/// returned unchanged.
pub fn timed<T>(label: &str, f: impl FnOnce() -> T) -> T {
	let start = Instant::now();
	let value = f();
	println!("{}: {:?}", label, start.elapsed());
	value
}

/// Runs a closure and returns its value together with the elapsed time,
/// for callers that want to report the timing themselves.
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, std::time::Duration) {
	let start = Instant::now();
	let value = f();
	(value, start.elapsed())
}
