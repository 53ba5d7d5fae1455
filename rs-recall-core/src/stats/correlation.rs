/// Computes the Pearson product-moment correlation coefficient between two
/// equal-length samples.
///
/// # Behavior
/// - Mean-centers both samples, then returns the ratio of the cross sum of
///   products to the geometric mean of the sums of squares.
/// - No significance test is performed, only the coefficient is returned.
///
/// # Notes
/// - `x` and `y` must have the same length; this is a caller precondition
///   and is not checked.
/// - A constant sample has zero denominator and yields NaN.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
	let n = x.len() as f64;
	let mx = x.iter().sum::<f64>() / n;
	let my = y.iter().sum::<f64>() / n;

	let mut num = 0.0;
	let mut ssx = 0.0;
	let mut ssy = 0.0;
	for (a, b) in x.iter().zip(y) {
		let xm = a - mx;
		let ym = b - my;
		num += xm * ym;
		ssx += xm * xm;
		ssy += ym * ym;
	}

	num / (ssx * ssy).sqrt()
}
