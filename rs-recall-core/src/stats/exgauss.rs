use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

/// Parameters of an ex-Gaussian distribution.
///
/// The ex-Gaussian is the sum of an independent Gaussian(mu, sigma) and an
/// Exponential with rate `lambda`. It is a common model for reaction-time
/// data: the Gaussian captures the fast baseline, the exponential the long
/// right tail.
///
/// # Responsibilities
/// - Estimate parameters from a reaction-time sample (method of moments)
/// - Expose the analytic moments of the fitted distribution
/// - Draw random samples
///
/// # Invariants
/// - `sigma >= 0` and `lambda > 0` for any fit on a sample of size >= 2
///   with positive variance. Degenerate samples produce NaN or infinite
///   parameters instead of an error; callers validate preconditions.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExGauss {
	/// Location of the Gaussian component.
	pub mu: f64,
	/// Scale of the Gaussian component.
	pub sigma: f64,
	/// Rate of the exponential component (reciprocal of its mean `tau`).
	pub lambda: f64,
}

impl ExGauss {
	/// Fits ex-Gaussian parameters to a reaction-time sample by the method
	/// of moments.
	///
	/// Port of the `mexgauss` estimator from R's `retimes` package.
	///
	/// # Behavior
	/// - Computes the sample mean and the 2nd and 3rd central moments
	///   (normalized by n - 1).
	/// - Derives the exponential mean `tau` from the cube root of half the
	///   3rd moment when that moment is positive; otherwise falls back to
	///   0.8 x the population standard deviation. The fallback constant is
	///   an empirical heuristic carried over unchanged from `retimes`.
	/// - `sigma = sqrt(|k1 - tau^2|)`, `mu = mean - tau`, `lambda = 1/tau`.
	///
	/// # Notes
	/// - Requires `rts.len() >= 2` with non-degenerate variance for finite
	///   output. Smaller or constant samples yield NaN or infinite
	///   parameters, never a panic.
	pub fn fit_moments(rts: &[f64]) -> Self {
		let n = rts.len() as f64;
		let mean = rts.iter().sum::<f64>() / n;
		let k1 = rts.iter().map(|rt| (rt - mean).powi(2)).sum::<f64>() / (n - 1.0);
		let k2 = rts.iter().map(|rt| (rt - mean).powi(3)).sum::<f64>() / (n - 1.0);

		let tau = if k2 > 0.0 {
			(k2 / 2.0).cbrt()
		} else {
			// Population standard deviation (normalized by n, not n - 1),
			// as in the retimes fallback.
			0.8 * (rts.iter().map(|rt| (rt - mean).powi(2)).sum::<f64>() / n).sqrt()
		};

		Self {
			mu: mean - tau,
			sigma: (k1 - tau * tau).abs().sqrt(),
			lambda: 1.0 / tau,
		}
	}

	/// Analytic mean of the distribution: `mu + 1/lambda`.
	pub fn mean(&self) -> f64 {
		self.mu + 1.0 / self.lambda
	}

	/// Analytic variance of the distribution: `sigma^2 + (1/lambda)^2`.
	pub fn variance(&self) -> f64 {
		self.sigma.powi(2) + (1.0 / self.lambda).powi(2)
	}

	/// Analytic 3rd central moment: `2/lambda^3`.
	///
	/// For a moment fit taken on the positive-skew branch, this reproduces
	/// the sample's 3rd central moment.
	pub fn third_central_moment(&self) -> f64 {
		2.0 / self.lambda.powi(3)
	}

	/// Draws one random sample: an exponential draw plus an independent
	/// Gaussian draw.
	///
	/// # Errors
	/// Returns an error if the Gaussian component cannot be constructed
	/// (non-finite or negative `sigma`).
	pub fn sample(&self) -> Result<f64, String> {
		let normal = Normal::new(self.mu, self.sigma)
			.map_err(|e| format!("Invalid gaussian component: {}", e))?;

		let tau = 1.0 / self.lambda;
		let mut rng = rand::rng();
		// Inverse-transform exponential draw; random::<f64>() is in [0, 1)
		// so the argument of ln is never zero.
		let nexp = -tau * (1.0 - rng.random::<f64>()).ln();
		let ngau = normal.sample(&mut rng);

		Ok(nexp + ngau)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	// Right-skewed sample, the regular (positive 3rd moment) branch.
	const SKEWED: [f64; 8] = [0.31, 0.35, 0.38, 0.41, 0.45, 0.52, 0.70, 1.20];

	fn central_moment(xs: &[f64], p: i32) -> f64 {
		let n = xs.len() as f64;
		let mean = xs.iter().sum::<f64>() / n;
		xs.iter().map(|x| (x - mean).powi(p)).sum::<f64>() / (n - 1.0)
	}

	#[test]
	fn fit_recovers_sample_moments() {
		let params = ExGauss::fit_moments(&SKEWED);

		assert!(params.lambda > 0.0);
		assert!(params.sigma >= 0.0);

		let mean = SKEWED.iter().sum::<f64>() / SKEWED.len() as f64;
		assert!((params.mean() - mean).abs() < 1e-12);
		assert!((params.third_central_moment() - central_moment(&SKEWED, 3)).abs() < 1e-12);
		// k1 >= tau^2 for this sample, so |k1 - tau^2| + tau^2 == k1.
		assert!((params.variance() - central_moment(&SKEWED, 2)).abs() < 1e-12);
	}

	#[test]
	fn zero_variance_engages_fallback() {
		let params = ExGauss::fit_moments(&[1.0, 1.0, 1.0]);

		// 3rd moment is zero, fallback gives tau = 0.8 * 0 = 0.
		assert_eq!(params.mu, 1.0);
		assert_eq!(params.sigma, 0.0);
		assert_eq!(params.lambda, f64::INFINITY);

		// Deterministic: two fits agree exactly.
		assert_eq!(params, ExGauss::fit_moments(&[1.0, 1.0, 1.0]));
	}

	#[test]
	fn negative_skew_uses_std_fallback() {
		// Mirrored sample, 3rd moment < 0.
		let rts: Vec<f64> = SKEWED.iter().map(|rt| 2.0 - rt).collect();
		let params = ExGauss::fit_moments(&rts);

		let n = rts.len() as f64;
		let mean = rts.iter().sum::<f64>() / n;
		let pop_std = (rts.iter().map(|rt| (rt - mean).powi(2)).sum::<f64>() / n).sqrt();

		assert!((1.0 / params.lambda - 0.8 * pop_std).abs() < 1e-12);
		assert!(params.sigma >= 0.0);
	}

	#[test]
	fn sample_draws_are_finite() {
		let params = ExGauss { mu: 0.4, sigma: 0.05, lambda: 10.0 };
		for _ in 0..100 {
			let draw = params.sample().unwrap();
			assert!(draw.is_finite());
		}
	}

	#[test]
	fn sample_mean_approaches_analytic_mean() {
		let params = ExGauss { mu: 0.4, sigma: 0.05, lambda: 10.0 };
		let n = 20_000;
		let total: f64 = (0..n).map(|_| params.sample().unwrap()).sum();
		// mean = 0.4 + 0.1 = 0.5; std of the mean is ~0.0008, so 0.01 is
		// a comfortable bound.
		assert!((total / n as f64 - params.mean()).abs() < 0.01);
	}

	#[test]
	fn sample_rejects_invalid_sigma() {
		let params = ExGauss { mu: 0.4, sigma: f64::NAN, lambda: 10.0 };
		assert!(params.sample().is_err());
	}
}
