use serde::{Deserialize, Serialize};

/// Configuration for a recall analysis pass.
///
/// A small, fixed set of named values rather than a generic key/value bag,
/// so scripts get field access and serde support for free.
///
/// # Invariants
/// - `min_rt_samples >= 2` (the moment estimator divides by n - 1)
/// - `ngram_size >= 1`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AnalysisConfig {
	/// Minimum number of reaction times required before fitting an
	/// ex-Gaussian to a sample.
	pub min_rt_samples: usize,

	/// Whether to remove perseverations before analyzing a recall
	/// sequence.
	pub drop_perseverations: bool,

	/// Window size used when generating n-grams from recall sequences.
	pub ngram_size: usize,
}

impl Default for AnalysisConfig {
	fn default() -> Self {
		Self {
			min_rt_samples: 2,
			drop_perseverations: true,
			ngram_size: 2,
		}
	}
}

impl AnalysisConfig {
	/// Checks the configuration invariants.
	///
	/// # Errors
	/// Returns an error naming the first violated field.
	pub fn validate(&self) -> Result<(), String> {
		if self.min_rt_samples < 2 {
			return Err(format!(
				"min_rt_samples must be >= 2, got {}",
				self.min_rt_samples
			));
		}
		if self.ngram_size < 1 {
			return Err("ngram_size must be >= 1".to_owned());
		}
		Ok(())
	}
}
