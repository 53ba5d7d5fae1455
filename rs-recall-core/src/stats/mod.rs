//! Statistical routines for reaction-time analysis.
//!
//! - `ExGauss`: ex-Gaussian distribution parameters, with a
//!   method-of-moments estimator and a random sampler
//! - `pearson`: sample correlation coefficient

/// Ex-Gaussian distribution: parameters, moment-based fitting,
/// analytic moments, and random sampling.
pub mod exgauss;

/// Pearson product-moment correlation.
pub mod correlation;

pub use correlation::pearson;
pub use exgauss::ExGauss;
