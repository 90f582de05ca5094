//! Empirical versus theoretical statistics for a collection of per-run rates.
//!
//! Each run's rate is modeled as a Binomial(N, p) / N proportion, so its
//! predicted spread is `sqrt(p(1-p)/N)`. The significance score compares the
//! observed mean against `p` using the combined uncertainty
//! `sqrt(empirical_std² + theoretical_std²)`.

use serde::Serialize;

use crate::error::{Result, SimError};
use crate::params::SimulationParameters;

/// Standard deviation of a Binomial(n, p) / n proportion.
pub fn binomial_std(p: f64, n: usize) -> f64 {
    (p * (1.0 - p) / n as f64).sqrt()
}

pub fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Population standard deviation (divides by the count, not count - 1).
pub fn population_std(samples: &[f64], mean: f64) -> f64 {
    let variance = samples.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / samples.len() as f64;
    variance.sqrt()
}

/// Summary of one simulation, computed once and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStatistics {
    /// Number of samples summarized.
    pub count: usize,
    /// Theoretical probability the samples are scored against.
    pub expected: f64,
    pub empirical_mean: f64,
    /// Population standard deviation of the samples.
    pub empirical_std: f64,
    /// `sqrt(p(1-p)/N)`.
    pub theoretical_std: f64,
    /// `sqrt(empirical_std² + theoretical_std²)`.
    pub combined_std: f64,
    /// `|empirical_mean - p| / combined_std`.
    pub significance: f64,
    /// `|empirical_mean - p| / theoretical_std`.
    pub binomial_significance: f64,
    /// `theoretical_std / sqrt(count)`, the standard error of the mean.
    pub standard_error: f64,
}

impl SummaryStatistics {
    /// Summarize `samples` against the parameters' `n` and `p`.
    ///
    /// Fails only for an empty collection.
    pub fn compute(samples: &[f64], params: &SimulationParameters) -> Result<Self> {
        if samples.is_empty() {
            return Err(SimError::EmptySampleCollection {
                requested_runs: params.runs(),
            });
        }

        let p = params.p();
        let empirical_mean = mean(samples);
        let empirical_std = population_std(samples, empirical_mean);
        let theoretical_std = binomial_std(p, params.n());
        let combined_std = (empirical_std.powi(2) + theoretical_std.powi(2)).sqrt();
        let deviation = (empirical_mean - p).abs();

        Ok(Self {
            count: samples.len(),
            expected: p,
            empirical_mean,
            empirical_std,
            theoretical_std,
            combined_std,
            significance: deviation / combined_std,
            binomial_significance: deviation / theoretical_std,
            standard_error: theoretical_std / (samples.len() as f64).sqrt(),
        })
    }

    /// `(mu, sigma)` of the Gaussian drawn over the histogram.
    pub fn gaussian_fit(&self) -> (f64, f64) {
        (self.empirical_mean, self.empirical_std)
    }

    /// True if the mean is within `threshold` combined sigmas of `p`.
    pub fn is_consistent(&self, threshold: f64) -> bool {
        self.significance <= threshold
    }
}
