//! Monte Carlo driver: repeat one protocol's trial and summarize the rates.
//!
//! The driver owns the sample collection. Runs that yield no valid sample
//! (an intercept-resend run with nothing left after sifting) are counted and
//! left out; they never enter the collection as a placeholder value.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::error::Result;
use crate::params::{Protocol, SimulationParameters};
use crate::statistics::SummaryStatistics;
use crate::trial::TrialSample;

/// Per-run rates in run order, plus how many runs were excluded.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SampleCollection {
    rates: Vec<f64>,
    excluded: usize,
}

impl SampleCollection {
    pub fn with_capacity(runs: usize) -> Self {
        Self {
            rates: Vec::with_capacity(runs),
            excluded: 0,
        }
    }

    /// Record the outcome of one run.
    pub fn record(&mut self, outcome: Option<TrialSample>) {
        match outcome {
            Some(sample) => self.rates.push(sample.rate),
            None => self.excluded += 1,
        }
    }

    pub fn rates(&self) -> &[f64] {
        &self.rates
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Runs that produced no sample.
    pub fn excluded(&self) -> usize {
        self.excluded
    }

    pub fn into_rates(self) -> Vec<f64> {
        self.rates
    }
}

impl FromIterator<Option<TrialSample>> for SampleCollection {
    fn from_iter<I: IntoIterator<Item = Option<TrialSample>>>(iter: I) -> Self {
        let mut collection = SampleCollection::default();
        for outcome in iter {
            collection.record(outcome);
        }
        collection
    }
}

/// Everything a simulation produced, ready for plotting or reporting.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub protocol: Protocol,
    pub parameters: SimulationParameters,
    pub samples: SampleCollection,
    pub summary: SummaryStatistics,
}

impl SimulationReport {
    pub fn requested_runs(&self) -> usize {
        self.parameters.runs()
    }

    pub fn excluded_runs(&self) -> usize {
        self.samples.excluded()
    }
}

/// Run `params.runs()` trials, all drawing from `rng`.
pub fn collect_samples<R: Rng + ?Sized>(
    protocol: Protocol,
    params: &SimulationParameters,
    rng: &mut R,
) -> SampleCollection {
    let mut samples = SampleCollection::with_capacity(params.runs());
    for run in 0..params.runs() {
        let outcome = protocol.run_trial(params.n(), rng);
        if outcome.is_none() {
            debug!("run {}: no positions survived sifting, excluded", run);
        }
        samples.record(outcome);
    }
    samples
}

/// Seed for one run when every run owns its own generator.
pub fn run_seed(base_seed: u64, run: usize) -> u64 {
    base_seed.wrapping_add((run as u64).wrapping_mul(7919))
}

/// Run trials where run `i` draws from `StdRng::seed_from_u64(run_seed(base_seed, i))`.
///
/// Results do not depend on execution order, so the rayon collector
/// produces the same collection.
pub fn collect_samples_per_run(
    protocol: Protocol,
    params: &SimulationParameters,
    base_seed: u64,
) -> SampleCollection {
    (0..params.runs())
        .map(|run| {
            let mut rng = StdRng::seed_from_u64(run_seed(base_seed, run));
            protocol.run_trial(params.n(), &mut rng)
        })
        .collect()
}

/// Per-run seeded trials on the rayon pool.
#[cfg(feature = "parallel")]
pub fn collect_samples_parallel(
    protocol: Protocol,
    params: &SimulationParameters,
    base_seed: u64,
) -> SampleCollection {
    use rayon::prelude::*;

    let outcomes: Vec<Option<TrialSample>> = (0..params.runs())
        .into_par_iter()
        .map(|run| {
            let mut rng = StdRng::seed_from_u64(run_seed(base_seed, run));
            protocol.run_trial(params.n(), &mut rng)
        })
        .collect();
    outcomes.into_iter().collect()
}

/// Summarize a finished collection.
pub fn finish(
    protocol: Protocol,
    params: SimulationParameters,
    samples: SampleCollection,
) -> Result<SimulationReport> {
    let summary = SummaryStatistics::compute(samples.rates(), &params)?;
    info!(
        "{:?}: N={} runs={} kept={} excluded={} mean={:.5} sigma={:.3}",
        protocol,
        params.n(),
        params.runs(),
        samples.len(),
        samples.excluded(),
        summary.empirical_mean,
        summary.significance
    );
    Ok(SimulationReport {
        protocol,
        parameters: params,
        samples,
        summary,
    })
}

/// Run a full simulation drawing from `rng`.
pub fn run_simulation<R: Rng + ?Sized>(
    protocol: Protocol,
    params: SimulationParameters,
    rng: &mut R,
) -> Result<SimulationReport> {
    let samples = collect_samples(protocol, &params, rng);
    finish(protocol, params, samples)
}

/// Reproducible simulation from a single seed.
pub fn run_seeded(
    protocol: Protocol,
    params: SimulationParameters,
    seed: u64,
) -> Result<SimulationReport> {
    let mut rng = StdRng::seed_from_u64(seed);
    run_simulation(protocol, params, &mut rng)
}

/// Simulation with fresh randomness.
pub fn run_fresh(protocol: Protocol, params: SimulationParameters) -> Result<SimulationReport> {
    let mut rng = rand::thread_rng();
    run_simulation(protocol, params, &mut rng)
}
