//! Simulation parameters and the protocol variants they apply to.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Which trial a simulation repeats.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Protocol {
    /// Alice and Bob pick bases at random; sample is the agreement rate.
    BasisAgreement,
    /// Eve measures and resends every qubit; sample is the sifted error rate.
    InterceptResend,
    /// Alice and Bob share a fixed basis; sample is the unsifted error rate.
    FixedBasis,
}

impl Protocol {
    pub const ALL: [Protocol; 3] = [
        Protocol::BasisAgreement,
        Protocol::InterceptResend,
        Protocol::FixedBasis,
    ];

    /// Expected agreement or error rate under the idealized model.
    pub fn theoretical_probability(self) -> f64 {
        match self {
            Protocol::BasisAgreement => 0.5,
            Protocol::InterceptResend | Protocol::FixedBasis => 0.25,
        }
    }

    /// What the per-run rate measures.
    pub fn rate_label(self) -> &'static str {
        match self {
            Protocol::BasisAgreement => "agreement rate",
            Protocol::InterceptResend | Protocol::FixedBasis => "error rate",
        }
    }
}

/// Validated inputs for one simulation.
///
/// Fields are private so that a value always satisfies
/// `n >= 1`, `runs >= 1` and `0 < p < 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationParameters {
    n: usize,
    runs: usize,
    p: f64,
}

impl SimulationParameters {
    pub fn new(n: usize, runs: usize, p: f64) -> Result<Self> {
        if n == 0 {
            return Err(SimError::InvalidParameter {
                name: "n",
                reason: "bits per run must be at least 1".to_string(),
            });
        }
        if runs == 0 {
            return Err(SimError::InvalidParameter {
                name: "runs",
                reason: "number of runs must be at least 1".to_string(),
            });
        }
        if !(p > 0.0 && p < 1.0) {
            return Err(SimError::InvalidParameter {
                name: "p",
                reason: format!("probability must lie strictly between 0 and 1, got {}", p),
            });
        }
        Ok(Self { n, runs, p })
    }

    /// Parameters using the protocol's theoretical probability.
    pub fn for_protocol(protocol: Protocol, n: usize, runs: usize) -> Result<Self> {
        Self::new(n, runs, protocol.theoretical_probability())
    }

    /// Bits per run.
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn runs(&self) -> usize {
        self.runs
    }

    /// Theoretical agreement or error probability.
    pub fn p(&self) -> f64 {
        self.p
    }
}
