//! The trial abstraction shared by all protocol variants.
//!
//! A trial draws every party's choices into a transcript, then reduces the
//! transcript to one rate. Keeping the transcript around lets tests re-derive
//! the reduction from the recorded sequences.

use rand::Rng;
use serde::Serialize;

use crate::agreement::BasisAgreementTrial;
use crate::fixed_basis::FixedBasisTrial;
use crate::intercept_resend::InterceptResendTrial;
use crate::params::Protocol;

/// One scalar sample produced by a single run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrialSample {
    /// `hits / compared`, always in [0, 1].
    pub rate: f64,
    /// Positions that took part in the comparison.
    pub compared: usize,
    /// Agreements or errors, depending on the protocol.
    pub hits: usize,
}

impl TrialSample {
    /// Returns `None` when nothing was compared.
    pub fn from_counts(hits: usize, compared: usize) -> Option<Self> {
        if compared == 0 {
            return None;
        }
        Some(Self {
            rate: hits as f64 / compared as f64,
            compared,
            hits,
        })
    }
}

pub trait Trial {
    /// Every random choice made during one run.
    type Transcript;

    fn generate<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Self::Transcript;

    /// Reduce a transcript to a rate, or `None` if the run has no valid sample.
    fn sample(&self, transcript: &Self::Transcript) -> Option<TrialSample>;

    fn run<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Option<TrialSample> {
        let transcript = self.generate(n, rng);
        self.sample(&transcript)
    }
}

impl Protocol {
    /// Run one trial of this protocol with `n` positions.
    pub fn run_trial<R: Rng + ?Sized>(self, n: usize, rng: &mut R) -> Option<TrialSample> {
        match self {
            Protocol::BasisAgreement => BasisAgreementTrial.run(n, rng),
            Protocol::InterceptResend => InterceptResendTrial.run(n, rng),
            Protocol::FixedBasis => FixedBasisTrial::default().run(n, rng),
        }
    }
}
