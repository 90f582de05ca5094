//! Honest basis agreement: how often do Alice and Bob pick the same basis?

use rand::Rng;

use crate::bb84_states::{random_bases, Basis};
use crate::trial::{Trial, TrialSample};

#[derive(Debug, Clone, Copy, Default)]
pub struct BasisAgreementTrial;

#[derive(Debug, Clone, PartialEq)]
pub struct AgreementTranscript {
    pub alice_bases: Vec<Basis>,
    pub bob_bases: Vec<Basis>,
    /// `true` where both bases match; those bits survive sifting.
    pub agreement: Vec<bool>,
}

impl AgreementTranscript {
    pub fn matches(&self) -> usize {
        self.agreement.iter().filter(|&&a| a).count()
    }

    /// The agreement mask as `'1'`/`'0'` characters.
    pub fn agreement_string(&self) -> String {
        self.agreement
            .iter()
            .map(|&a| if a { '1' } else { '0' })
            .collect()
    }
}

impl Trial for BasisAgreementTrial {
    type Transcript = AgreementTranscript;

    fn generate<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> AgreementTranscript {
        let alice_bases = random_bases(rng, n);
        let bob_bases = random_bases(rng, n);
        let agreement = alice_bases
            .iter()
            .zip(bob_bases.iter())
            .map(|(a, b)| a == b)
            .collect();

        AgreementTranscript {
            alice_bases,
            bob_bases,
            agreement,
        }
    }

    fn sample(&self, transcript: &AgreementTranscript) -> Option<TrialSample> {
        TrialSample::from_counts(transcript.matches(), transcript.agreement.len())
    }
}
