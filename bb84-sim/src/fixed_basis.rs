//! Simplified eavesdropping with Alice and Bob locked to one known basis.
//!
//! No sifting is needed: every position is compared. Eve's only source of
//! error is her own basis guess. When she guesses wrong her reading is a coin
//! flip, and so is Bob's reading of what she resends, which still gives a
//! 0.25 expected error rate.

use rand::Rng;

use crate::bb84::{count_mismatches, measure_bb84_bit, relay_to_fixed};
use crate::bb84_states::{random_bases, random_bits, Basis, FIXED_BASIS};
use crate::trial::{Trial, TrialSample};

#[derive(Debug, Clone, Copy)]
pub struct FixedBasisTrial {
    /// Basis shared by Alice and Bob.
    pub basis: Basis,
}

impl FixedBasisTrial {
    pub const fn new(basis: Basis) -> Self {
        Self { basis }
    }
}

impl Default for FixedBasisTrial {
    fn default() -> Self {
        Self::new(FIXED_BASIS)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FixedBasisTranscript {
    pub alice_bits: Vec<bool>,
    pub eve_bases: Vec<Basis>,
    pub eve_bits: Vec<bool>,
    pub bob_bits: Vec<bool>,
}

impl Trial for FixedBasisTrial {
    type Transcript = FixedBasisTranscript;

    fn generate<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> FixedBasisTranscript {
        let alice_bits = random_bits(rng, n);
        let eve_bases = random_bases(rng, n);

        // Alice sends in the fixed basis, Eve reads in hers.
        let eve_bits: Vec<bool> = alice_bits
            .iter()
            .zip(eve_bases.iter())
            .map(|(&bit, &eve)| measure_bb84_bit(bit, self.basis, eve, rng))
            .collect();
        // Eve resends in her basis, Bob reads in the fixed one.
        let bob_bits = relay_to_fixed(&eve_bits, &eve_bases, self.basis, rng);

        FixedBasisTranscript {
            alice_bits,
            eve_bases,
            eve_bits,
            bob_bits,
        }
    }

    fn sample(&self, transcript: &FixedBasisTranscript) -> Option<TrialSample> {
        let errors = count_mismatches(&transcript.alice_bits, &transcript.bob_bits);
        TrialSample::from_counts(errors, transcript.alice_bits.len())
    }
}
