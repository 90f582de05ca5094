//! Full intercept-resend attack: Alice → Eve → Bob.
//!
//! Eve measures every qubit in a basis of her own choosing and resends what
//! she read, prepared in that same basis. Each hop where the receiver's basis
//! differs from the sender's replaces the bit with a coin flip. Alice and Bob
//! then sift to the positions where their own bases match and count errors.
//!
//! Within the sifted subset Eve guesses the right basis half the time (no
//! error) and the wrong one the other half, after which Bob's bit is a fair
//! coin: the expected error rate is 1/2 · 1/2 = 0.25 whatever N is.

use rand::Rng;

use crate::bb84::{relay, sift};
use crate::bb84_states::{random_bases, random_bits, Basis};
use crate::trial::{Trial, TrialSample};

#[derive(Debug, Clone, Copy, Default)]
pub struct InterceptResendTrial;

#[derive(Debug, Clone, PartialEq)]
pub struct InterceptResendTranscript {
    pub alice_bits: Vec<bool>,
    pub alice_bases: Vec<Basis>,
    pub eve_bases: Vec<Basis>,
    pub eve_bits: Vec<bool>,
    pub bob_bases: Vec<Basis>,
    pub bob_bits: Vec<bool>,
}

impl InterceptResendTranscript {
    /// Positions Alice and Bob keep after publicly comparing bases.
    pub fn sifted_positions(&self) -> Vec<usize> {
        sift(&self.alice_bases, &self.bob_bases)
    }

    /// Sifted positions where Bob's bit differs from Alice's.
    pub fn sifted_errors(&self) -> usize {
        self.sifted_positions()
            .into_iter()
            .filter(|&i| self.alice_bits[i] != self.bob_bits[i])
            .count()
    }
}

impl Trial for InterceptResendTrial {
    type Transcript = InterceptResendTranscript;

    fn generate<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> InterceptResendTranscript {
        let alice_bits = random_bits(rng, n);
        let alice_bases = random_bases(rng, n);

        let eve_bases = random_bases(rng, n);
        let eve_bits = relay(&alice_bits, &alice_bases, &eve_bases, rng);

        let bob_bases = random_bases(rng, n);
        let bob_bits = relay(&eve_bits, &eve_bases, &bob_bases, rng);

        InterceptResendTranscript {
            alice_bits,
            alice_bases,
            eve_bases,
            eve_bits,
            bob_bases,
            bob_bits,
        }
    }

    /// `None` when no position survives sifting.
    fn sample(&self, transcript: &InterceptResendTranscript) -> Option<TrialSample> {
        let sifted = transcript.sifted_positions();
        let errors = sifted
            .iter()
            .filter(|&&i| transcript.alice_bits[i] != transcript.bob_bits[i])
            .count();
        TrialSample::from_counts(errors, sifted.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bb84_states::MeasurementBasis;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_transcript_lengths() {
        let mut rng = StdRng::seed_from_u64(12);
        let t = InterceptResendTrial.generate(64, &mut rng);
        for len in [
            t.alice_bits.len(),
            t.alice_bases.len(),
            t.eve_bases.len(),
            t.eve_bits.len(),
            t.bob_bases.len(),
            t.bob_bits.len(),
        ] {
            assert_eq!(len, 64);
        }
    }

    #[test]
    fn test_matching_hops_copy_bits() {
        let mut rng = StdRng::seed_from_u64(21);
        let t = InterceptResendTrial.generate(500, &mut rng);
        for i in 0..500 {
            if t.eve_bases[i] == t.alice_bases[i] {
                assert_eq!(t.eve_bits[i], t.alice_bits[i], "Eve should copy at {}", i);
            }
            if t.bob_bases[i] == t.eve_bases[i] {
                assert_eq!(t.bob_bits[i], t.eve_bits[i], "Bob should copy at {}", i);
            }
        }
    }

    #[test]
    fn test_sifted_size_matches_recorded_bases() {
        let mut rng = StdRng::seed_from_u64(33);
        for _ in 0..50 {
            let t = InterceptResendTrial.generate(128, &mut rng);
            let expected = (0..128)
                .filter(|&i| t.alice_bases[i] == t.bob_bases[i])
                .count();
            match InterceptResendTrial.sample(&t) {
                Some(sample) => {
                    assert_eq!(sample.compared, expected);
                    assert_eq!(sample.hits, t.sifted_errors());
                }
                None => assert_eq!(expected, 0),
            }
        }
    }

    #[test]
    fn test_empty_sifted_subset_is_excluded() {
        use MeasurementBasis::*;
        let t = InterceptResendTranscript {
            alice_bits: vec![true, false],
            alice_bases: vec![Rectilinear, Diagonal],
            eve_bases: vec![Rectilinear, Rectilinear],
            eve_bits: vec![true, true],
            bob_bases: vec![Diagonal, Rectilinear],
            bob_bits: vec![false, true],
        };
        assert!(t.sifted_positions().is_empty());
        assert_eq!(InterceptResendTrial.sample(&t), None);
    }

    #[test]
    fn test_no_error_when_eve_guesses_right() {
        use MeasurementBasis::*;
        let t = InterceptResendTranscript {
            alice_bits: vec![true, false, true],
            alice_bases: vec![Rectilinear, Diagonal, Diagonal],
            eve_bases: vec![Rectilinear, Diagonal, Diagonal],
            eve_bits: vec![true, false, true],
            bob_bases: vec![Rectilinear, Diagonal, Rectilinear],
            bob_bits: vec![true, false, false],
        };
        let sample = InterceptResendTrial.sample(&t).unwrap();
        assert_eq!(sample.compared, 2);
        assert_eq!(sample.hits, 0);
        assert_eq!(sample.rate, 0.0);
    }

    #[test]
    fn test_single_bit_runs_are_often_excluded() {
        let mut rng = StdRng::seed_from_u64(1);
        let excluded = (0..1000)
            .filter(|_| InterceptResendTrial.run(1, &mut rng).is_none())
            .count();
        assert!(
            excluded > 400 && excluded < 600,
            "about half of single-bit runs should be excluded, got {}",
            excluded
        );
    }
}
