//! Classical proxy for preparing and measuring a BB84 qubit.
//!
//! Measuring in the preparation basis reads the encoded bit back. Measuring in
//! the other basis gives a fair coin flip and the encoded bit is lost.

use rand::Rng;

use crate::bb84_states::{random_bit, Basis};

pub fn measure_bb84_bit<R: Rng + ?Sized>(
    bit: bool,
    prepared: Basis,
    measured: Basis,
    rng: &mut R,
) -> bool {
    if prepared == measured {
        bit
    } else {
        random_bit(rng)
    }
}

/// Measure every position of a transmitted sequence.
///
/// `bits[i]` was prepared in `sender_bases[i]` and is read in
/// `receiver_bases[i]`. All three slices must have the same length.
pub fn relay<R: Rng + ?Sized>(
    bits: &[bool],
    sender_bases: &[Basis],
    receiver_bases: &[Basis],
    rng: &mut R,
) -> Vec<bool> {
    debug_assert_eq!(bits.len(), sender_bases.len());
    debug_assert_eq!(bits.len(), receiver_bases.len());

    bits.iter()
        .zip(sender_bases.iter().zip(receiver_bases.iter()))
        .map(|(&bit, (&sent, &received))| measure_bb84_bit(bit, sent, received, rng))
        .collect()
}

/// Like [`relay`], with every position on one side in the same basis.
pub fn relay_to_fixed<R: Rng + ?Sized>(
    bits: &[bool],
    varying_bases: &[Basis],
    fixed: Basis,
    rng: &mut R,
) -> Vec<bool> {
    debug_assert_eq!(bits.len(), varying_bases.len());

    bits.iter()
        .zip(varying_bases.iter())
        .map(|(&bit, &basis)| measure_bb84_bit(bit, basis, fixed, rng))
        .collect()
}

/// Positions where the two parties happened to pick the same basis.
pub fn sift(alice_bases: &[Basis], bob_bases: &[Basis]) -> Vec<usize> {
    alice_bases
        .iter()
        .zip(bob_bases.iter())
        .enumerate()
        .filter(|(_, (a, b))| a == b)
        .map(|(i, _)| i)
        .collect()
}

pub fn count_mismatches(a: &[bool], b: &[bool]) -> usize {
    a.iter().zip(b.iter()).filter(|(x, y)| x != y).count()
}
