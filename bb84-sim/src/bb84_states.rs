//! Random basis and bit choices made by each party.
//!
//! Every draw goes through a caller-owned generator so that a seeded
//! `StdRng` reproduces a whole simulation bit for bit.

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeasurementBasis {
    /// `+` basis, |0> and |1>.
    Rectilinear,
    /// `x` basis, |+> and |->.
    Diagonal,
}

impl MeasurementBasis {
    /// Pick either basis with probability 1/2.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen::<bool>() {
            MeasurementBasis::Diagonal
        } else {
            MeasurementBasis::Rectilinear
        }
    }

    pub fn symbol(self) -> char {
        match self {
            MeasurementBasis::Rectilinear => '+',
            MeasurementBasis::Diagonal => 'x',
        }
    }
}

pub type Basis = MeasurementBasis;

/// The basis Alice and Bob agree on up front in the fixed-basis model.
pub const FIXED_BASIS: Basis = MeasurementBasis::Rectilinear;

pub fn random_bit<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen()
}

/// One independent basis choice per position.
pub fn random_bases<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Basis> {
    (0..n).map(|_| Basis::random(rng)).collect()
}

/// One independent bit per position.
pub fn random_bits<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<bool> {
    (0..n).map(|_| random_bit(rng)).collect()
}
