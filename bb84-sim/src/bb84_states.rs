//! Bits and measurement bases for the BB84 exchange.
//!
//! A basis is one of the two mutually unbiased bases of the protocol,
//! kept as its own type so it can never be conflated with the bit domain —
//! both are binary, but a basis label carries no key material.

use rand::Rng;

/// One of the two conjugate measurement bases.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Basis {
    /// Rectilinear ("Z") basis: |0> and |1>.
    Rectilinear,
    /// Diagonal ("X") basis: |+> and |->.
    Diagonal,
}

impl Basis {
    /// Draws a basis uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        if rng.gen::<bool>() {
            Basis::Diagonal
        } else {
            Basis::Rectilinear
        }
    }
}

/// Draws a classical bit uniformly from {0, 1}.
pub fn random_bit<R: Rng>(rng: &mut R) -> bool {
    rng.gen()
}
