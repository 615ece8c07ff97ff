//! Error taxonomy for the simulator.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Bb84Error {
    #[error("shot count must be at least 1")]
    NoShots,

    #[error("probability `{name}` = {value} is outside [0, 1]")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("sample fraction {0} is outside (0, 1]")]
    InvalidSampleFraction(f64),

    #[error("sifted key length mismatch: alice has {alice} bits, bob has {bob}")]
    SiftedLengthMismatch { alice: usize, bob: usize },
}

/// Validates that `value` is a probability in [0, 1].
pub(crate) fn check_probability(name: &'static str, value: f64) -> Result<(), Bb84Error> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Bb84Error::InvalidProbability { name, value })
    }
}
