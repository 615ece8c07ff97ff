//! QBER estimation over a random sample of the sifted key, and the
//! security decision against the standard BB84 bound.
//!
//! An empty sifted key yields no estimate at all rather than 0.0 —
//! "nothing to measure" must stay distinguishable from "no errors found".

use rand::seq::index;
use rand::Rng;

use crate::errors::Bb84Error;

/// Fraction of the sifted key sacrificed for error estimation.
pub const DEFAULT_SAMPLE_FRACTION: f64 = 0.25;

/// Standard BB84 detection bound: above this QBER the key must be aborted.
pub const QBER_THRESHOLD: f64 = 0.11;

/// Security decision derived from an estimated QBER.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// QBER at or below the threshold: the key is accepted.
    Secure,
    /// QBER above the threshold: eavesdropping or excessive noise assumed.
    Abort,
}

impl Verdict {
    pub fn from_qber(qber: f64) -> Self {
        if qber > QBER_THRESHOLD {
            Verdict::Abort
        } else {
            Verdict::Secure
        }
    }
}

/// Estimates the QBER by comparing a random sample of sifted positions.
///
/// Samples `max(1, floor(len * fraction))` distinct positions without
/// replacement and returns the fraction that disagree. Returns `Ok(None)`
/// when the sifted key is empty.
pub fn estimate_qber_with_rng<R: Rng>(
    alice_sifted: &[bool],
    bob_sifted: &[bool],
    fraction: f64,
    rng: &mut R,
) -> Result<Option<f64>, Bb84Error> {
    if alice_sifted.len() != bob_sifted.len() {
        return Err(Bb84Error::SiftedLengthMismatch {
            alice: alice_sifted.len(),
            bob: bob_sifted.len(),
        });
    }
    if !(fraction.is_finite() && fraction > 0.0 && fraction <= 1.0) {
        return Err(Bb84Error::InvalidSampleFraction(fraction));
    }

    let len = alice_sifted.len();
    if len == 0 {
        return Ok(None);
    }

    // fraction <= 1 keeps the floor within bounds; tiny keys still get one sample.
    let n = ((len as f64 * fraction) as usize).max(1);
    let sample = index::sample(rng, len, n);
    let errors = sample
        .iter()
        .filter(|&i| alice_sifted[i] != bob_sifted[i])
        .count();

    Ok(Some(errors as f64 / n as f64))
}

/// Estimates the QBER with the thread-local random source.
pub fn estimate_qber(
    alice_sifted: &[bool],
    bob_sifted: &[bool],
    fraction: f64,
) -> Result<Option<f64>, Bb84Error> {
    estimate_qber_with_rng(alice_sifted, bob_sifted, fraction, &mut rand::thread_rng())
}
