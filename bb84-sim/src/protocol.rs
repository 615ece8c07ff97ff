//! End-to-end protocol run: simulate the channel, estimate the QBER,
//! and derive the security verdict in one call.

use rand::Rng;

use crate::channel::{simulate_with_rng, SimConfig, SimResult};
use crate::errors::Bb84Error;
use crate::qber::{estimate_qber_with_rng, Verdict};

/// Outcome of a full BB84 run.
#[derive(Debug, Clone)]
pub struct ProtocolSummary {
    /// Per-shot records and the sifted key pair.
    pub sim: SimResult,
    /// Estimated QBER, or `None` when the sifted key was empty.
    pub qber: Option<f64>,
    /// Security decision; absent exactly when no estimate was possible.
    pub verdict: Option<Verdict>,
}

impl ProtocolSummary {
    pub fn sifted_len(&self) -> usize {
        self.sim.sifted_len()
    }

    /// The accepted key is only meaningful on a `Secure` verdict.
    pub fn is_secure(&self) -> bool {
        self.verdict == Some(Verdict::Secure)
    }
}

/// Runs the whole protocol with an injected random source.
pub fn run_with_rng<R: Rng>(
    config: &SimConfig,
    sample_fraction: f64,
    rng: &mut R,
) -> Result<ProtocolSummary, Bb84Error> {
    let sim = simulate_with_rng(config, rng)?;
    let qber = estimate_qber_with_rng(&sim.alice_sifted, &sim.bob_sifted, sample_fraction, rng)?;
    let verdict = qber.map(Verdict::from_qber);
    Ok(ProtocolSummary { sim, qber, verdict })
}

/// Runs the whole protocol with the thread-local random source.
pub fn run(config: &SimConfig, sample_fraction: f64) -> Result<ProtocolSummary, Bb84Error> {
    run_with_rng(config, sample_fraction, &mut rand::thread_rng())
}
