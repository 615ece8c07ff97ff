//! Channel simulator: Alice's preparation, Eve's intercept-resend attack,
//! channel noise, and basis sifting.
//!
//! The error model is purely classical. Matching-basis measurements are
//! deterministic, wrong-basis measurements collapse to a uniformly random
//! outcome. Wrong-basis shots are discarded by sifting anyway, so Bob's
//! provisional bit starts equal to Alice's and is only disturbed by Eve's
//! interception or channel noise.
//!
//! Eve interception is a per-shot Bernoulli draw with probability
//! `eve_probability`, so partial interception levels thin out the error
//! signal proportionally (expected sifted QBER = 0.25 * eve_probability
//! on a noiseless channel).

use rand::Rng;

use crate::bb84_states::{random_bit, Basis};
use crate::errors::{check_probability, Bb84Error};

/// Configuration for one simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of qubits exchanged.
    pub shots: usize,
    /// Per-shot probability that Eve intercepts and resends.
    pub eve_probability: f64,
    /// Independent per-shot probability of a noise-induced bit flip.
    pub channel_error_probability: f64,
}

impl SimConfig {
    /// A noiseless, unobserved channel with the given shot count.
    pub fn clean(shots: usize) -> Self {
        SimConfig {
            shots,
            eve_probability: 0.0,
            channel_error_probability: 0.0,
        }
    }

    /// Rejects invalid parameters before any computation runs.
    pub fn validate(&self) -> Result<(), Bb84Error> {
        if self.shots == 0 {
            return Err(Bb84Error::NoShots);
        }
        check_probability("eve_probability", self.eve_probability)?;
        check_probability("channel_error_probability", self.channel_error_probability)?;
        Ok(())
    }
}

/// Discrete interception levels exposed by front-ends.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EveLevel {
    None,
    Partial,
    Full,
}

impl EveLevel {
    /// Maps the discrete choice to an interception probability.
    pub fn probability(self) -> f64 {
        match self {
            EveLevel::None => 0.0,
            EveLevel::Partial => 0.5,
            EveLevel::Full => 1.0,
        }
    }
}

/// Eve's view of one intercepted shot.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EveRecord {
    /// Basis Eve measured (and resent) in.
    pub basis: Basis,
    /// Bit Eve observed and resent.
    pub bit: bool,
}

/// Full diagnostic record of one transmitted qubit.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ShotRecord {
    pub alice_bit: bool,
    pub alice_basis: Basis,
    pub bob_basis: Basis,
    /// Bob's bit after interception and noise.
    pub bob_bit: bool,
    /// Present only on shots Eve actually intercepted.
    pub eve: Option<EveRecord>,
    /// True where Alice's and Bob's bases agree.
    pub sifted: bool,
}

/// Result of a simulation run: per-shot records plus the sifted key pair.
#[derive(Debug, Clone)]
pub struct SimResult {
    /// One record per shot, in transmission order.
    pub records: Vec<ShotRecord>,
    /// Alice's bits at sifted positions, in shot order.
    pub alice_sifted: Vec<bool>,
    /// Bob's bits at sifted positions, in shot order.
    pub bob_sifted: Vec<bool>,
}

impl SimResult {
    /// Length of the sifted key.
    pub fn sifted_len(&self) -> usize {
        self.alice_sifted.len()
    }

    /// Recomputes the sift mask from the per-shot records.
    pub fn sift_mask(&self) -> Vec<bool> {
        self.records.iter().map(|r| r.sifted).collect()
    }
}

/// Computes the sift mask: positions where the two basis choices agree.
pub fn sift_mask(alice_bases: &[Basis], bob_bases: &[Basis]) -> Vec<bool> {
    alice_bases
        .iter()
        .zip(bob_bases.iter())
        .map(|(a, b)| a == b)
        .collect()
}

/// Extracts the sifted key pair, preserving shot order.
pub fn sift(
    alice_bases: &[Basis],
    bob_bases: &[Basis],
    alice_bits: &[bool],
    bob_bits: &[bool],
) -> (Vec<bool>, Vec<bool>) {
    let mask = sift_mask(alice_bases, bob_bases);
    let alice = mask
        .iter()
        .zip(alice_bits.iter())
        .filter(|(&keep, _)| keep)
        .map(|(_, &bit)| bit)
        .collect();
    let bob = mask
        .iter()
        .zip(bob_bits.iter())
        .filter(|(&keep, _)| keep)
        .map(|(_, &bit)| bit)
        .collect();
    (alice, bob)
}

/// Runs the channel simulation with an injected random source.
///
/// Pure function of the config and the rng: no shared state survives the call.
pub fn simulate_with_rng<R: Rng>(config: &SimConfig, rng: &mut R) -> Result<SimResult, Bb84Error> {
    config.validate()?;

    let mut records = Vec::with_capacity(config.shots);
    let mut alice_sifted = Vec::new();
    let mut bob_sifted = Vec::new();

    for _ in 0..config.shots {
        let alice_bit = random_bit(rng);
        let alice_basis = Basis::random(rng);
        let bob_basis = Basis::random(rng);

        // Matching-basis transmission is deterministic; wrong-basis shots
        // are discarded by sifting, so their bit value is a don't-care.
        let mut bob_bit = alice_bit;

        let eve = if config.eve_probability > 0.0 && rng.gen::<f64>() < config.eve_probability {
            let eve_basis = Basis::random(rng);
            // Wrong-basis measurement collapses to a random outcome.
            let eve_bit = if eve_basis == alice_basis {
                alice_bit
            } else {
                random_bit(rng)
            };
            // Bob measures Eve's resent state, not Alice's original one,
            // so the collapse rule applies a second time.
            bob_bit = if bob_basis == eve_basis {
                eve_bit
            } else {
                random_bit(rng)
            };
            Some(EveRecord {
                basis: eve_basis,
                bit: eve_bit,
            })
        } else {
            None
        };

        // Noise flips Bob's final bit after all basis resolution.
        if rng.gen::<f64>() < config.channel_error_probability {
            bob_bit ^= true;
        }

        let sifted = alice_basis == bob_basis;
        if sifted {
            alice_sifted.push(alice_bit);
            bob_sifted.push(bob_bit);
        }

        records.push(ShotRecord {
            alice_bit,
            alice_basis,
            bob_basis,
            bob_bit,
            eve,
            sifted,
        });
    }

    Ok(SimResult {
        records,
        alice_sifted,
        bob_sifted,
    })
}

/// Runs the channel simulation with the thread-local random source.
pub fn simulate(config: &SimConfig) -> Result<SimResult, Bb84Error> {
    simulate_with_rng(config, &mut rand::thread_rng())
}
