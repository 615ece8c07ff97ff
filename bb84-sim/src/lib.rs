//! # bb84-sim
//!
//! BB84 quantum key distribution simulator using classical probabilistic
//! shortcuts equivalent to the protocol's two-conjugate-basis statistics.
//!
//! Simulates the full exchange: Alice's random bits and bases, an optional
//! intercept-resend eavesdropper, independent channel bit-flip noise, basis
//! sifting, and QBER estimation against the 0.11 security bound. No state
//! vectors are involved — a wrong-basis measurement collapses to a uniformly
//! random outcome, which is the only quantum-mechanical fact BB84 needs.
//!
//! ## Model
//!
//! - **Sifting**: shots where Alice's and Bob's bases agree form the raw key.
//! - **Intercept-resend**: Eve measures in a random basis and resends; each
//!   interception randomizes the outcome at wrong-basis positions twice
//!   (Eve measuring Alice, then Bob measuring Eve's resend), giving an
//!   expected QBER of 0.25 on the sifted key under full interception.
//! - **Noise**: each shot independently flips Bob's final bit with the
//!   configured channel error probability.

pub mod bb84_states;
pub mod channel;
pub mod errors;
pub mod protocol;
pub mod qber;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use crate::bb84_states::*;
    pub use crate::channel::*;
    pub use crate::errors::*;
    pub use crate::protocol::*;
    pub use crate::qber::*;
}
