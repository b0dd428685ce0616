//! Sources of nondeterminism consumed by the combat rules.
//!
//! Randomness is the only external input the rules read besides the player's
//! typed choice, so it is injected explicitly instead of living on the actors.
pub mod rng;

pub use rng::{PcgRng, RngSource, ScriptedRng};
