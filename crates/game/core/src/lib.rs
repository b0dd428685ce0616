//! Deterministic combat rules for the nacho-defence duel.
//!
//! `game-core` defines the canonical rules (actions, resolution, the round
//! state machine) and exposes pure APIs that frontends and batch tools reuse.
//! All state mutation flows through [`engine::MatchEngine`]; randomness,
//! player input and presentation are injected through [`env::RngSource`],
//! [`provider::ActionProvider`] and [`display::CombatDisplay`].
pub mod action;
pub mod combat;
pub mod config;
pub mod display;
pub mod engine;
pub mod env;
pub mod provider;
pub mod state;

pub use action::{InputError, PlayerAction, parse_choice, validate};
pub use combat::{ActionOutcome, Effect, TurnIntent, resolve_turn};
pub use config::GameConfig;
pub use display::{CombatDisplay, NullDisplay};
pub use engine::{
    MatchEngine, MatchError, MatchOutcome, MatchPhase, RoundReport, Winner, update_unlock,
};
pub use env::{PcgRng, RngSource, ScriptedRng};
pub use provider::{ActionProvider, RoundView, ScriptedProvider};
pub use state::{Combatant, MatchState, Role};
