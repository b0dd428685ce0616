//! Composition layer for the nacho-defence duel.
//!
//! # Architecture
//!
//! ```text
//! Session (interactive, one player at a terminal)
//!   ├─→ MatchEngine (game-core rules + injected RNG)
//!   ├─→ CombatDisplay (console rendering)
//!   └─→ ActionProvider + ReplayPrompt (stdin)
//!
//! simulate (headless batch)
//!   └─→ N independent MatchEngines, one PcgRng each, on the blocking pool
//! ```

mod builder;
pub mod session;
pub mod simulation;
pub mod strategy;

pub use builder::SessionBuilder;
pub use session::{ReplayPrompt, Session, SessionSummary};
pub use simulation::{SimulationOptions, SimulationSummary, simulate};
pub use strategy::{Strategy, StrategyProvider};
