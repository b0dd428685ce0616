//! Terminal frontend for the nacho-defence duel.
//!
//! This crate provides line-based console presentation and input for the
//! combat rules in `game-core`:
//! - [`ConsoleDisplay`] renders banners, paced text and health bars
//! - [`LineActionProvider`] reads the player's choice one line at a time
//! - [`ask_play_again`] drives the replay prompt
//!
//! Nothing here influences combat; every call is presentation only.

mod art;
mod config;
mod display;
mod input;
pub mod logging;

pub use config::{CliConfig, Pacing};
pub use display::ConsoleDisplay;
pub use input::{LineActionProvider, ask_play_again, strip_line_ending};
