//! Match state owned by the engine.
//!
//! `MatchState` is plain data: both combatants, the round counter and the
//! power-unlock flag. Mutation happens through [`crate::engine::MatchEngine`].

mod combatant;

pub use combatant::{Combatant, Role};

use crate::config::GameConfig;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    pub player: Combatant,
    pub enemy: Combatant,
    /// Completed rounds. Starts at 0.
    pub round: u32,
    /// Monotonic within a match; only [`MatchState::reset`] clears it.
    pub power_unlocked: bool,
}

impl MatchState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            player: Combatant::new(config.player_name.clone(), Role::Player),
            enemy: Combatant::new(config.enemy_name.clone(), Role::Enemy),
            round: 0,
            power_unlocked: false,
        }
    }

    /// Both combatants still standing.
    pub fn in_progress(&self) -> bool {
        self.player.is_alive() && self.enemy.is_alive()
    }

    pub fn reset(&mut self) {
        self.player.reset();
        self.enemy.reset();
        self.round = 0;
        self.power_unlocked = false;
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
