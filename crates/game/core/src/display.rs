//! Display collaborator.
//!
//! The engine pushes everything the player sees through [`CombatDisplay`].
//! Calls are fire-and-forget: nothing returned here feeds back into combat.

use crate::action::PlayerAction;
use crate::engine::MatchOutcome;

/// Presentation sink for a running match.
pub trait CombatDisplay {
    /// Banner announcing the round about to be played (1-based).
    fn round_banner(&mut self, round: u32);

    /// Reveal a line of narrative text.
    fn reveal(&mut self, text: &str);

    /// Current health of both combatants.
    fn health(&mut self, player_health: u32, enemy_health: u32);

    /// Actions the player may choose this round.
    fn action_menu(&mut self, _actions: &[PlayerAction]) {}

    /// The power unlock fired this round.
    fn power_unlocked(&mut self) {}

    fn victory(&mut self, outcome: &MatchOutcome);

    fn defeat(&mut self, outcome: &MatchOutcome);
}

impl<D: CombatDisplay + ?Sized> CombatDisplay for &mut D {
    fn round_banner(&mut self, round: u32) {
        (**self).round_banner(round)
    }

    fn reveal(&mut self, text: &str) {
        (**self).reveal(text)
    }

    fn health(&mut self, player_health: u32, enemy_health: u32) {
        (**self).health(player_health, enemy_health)
    }

    fn action_menu(&mut self, actions: &[PlayerAction]) {
        (**self).action_menu(actions)
    }

    fn power_unlocked(&mut self) {
        (**self).power_unlocked()
    }

    fn victory(&mut self, outcome: &MatchOutcome) {
        (**self).victory(outcome)
    }

    fn defeat(&mut self, outcome: &MatchOutcome) {
        (**self).defeat(outcome)
    }
}

/// Display that discards everything. Used for headless simulation.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullDisplay;

impl CombatDisplay for NullDisplay {
    fn round_banner(&mut self, _round: u32) {}

    fn reveal(&mut self, _text: &str) {}

    fn health(&mut self, _player_health: u32, _enemy_health: u32) {}

    fn victory(&mut self, _outcome: &MatchOutcome) {}

    fn defeat(&mut self, _outcome: &MatchOutcome) {}
}
