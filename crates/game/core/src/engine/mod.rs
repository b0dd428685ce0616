//! Round state machine.
//!
//! The [`MatchEngine`] is the only owner of [`MatchState`]. Each call to
//! [`MatchEngine::play_round`] runs one full round in a fixed order:
//!
//! 1. Re-evaluate the power unlock
//! 2. Render round info through the display
//! 3. Read, validate and resolve the player's action
//! 4. Resolve the enemy's attack (a no-op if the enemy is already down)
//! 5. Advance the round counter
//! 6. Conclude if either side is down
//!
//! The win check looks at the player first, so a round that leaves both
//! sides at 0 is a loss for the player.

mod errors;
mod report;
mod unlock;

pub use errors::MatchError;
pub use report::{MatchOutcome, MatchPhase, RoundReport, Winner};
pub use unlock::update_unlock;

use tracing::{debug, info, warn};

use crate::action::{PlayerAction, parse_choice};
use crate::combat::{TurnIntent, resolve_turn};
use crate::config::GameConfig;
use crate::display::CombatDisplay;
use crate::env::RngSource;
use crate::provider::{ActionProvider, RoundView};
use crate::state::MatchState;

/// Match controller owning both combatants, the round counter, the unlock
/// flag and the injected RNG.
///
/// Each engine must own its own RNG; draw order is part of a match's
/// determinism, so generators are never shared between engines.
pub struct MatchEngine<R> {
    config: GameConfig,
    state: MatchState,
    rng: R,
    phase: MatchPhase,
    history: Vec<RoundReport>,
}

impl<R: RngSource> MatchEngine<R> {
    /// Starts a new match at the fixed starting health values.
    pub fn new(config: GameConfig, rng: R) -> Self {
        let state = MatchState::new(&config);
        Self {
            config,
            state,
            rng,
            phase: MatchPhase::NotStarted,
            history: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Reports of every round played in the current match.
    pub fn history(&self) -> &[RoundReport] {
        &self.history
    }

    /// Returns the match to its starting state for a replay.
    ///
    /// Health, round counter and unlock flag are reset. The RNG keeps its
    /// position so a replay does not repeat the previous match's draws.
    pub fn reset(&mut self) {
        self.state.reset();
        self.phase = MatchPhase::NotStarted;
        self.history.clear();
        info!("match reset");
    }

    /// Plays rounds until the match concludes.
    pub fn play(
        &mut self,
        display: &mut impl CombatDisplay,
        provider: &mut impl ActionProvider,
    ) -> MatchOutcome {
        loop {
            if let MatchPhase::Concluded(outcome) = self.phase {
                return outcome;
            }
            if let Err(error) = self.play_round(display, provider) {
                warn!(%error, "round rejected");
            }
        }
    }

    /// Plays exactly one round.
    ///
    /// # Errors
    ///
    /// [`MatchError::Concluded`] if the match is already over.
    pub fn play_round(
        &mut self,
        display: &mut impl CombatDisplay,
        provider: &mut impl ActionProvider,
    ) -> Result<MatchPhase, MatchError> {
        if let MatchPhase::Concluded(outcome) = self.phase {
            return Err(MatchError::Concluded {
                rounds: outcome.rounds,
            });
        }
        if self.phase == MatchPhase::NotStarted {
            info!(
                player = %self.state.player.name,
                enemy = %self.state.enemy.name,
                "match started"
            );
            self.phase = MatchPhase::InProgress;
        }

        // 1. Power unlock
        let was_unlocked = self.state.power_unlocked;
        self.state.power_unlocked = update_unlock(was_unlocked, self.state.round, &mut self.rng);
        if self.state.power_unlocked && !was_unlocked {
            info!(round = self.state.round, "power unlocked");
            display.power_unlocked();
        }

        // 2. Round info
        self.render_round(display);

        // 3. Player action
        let view = self.view();
        let raw = provider.next_choice(&view);
        let (action, rejected) = match parse_choice(&raw, self.state.power_unlocked) {
            Ok(action) => (action, None),
            Err(error) => {
                warn!(input = %raw.escape_debug(), %error, "rejected action input");
                display.reveal(&format!("Huh? {error}."));
                (PlayerAction::Invalid, Some(error))
            }
        };

        let MatchState { player, enemy, .. } = &mut self.state;
        let player_outcome = resolve_turn(player, enemy, TurnIntent::Chosen(action), &mut self.rng);

        // 4. Enemy attack
        let enemy_outcome = resolve_turn(enemy, player, TurnIntent::Automatic, &mut self.rng);

        // 5. Round counter
        self.state.round += 1;

        debug!(
            round = self.state.round,
            %action,
            player_hp = self.state.player.health(),
            enemy_hp = self.state.enemy.health(),
            "round complete"
        );

        self.history.push(RoundReport {
            round: self.state.round,
            rejected,
            player_outcome,
            enemy_outcome,
            player_health: self.state.player.health(),
            enemy_health: self.state.enemy.health(),
            power_unlocked: self.state.power_unlocked,
        });

        // 6. Conclusion
        if !self.state.in_progress() {
            self.conclude(display);
        }

        Ok(self.phase)
    }

    fn view(&self) -> RoundView {
        RoundView {
            round: self.state.round,
            player_health: self.state.player.health(),
            enemy_health: self.state.enemy.health(),
            power_unlocked: self.state.power_unlocked,
        }
    }

    fn render_round(&self, display: &mut impl CombatDisplay) {
        display.round_banner(self.state.round + 1);

        if self.state.round == 0 {
            display.reveal(&format!(
                "The {} have spotted {}'s plate of nachos. Defend the snacks!",
                self.state.enemy.name, self.state.player.name
            ));
        } else {
            self.reveal_last_outcomes(display);
        }

        display.health(self.state.player.health(), self.state.enemy.health());

        let actions: Vec<PlayerAction> =
            PlayerAction::available(self.state.power_unlocked).collect();
        display.action_menu(&actions);
    }

    fn reveal_last_outcomes(&self, display: &mut impl CombatDisplay) {
        for text in [&self.state.player.last_outcome, &self.state.enemy.last_outcome] {
            if !text.is_empty() {
                display.reveal(text);
            }
        }
    }

    fn conclude(&mut self, display: &mut impl CombatDisplay) {
        // Player is checked first: a double knockout is a loss.
        let winner = if self.state.player.is_alive() {
            Winner::Player
        } else {
            Winner::Enemy
        };
        let outcome = MatchOutcome {
            winner,
            rounds: self.state.round,
        };
        self.phase = MatchPhase::Concluded(outcome);

        info!(%winner, rounds = outcome.rounds, "match concluded");

        self.reveal_last_outcomes(display);
        display.health(self.state.player.health(), self.state.enemy.health());
        match winner {
            Winner::Player => display.victory(&outcome),
            Winner::Enemy => display.defeat(&outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::NullDisplay;
    use crate::env::ScriptedRng;
    use crate::provider::ScriptedProvider;

    #[test]
    fn starts_not_started_at_round_zero() {
        let engine = MatchEngine::new(GameConfig::default(), ScriptedRng::default());
        assert_eq!(engine.phase(), MatchPhase::NotStarted);
        assert_eq!(engine.state().round, 0);
        assert!(!engine.state().power_unlocked);
        assert_eq!(engine.state().player.health(), 20);
        assert_eq!(engine.state().enemy.health(), 30);
    }

    #[test]
    fn first_round_moves_to_in_progress() {
        let mut engine = MatchEngine::new(GameConfig::default(), ScriptedRng::constant(1));
        let phase = engine
            .play_round(&mut NullDisplay, &mut ScriptedProvider::repeating("2"))
            .expect("round should run");
        assert_eq!(phase, MatchPhase::InProgress);
        assert_eq!(engine.state().round, 1);
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn concluded_match_rejects_rounds() {
        let mut engine = MatchEngine::new(GameConfig::default(), ScriptedRng::constant(3));
        let mut provider = ScriptedProvider::repeating("2");
        let outcome = engine.play(&mut NullDisplay, &mut provider);

        assert_eq!(
            engine.play_round(&mut NullDisplay, &mut provider),
            Err(MatchError::Concluded {
                rounds: outcome.rounds
            })
        );
        assert_eq!(engine.play(&mut NullDisplay, &mut provider), outcome);
    }

    #[test]
    fn reset_clears_match_progress() {
        let mut engine = MatchEngine::new(GameConfig::default(), ScriptedRng::constant(1));
        let mut provider = ScriptedProvider::repeating("2");
        engine.play(&mut NullDisplay, &mut provider);
        assert!(engine.state().power_unlocked);

        engine.reset();

        assert_eq!(engine.phase(), MatchPhase::NotStarted);
        assert_eq!(engine.state().round, 0);
        assert!(!engine.state().power_unlocked);
        assert_eq!(engine.state().player.health(), 20);
        assert_eq!(engine.state().enemy.health(), 30);
        assert!(engine.history().is_empty());
    }
}
