//! Interactive session: play a match, offer a replay, repeat.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use game_core::{ActionProvider, CombatDisplay, MatchEngine, MatchOutcome, PcgRng};
use tracing::info;

use crate::builder::SessionBuilder;

/// Asks the player whether to start another match.
pub trait ReplayPrompt {
    fn play_again(&mut self) -> Result<bool>;
}

impl<R: BufRead, W: Write> ReplayPrompt for client_frontend_cli::LineActionProvider<R, W> {
    fn play_again(&mut self) -> Result<bool> {
        if self.is_exhausted() {
            return Ok(false);
        }
        self.ask_play_again().context("failed to read replay answer")
    }
}

/// Results of every match played in one session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub seed: u64,
    pub outcomes: Vec<MatchOutcome>,
}

impl SessionSummary {
    pub fn wins(&self) -> usize {
        self.outcomes.iter().filter(|o| o.player_won()).count()
    }
}

pub struct Session<D, P> {
    engine: MatchEngine<PcgRng>,
    display: D,
    provider: P,
    seed: u64,
}

impl<D, P> Session<D, P>
where
    D: CombatDisplay,
    P: ActionProvider + ReplayPrompt,
{
    pub fn builder() -> SessionBuilder<D, P> {
        SessionBuilder::new()
    }

    pub(crate) fn new(engine: MatchEngine<PcgRng>, display: D, provider: P, seed: u64) -> Self {
        Self {
            engine,
            display,
            provider,
            seed,
        }
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Plays matches until the player declines a replay.
    pub fn run(&mut self) -> Result<SessionSummary> {
        let mut summary = SessionSummary {
            seed: self.seed,
            outcomes: Vec::new(),
        };

        loop {
            let outcome = self.engine.play(&mut self.display, &mut self.provider);
            summary.outcomes.push(outcome);

            if !self.provider.play_again()? {
                break;
            }
            self.engine.reset();
        }

        info!(
            matches = summary.outcomes.len(),
            wins = summary.wins(),
            "session finished"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{NullDisplay, RoundView, ScriptedProvider};

    /// Scripted moves plus a fixed list of replay answers.
    struct ScriptedPlayer {
        moves: ScriptedProvider,
        replays: Vec<bool>,
    }

    impl ActionProvider for ScriptedPlayer {
        fn next_choice(&mut self, view: &RoundView) -> String {
            self.moves.next_choice(view)
        }
    }

    impl ReplayPrompt for ScriptedPlayer {
        fn play_again(&mut self) -> Result<bool> {
            Ok(if self.replays.is_empty() {
                false
            } else {
                self.replays.remove(0)
            })
        }
    }

    #[test]
    fn replays_until_declined() {
        let player = ScriptedPlayer {
            moves: ScriptedProvider::repeating("2"),
            replays: vec![true, true, false],
        };
        let mut session = Session::builder()
            .seed(Some(11))
            .display(NullDisplay)
            .provider(player)
            .build()
            .expect("session builds");

        let summary = session.run().expect("session runs");

        assert_eq!(summary.seed, 11);
        assert_eq!(summary.outcomes.len(), 3);
    }

    #[test]
    fn build_requires_provider() {
        let result = SessionBuilder::<NullDisplay, ScriptedPlayer>::new()
            .display(NullDisplay)
            .build();
        assert!(result.is_err());
    }
}
