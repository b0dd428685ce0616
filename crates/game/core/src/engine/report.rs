//! Match phases, outcomes and per-round reports.

use crate::action::InputError;
use crate::combat::ActionOutcome;

/// Which side won a concluded match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Winner {
    Player,
    Enemy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchOutcome {
    pub winner: Winner,
    /// Rounds played, including the deciding one.
    pub rounds: u32,
}

impl MatchOutcome {
    pub fn player_won(&self) -> bool {
        self.winner == Winner::Player
    }
}

/// Round state machine: `NotStarted -> InProgress -> Concluded`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchPhase {
    NotStarted,
    InProgress,
    Concluded(MatchOutcome),
}

impl MatchPhase {
    pub fn outcome(&self) -> Option<MatchOutcome> {
        match self {
            MatchPhase::Concluded(outcome) => Some(*outcome),
            _ => None,
        }
    }
}

/// Everything that happened in one round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundReport {
    /// 1-based number of the round.
    pub round: u32,
    /// Why the raw input was rejected, if it was.
    pub rejected: Option<InputError>,
    pub player_outcome: ActionOutcome,
    pub enemy_outcome: ActionOutcome,
    pub player_health: u32,
    pub enemy_health: u32,
    /// Flag value the round was played with.
    pub power_unlocked: bool,
}
