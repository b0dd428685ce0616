//! Player input collaborator.
//!
//! The engine asks an [`ActionProvider`] for one raw line per round and runs
//! it through [`crate::action::validate`] itself, so providers never decide
//! what is legal.

use std::collections::VecDeque;

/// Read-only snapshot handed to providers when a choice is requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundView {
    /// Completed rounds so far.
    pub round: u32,
    pub player_health: u32,
    pub enemy_health: u32,
    pub power_unlocked: bool,
}

/// Source of the player's raw choice for a round.
///
/// Implementations may block (stdin) or answer immediately (scripts,
/// automatic strategies). The returned string is validated verbatim.
pub trait ActionProvider {
    fn next_choice(&mut self, view: &RoundView) -> String;
}

impl<P: ActionProvider + ?Sized> ActionProvider for &mut P {
    fn next_choice(&mut self, view: &RoundView) -> String {
        (**self).next_choice(view)
    }
}

impl<P: ActionProvider + ?Sized> ActionProvider for Box<P> {
    fn next_choice(&mut self, view: &RoundView) -> String {
        (**self).next_choice(view)
    }
}

/// Replays a fixed list of raw inputs, then repeats the fallback.
#[derive(Clone, Debug, Default)]
pub struct ScriptedProvider {
    inputs: VecDeque<String>,
    fallback: String,
}

impl ScriptedProvider {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            fallback: String::new(),
        }
    }

    /// Provider that answers every round with the same input.
    pub fn repeating(input: impl Into<String>) -> Self {
        Self {
            inputs: VecDeque::new(),
            fallback: input.into(),
        }
    }

    /// Input returned once the script runs out (default: empty string).
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }
}

impl ActionProvider for ScriptedProvider {
    fn next_choice(&mut self, _view: &RoundView) -> String {
        self.inputs
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}
