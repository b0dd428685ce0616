//! Combat result types.

use crate::action::PlayerAction;

/// Mechanical effect of a single resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    /// Target lost health. `amount` is the rolled total before clamping.
    Damage { amount: u32 },
    /// Actor gained health.
    Heal { amount: u32 },
    /// Gambit failed; nothing changed.
    Miss,
    /// Target's health was set to 0.
    Finisher,
    /// Nothing happened (rejected input, or the actor was already down).
    None,
}

/// Result of a combat resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionOutcome {
    /// Player action resolved, `None` for the enemy's automatic attack.
    pub action: Option<PlayerAction>,
    pub effect: Effect,
    /// Human-readable summary for the display layer.
    pub text: String,
}

impl ActionOutcome {
    pub fn new(action: Option<PlayerAction>, effect: Effect, text: impl Into<String>) -> Self {
        Self {
            action,
            effect,
            text: text.into(),
        }
    }

    /// No-op outcome with empty text.
    pub fn idle() -> Self {
        Self::new(None, Effect::None, String::new())
    }

    pub fn damage_dealt(&self) -> u32 {
        match self.effect {
            Effect::Damage { amount } => amount,
            _ => 0,
        }
    }
}
