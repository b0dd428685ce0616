//! Combat resolution system.
//!
//! This module provides the resolution functions for both sides of a round.
//! Randomness is always drawn from the caller's [`RngSource`], so identical
//! draws produce identical outcomes.
//!
//! # Core Functions
//!
//! - `resolve_turn`: Role-dispatched entry point used by the engine
//! - `resolve_player_action`: One of the four player actions (or Invalid)
//! - `resolve_enemy_attack`: The enemy's single automatic attack
//! - `apply_damage` / `apply_healing`: Health arithmetic (damage clamped to 0)

pub mod damage;
pub mod enemy;
pub mod player;
pub mod result;

pub use damage::{apply_damage, apply_healing};
pub use enemy::resolve_enemy_attack;
pub use player::resolve_player_action;
pub use result::{ActionOutcome, Effect};

use crate::action::PlayerAction;
use crate::env::RngSource;
use crate::state::{Combatant, Role};

/// What the acting combatant is asked to do this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnIntent {
    /// A validated player choice.
    Chosen(PlayerAction),
    /// No choice was supplied; the actor's role decides.
    Automatic,
}

/// Resolves one turn for `actor` against `target`, selected by the actor's role.
///
/// Enemies ignore the intent and always make their automatic attack. A
/// player given [`TurnIntent::Automatic`] resolves [`PlayerAction::Invalid`].
/// The outcome text is also stored on the actor.
pub fn resolve_turn(
    actor: &mut Combatant,
    target: &mut Combatant,
    intent: TurnIntent,
    rng: &mut impl RngSource,
) -> ActionOutcome {
    let outcome = match actor.role {
        Role::Player => {
            let action = match intent {
                TurnIntent::Chosen(action) => action,
                TurnIntent::Automatic => PlayerAction::Invalid,
            };
            resolve_player_action(actor, target, action, rng)
        }
        Role::Enemy => resolve_enemy_attack(actor, target, rng),
    };

    actor.last_outcome.clone_from(&outcome.text);
    outcome
}
