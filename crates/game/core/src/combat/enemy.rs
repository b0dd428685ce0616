//! Enemy attack resolution.

use tracing::debug;

use super::result::{ActionOutcome, Effect};
use crate::config::GameConfig;
use crate::env::RngSource;
use crate::state::Combatant;

/// Resolves the enemy's automatic attack.
///
/// A defeated attacker cannot act: it returns [`ActionOutcome::idle`] without
/// drawing from the RNG or touching the target.
pub fn resolve_enemy_attack(
    enemy: &Combatant,
    target: &mut Combatant,
    rng: &mut impl RngSource,
) -> ActionOutcome {
    if !enemy.is_alive() {
        debug!(enemy = %enemy.name, "enemy is down, skipping attack");
        return ActionOutcome::idle();
    }

    let amount = rng.range(GameConfig::ENEMY_STEAL_MIN, GameConfig::ENEMY_STEAL_MAX);
    target.take_damage(amount);

    debug!(amount, target_hp = target.health(), "enemy attack resolved");

    ActionOutcome::new(
        None,
        Effect::Damage { amount },
        format!(
            "The {} swoop in and snatch {} nachos from {}!",
            enemy.name, amount, target.name
        ),
    )
}
