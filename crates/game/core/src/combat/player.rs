//! Player action resolution.

use tracing::debug;

use super::result::{ActionOutcome, Effect};
use crate::action::PlayerAction;
use crate::config::GameConfig;
use crate::env::RngSource;
use crate::state::Combatant;

/// Resolves a validated player action.
///
/// Draw order per action:
/// - `AlkaSeltzer`: coin flip, then the bonus roll only on heads
/// - `KickSand`: one damage roll
/// - `AddChips`: one heal roll
/// - `ChuckNorris` / `Invalid`: no draws
pub fn resolve_player_action(
    player: &mut Combatant,
    target: &mut Combatant,
    action: PlayerAction,
    rng: &mut impl RngSource,
) -> ActionOutcome {
    let outcome = match action {
        PlayerAction::AlkaSeltzer => {
            if rng.coin_flip() {
                let bonus = rng.range(GameConfig::GAMBIT_BONUS_MIN, GameConfig::GAMBIT_BONUS_MAX);
                let amount = GameConfig::GAMBIT_BASE_DAMAGE + bonus;
                target.take_damage(amount);
                ActionOutcome::new(
                    Some(action),
                    Effect::Damage { amount },
                    format!(
                        "{} drops Alka-Seltzer into the flock! The {} cough up a nacho and {} more in the panic.",
                        player.name, target.name, bonus
                    ),
                )
            } else {
                ActionOutcome::new(
                    Some(action),
                    Effect::Miss,
                    format!(
                        "{} tosses the Alka-Seltzer, but the {} aren't falling for it.",
                        player.name, target.name
                    ),
                )
            }
        }
        PlayerAction::KickSand => {
            let amount = rng.range(GameConfig::STEADY_DAMAGE_MIN, GameConfig::STEADY_DAMAGE_MAX);
            target.take_damage(amount);
            ActionOutcome::new(
                Some(action),
                Effect::Damage { amount },
                format!(
                    "{} kicks sand at the {}! They drop {} nachos.",
                    player.name, target.name, amount
                ),
            )
        }
        PlayerAction::AddChips => {
            let amount = rng.range(GameConfig::HEAL_MIN, GameConfig::HEAL_MAX);
            player.heal(amount);
            ActionOutcome::new(
                Some(action),
                Effect::Heal { amount },
                format!(
                    "{} rips open a fresh bag and piles {} more nachos onto the plate.",
                    player.name, amount
                ),
            )
        }
        PlayerAction::ChuckNorris => {
            target.knock_out();
            ActionOutcome::new(
                Some(action),
                Effect::Finisher,
                format!(
                    "Chuck Norris strolls down the beach. The {} are never seen again.",
                    target.name
                ),
            )
        }
        PlayerAction::Invalid => ActionOutcome::new(
            Some(action),
            Effect::None,
            format!(
                "{} fumbles with the snacks and wastes the turn.",
                player.name
            ),
        ),
    };

    debug!(
        action = %action,
        effect = ?outcome.effect,
        player_hp = player.health(),
        target_hp = target.health(),
        "player action resolved"
    );

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, ScriptedRng};
    use crate::state::Role;

    fn combatants() -> (Combatant, Combatant) {
        (
            Combatant::new("Old Man", Role::Player),
            Combatant::new("Seagulls", Role::Enemy),
        )
    }

    #[test]
    fn gambit_hit_deals_base_plus_bonus() {
        let (mut player, mut enemy) = combatants();
        let mut rng = ScriptedRng::new(vec![1, 4]);

        let outcome =
            resolve_player_action(&mut player, &mut enemy, PlayerAction::AlkaSeltzer, &mut rng);

        assert_eq!(outcome.effect, Effect::Damage { amount: 5 });
        assert_eq!(enemy.health(), 25);
        assert!(outcome.text.contains("4 more"));
    }

    #[test]
    fn gambit_miss_changes_nothing() {
        let (mut player, mut enemy) = combatants();
        let mut rng = ScriptedRng::new(vec![2]);

        let outcome =
            resolve_player_action(&mut player, &mut enemy, PlayerAction::AlkaSeltzer, &mut rng);

        assert_eq!(outcome.effect, Effect::Miss);
        assert_eq!(enemy.health(), 30);
        assert_eq!(player.health(), 20);
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn kick_sand_damage_in_range() {
        let mut rng = PcgRng::new(99);
        for _ in 0..200 {
            let (mut player, mut enemy) = combatants();
            let outcome =
                resolve_player_action(&mut player, &mut enemy, PlayerAction::KickSand, &mut rng);
            let dealt = outcome.damage_dealt();
            assert!((1..=3).contains(&dealt));
            assert_eq!(enemy.health(), 30 - dealt);
        }
    }

    #[test]
    fn damage_clamps_on_low_target() {
        let mut player = Combatant::new("Old Man", Role::Player);
        let mut enemy = Combatant::with_health("Seagulls", Role::Enemy, 1);
        let mut rng = ScriptedRng::constant(3);

        resolve_player_action(&mut player, &mut enemy, PlayerAction::KickSand, &mut rng);
        assert_eq!(enemy.health(), 0);
    }

    #[test]
    fn add_chips_heals_past_start() {
        let (mut player, mut enemy) = combatants();
        let mut rng = ScriptedRng::constant(4);

        let outcome =
            resolve_player_action(&mut player, &mut enemy, PlayerAction::AddChips, &mut rng);

        assert_eq!(outcome.effect, Effect::Heal { amount: 4 });
        assert_eq!(player.health(), 24);
        assert_eq!(enemy.health(), 30);
    }

    #[test]
    fn finisher_always_zeroes_target() {
        for start in [1, 7, 30, 500] {
            let mut player = Combatant::new("Old Man", Role::Player);
            let mut enemy = Combatant::with_health("Seagulls", Role::Enemy, start);
            let mut rng = ScriptedRng::default();

            let outcome =
                resolve_player_action(&mut player, &mut enemy, PlayerAction::ChuckNorris, &mut rng);

            assert_eq!(outcome.effect, Effect::Finisher);
            assert_eq!(enemy.health(), 0);
            assert_eq!(rng.draws(), 0);
        }
    }

    #[test]
    fn invalid_is_a_no_op() {
        let (mut player, mut enemy) = combatants();
        let mut rng = ScriptedRng::constant(3);

        let outcome =
            resolve_player_action(&mut player, &mut enemy, PlayerAction::Invalid, &mut rng);

        assert_eq!(outcome.effect, Effect::None);
        assert!(!outcome.text.is_empty());
        assert_eq!((player.health(), enemy.health()), (20, 30));
    }
}
