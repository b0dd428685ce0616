//! Automatic players for headless simulation.

use game_core::{ActionProvider, PlayerAction, RoundView};

/// Health at or below which the `finisher` strategy eats chips instead.
const HEAL_THRESHOLD: u32 = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Always gamble on Alka-Seltzer.
    Reckless,
    /// Always kick sand.
    Steady,
    /// Finisher once unlocked, heal when low, otherwise kick sand.
    #[default]
    Finisher,
}

impl Strategy {
    pub fn choose(self, view: &RoundView) -> PlayerAction {
        match self {
            Strategy::Reckless => PlayerAction::AlkaSeltzer,
            Strategy::Steady => PlayerAction::KickSand,
            Strategy::Finisher => {
                if view.power_unlocked {
                    PlayerAction::ChuckNorris
                } else if view.player_health <= HEAL_THRESHOLD {
                    PlayerAction::AddChips
                } else {
                    PlayerAction::KickSand
                }
            }
        }
    }
}

/// Answers each round with the strategy's menu digit.
#[derive(Clone, Copy, Debug)]
pub struct StrategyProvider {
    strategy: Strategy,
}

impl StrategyProvider {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }
}

impl ActionProvider for StrategyProvider {
    fn next_choice(&mut self, view: &RoundView) -> String {
        self.strategy
            .choose(view)
            .digit()
            .map(String::from)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(player_health: u32, power_unlocked: bool) -> RoundView {
        RoundView {
            round: 6,
            player_health,
            enemy_health: 12,
            power_unlocked,
        }
    }

    #[test]
    fn finisher_prefers_unlocked_power() {
        assert_eq!(
            Strategy::Finisher.choose(&view(3, true)),
            PlayerAction::ChuckNorris
        );
        assert_eq!(
            Strategy::Finisher.choose(&view(3, false)),
            PlayerAction::AddChips
        );
        assert_eq!(
            Strategy::Finisher.choose(&view(15, false)),
            PlayerAction::KickSand
        );
    }

    #[test]
    fn provider_emits_menu_digits() {
        let mut provider = StrategyProvider::new(Strategy::Reckless);
        assert_eq!(provider.next_choice(&view(20, false)), "1");

        let mut provider = StrategyProvider::new(Strategy::Finisher);
        assert_eq!(provider.next_choice(&view(20, true)), "4");
    }
}
