//! Player action selection and input validation.
//!
//! The player picks one of four numbered actions each round. Raw input is
//! mapped to a [`PlayerAction`] by [`validate`]; anything ill-formed becomes
//! [`PlayerAction::Invalid`], which still consumes the player's turn.

mod error;
mod validation;

pub use error::InputError;
pub use validation::{parse_choice, validate};

/// The action a player resolves this round.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerAction {
    /// High risk: coin flip for 1 + [2, 4] damage.
    #[strum(serialize = "Alka-Seltzer")]
    AlkaSeltzer,
    /// Reliable: [1, 3] damage.
    #[strum(serialize = "Kick Sand")]
    KickSand,
    /// Tempo trade: heal self for [2, 4], no damage dealt.
    #[strum(serialize = "Add Chips")]
    AddChips,
    /// Guaranteed kill, available once the power is unlocked.
    #[strum(serialize = "Chuck Norris")]
    ChuckNorris,
    /// Sentinel substituted for rejected input. Never reachable by a digit.
    #[strum(serialize = "Invalid")]
    Invalid,
}

impl PlayerAction {
    /// Menu digit for the numbered actions.
    pub const fn digit(self) -> Option<char> {
        match self {
            PlayerAction::AlkaSeltzer => Some('1'),
            PlayerAction::KickSand => Some('2'),
            PlayerAction::AddChips => Some('3'),
            PlayerAction::ChuckNorris => Some('4'),
            PlayerAction::Invalid => None,
        }
    }

    pub const fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '1' => Some(PlayerAction::AlkaSeltzer),
            '2' => Some(PlayerAction::KickSand),
            '3' => Some(PlayerAction::AddChips),
            '4' => Some(PlayerAction::ChuckNorris),
            _ => None,
        }
    }

    /// Whether the action needs the power-unlock flag.
    pub const fn requires_power(self) -> bool {
        matches!(self, PlayerAction::ChuckNorris)
    }

    /// Actions a player may pick right now, in menu order.
    pub fn available(power_unlocked: bool) -> impl Iterator<Item = PlayerAction> {
        use strum::IntoEnumIterator;

        Self::iter().filter(move |action| {
            action.digit().is_some() && (power_unlocked || !action.requires_power())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_round_trip_for_numbered_actions() {
        for digit in ['1', '2', '3', '4'] {
            let action = PlayerAction::from_digit(digit).expect("numbered action");
            assert_eq!(action.digit(), Some(digit));
        }
        assert_eq!(PlayerAction::Invalid.digit(), None);
    }

    #[test]
    fn menu_hides_finisher_until_unlocked() {
        let locked: Vec<_> = PlayerAction::available(false).collect();
        assert_eq!(
            locked,
            vec![
                PlayerAction::AlkaSeltzer,
                PlayerAction::KickSand,
                PlayerAction::AddChips
            ]
        );

        let unlocked: Vec<_> = PlayerAction::available(true).collect();
        assert_eq!(unlocked.len(), 4);
        assert_eq!(unlocked.last(), Some(&PlayerAction::ChuckNorris));
    }

    #[test]
    fn display_names_match_menu_labels() {
        assert_eq!(PlayerAction::AlkaSeltzer.to_string(), "Alka-Seltzer");
        assert_eq!(PlayerAction::ChuckNorris.as_ref(), "Chuck Norris");
    }
}
