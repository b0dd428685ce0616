//! Rejection reasons for raw action input.

/// Why a raw input line did not map to an action.
///
/// These never abort a round: [`super::validate`] turns every variant into
/// [`super::PlayerAction::Invalid`] and the engine echoes the message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputError {
    #[error("expected a single character, got {len}")]
    WrongLength { len: usize },

    #[error("that move is still locked")]
    Locked,

    #[error("'{ch}' is not one of the listed moves")]
    Unrecognized { ch: char },
}
