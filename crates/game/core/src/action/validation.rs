use super::{InputError, PlayerAction};

/// Parses one raw input line into an action, reporting why it was rejected.
///
/// Length is counted in characters, not bytes, so a lone multi-byte glyph is
/// reported as unrecognized rather than too long.
pub fn parse_choice(raw: &str, power_unlocked: bool) -> Result<PlayerAction, InputError> {
    let mut chars = raw.chars();
    let (Some(ch), None) = (chars.next(), chars.next()) else {
        return Err(InputError::WrongLength {
            len: raw.chars().count(),
        });
    };

    let action = PlayerAction::from_digit(ch).ok_or(InputError::Unrecognized { ch })?;
    if action.requires_power() && !power_unlocked {
        return Err(InputError::Locked);
    }

    Ok(action)
}

/// Total validation: rejected input becomes [`PlayerAction::Invalid`].
pub fn validate(raw: &str, power_unlocked: bool) -> PlayerAction {
    parse_choice(raw, power_unlocked).unwrap_or(PlayerAction::Invalid)
}
