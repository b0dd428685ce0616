/// Game configuration constants and tunable parameters.
///
/// Balance values are fixed: every match starts from the same health totals
/// and uses the same roll ranges. Only presentation-level values (names)
/// may vary between matches.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Display name of the human-controlled combatant.
    pub player_name: String,
    /// Display name of the computer-controlled combatant.
    pub enemy_name: String,
}

impl GameConfig {
    // ===== starting health =====
    pub const PLAYER_START_HEALTH: u32 = 20;
    pub const ENEMY_START_HEALTH: u32 = 30;

    // ===== enemy attack =====
    pub const ENEMY_STEAL_MIN: u32 = 1;
    pub const ENEMY_STEAL_MAX: u32 = 3;

    // ===== player actions =====
    /// Fixed damage dealt by a successful gambit before the bonus roll.
    pub const GAMBIT_BASE_DAMAGE: u32 = 1;
    pub const GAMBIT_BONUS_MIN: u32 = 2;
    pub const GAMBIT_BONUS_MAX: u32 = 4;
    pub const STEADY_DAMAGE_MIN: u32 = 1;
    pub const STEADY_DAMAGE_MAX: u32 = 3;
    pub const HEAL_MIN: u32 = 2;
    pub const HEAL_MAX: u32 = 4;

    // ===== power unlock =====
    /// Unlock rolls start once the round counter exceeds this value.
    pub const UNLOCK_ROUND_THRESHOLD: u32 = 4;
    pub const UNLOCK_ROLL_SIDES: u32 = 10;
    /// A roll at or below this value unlocks the finisher (30%).
    pub const UNLOCK_ROLL_MAX_SUCCESS: u32 = 3;

    // ===== runtime defaults =====
    pub const DEFAULT_PLAYER_NAME: &'static str = "Old Man";
    pub const DEFAULT_ENEMY_NAME: &'static str = "Seagulls";

    pub fn new() -> Self {
        Self {
            player_name: Self::DEFAULT_PLAYER_NAME.to_string(),
            enemy_name: Self::DEFAULT_ENEMY_NAME.to_string(),
        }
    }

    pub fn with_player_name(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
