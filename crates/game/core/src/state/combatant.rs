//! Combatant record shared by both sides of a match.

use crate::config::GameConfig;

/// Which side of the match a combatant fights for.
///
/// The tag selects the resolution function in [`crate::combat::resolve_turn`]
/// instead of per-type overrides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// Human-controlled participant.
    Player,
    /// Computer-controlled participant.
    Enemy,
}

impl Role {
    pub const fn starting_health(self) -> u32 {
        match self {
            Role::Player => GameConfig::PLAYER_START_HEALTH,
            Role::Enemy => GameConfig::ENEMY_START_HEALTH,
        }
    }
}

/// One participant in a match.
///
/// # Invariants
///
/// - `health` is unsigned; every reduction goes through saturating arithmetic
///   so it bottoms out at 0.
/// - Aliveness is never stored; [`Combatant::is_alive`] derives it from health.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub name: String,
    pub role: Role,
    health: u32,
    /// Text summary of this combatant's most recent resolution.
    pub last_outcome: String,
}

impl Combatant {
    /// Creates a combatant at its role's starting health.
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self::with_health(name, role, role.starting_health())
    }

    pub fn with_health(name: impl Into<String>, role: Role, health: u32) -> Self {
        Self {
            name: name.into(),
            role,
            health,
            last_outcome: String::new(),
        }
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Removes up to `amount` health, stopping at 0. Returns the health lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = crate::combat::apply_damage(before, amount);
        before - self.health
    }

    /// Adds health with no upper bound.
    pub fn heal(&mut self, amount: u32) {
        self.health = crate::combat::apply_healing(self.health, amount);
    }

    /// Drops health straight to 0.
    pub fn knock_out(&mut self) {
        self.health = 0;
    }

    /// Restores starting health and clears the outcome text.
    pub fn reset(&mut self) {
        self.health = self.role.starting_health();
        self.last_outcome.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_role_health() {
        assert_eq!(Combatant::new("Old Man", Role::Player).health(), 20);
        assert_eq!(Combatant::new("Seagulls", Role::Enemy).health(), 30);
    }

    #[test]
    fn aliveness_tracks_health() {
        for health in 0..=40 {
            let combatant = Combatant::with_health("x", Role::Enemy, health);
            assert_eq!(combatant.is_alive(), health > 0);
        }
    }

    #[test]
    fn damage_clamps_at_zero() {
        let mut combatant = Combatant::with_health("x", Role::Player, 2);
        assert_eq!(combatant.take_damage(5), 2);
        assert_eq!(combatant.health(), 0);
        assert!(!combatant.is_alive());
    }

    #[test]
    fn healing_has_no_ceiling() {
        let mut combatant = Combatant::new("x", Role::Player);
        combatant.heal(4);
        assert_eq!(combatant.health(), 24);
    }

    #[test]
    fn reset_restores_starting_state() {
        let mut combatant = Combatant::new("x", Role::Enemy);
        combatant.knock_out();
        combatant.last_outcome.push_str("gone");
        combatant.reset();
        assert_eq!(combatant.health(), 30);
        assert!(combatant.last_outcome.is_empty());
    }
}
