//! Health arithmetic.

/// Apply damage to current health.
///
/// # Returns
///
/// New health value (clamped to 0)
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// Apply healing to current health. There is no maximum.
pub fn apply_healing(current_hp: u32, amount: u32) -> u32 {
    current_hp.saturating_add(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_never_underflows() {
        for hp in 0..=35 {
            for damage in 0..=40 {
                let after = apply_damage(hp, damage);
                assert_eq!(after, hp.saturating_sub(damage));
                assert!(after <= hp);
            }
        }
        assert_eq!(apply_damage(0, u32::MAX), 0);
    }

    #[test]
    fn healing_adds_without_cap() {
        assert_eq!(apply_healing(20, 4), 24);
        assert_eq!(apply_healing(u32::MAX, 1), u32::MAX);
    }
}
