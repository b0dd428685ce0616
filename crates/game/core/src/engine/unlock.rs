//! Power-unlock policy for the finisher action.

use tracing::trace;

use crate::config::GameConfig;
use crate::env::RngSource;

/// Decides whether the finisher is available this round.
///
/// Monotonic: once unlocked, stays unlocked without drawing. While locked,
/// nothing is drawn until `round` (completed rounds, pre-increment) exceeds
/// [`GameConfig::UNLOCK_ROUND_THRESHOLD`]; from then on a d10 is rolled once
/// per call and a 1-3 unlocks.
pub fn update_unlock(currently_unlocked: bool, round: u32, rng: &mut impl RngSource) -> bool {
    if currently_unlocked {
        return true;
    }
    if round <= GameConfig::UNLOCK_ROUND_THRESHOLD {
        return false;
    }

    let roll = rng.range(1, GameConfig::UNLOCK_ROLL_SIDES);
    trace!(round, roll, "power unlock roll");
    roll <= GameConfig::UNLOCK_ROLL_MAX_SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, ScriptedRng};

    #[test]
    fn never_rolls_before_threshold() {
        let mut rng = ScriptedRng::constant(1);
        for round in 0..=4 {
            assert!(!update_unlock(false, round, &mut rng));
        }
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn rolls_from_round_five() {
        let mut rng = ScriptedRng::new(vec![3, 4]);
        assert!(update_unlock(false, 5, &mut rng));
        assert!(!update_unlock(false, 5, &mut rng));
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn stays_unlocked_without_drawing() {
        let mut rng = ScriptedRng::constant(10);
        for round in 0..50 {
            assert!(update_unlock(true, round, &mut rng));
        }
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn success_rate_is_roughly_thirty_percent() {
        let mut rng = PcgRng::new(2024);
        let trials = 10_000;
        let unlocked = (0..trials)
            .filter(|_| update_unlock(false, 5, &mut rng))
            .count();
        let rate = unlocked as f64 / trials as f64;
        assert!((0.27..0.33).contains(&rate), "rate was {rate}");
    }
}
