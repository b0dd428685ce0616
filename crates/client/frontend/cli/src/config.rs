//! CLI-specific configuration for the terminal frontend.
use std::env;
use std::time::Duration;

/// CLI configuration.
///
/// Presentation settings plus the few start-up values the composition root
/// forwards to the engine (player name, seed).
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub pacing: Pacing,
    pub player_name: Option<String>,
    pub seed: Option<u64>,
    pub session_id: Option<String>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PLAYER_NAME` - Player display name (default: "Old Man")
    /// - `COMBAT_SEED` - Fixed RNG seed (default: random)
    /// - `TEXT_REVEAL_MS` - Delay between revealed characters (default: 20)
    /// - `ROUND_PAUSE_MS` - Pause after each round's narration (default: 600)
    /// - `INSTANT_TEXT` - Disable all pacing delays (default: false)
    /// - `GAME_SESSION_ID` - Log session directory name (default: timestamp)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.player_name = env::var("PLAYER_NAME")
            .ok()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        config.seed = read_env::<u64>("COMBAT_SEED");

        if let Some(ms) = read_env::<u64>("TEXT_REVEAL_MS") {
            config.pacing.reveal = Duration::from_millis(ms);
        }
        if let Some(ms) = read_env::<u64>("ROUND_PAUSE_MS") {
            config.pacing.round_pause = Duration::from_millis(ms);
        }
        if read_env_bool("INSTANT_TEXT") == Some(true) {
            config.pacing = Pacing::instant();
        }

        config.session_id = env::var("GAME_SESSION_ID").ok();

        config
    }
}

/// Presentation-only delays. Zero durations skip sleeping entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pacing {
    /// Delay between characters of revealed text.
    pub reveal: Duration,
    /// Pause after a round's narration.
    pub round_pause: Duration,
}

impl Pacing {
    pub const fn instant() -> Self {
        Self {
            reveal: Duration::ZERO,
            round_pause: Duration::ZERO,
        }
    }

    pub fn is_instant(&self) -> bool {
        self.reveal.is_zero() && self.round_pause.is_zero()
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            reveal: Duration::from_millis(20),
            round_pause: Duration::from_millis(600),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(&env::var(key).ok()?)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_boolean_spellings() {
        for raw in ["true", "1", "YES", " on "] {
            assert_eq!(parse_bool(raw), Some(true), "{raw}");
        }
        for raw in ["false", "0", "No", "off"] {
            assert_eq!(parse_bool(raw), Some(false), "{raw}");
        }
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn default_pacing_is_not_instant() {
        assert!(!Pacing::default().is_instant());
        assert!(Pacing::instant().is_instant());
    }
}
