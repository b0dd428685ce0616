//! Session builder with dependency injection pattern.

use anyhow::{Context, Result};
use game_core::{ActionProvider, CombatDisplay, GameConfig, MatchEngine, PcgRng};

use crate::session::{ReplayPrompt, Session};

/// Builder for constructing a [`Session`] with proper validation.
///
/// - **Required fields**: display and provider must be provided
/// - **Optional fields**: game config (defaults) and seed (random)
pub struct SessionBuilder<D, P> {
    config: GameConfig,
    seed: Option<u64>,
    display: Option<D>,
    provider: Option<P>,
}

impl<D, P> Default for SessionBuilder<D, P> {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            seed: None,
            display: None,
            provider: None,
        }
    }
}

impl<D, P> SessionBuilder<D, P>
where
    D: CombatDisplay,
    P: ActionProvider + ReplayPrompt,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Fix the RNG seed. Without one, a random seed is drawn at build time.
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn display(mut self, display: D) -> Self {
        self.display = Some(display);
        self
    }

    pub fn provider(mut self, provider: P) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Build the Session.
    ///
    /// # Errors
    ///
    /// Returns an error if the display or provider is missing.
    pub fn build(self) -> Result<Session<D, P>> {
        let display = self
            .display
            .context("Display is required. Use .display() to set it.")?;

        let provider = self
            .provider
            .context("Provider is required. Use .provider() to set it.")?;

        let seed = self.seed.unwrap_or_else(rand::random);
        tracing::info!(seed, "match seed");

        Ok(Session::new(
            MatchEngine::new(self.config, PcgRng::new(seed)),
            display,
            provider,
            seed,
        ))
    }
}
