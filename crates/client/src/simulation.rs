//! Headless batch simulation.
//!
//! Every match gets its own engine and its own [`PcgRng`] seeded from the
//! base seed plus the match index, so results are reproducible and no
//! generator is shared across concurrently running matches.

use anyhow::{Context, Result};
use game_core::{GameConfig, MatchEngine, MatchOutcome, NullDisplay, PcgRng};
use serde::Serialize;
use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::strategy::{Strategy, StrategyProvider};

#[derive(Clone, Copy, Debug)]
pub struct SimulationOptions {
    pub matches: u32,
    pub seed: u64,
    pub strategy: Strategy,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulationSummary {
    pub matches: u32,
    pub seed: u64,
    pub strategy: Strategy,
    pub player_wins: u32,
    pub enemy_wins: u32,
    pub mean_rounds: f64,
    pub longest: Option<MatchOutcome>,
}

impl SimulationSummary {
    fn from_outcomes(options: &SimulationOptions, outcomes: &[MatchOutcome]) -> Self {
        let player_wins = outcomes.iter().filter(|o| o.player_won()).count() as u32;
        let total_rounds: u64 = outcomes.iter().map(|o| u64::from(o.rounds)).sum();
        let mean_rounds = if outcomes.is_empty() {
            0.0
        } else {
            total_rounds as f64 / outcomes.len() as f64
        };

        Self {
            matches: outcomes.len() as u32,
            seed: options.seed,
            strategy: options.strategy,
            player_wins,
            enemy_wins: outcomes.len() as u32 - player_wins,
            mean_rounds,
            longest: outcomes.iter().copied().max_by_key(|o| o.rounds),
        }
    }

    pub fn player_win_rate(&self) -> f64 {
        if self.matches == 0 {
            0.0
        } else {
            f64::from(self.player_wins) / f64::from(self.matches)
        }
    }
}

/// Plays one headless match to completion.
pub fn play_headless(seed: u64, strategy: Strategy) -> MatchOutcome {
    let mut engine = MatchEngine::new(GameConfig::default(), PcgRng::new(seed));
    let mut provider = StrategyProvider::new(strategy);
    engine.play(&mut NullDisplay, &mut provider)
}

/// Runs `options.matches` matches concurrently on the blocking pool.
pub async fn simulate(options: SimulationOptions) -> Result<SimulationSummary> {
    info!(
        matches = options.matches,
        seed = options.seed,
        strategy = ?options.strategy,
        "simulation started"
    );

    let mut tasks = JoinSet::new();
    for index in 0..options.matches {
        let seed = options.seed.wrapping_add(u64::from(index));
        let strategy = options.strategy;
        tasks.spawn_blocking(move || (index, play_headless(seed, strategy)));
    }

    let mut finished = Vec::with_capacity(options.matches as usize);
    while let Some(joined) = tasks.join_next().await {
        let (index, outcome) = joined.context("simulated match panicked")?;
        debug!(index, ?outcome, "simulated match finished");
        finished.push((index, outcome));
    }

    // Tasks finish in any order; summarise in match order.
    finished.sort_unstable_by_key(|(index, _)| *index);
    let outcomes: Vec<MatchOutcome> = finished.into_iter().map(|(_, outcome)| outcome).collect();

    let summary = SimulationSummary::from_outcomes(&options, &outcomes);
    info!(
        player_wins = summary.player_wins,
        enemy_wins = summary.enemy_wins,
        "simulation finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_match_is_reproducible() {
        for seed in 0..20 {
            assert_eq!(
                play_headless(seed, Strategy::Finisher),
                play_headless(seed, Strategy::Finisher)
            );
        }
    }

    #[tokio::test]
    async fn summary_counts_every_match() {
        let options = SimulationOptions {
            matches: 64,
            seed: 9,
            strategy: Strategy::Steady,
        };

        let summary = simulate(options).await.expect("simulation runs");

        assert_eq!(summary.matches, 64);
        assert_eq!(summary.player_wins + summary.enemy_wins, 64);
        assert!(summary.mean_rounds >= 1.0);
        assert!(summary.longest.is_some());
    }

    #[tokio::test]
    async fn concurrent_results_match_sequential_runs() {
        let options = SimulationOptions {
            matches: 32,
            seed: 1_000,
            strategy: Strategy::Finisher,
        };

        let summary = simulate(options).await.expect("simulation runs");
        let sequential: Vec<MatchOutcome> = (0..32)
            .map(|i| play_headless(1_000 + i, Strategy::Finisher))
            .collect();

        assert_eq!(
            summary,
            SimulationSummary::from_outcomes(&options, &sequential)
        );
    }

    #[test]
    fn empty_batch_summarises_to_zero() {
        let options = SimulationOptions {
            matches: 0,
            seed: 0,
            strategy: Strategy::Reckless,
        };
        let summary = SimulationSummary::from_outcomes(&options, &[]);
        assert_eq!(summary.player_win_rate(), 0.0);
        assert_eq!(summary.longest, None);
    }
}
