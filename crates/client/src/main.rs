//! Nacho-defence duel binary.
//!
//! Main entry point for the combat simulator.
//!
//! # Commands
//!
//! - `play` (default): interactive match at the terminal, with replays
//! - `simulate`: headless batch of matches driven by an automatic strategy
//!
//! # Examples
//!
//! ```bash
//! # Interactive play with a fixed seed and no text pacing
//! cargo run -p combat-client -- play --seed 42 --instant
//!
//! # 10k headless matches, JSON summary
//! cargo run -p combat-client -- simulate --matches 10000 --json
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use client_frontend_cli::{CliConfig, ConsoleDisplay, LineActionProvider, Pacing, logging};
use combat_client::{Session, SimulationOptions, Strategy, simulate};
use game_core::GameConfig;

/// Turn-based nacho defence against a flock of seagulls
#[derive(Parser)]
#[command(name = "combat-sim")]
#[command(about = "Defend your nachos from the seagulls", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play interactively at the terminal
    Play(PlayArgs),

    /// Run headless matches and print win statistics
    Simulate(SimulateArgs),
}

#[derive(Args, Debug, Default)]
struct PlayArgs {
    /// Fixed RNG seed (overrides COMBAT_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Player name (overrides PLAYER_NAME)
    #[arg(long)]
    name: Option<String>,

    /// Skip text reveal and round pauses
    #[arg(long)]
    instant: bool,
}

#[derive(Args, Debug)]
struct SimulateArgs {
    /// Number of matches to play
    #[arg(long, default_value_t = 1_000)]
    matches: u32,

    /// Base seed; match i uses seed + i (default: random)
    #[arg(long)]
    seed: Option<u64>,

    /// Automatic player strategy
    #[arg(long, value_enum, default_value_t = Strategy::Finisher)]
    strategy: Strategy,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Simulate(args)) => run_simulate(args).await,
        Some(Command::Play(args)) => run_play(args).await,
        None => run_play(PlayArgs::default()).await,
    }
}

/// Run an interactive session.
async fn run_play(args: PlayArgs) -> Result<()> {
    let mut config = CliConfig::from_env();
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(name) = args.name {
        config.player_name = Some(name);
    }
    if args.instant {
        config.pacing = Pacing::instant();
    }

    let _guard = logging::setup_logging(config.session_id.as_deref())?;

    tracing::info!("Starting combat client");
    tracing::info!("Instant text: {}", config.pacing.is_instant());

    // Stdin reads block; keep them off the async workers.
    let summary = tokio::task::spawn_blocking(move || play_interactive(config))
        .await
        .context("interactive session panicked")??;

    tracing::info!(
        "Session complete: {} matches, {} wins, seed {}",
        summary.outcomes.len(),
        summary.wins(),
        summary.seed
    );
    Ok(())
}

fn play_interactive(config: CliConfig) -> Result<combat_client::SessionSummary> {
    let game_config = match config.player_name {
        Some(name) => GameConfig::with_player_name(name),
        None => GameConfig::default(),
    };

    let display = ConsoleDisplay::stdout(config.pacing, &game_config);
    let provider = LineActionProvider::stdin();

    let mut session = Session::builder()
        .config(game_config)
        .seed(config.seed)
        .display(display)
        .provider(provider)
        .build()?;

    session.display_mut().title();
    session.run()
}

/// Run a headless simulation batch.
async fn run_simulate(args: SimulateArgs) -> Result<()> {
    logging::setup_stderr_logging()?;

    let seed = args
        .seed
        .or_else(|| CliConfig::from_env().seed)
        .unwrap_or_else(rand::random);

    let summary = simulate(SimulationOptions {
        matches: args.matches,
        seed,
        strategy: args.strategy,
    })
    .await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Matches:      {}", summary.matches);
        println!("Seed:         {}", summary.seed);
        println!("Strategy:     {:?}", summary.strategy);
        println!(
            "Player wins:  {} ({:.1}%)",
            summary.player_wins,
            summary.player_win_rate() * 100.0
        );
        println!("Enemy wins:   {}", summary.enemy_wins);
        println!("Mean rounds:  {:.2}", summary.mean_rounds);
        if let Some(longest) = summary.longest {
            println!(
                "Longest:      {} rounds ({} won)",
                longest.rounds, longest.winner
            );
        }
    }

    Ok(())
}
