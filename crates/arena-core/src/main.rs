//! Headless Snake Arena Runner
//!
//! Runs the arena for a fixed number of ticks, optionally steering the player
//! with the opponent's greedy procedure, and records events and the final
//! board.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use arena_core::output::write_snapshot;
use arena_core::{Arena, ArenaConfig, ArenaError, EventLogger};
use arena_events::{ArenaStatus, SnakeRole};

/// Command line arguments for the runner
#[derive(Parser, Debug)]
#[command(name = "snake_arena")]
#[command(about = "Headless snake arena simulation")]
struct Args {
    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    /// TOML config file (defaults to arena.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seconds per tick (defaults to 1 / fps)
    #[arg(long)]
    dt: Option<f32>,

    /// Steer the player with the greedy food-seeking procedure
    #[arg(long)]
    autopilot: bool,

    /// Reset after game over instead of stopping
    #[arg(long)]
    restart: bool,

    /// Write every event as JSON lines to this file
    #[arg(long)]
    events_out: Option<PathBuf>,

    /// Write the final board as JSON to this file
    #[arg(long)]
    snapshot_out: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        tracing::error!(error = %e, "Run aborted");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ArenaError> {
    let config = match &args.config {
        Some(path) => ArenaConfig::load_or_default_from(path),
        None => ArenaConfig::load_or_default(),
    };
    let dt = args.dt.unwrap_or_else(|| config.frame_delta());

    tracing::info!(
        seed = args.seed,
        ticks = args.ticks,
        dt,
        autopilot = args.autopilot,
        "Starting snake arena"
    );

    let mut arena = Arena::new(config, args.seed)?;
    let mut logger = match &args.events_out {
        Some(path) => EventLogger::new(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Could not open event log");
            EventLogger::null()
        }),
        None => EventLogger::null(),
    };

    let mut games = 1u32;
    let mut best_score = 0usize;
    let progress_every = (args.ticks / 10).max(1);

    for step in 1..=args.ticks {
        if args.autopilot {
            if let Some(direction) = arena.autopilot_direction() {
                arena.queue_input(direction);
            }
        }

        let status = arena.tick(dt);
        let events = arena.drain_events();
        for event in &events {
            tracing::debug!(tick = event.tick, event = event.label(), "Arena event");
        }
        if let Err(e) = logger.log_batch(&events) {
            tracing::warn!(error = %e, "Could not write events");
        }
        if let Some(player) = arena.snake(SnakeRole::Player) {
            best_score = best_score.max(player.score());
        }

        if step % progress_every == 0 {
            let snapshot = arena.snapshot();
            let score = snapshot
                .snake(SnakeRole::Player)
                .map(|snake| snake.score)
                .unwrap_or_default();
            tracing::info!(tick = arena.current_tick(), games, score, "Progress");
        }

        if status == ArenaStatus::GameOver {
            if !args.restart {
                tracing::info!(tick = arena.current_tick(), "Game over, stopping");
                break;
            }
            arena.reset()?;
            games += 1;
        }
    }

    if let Err(e) = logger.flush() {
        tracing::warn!(error = %e, "Could not flush event log");
    }

    let snapshot = arena.snapshot();
    if let Some(path) = &args.snapshot_out {
        match write_snapshot(&snapshot, path) {
            Ok(()) => tracing::info!(path = %path.display(), "Wrote final snapshot"),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "Could not write snapshot"),
        }
    }

    println!();
    println!("Snake arena finished");
    println!("====================");
    println!("Games played: {}", games);
    println!("Best score:   {}", best_score);
    println!("Final status: {:?}", snapshot.status);
    for snake in &snapshot.snakes {
        println!("  {}: length {}, score {}", snake.role, snake.body.len(), snake.score);
    }
    println!("Events logged: {}", logger.event_count());

    Ok(())
}
