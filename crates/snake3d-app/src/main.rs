use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use snake3d_app::autopilot::Autopilot;
use snake3d_app::game_loop::{self, frame_duration};
use snake3d_app::sink::LogSink;
use snake3d_app::state::{GameLoopCommand, LoopSettings};
use snake3d_core::config::GameConfig;
use snake3d_sim::SimConfig;

#[derive(Parser, Debug)]
#[command(name = "snake3d")]
#[command(about = "Headless 3D snake on a wrapping board, driven by an autopilot")]
#[command(version)]
struct Cli {
    /// JSON game configuration (defaults are used when omitted)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// RNG seed for apple placement
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Frames simulated per second
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
    fps: u32,

    /// Stop after this many frames
    #[arg(long, default_value_t = 1800)]
    frames: u64,

    /// Restart automatically when the snake bites itself
    #[arg(long)]
    restart: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let game = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    let settings = LoopSettings {
        fps: cli.fps,
        max_frames: Some(cli.frames),
        auto_restart: cli.restart,
    };
    let config = SimConfig {
        seed: cli.seed,
        game,
    };

    let handle = game_loop::spawn_game_loop(config, settings, LogSink::new(u64::from(cli.fps)))
        .context("spawning game loop thread")?;

    // Feed the autopilot from the latest snapshot until the loop stops.
    let mut pilot = Autopilot::new();
    let poll = frame_duration(cli.fps);
    while !handle.is_finished() {
        if let Some(snapshot) = handle.latest() {
            let keys = pilot.observe(&snapshot);
            if handle.send(GameLoopCommand::Input(keys)).is_err() {
                break;
            }
        }
        thread::sleep(poll);
    }

    let summary = handle.join().context("simulation failed")?;
    info!(
        "ran {} frames: {} apples eaten, {} losses, final length {}",
        summary.frames, summary.apples_eaten, summary.losses, summary.final_length
    );
    Ok(())
}
