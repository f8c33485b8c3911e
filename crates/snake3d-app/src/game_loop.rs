//! Game loop thread: runs the simulation engine at a fixed frame rate.
//!
//! The engine lives inside this thread, which is its only writer.
//! Commands arrive via `mpsc` channel. The latest snapshot is stored in shared
//! state for polling, and every frame is handed to the render sink.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{info, warn};

use snake3d_core::commands::PlayerCommand;
use snake3d_core::error::SimError;
use snake3d_core::events::GameEvent;
use snake3d_core::input::KeyState;
use snake3d_core::render::RenderSink;
use snake3d_core::state::FrameSnapshot;
use snake3d_sim::engine::{SimConfig, SimulationEngine};

use crate::state::{GameLoopCommand, LoopSettings, LoopSummary, SharedSnapshot};

/// A running game loop.
pub struct GameLoopHandle {
    commands: mpsc::Sender<GameLoopCommand>,
    latest_snapshot: SharedSnapshot,
    thread: JoinHandle<Result<LoopSummary, SimError>>,
}

impl GameLoopHandle {
    /// Send a command. Fails once the loop has stopped.
    pub fn send(
        &self,
        command: GameLoopCommand,
    ) -> Result<(), mpsc::SendError<GameLoopCommand>> {
        self.commands.send(command)
    }

    /// Latest snapshot, if a frame has run.
    pub fn latest(&self) -> Option<FrameSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Wait for the loop to stop. A panic inside the loop is resumed here.
    pub fn join(self) -> Result<LoopSummary, SimError> {
        match self.thread.join() {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
}

/// Nominal duration of one frame.
pub fn frame_duration(fps: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(fps.max(1)))
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop<S>(
    config: SimConfig,
    settings: LoopSettings,
    sink: S,
) -> io::Result<GameLoopHandle>
where
    S: RenderSink + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_snapshot);

    let thread = std::thread::Builder::new()
        .name("snake3d-game-loop".into())
        .spawn(move || run_game_loop(config, settings, sink, cmd_rx, &shared))?;

    Ok(GameLoopHandle {
        commands: cmd_tx,
        latest_snapshot,
        thread,
    })
}

/// The game loop. Runs until shutdown, disconnect, error, frame limit, or a
/// loss with auto-restart disabled.
fn run_game_loop<S: RenderSink>(
    config: SimConfig,
    settings: LoopSettings,
    mut sink: S,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<FrameSnapshot>>,
) -> Result<LoopSummary, SimError> {
    let mut engine = SimulationEngine::new(config)?;
    let dt = settings.frame_dt();
    let tick = frame_duration(settings.fps);
    let mut keys = KeyState::none();
    let mut summary = LoopSummary::default();
    let mut next_frame_time = Instant::now();

    info!("game loop started at {} fps", settings.fps);

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Input(state)) => keys = state,
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => {
                    info!("game loop shut down after {} frames", summary.frames);
                    return Ok(summary);
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return Ok(summary),
            }
        }

        // 2. Advance one frame (engine handles pause and loss internally)
        let snapshot = engine.frame(dt, &keys).inspect_err(|err| {
            warn!("game loop stopping on simulation error: {err}");
        })?;

        summary.frames += 1;
        summary.final_length = snapshot.length;
        for event in &snapshot.events {
            match event {
                GameEvent::AppleEaten { .. } => summary.apples_eaten += 1,
                GameEvent::SnakeLost { .. } => summary.losses += 1,
                _ => {}
            }
        }
        let lost = snapshot.is_lost();

        // 3. Hand the frame to the renderer
        engine.render(&mut sink);

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if lost {
            if !settings.auto_restart {
                info!("game over after {} frames", summary.frames);
                return Ok(summary);
            }
            engine.queue_command(PlayerCommand::Restart);
        }
        if settings.max_frames.is_some_and(|max| summary.frames >= max) {
            return Ok(summary);
        }

        // 5. Sleep until the next frame
        next_frame_time += tick;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > tick * 2 {
            // Too far behind; reset to avoid catch-up spiral
            next_frame_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use snake3d_core::config::GameConfig;
    use snake3d_core::enums::{GamePhase, MovementKey};
    use snake3d_core::error::ConfigError;
    use snake3d_core::render::RecordingSink;

    use super::*;

    fn fast_settings(max_frames: Option<u64>) -> LoopSettings {
        LoopSettings {
            fps: 1000,
            max_frames,
            auto_restart: false,
        }
    }

    fn quiet_config() -> SimConfig {
        SimConfig {
            seed: 9,
            game: GameConfig {
                apple_spawn_chance: 0.0,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Input(KeyState::only(MovementKey::Left)))
            .unwrap();
        tx.send(GameLoopCommand::Player(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<GameLoopCommand> = rx.try_iter().collect();
        assert_eq!(
            commands,
            vec![
                GameLoopCommand::Input(KeyState::only(MovementKey::Left)),
                GameLoopCommand::Player(PlayerCommand::Pause),
                GameLoopCommand::Shutdown,
            ]
        );
    }

    #[test]
    fn test_frame_duration_constant() {
        // 60Hz = 16.666ms per frame
        assert_eq!(frame_duration(60).as_nanos(), 1_000_000_000u128 / 60);
    }

    #[test]
    fn test_stops_at_frame_limit() {
        let handle = spawn_game_loop(quiet_config(), fast_settings(Some(12)), RecordingSink::new())
            .unwrap();
        let latest = handle.latest_snapshot.clone();
        let summary = handle.join().unwrap();

        assert_eq!(summary.frames, 12);
        assert_eq!(summary.final_length, 4);
        let snap = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snap.time.frame, 12);
        assert_eq!(snap.phase, GamePhase::Playing);
    }

    #[test]
    fn test_shutdown_stops_the_loop() {
        let handle =
            spawn_game_loop(quiet_config(), fast_settings(None), RecordingSink::new()).unwrap();
        handle.send(GameLoopCommand::Shutdown).unwrap();
        let summary = handle.join().unwrap();
        assert!(summary.frames < 1_000_000);
    }

    #[test]
    fn test_invalid_config_ends_the_loop_with_error() {
        let config = SimConfig {
            seed: 1,
            game: GameConfig {
                lag_interval: -1.0,
                ..Default::default()
            },
        };
        let handle = spawn_game_loop(config, fast_settings(Some(5)), RecordingSink::new()).unwrap();
        assert!(matches!(
            handle.join(),
            Err(SimError::Config(ConfigError::Invalid { .. }))
        ));
    }
}
