//! State shared between the driver thread and the game loop thread.

use std::sync::{Arc, Mutex};

use snake3d_core::commands::PlayerCommand;
use snake3d_core::input::KeyState;
use snake3d_core::state::FrameSnapshot;

/// Commands sent to the game loop thread.
#[derive(Debug, Clone, PartialEq)]
pub enum GameLoopCommand {
    /// Replace the held keys read on every following frame.
    Input(KeyState),
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, written by the game loop after each frame.
pub type SharedSnapshot = Arc<Mutex<Option<FrameSnapshot>>>;

/// How the game loop paces and ends itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopSettings {
    /// Frames per second; each frame advances the sim by `1 / fps` seconds.
    pub fps: u32,
    /// Stop after this many frames. `None` runs until shut down.
    pub max_frames: Option<u64>,
    /// Queue a restart on loss instead of stopping.
    pub auto_restart: bool,
}

impl Default for LoopSettings {
    fn default() -> Self {
        Self {
            fps: 60,
            max_frames: None,
            auto_restart: false,
        }
    }
}

impl LoopSettings {
    /// Simulated seconds per frame.
    pub fn frame_dt(&self) -> f64 {
        1.0 / f64::from(self.fps.max(1))
    }
}

/// What a finished game loop did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopSummary {
    pub frames: u64,
    pub apples_eaten: u64,
    pub losses: u64,
    pub final_length: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_dt() {
        let settings = LoopSettings::default();
        assert!((settings.frame_dt() - 1.0 / 60.0).abs() < 1e-12);

        let zero = LoopSettings {
            fps: 0,
            ..Default::default()
        };
        assert_eq!(zero.frame_dt(), 1.0);
    }

    #[test]
    fn test_shared_snapshot_starts_empty() {
        let shared: SharedSnapshot = Arc::new(Mutex::new(None));
        assert!(shared.lock().unwrap().is_none());
    }
}
