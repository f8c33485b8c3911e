//! Player commands sent to the simulation.
//!
//! Commands are queued and applied at the start of the next frame.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Freeze the simulation. Only affects a game in progress.
    Pause,
    /// Continue a paused game.
    Resume,
    /// Throw away the current world and start over.
    Restart,
}
