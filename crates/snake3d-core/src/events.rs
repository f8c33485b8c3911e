//! Events emitted by the simulation during a frame.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::Heading;
use crate::types::AppleId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new apple appeared on the board.
    AppleSpawned { id: AppleId, position: DVec3 },
    /// The head reached an apple.
    AppleEaten { id: AppleId, position: DVec3 },
    /// The snake gained a segment (from an apple or the grow key).
    SnakeGrew { length: usize },
    /// The buffered heading was applied to the snake.
    HeadingChanged { from: Heading, to: Heading },
    /// The head ran into the body.
    SnakeLost { frame: u64, length: usize },
}
