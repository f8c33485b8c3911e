//! Frame snapshot: the complete visible state after each simulated frame.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::{GamePhase, Heading};
use crate::events::GameEvent;
use crate::types::{AppleId, SimTime};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub heading: Heading,
    pub length: usize,
    /// Snake part positions, head first.
    pub parts: Vec<DVec3>,
    pub apples: Vec<AppleView>,
    /// Events raised while simulating this frame.
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppleView {
    pub id: AppleId,
    pub position: DVec3,
}

impl FrameSnapshot {
    pub fn head(&self) -> Option<DVec3> {
        self.parts.first().copied()
    }

    pub fn is_lost(&self) -> bool {
        self.phase == GamePhase::Lost
    }
}
