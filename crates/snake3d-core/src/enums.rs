//! Enumeration types used throughout the simulation.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Discrete direction of travel on the board.
///
/// TOP/BOTTOM run along the z axis (TOP points away from the camera),
/// LEFT/RIGHT along the x axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    Left,
    #[default]
    Top,
    Right,
    Bottom,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::Left, Heading::Top, Heading::Right, Heading::Bottom];

    /// Unit movement vector in the horizontal plane.
    pub fn vector(self) -> DVec3 {
        match self {
            Heading::Left => DVec3::new(-1.0, 0.0, 0.0),
            Heading::Top => DVec3::new(0.0, 0.0, -1.0),
            Heading::Right => DVec3::new(1.0, 0.0, 0.0),
            Heading::Bottom => DVec3::new(0.0, 0.0, 1.0),
        }
    }

    pub fn opposite(self) -> Heading {
        match self {
            Heading::Left => Heading::Right,
            Heading::Top => Heading::Bottom,
            Heading::Right => Heading::Left,
            Heading::Bottom => Heading::Top,
        }
    }

    /// True when turning from `self` to `other` would be a 180° reversal.
    pub fn is_opposite(self, other: Heading) -> bool {
        self.opposite() == other
    }
}

/// Logical movement keys reported by an input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementKey {
    Forward,
    Back,
    Left,
    Right,
}

impl MovementKey {
    /// Evaluation order when several keys are held at once.
    pub const PRIORITY: [MovementKey; 4] = [
        MovementKey::Forward,
        MovementKey::Back,
        MovementKey::Left,
        MovementKey::Right,
    ];

    /// Heading requested by this key.
    pub fn heading(self) -> Heading {
        match self {
            MovementKey::Forward => Heading::Top,
            MovementKey::Back => Heading::Bottom,
            MovementKey::Left => Heading::Left,
            MovementKey::Right => Heading::Right,
        }
    }
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    Paused,
    /// The snake ran into itself. Terminal until a restart.
    Lost,
}

/// Outcome of one movement update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepStatus {
    Continue,
    Lost,
}
