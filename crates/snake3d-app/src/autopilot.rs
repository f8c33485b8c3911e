//! Autopilot input source for headless runs.
//!
//! Steers toward the nearest apple along whichever axis has the larger
//! distance. A turn that would reverse the snake is swapped for the other
//! axis, so the autopilot never asks for a 180° turn.

use snake3d_core::enums::{Heading, MovementKey};
use snake3d_core::input::{InputSource, KeyState};
use snake3d_core::state::FrameSnapshot;

#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot {
    keys: KeyState,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> KeyState {
        self.keys
    }

    /// Pick the keys to hold given the latest snapshot. With no apple in
    /// sight nothing is held and the snake keeps its heading.
    pub fn observe(&mut self, snapshot: &FrameSnapshot) -> KeyState {
        self.keys = choose_heading(snapshot)
            .map(|heading| KeyState::only(key_for(heading)))
            .unwrap_or_default();
        self.keys
    }
}

impl InputSource for Autopilot {
    fn is_held(&self, key: MovementKey) -> bool {
        self.keys.is_held(key)
    }
}

/// Heading toward the nearest apple, or `None` if there is nothing to chase.
pub fn choose_heading(snapshot: &FrameSnapshot) -> Option<Heading> {
    let head = snapshot.head()?;
    let target = snapshot
        .apples
        .iter()
        .map(|apple| apple.position)
        .min_by(|a, b| head.distance_squared(*a).total_cmp(&head.distance_squared(*b)))?;

    let delta = target - head;
    let along_x = if delta.x < 0.0 {
        Heading::Left
    } else {
        Heading::Right
    };
    let along_z = if delta.z < 0.0 {
        Heading::Top
    } else {
        Heading::Bottom
    };
    let (major, minor) = if delta.x.abs() >= delta.z.abs() {
        (along_x, along_z)
    } else {
        (along_z, along_x)
    };

    if snapshot.heading.is_opposite(major) {
        Some(minor)
    } else {
        Some(major)
    }
}

fn key_for(heading: Heading) -> MovementKey {
    match heading {
        Heading::Top => MovementKey::Forward,
        Heading::Bottom => MovementKey::Back,
        Heading::Left => MovementKey::Left,
        Heading::Right => MovementKey::Right,
    }
}
