//! Input source contract.
//!
//! The simulation never polls a keyboard. Whatever owns the window reports
//! which logical keys are held through `InputSource`, once per frame.

use serde::{Deserialize, Serialize};

use crate::enums::MovementKey;

pub trait InputSource {
    /// Whether the given movement key is currently held.
    fn is_held(&self, key: MovementKey) -> bool;

    /// Whether the debug "grow" key is held. Sources without one never report it.
    fn grow_held(&self) -> bool {
        false
    }
}

/// A plain snapshot of held keys. Also the wire form sent to the game loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    #[serde(default)]
    pub grow: bool,
}

impl KeyState {
    /// No keys held.
    pub fn none() -> Self {
        Self::default()
    }

    /// Exactly one movement key held.
    pub fn only(key: MovementKey) -> Self {
        let mut state = Self::default();
        state.set(key, true);
        state
    }

    pub fn set(&mut self, key: MovementKey, held: bool) {
        match key {
            MovementKey::Forward => self.forward = held,
            MovementKey::Back => self.back = held,
            MovementKey::Left => self.left = held,
            MovementKey::Right => self.right = held,
        }
    }
}

impl InputSource for KeyState {
    fn is_held(&self, key: MovementKey) -> bool {
        match key {
            MovementKey::Forward => self.forward,
            MovementKey::Back => self.back,
            MovementKey::Left => self.left,
            MovementKey::Right => self.right,
        }
    }

    fn grow_held(&self) -> bool {
        self.grow
    }
}
