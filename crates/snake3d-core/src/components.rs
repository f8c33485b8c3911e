//! Entity components.
//!
//! Components are plain data. The only logic here guards the snake's
//! length invariant; movement and growth rules live in the sim systems.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::Heading;
use crate::error::SimError;

/// Minimum number of body parts a snake may have.
pub const MIN_SNAKE_PARTS: usize = 2;

/// The player's snake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snake {
    /// Body part positions. Index 0 is the head, the last index the tail.
    parts: Vec<DVec3>,
    /// Current direction of travel.
    pub heading: Heading,
    /// Linear speed (distance per second).
    pub speed: f64,
}

impl Snake {
    pub fn new(parts: Vec<DVec3>, heading: Heading, speed: f64) -> Result<Self, SimError> {
        if parts.len() < MIN_SNAKE_PARTS {
            return Err(SimError::SnakeTooShort { len: parts.len() });
        }
        Ok(Self {
            parts,
            heading,
            speed,
        })
    }

    pub fn parts(&self) -> &[DVec3] {
        &self.parts
    }

    /// Mutable access to part positions. The slice cannot change length.
    pub fn parts_mut(&mut self) -> &mut [DVec3] {
        &mut self.parts
    }

    pub fn head(&self) -> DVec3 {
        self.parts[0]
    }

    pub fn tail(&self) -> DVec3 {
        self.parts[self.parts.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// A snake is never empty; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Append a copy of the tail. The new part unfolds as the body moves.
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.parts.push(tail);
    }
}

/// A food item sitting on a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Apple {
    pub position: DVec3,
}
