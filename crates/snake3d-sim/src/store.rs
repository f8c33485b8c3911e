//! Fixed-schema entity store.
//!
//! Holds the one snake and the live apples. Apples are addressed by
//! generational `AppleId`s so a consumed apple's id is never reused for a
//! different apple.

use snake3d_core::components::{Apple, Snake};
use snake3d_core::error::SimError;
use snake3d_core::types::AppleId;

/// Hands out apple slots and tracks which ids are still valid.
#[derive(Debug, Default)]
pub struct IdAllocator {
    generations: Vec<u32>,
    free_indices: Vec<u32>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> AppleId {
        if let Some(index) = self.free_indices.pop() {
            AppleId::new(index, self.generations[index as usize])
        } else {
            let index = self.generations.len() as u32;
            self.generations.push(0);
            AppleId::new(index, 0)
        }
    }

    /// Invalidate `id`. Returns false if it was already stale.
    pub fn deallocate(&mut self, id: AppleId) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        self.generations[id.index as usize] += 1;
        self.free_indices.push(id.index);
        true
    }

    pub fn is_alive(&self, id: AppleId) -> bool {
        self.generations
            .get(id.index as usize)
            .is_some_and(|&generation| generation == id.generation)
    }
}

#[derive(Debug, Default)]
pub struct EntityStore {
    snake: Option<Snake>,
    /// Kept in spawn order so iteration is deterministic.
    apples: Vec<(AppleId, Apple)>,
    ids: IdAllocator,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the snake, replacing any previous one.
    pub fn insert_snake(&mut self, snake: Snake) {
        self.snake = Some(snake);
    }

    pub fn snake(&self) -> Option<&Snake> {
        self.snake.as_ref()
    }

    pub fn snake_mut(&mut self) -> Option<&mut Snake> {
        self.snake.as_mut()
    }

    /// The snake, or `MissingSnake` if none has been installed.
    pub fn require_snake(&self) -> Result<&Snake, SimError> {
        self.snake.as_ref().ok_or(SimError::MissingSnake)
    }

    pub fn require_snake_mut(&mut self) -> Result<&mut Snake, SimError> {
        self.snake.as_mut().ok_or(SimError::MissingSnake)
    }

    pub fn spawn_apple(&mut self, apple: Apple) -> AppleId {
        let id = self.ids.allocate();
        self.apples.push((id, apple));
        id
    }

    /// Remove an apple. Stale ids return `None`.
    pub fn despawn_apple(&mut self, id: AppleId) -> Option<Apple> {
        if !self.ids.deallocate(id) {
            return None;
        }
        let slot = self.apples.iter().position(|(apple_id, _)| *apple_id == id)?;
        Some(self.apples.remove(slot).1)
    }

    pub fn apple(&self, id: AppleId) -> Option<&Apple> {
        self.apples
            .iter()
            .find(|(apple_id, _)| *apple_id == id)
            .map(|(_, apple)| apple)
    }

    pub fn apples(&self) -> impl Iterator<Item = (AppleId, &Apple)> + '_ {
        self.apples.iter().map(|(id, apple)| (*id, apple))
    }

    pub fn apple_count(&self) -> usize {
        self.apples.len()
    }

    /// Drop the snake and every apple. Outstanding apple ids become stale.
    pub fn clear(&mut self) {
        self.snake = None;
        for (id, _) in self.apples.drain(..) {
            self.ids.deallocate(id);
        }
    }
}
