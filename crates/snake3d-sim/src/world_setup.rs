//! Entity spawn factories for setting up the simulation world.

use glam::DVec3;

use snake3d_core::components::Snake;
use snake3d_core::config::GameConfig;
use snake3d_core::error::SimError;

use crate::store::EntityStore;

/// Set up a fresh world: the snake and no apples.
pub fn setup_world(store: &mut EntityStore, config: &GameConfig) -> Result<(), SimError> {
    store.clear();
    spawn_snake(store, config)
}

/// Spawn the snake with its head on the origin cell and the body laid out
/// one cell apart behind it.
pub fn spawn_snake(store: &mut EntityStore, config: &GameConfig) -> Result<(), SimError> {
    let head = DVec3::new(0.0, config.board_level, 0.0);
    let back = -config.initial_heading.vector() * config.cell_size;
    let parts = (0..config.initial_length)
        .map(|i| head + back * i as f64)
        .collect();

    let snake = Snake::new(parts, config.initial_heading, config.speed())?;
    store.insert_snake(snake);
    Ok(())
}
