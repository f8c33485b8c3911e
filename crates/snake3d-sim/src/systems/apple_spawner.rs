//! Apple spawning system: tops the board up with apples at random.
//!
//! While fewer than `max_apples` exist, each frame rolls against the spawn
//! chance. A successful roll places one apple on a cell. Each cell index is
//! the difference of two uniform draws scaled to the half extent, which
//! gives a triangular distribution peaking at the board centre; apples show
//! up near the middle more often than at the edges.

use glam::DVec3;
use log::{debug, warn};
use rand::Rng;

use snake3d_core::components::Apple;
use snake3d_core::config::GameConfig;
use snake3d_core::error::SimError;
use snake3d_core::events::GameEvent;
use snake3d_core::types::AppleId;

use crate::store::EntityStore;

#[derive(Debug, Clone)]
pub struct AppleSpawner {
    max_apples: usize,
    spawn_chance: f64,
    /// Board half extents counted in cells.
    cells_x: f64,
    cells_z: f64,
    cell_size: f64,
    board_level: f64,
}

impl AppleSpawner {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            max_apples: config.max_apples,
            spawn_chance: config.apple_spawn_chance,
            cells_x: config.half_width_cells(),
            cells_z: config.half_height_cells(),
            cell_size: config.cell_size,
            board_level: config.board_level,
        }
    }

    /// Maybe spawn one apple. Returns its id if one was created.
    pub fn update<R: Rng + ?Sized>(
        &self,
        store: &mut EntityStore,
        rng: &mut R,
        events: &mut Vec<GameEvent>,
    ) -> Result<Option<AppleId>, SimError> {
        if store.apple_count() >= self.max_apples {
            return Ok(None);
        }
        if rng.gen::<f64>() * 100.0 >= self.spawn_chance {
            return Ok(None);
        }

        let column = ((rng.gen::<f64>() - rng.gen::<f64>()) * self.cells_x).round();
        let row = ((rng.gen::<f64>() - rng.gen::<f64>()) * self.cells_z).round();
        let (x, z) = (column * self.cell_size, row * self.cell_size);
        if column.abs() > self.cells_x || row.abs() > self.cells_z {
            warn!("rejecting apple at ({x}, {z}) outside the board");
            return Err(SimError::AppleOutOfBounds { x, z });
        }

        let position = DVec3::new(x, self.board_level, z);
        let id = store.spawn_apple(Apple { position });
        debug!("apple {id} spawned at {position}");
        events.push(GameEvent::AppleSpawned { id, position });
        Ok(Some(id))
    }
}
