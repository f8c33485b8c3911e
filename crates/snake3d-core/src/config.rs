//! Game configuration.
//!
//! A single immutable `GameConfig` is built at startup (defaults, or a JSON
//! file) and handed to every system at construction. Every field is optional
//! in JSON and falls back to the value in `constants`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::Heading;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: f64,
    pub screen_height: f64,
    pub board_half_width: f64,
    pub board_half_height: f64,
    pub cell_size: f64,
    pub board_level: f64,
    pub max_apples: usize,
    /// Percent chance per frame, in [0, 100].
    pub apple_spawn_chance: f64,
    pub lag_interval: f64,
    /// Distance per second. `None` means one cell per lag interval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snake_speed: Option<f64>,
    pub initial_length: usize,
    pub initial_heading: Heading,
    pub collision_epsilon: f64,
    pub tail_snap_threshold: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            board_half_width: BOARD_HALF_WIDTH,
            board_half_height: BOARD_HALF_HEIGHT,
            cell_size: CELL_SIZE,
            board_level: BOARD_LEVEL,
            max_apples: MAX_APPLES,
            apple_spawn_chance: APPLE_SPAWN_CHANCE,
            lag_interval: LAG_INTERVAL,
            snake_speed: None,
            initial_length: INITIAL_LENGTH,
            initial_heading: Heading::Top,
            collision_epsilon: COLLISION_EPSILON,
            tail_snap_threshold: TAIL_SNAP_THRESHOLD,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Effective snake speed in distance per second.
    pub fn speed(&self) -> f64 {
        self.snake_speed
            .unwrap_or(self.cell_size / self.lag_interval)
    }

    pub fn half_cell(&self) -> f64 {
        self.cell_size * 0.5
    }

    /// Cells between the board centre and the x edge.
    pub fn half_width_cells(&self) -> f64 {
        (self.board_half_width / self.cell_size).round()
    }

    /// Cells between the board centre and the z edge.
    pub fn half_height_cells(&self) -> f64 {
        (self.board_half_height / self.cell_size).round()
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.screen_width / self.screen_height
    }

    /// Check every field. Returns the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("screen_width", self.screen_width)?;
        positive("screen_height", self.screen_height)?;
        positive("board_half_width", self.board_half_width)?;
        positive("board_half_height", self.board_half_height)?;
        positive("cell_size", self.cell_size)?;
        finite("board_level", self.board_level)?;
        positive("lag_interval", self.lag_interval)?;
        positive("collision_epsilon", self.collision_epsilon)?;
        positive("tail_snap_threshold", self.tail_snap_threshold)?;
        if let Some(speed) = self.snake_speed {
            positive("snake_speed", speed)?;
        }
        whole_cells("board_half_width", self.board_half_width, self.cell_size)?;
        whole_cells("board_half_height", self.board_half_height, self.cell_size)?;

        if !(0.0..=100.0).contains(&self.apple_spawn_chance) {
            return Err(invalid(
                "apple_spawn_chance",
                format!("must be within [0, 100], got {}", self.apple_spawn_chance),
            ));
        }

        if self.initial_length < 2 {
            return Err(invalid(
                "initial_length",
                format!("must be at least 2, got {}", self.initial_length),
            ));
        }

        // The body is laid out behind the head, starting at the origin.
        let extent = match self.initial_heading {
            Heading::Left | Heading::Right => self.board_half_width,
            Heading::Top | Heading::Bottom => self.board_half_height,
        };
        let body_span = (self.initial_length - 1) as f64 * self.cell_size;
        if body_span > extent {
            return Err(invalid(
                "initial_length",
                format!(
                    "{} parts span {body_span} but only {extent} fits behind the head",
                    self.initial_length
                ),
            ));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, format!("must be finite, got {value}")))
    }
}

/// Apples and snapped parts sit on multiples of the cell size, so the edge
/// cell must be one of them.
fn whole_cells(field: &'static str, extent: f64, cell_size: f64) -> Result<(), ConfigError> {
    let cells = extent / cell_size;
    if (cells - cells.round()).abs() <= 1e-9 {
        Ok(())
    } else {
        Err(invalid(
            field,
            format!("{extent} is not a whole number of {cell_size}-wide cells"),
        ))
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be positive, got {value}")))
    }
}
