//! Simulation constants and tuning defaults.
//!
//! These are the values `GameConfig::default()` is built from. Systems never
//! read them directly; they receive a `GameConfig` at construction.

// --- Screen (camera aspect only) ---

pub const SCREEN_WIDTH: f64 = 1080.0;
pub const SCREEN_HEIGHT: f64 = 720.0;

// --- Board ---

/// Half extent of the board along x, in cells from the origin.
pub const BOARD_HALF_WIDTH: f64 = 5.0;

/// Half extent of the board along z.
pub const BOARD_HALF_HEIGHT: f64 = 5.0;

/// Edge length of one board cell.
pub const CELL_SIZE: f64 = 1.0;

/// Height of the playing surface. Apples and the snake live at this y.
pub const BOARD_LEVEL: f64 = 0.0;

// --- Apples ---

pub const MAX_APPLES: usize = 3;

/// Chance, in percent, that a missing apple spawns on a given frame.
pub const APPLE_SPAWN_CHANCE: f64 = 2.0;

// --- Snake ---

/// Seconds between discrete body steps and heading commits.
pub const LAG_INTERVAL: f64 = 0.3;

/// One cell per lag interval.
pub const SNAKE_SPEED: f64 = CELL_SIZE / LAG_INTERVAL;

pub const INITIAL_LENGTH: usize = 4;

/// Distance under which two positions count as touching.
pub const COLLISION_EPSILON: f64 = 0.1;

/// Tail-to-target distance above which the tail keeps last frame's direction.
/// Only happens right after a wrap or growth.
pub const TAIL_SNAP_THRESHOLD: f64 = 2.0;

// --- Camera ---

pub const CAMERA_EYE: [f32; 3] = [0.0, 8.0, 10.0];
pub const CAMERA_FOV_DEGREES: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

// --- Colors ---

pub const CLEAR_COLOR: [f32; 3] = [0.73, 0.88, 0.98];
pub const SNAKE_COLOR: [f32; 3] = [1.0, 0.7, 0.0];
pub const APPLE_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
pub const BOARD_COLOR: [f32; 3] = [0.5, 0.5, 0.5];
