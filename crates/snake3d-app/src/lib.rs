//! Snake3D application.
//!
//! This crate wires the simulation to a fixed-rate game loop thread, an
//! autopilot input source and a logging render sink for headless runs.

pub mod autopilot;
pub mod game_loop;
pub mod sink;
pub mod state;

pub use snake3d_core as core;
