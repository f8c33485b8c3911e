//! Simulation engine for SNAKE3D.
//!
//! Owns the entity store, runs the systems once per frame in a fixed order,
//! and produces `FrameSnapshot`s. Headless: input arrives through the
//! `InputSource` contract and drawing leaves through `RenderSink`.

pub mod engine;
pub mod store;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use snake3d_core as core;
