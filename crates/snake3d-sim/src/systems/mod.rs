//! Systems that operate on the entity store each frame.
//!
//! The set is fixed: the engine calls them in a defined order. Systems that
//! carry timers (input resolver, movement engine) own only those timers; all
//! entity state lives in the store.

pub mod apple_spawner;
pub mod input;
pub mod movement;
pub mod render;
pub mod snapshot;
pub mod wrap;
