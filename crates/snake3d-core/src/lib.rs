//! Core types and definitions for the SNAKE3D simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! headings, components, configuration, commands, snapshots, events,
//! and the input/render contracts. It has no simulation logic and no
//! dependency on any windowing or graphics framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod input;
pub mod render;
pub mod state;
pub mod types;
