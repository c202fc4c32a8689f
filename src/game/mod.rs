//! Core simulation for Snake
//!
//! This module holds all the game logic without any I/O or rendering dependencies.
//! Hosts drive it through [`World`]: steer with `change_heading`, step with `advance_tick`.

pub mod action;
pub mod config;
pub mod error;
pub mod grid;
pub mod state;
pub mod world;

// Re-export commonly used types
pub use action::Direction;
pub use config::WorldConfig;
pub use error::WorldError;
pub use grid::Grid;
pub use state::{CollisionType, GameStatus, Snake};
pub use world::{TickOutcome, World};
