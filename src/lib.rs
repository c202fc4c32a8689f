//! Snake World - a grid snake simulation engine
//!
//! This library provides:
//! - The simulation engine (game module), free of any I/O
//! - Terminal host adapters: key mapping (input), drawing (render) and
//!   session metrics (metrics)
//! - Execution modes driving the engine (human, headless)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
