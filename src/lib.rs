//! Shield Snake - a terminal snake game about collecting defenses
//!
//! The snake grows by picking up security-service powerups and dies on
//! walls, itself, or attack bombs. Items rotate on a fixed schedule and
//! expire if left uneaten.
//!
//! - `game`: the simulation core (no I/O)
//! - `input`: keyboard mapping
//! - `render`: ratatui presentation
//! - `metrics`: per-session stats
//! - `modes`: the interactive run loop

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
