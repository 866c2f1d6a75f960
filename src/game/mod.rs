//! Simulation core for the snake game
//!
//! Everything in here is deterministic given a clock value and free of I/O:
//! the tick state machine, grid geometry, the snake, and the item rotation.
//! The TUI layer consumes snapshots and never reaches into game internals.

pub mod config;
pub mod direction;
pub mod engine;
pub mod grid;
pub mod item;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, GameSnapshot, TickOutcome};
pub use grid::{CellRect, Grid};
pub use item::{Item, ItemKind, ItemSpawner, BOMB_ICONS, POWERUP_ICONS};
pub use state::{CollisionKind, GameState, Phase, Position, Snake};
