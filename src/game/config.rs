use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: usize,
    /// Height of the game grid in cells
    pub grid_height: usize,
    /// Top rows excluded from item spawning (kept clear for the score bar)
    pub reserved_top_rows: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Milliseconds between simulation ticks
    pub tick_interval_ms: u64,
    /// Milliseconds an uneaten item stays on the grid before being replaced
    pub item_ttl_ms: u64,
    /// Powerups spawned between bombs
    pub powerups_per_bomb: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 40,
            grid_height: 30,
            reserved_top_rows: 2,
            initial_snake_length: 1,
            tick_interval_ms: 100,
            item_ttl_ms: 5000,
            powerups_per_bomb: 3,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 40);
        assert_eq!(config.grid_height, 30);
        assert_eq!(config.initial_snake_length, 1);
        assert_eq!(config.tick_interval_ms, 100);
        assert_eq!(config.item_ttl_ms, 5000);
        assert_eq!(config.powerups_per_bomb, 3);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 15);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 15);
        assert_eq!(config.reserved_top_rows, 2);
    }
}
