use std::time::{Duration, Instant};

use crate::game::CollisionKind;

/// Stats for the current play session. In-memory only; nothing outlives
/// the process.
pub struct SessionMetrics {
    game_start: Instant,
    elapsed: Duration,
    pub high_score: u32,
    pub games_played: u32,
    /// What ended the most recent game
    pub last_collision: Option<CollisionKind>,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            game_start: Instant::now(),
            elapsed: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            last_collision: None,
        }
    }

    /// Refresh the elapsed-time reading; called once per rendered frame
    pub fn update(&mut self) {
        self.elapsed = self.game_start.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.game_start = Instant::now();
        self.elapsed = Duration::ZERO;
        self.last_collision = None;
    }

    pub fn on_game_over(&mut self, final_score: u32, collision: Option<CollisionKind>) {
        self.games_played += 1;
        self.last_collision = collision;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    /// Elapsed play time as mm:ss
    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
