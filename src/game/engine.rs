use rand::rngs::ThreadRng;

use super::{
    config::GameConfig,
    direction::Direction,
    grid::Grid,
    item::{Item, ItemKind, ItemSpawner},
    state::{CollisionKind, GameState, Phase, Position, Snake},
};

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Whether the game is over after this tick
    pub terminated: bool,
    /// Item consumed this tick, if any
    pub consumed: Option<ItemKind>,
    /// Fatal collision that ended the game, if any
    pub collision: Option<CollisionKind>,
}

/// Read-only view of the simulation, sampled once per frame by the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    /// Snake segments, head first
    pub segments: Vec<Position>,
    pub direction: Direction,
    pub item: Option<Item>,
    pub score: u32,
    pub phase: Phase,
    pub grid: Grid,
}

/// The game state machine.
///
/// Owns the complete game state; all mutation goes through `tick`,
/// `request_direction` and `reset`. Time is supplied by the caller as
/// milliseconds on a monotonic clock, never read from the environment.
pub struct GameEngine {
    config: GameConfig,
    spawner: ItemSpawner,
    rng: ThreadRng,
    state: GameState,
}

impl GameEngine {
    /// Create an engine in the initial running state at time zero
    pub fn new(config: GameConfig) -> Self {
        let mut spawner = ItemSpawner::new(config.powerups_per_bomb);
        let mut rng = rand::thread_rng();
        let state = Self::initial_state(&config, &mut spawner, &mut rng, 0);

        Self {
            config,
            spawner,
            rng,
            state,
        }
    }

    fn initial_state(
        config: &GameConfig,
        spawner: &mut ItemSpawner,
        rng: &mut ThreadRng,
        now_ms: u64,
    ) -> GameState {
        let grid = Grid::new(config.grid_width, config.grid_height, config.reserved_top_rows);
        let center = Position::new(
            (config.grid_width / 2) as i32,
            (config.grid_height / 2) as i32,
        );
        let snake = Snake::new(center, Direction::Right, config.initial_snake_length);

        spawner.reset();
        let item = spawner.spawn(rng, &grid, &snake.body, now_ms);

        let mut state = GameState::new(snake, item, grid);
        if state.item.is_none() {
            state.phase = Phase::Ended;
        }
        state
    }

    /// Start a fresh game at the given clock time
    pub fn reset(&mut self, now_ms: u64) {
        self.state = Self::initial_state(&self.config, &mut self.spawner, &mut self.rng, now_ms);
    }

    /// Buffer a direction change for the next tick. A request that would
    /// reverse the committed direction is silently dropped; otherwise the
    /// latest request since the last tick wins.
    pub fn request_direction(&mut self, requested: Direction) {
        if self.state.phase != Phase::Running {
            return;
        }
        if self.state.snake.direction.is_opposite(requested) {
            return;
        }
        self.state.pending_direction = Some(requested);
    }

    /// Advance the simulation by one step.
    ///
    /// Order within a tick: replace an expired item, commit the pending
    /// direction, move the head, resolve wall/self collisions, then resolve
    /// item overlap.
    pub fn tick(&mut self, now_ms: u64) -> TickOutcome {
        if self.state.phase == Phase::Ended {
            return TickOutcome {
                terminated: true,
                consumed: None,
                collision: None,
            };
        }

        // An uneaten item past its lifetime is replaced before movement, so
        // it can never be consumed in the tick it expires
        if let Some(item) = self.state.item {
            if now_ms.saturating_sub(item.spawned_at_ms) > self.config.item_ttl_ms {
                self.respawn_item(now_ms);
            }
        }

        if let Some(requested) = self.state.pending_direction.take() {
            if !self.state.snake.direction.is_opposite(requested) {
                self.state.snake.direction = requested;
            }
        }

        let next_head = self.state.snake.next_head(self.state.snake.direction);

        if !self.state.grid.in_bounds(next_head) {
            return self.end_game(CollisionKind::Wall);
        }
        if self.state.snake.occupies(next_head) {
            return self.end_game(CollisionKind::SelfHit);
        }

        if let Some(item) = self.state.item {
            if item.covers(next_head) {
                match item.kind {
                    ItemKind::Bomb => return self.end_game(CollisionKind::Bomb),
                    ItemKind::Powerup => {
                        self.state.snake.advance(next_head, true);
                        self.state.score += 1;
                        self.respawn_item(now_ms);

                        return TickOutcome {
                            terminated: self.state.phase == Phase::Ended,
                            consumed: Some(ItemKind::Powerup),
                            collision: None,
                        };
                    }
                }
            }
        }

        self.state.snake.advance(next_head, false);

        TickOutcome {
            terminated: false,
            consumed: None,
            collision: None,
        }
    }

    /// Read-only snapshot of the observable state
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            segments: self.state.snake.body.clone(),
            direction: self.state.snake.direction,
            item: self.state.item,
            score: self.state.score,
            phase: self.state.phase,
            grid: self.state.grid,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn end_game(&mut self, collision: CollisionKind) -> TickOutcome {
        self.state.phase = Phase::Ended;
        TickOutcome {
            terminated: true,
            consumed: None,
            collision: Some(collision),
        }
    }

    fn respawn_item(&mut self, now_ms: u64) {
        self.state.item = self.spawner.spawn(
            &mut self.rng,
            &self.state.grid,
            &self.state.snake.body,
            now_ms,
        );

        // A board with no free spawn cell ends the session
        if self.state.item.is_none() {
            self.state.phase = Phase::Ended;
        }
    }
}
