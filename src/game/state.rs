use super::direction::Direction;
use super::grid::Grid;
use super::item::Item;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Committed direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a new snake with given starting position and direction
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut body = vec![head];

        // Trailing segments extend opposite to the direction of travel
        let (dx, dy) = direction.delta();
        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(-dx, -dy));
        }

        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// The cell the head enters on the next step in the given direction
    pub fn next_head(&self, direction: Direction) -> Position {
        self.head().moved_in_direction(direction)
    }

    /// True if `pos` is occupied by any segment. Called with the prospective
    /// head before insertion, so a hit means self-collision.
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Step to `new_head`, growing by one segment if `grow` is set
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Top-level status of the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Ended,
}

/// What ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Snake hit a wall
    Wall,
    /// Snake hit its own body
    SelfHit,
    /// Snake ran into a bomb item
    Bomb,
}

/// Complete game state, owned by the engine and mutated only through it
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// Most recent valid direction request, consumed at the next tick
    pub pending_direction: Option<Direction>,
    /// The single active item, absent only once the board has filled up
    pub item: Option<Item>,
    pub grid: Grid,
    pub score: u32,
    pub phase: Phase,
}

impl GameState {
    pub fn new(snake: Snake, item: Option<Item>, grid: Grid) -> Self {
        Self {
            snake,
            pending_direction: None,
            item,
            grid,
            score: 0,
            phase: Phase::Running,
        }
    }
}
