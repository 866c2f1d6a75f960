use rand::Rng;

use super::state::Position;

/// Random placement attempts before falling back to a linear scan
const MAX_SPAWN_ATTEMPTS: usize = 1024;

/// The fixed playing field, in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    /// Rows at the top of the grid where items never spawn
    pub reserved_top_rows: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize, reserved_top_rows: usize) -> Self {
        Self {
            width,
            height,
            reserved_top_rows,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32
    }

    /// Pick a uniformly random cell where a 2x2 item fits: below the reserved
    /// rows and at least one cell away from the right and bottom edges.
    ///
    /// Samples until the cell is not in `occupied`. The retry loop is bounded;
    /// past the attempt budget the spawn region is scanned in order, so `None`
    /// is returned only when every spawnable cell is occupied.
    pub fn random_free_cell<R: Rng>(&self, rng: &mut R, occupied: &[Position]) -> Option<Position> {
        let min_y = self.reserved_top_rows as i32;
        let max_x = self.width as i32 - 2;
        let max_y = self.height as i32 - 2;

        if max_x < 0 || max_y < min_y {
            return None;
        }

        for _ in 0..MAX_SPAWN_ATTEMPTS {
            let pos = Position::new(rng.gen_range(0..=max_x), rng.gen_range(min_y..=max_y));
            if !occupied.contains(&pos) {
                return Some(pos);
            }
        }

        // Nearly-full grid: fall back to the first free cell in scan order
        for y in min_y..=max_y {
            for x in 0..=max_x {
                let pos = Position::new(x, y);
                if !occupied.contains(&pos) {
                    return Some(pos);
                }
            }
        }

        None
    }
}

/// Axis-aligned rectangle in cell units, used for entity overlap tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl CellRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One-cell rectangle covering `pos`
    pub fn cell(pos: Position) -> Self {
        Self::new(pos.x, pos.y, 1, 1)
    }

    /// True if the rectangles share at least one cell
    pub fn intersects(&self, other: &CellRect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}
