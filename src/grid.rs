//! Board geometry: cells, directions and toroidal wraparound.

/// Width and height of the square board, in cells.
pub const BOARD_SIZE: i32 = 20;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Unit step in screen coordinates (y grows downwards).
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, direction: Direction) -> Coordinate {
        wrap(self, direction.delta())
    }

    pub fn in_bounds(self) -> bool {
        (0..BOARD_SIZE).contains(&self.x) && (0..BOARD_SIZE).contains(&self.y)
    }
}

/// Adds `delta` to `c` and folds the result back onto the board, so leaving
/// one edge re-enters on the opposite one.
pub fn wrap(c: Coordinate, delta: (i32, i32)) -> Coordinate {
    Coordinate {
        x: (c.x + delta.0).rem_euclid(BOARD_SIZE),
        y: (c.y + delta.1).rem_euclid(BOARD_SIZE),
    }
}
