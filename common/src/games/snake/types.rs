use std::fmt;

/// A square on the playfield. Range is not checked here; the snake wraps its own moves and
/// the apple spawner only produces in-range cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    x: usize,
    y: usize,
}

impl Cell {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub const fn x(&self) -> usize {
        self.x
    }

    pub const fn y(&self) -> usize {
        self.y
    }

    /// The adjacent cell in `direction` on a `grid_size` x `grid_size` torus.
    pub fn neighbour(&self, direction: Direction, grid_size: usize) -> Cell {
        match direction {
            Direction::Up => Cell::new(self.x, wrapping_dec(self.y, grid_size)),
            Direction::Down => Cell::new(self.x, wrapping_inc(self.y, grid_size)),
            Direction::Left => Cell::new(wrapping_dec(self.x, grid_size), self.y),
            Direction::Right => Cell::new(wrapping_inc(self.x, grid_size), self.y),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

fn wrapping_inc(value: usize, max: usize) -> usize {
    if value + 1 >= max { 0 } else { value + 1 }
}

fn wrapping_dec(value: usize, max: usize) -> usize {
    if value == 0 { max - 1 } else { value - 1 }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEndReason {
    SelfCollision,
    Stopped,
}

impl fmt::Display for GameEndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEndReason::SelfCollision => write!(f, "the snake crashed into itself"),
            GameEndReason::Stopped => write!(f, "the game was stopped"),
        }
    }
}
