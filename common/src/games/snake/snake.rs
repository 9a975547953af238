use std::collections::VecDeque;
use std::fmt;

use crate::log;
use super::types::{Cell, Direction};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnakeError {
    EmptyBody,
    ZeroGridSize,
}

impl fmt::Display for SnakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnakeError::EmptyBody => write!(f, "snake body must contain at least one cell"),
            SnakeError::ZeroGridSize => write!(f, "grid size must be greater than 0"),
        }
    }
}

impl std::error::Error for SnakeError {}

/// The snake on a square wraparound grid.
///
/// `body` runs from the oldest segment (front) to the head (back). Once the snake runs into
/// itself it is dead for good and `step` leaves the body untouched.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
    apple: Option<Cell>,
    direction: Direction,
    alive: bool,
    grid_size: usize,
}

impl Snake {
    /// Cells are taken in order, the last one is the head. They are not checked for
    /// adjacency, distinctness or range.
    pub fn new(initial_body: impl IntoIterator<Item = Cell>, grid_size: usize) -> Result<Self, SnakeError> {
        if grid_size == 0 {
            return Err(SnakeError::ZeroGridSize);
        }

        let body: VecDeque<Cell> = initial_body.into_iter().collect();
        if body.is_empty() {
            return Err(SnakeError::EmptyBody);
        }

        Ok(Self {
            body,
            apple: None,
            direction: Direction::Right,
            alive: true,
            grid_size,
        })
    }

    pub fn set_apple(&mut self, cell: Cell) {
        self.apple = Some(cell);
    }

    /// Turning straight back into the neck is ignored; anything else is applied.
    pub fn set_direction(&mut self, requested: Direction) {
        if self.direction.is_opposite(&requested) {
            return;
        }
        if self.direction != requested {
            log!("changing the direction of the snake to {:?}", requested);
        }
        self.direction = requested;
    }

    /// Advances the snake one cell. Returns `true` when the new head landed on the apple.
    pub fn step(&mut self) -> bool {
        if !self.alive {
            return false;
        }

        let next = self.head().neighbour(self.direction, self.grid_size);

        if self.body.contains(&next) {
            log!("the snake crashed into itself at {}. The game is over", next);
            self.alive = false;
            return false;
        }

        let ate = self.apple == Some(next);
        if !ate {
            self.body.pop_front();
        }
        self.body.push_back(next);
        ate
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn head(&self) -> Cell {
        *self.body.back().expect("snake body is never empty")
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn apple(&self) -> Option<Cell> {
        self.apple
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: usize = 25;

    fn snake(cells: &[(usize, usize)]) -> Snake {
        Snake::new(cells.iter().map(|&(x, y)| Cell::new(x, y)), GRID).unwrap()
    }

    #[test]
    fn test_new_keeps_initial_body() {
        let snake = snake(&[(0, 0), (1, 0)]);
        assert_eq!(snake.body().len(), 2);
        assert_eq!(snake.head(), Cell::new(1, 0));
        assert_eq!(snake.direction(), Direction::Right);
        assert!(snake.is_alive());
        assert_eq!(snake.apple(), None);
    }

    #[test]
    fn test_new_rejects_empty_body_and_zero_grid() {
        assert_eq!(Snake::new(Vec::new(), GRID).unwrap_err(), SnakeError::EmptyBody);
        assert_eq!(
            Snake::new(vec![Cell::new(0, 0)], 0).unwrap_err(),
            SnakeError::ZeroGridSize
        );
    }

    #[test]
    fn test_turn_moves_head_along_new_axis() {
        for (direction, expected) in [
            (Direction::Up, Cell::new(5, 4)),
            (Direction::Down, Cell::new(5, 6)),
            (Direction::Right, Cell::new(6, 5)),
        ] {
            let mut snake = snake(&[(4, 5), (5, 5)]);
            snake.set_direction(direction);
            snake.step();
            assert_eq!(snake.head(), expected, "turning {:?}", direction);
        }
    }

    #[test]
    fn test_reverse_turn_is_ignored() {
        let cases = [
            (Direction::Right, Direction::Left),
            (Direction::Left, Direction::Right),
            (Direction::Up, Direction::Down),
            (Direction::Down, Direction::Up),
        ];

        for (current, requested) in cases {
            let mut snake = snake(&[(10, 10)]);
            if current != Direction::Right {
                // Get there through a perpendicular turn so the setup is not itself a reversal.
                if current == Direction::Left {
                    snake.set_direction(Direction::Up);
                }
                snake.set_direction(current);
            }
            assert_eq!(snake.direction(), current);

            let expected = snake.head().neighbour(current, GRID);
            snake.set_direction(requested);
            assert_eq!(snake.direction(), current);
            snake.step();
            assert_eq!(snake.head(), expected);
        }
    }

    #[test]
    fn test_same_direction_again_is_kept() {
        let mut snake = snake(&[(0, 0)]);
        snake.set_direction(Direction::Right);
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn test_step_without_apple_keeps_length() {
        let mut snake = snake(&[(0, 0), (1, 0), (2, 0)]);
        assert!(!snake.step());
        assert_eq!(
            snake.body().iter().copied().collect::<Vec<_>>(),
            vec![Cell::new(1, 0), Cell::new(2, 0), Cell::new(3, 0)]
        );
    }

    #[test]
    fn test_eating_grows_by_one() {
        let mut snake = snake(&[(0, 0)]);
        snake.set_apple(Cell::new(1, 0));
        assert!(snake.step());
        assert_eq!(
            snake.body().iter().copied().collect::<Vec<_>>(),
            vec![Cell::new(0, 0), Cell::new(1, 0)]
        );
    }

    #[test]
    fn test_apple_elsewhere_is_not_eaten() {
        let mut snake = snake(&[(0, 0), (1, 0)]);
        snake.set_apple(Cell::new(10, 10));
        assert!(!snake.step());
        assert_eq!(snake.body().len(), 2);
    }

    #[test]
    fn test_wraps_across_edges() {
        let cases = [
            ((GRID - 1, 3), Direction::Right, (0, 3)),
            ((0, 8), Direction::Left, (GRID - 1, 8)),
            ((6, 0), Direction::Up, (6, GRID - 1)),
            ((4, GRID - 1), Direction::Down, (4, 0)),
        ];

        for ((x, y), direction, (ex, ey)) in cases {
            let mut snake = snake(&[(x, y)]);
            if direction == Direction::Left {
                snake.set_direction(Direction::Up);
            }
            snake.set_direction(direction);
            snake.step();
            assert_eq!(snake.head(), Cell::new(ex, ey), "moving {:?}", direction);
        }
    }

    #[test]
    fn test_collides_with_self() {
        let mut snake = snake(&[(0, 0), (1, 0), (2, 0), (3, 0), (3, 1)]);
        for direction in [Direction::Down, Direction::Left, Direction::Up] {
            snake.set_direction(direction);
            assert!(!snake.step());
            assert!(snake.is_alive());
        }
        assert_eq!(snake.head(), Cell::new(2, 1));

        snake.set_direction(Direction::Right);
        assert!(!snake.step());
        assert!(!snake.is_alive());
        assert_eq!(snake.head(), Cell::new(2, 1));

        let len = snake.body().len();
        assert!(!snake.step());
        assert_eq!(snake.body().len(), len);
    }

    #[test]
    fn test_turning_up_into_own_body_dies_on_first_step() {
        let mut snake = snake(&[(1, 0), (0, 0), (0, 1), (1, 1)]);
        let body = snake.body().clone();

        snake.set_direction(Direction::Up);
        assert!(!snake.step());
        assert!(!snake.is_alive());
        assert_eq!(snake.body(), &body);

        snake.set_direction(Direction::Left);
        assert!(!snake.step());
        snake.set_direction(Direction::Down);
        assert!(!snake.step());
        assert!(!snake.is_alive());
        assert_eq!(snake.body(), &body);
    }

    #[test]
    fn test_dead_snake_does_not_move() {
        let mut snake = snake(&[(0, 0), (1, 0), (2, 0)]);
        snake.set_direction(Direction::Down);
        snake.set_direction(Direction::Left);
        snake.step();
        snake.set_direction(Direction::Up);
        snake.step();
        assert!(!snake.is_alive());

        let body = snake.body().clone();
        snake.set_direction(Direction::Right);
        for _ in 0..5 {
            assert!(!snake.step());
        }
        assert_eq!(snake.body(), &body);
    }

    #[test]
    fn test_apple_on_colliding_cell_does_not_save_snake() {
        let mut snake = Snake::new(vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)], 3).unwrap();
        snake.set_apple(Cell::new(0, 0));
        assert!(!snake.step());
        assert!(!snake.is_alive());
        assert_eq!(snake.body().len(), 3);
    }

    #[test]
    fn test_moving_into_current_tail_is_fatal() {
        // A full row of a 4-wide grid: the next head is the tail cell that would be vacated.
        let mut snake = Snake::new((0..4).map(|x| Cell::new(x, 0)), 4).unwrap();
        assert!(!snake.step());
        assert!(!snake.is_alive());
    }
}
