use std::time::Duration;

use crate::config::Validate;
use super::difficulty::Difficulty;
use super::types::Cell;

pub const DEFAULT_GRID_SIZE: usize = 25;
pub const DEFAULT_INITIAL_LENGTH: usize = 3;
pub const MIN_GRID_SIZE: usize = 5;
pub const MAX_GRID_SIZE: usize = 100;

#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSessionSettings {
    pub grid_size: usize,
    pub initial_length: usize,
    pub tick_interval: Duration,
}

impl SnakeSessionSettings {
    pub fn new(grid_size: usize, initial_length: usize, difficulty: Difficulty) -> Self {
        Self {
            grid_size,
            initial_length,
            tick_interval: difficulty.tick_interval(),
        }
    }

    /// Snake laid out along the top row from the left edge, head last, facing right.
    pub fn initial_body(&self) -> Vec<Cell> {
        (0..self.initial_length).map(|x| Cell::new(x, 0)).collect()
    }
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE, DEFAULT_INITIAL_LENGTH, Difficulty::default())
    }
}

impl Validate for SnakeSessionSettings {
    fn validate(&self) -> Result<(), String> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(format!(
                "Grid size must be between {} and {}",
                MIN_GRID_SIZE, MAX_GRID_SIZE
            ));
        }
        if self.initial_length == 0 {
            return Err("Initial snake length must be at least 1".to_string());
        }
        if self.initial_length >= self.grid_size {
            return Err("Initial snake length must be shorter than the grid row".to_string());
        }
        if self.tick_interval < Duration::from_millis(50) || self.tick_interval > Duration::from_millis(5000) {
            return Err("Tick interval must be between 50ms and 5000ms".to_string());
        }
        Ok(())
    }
}
