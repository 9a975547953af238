use crate::games::SessionRng;
use super::types::Cell;

/// Picks apple cells uniformly over the whole grid. Cells under the snake are not excluded,
/// so an apple may appear on the body and is only eaten once the head reaches it.
pub struct AppleSpawner {
    grid_size: usize,
    rng: SessionRng,
}

impl AppleSpawner {
    pub fn new(grid_size: usize, rng: SessionRng) -> Self {
        Self { grid_size, rng }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn next_apple(&mut self) -> Cell {
        let x = self.rng.random_range(0..self.grid_size);
        let y = self.rng.random_range(0..self.grid_size);
        Cell::new(x, y)
    }
}
