mod apple;
mod difficulty;
mod session;
mod settings;
mod snake;
mod types;

pub use apple::AppleSpawner;
pub use difficulty::Difficulty;
pub use session::{
    GameOverNotification, SnakeCommand, SnakeSession, SnakeSessionState, SnakeSnapshot,
    TickOutcome,
};
pub use settings::{
    SnakeSessionSettings, DEFAULT_GRID_SIZE, DEFAULT_INITIAL_LENGTH, MAX_GRID_SIZE, MIN_GRID_SIZE,
};
pub use snake::{Snake, SnakeError};
pub use types::{Cell, Direction, GameEndReason};
