mod snake;

pub use snake::{GameOverAction, SnakeGameUi};
