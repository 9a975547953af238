mod broadcaster;
mod local_game;
mod snake_runner;

pub use broadcaster::LocalBroadcaster;
pub use local_game::local_game_task;
