use common::games::GameBroadcaster;
use common::games::snake::{Difficulty, GameOverNotification, SnakeSnapshot};
use crate::state::SharedState;

/// Publishes session output straight into the UI's shared state.
#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
    difficulty: Difficulty,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState, difficulty: Difficulty) -> Self {
        Self { shared_state, difficulty }
    }
}

impl GameBroadcaster for LocalBroadcaster {
    async fn broadcast_state(&self, snapshot: SnakeSnapshot) {
        self.shared_state.update_snapshot(self.difficulty, snapshot);
    }

    async fn broadcast_game_over(&self, notification: GameOverNotification) {
        self.shared_state.finish_game(self.difficulty, notification);
    }
}
