use std::future::Future;

use crate::games::snake::{GameOverNotification, SnakeSnapshot};

/// Receives what a running session publishes: a snapshot after every tick and one final
/// notification when the session ends.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: SnakeSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(
        &self,
        notification: GameOverNotification,
    ) -> impl Future<Output = ()> + Send;
}
