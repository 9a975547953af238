use common::games::snake::{
    Difficulty, GameOverNotification, SnakeCommand, SnakeSession, SnakeSessionState,
};
use common::log;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::state::{AppState, ClientCommand, SharedState};
use super::LocalBroadcaster;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerExit {
    Finished,
    Restart(Difficulty),
    BackToMenu,
    Quit,
}

/// Runs one game to completion while forwarding UI commands to the session. Commands that
/// arrive after the snake died are handled by the caller.
pub async fn run_snake_game(
    shared_state: &SharedState,
    command_rx: &mut mpsc::UnboundedReceiver<ClientCommand>,
    config: &Config,
    difficulty: Difficulty,
) -> RunnerExit {
    let settings = config.session_settings(difficulty);
    let seed: u64 = rand::random();

    let session_state = match SnakeSessionState::create(&settings, seed) {
        Ok(state) => state,
        Err(e) => {
            log!("Failed to start game: {}", e);
            shared_state.set_error(e);
            shared_state.set_state(AppState::ChoosingDifficulty);
            return RunnerExit::Finished;
        }
    };

    log!("starting a {} game", difficulty);
    shared_state.set_state(AppState::Starting { difficulty });

    let broadcaster = LocalBroadcaster::new(shared_state.clone(), difficulty);
    let (session_tx, session_rx) = mpsc::unbounded_channel();

    let mut game_handle = tokio::spawn(async move {
        SnakeSession::run(session_state, session_rx, broadcaster).await
    });

    let exit = loop {
        tokio::select! {
            result = &mut game_handle => {
                report_finished(result);
                return RunnerExit::Finished;
            }
            command = command_rx.recv() => match command {
                Some(ClientCommand::Turn { direction }) => {
                    let _ = session_tx.send(SnakeCommand::Turn(direction));
                }
                Some(ClientCommand::StartGame { difficulty }) => break RunnerExit::Restart(difficulty),
                Some(ClientCommand::BackToMenu) => break RunnerExit::BackToMenu,
                Some(ClientCommand::Quit) | None => break RunnerExit::Quit,
            }
        }
    };

    let _ = session_tx.send(SnakeCommand::Stop);
    report_finished(game_handle.await);
    exit
}

fn report_finished(result: Result<GameOverNotification, tokio::task::JoinError>) {
    if let Err(e) = result {
        log!("Game task failed: {}", e);
    }
}
