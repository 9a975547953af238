use common::games::snake::Difficulty;
use common::log;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::state::{AppState, ClientCommand, SharedState};
use super::snake_runner::{run_snake_game, RunnerExit};

/// Owns the game side of the app: waits for the UI to pick a difficulty, runs games and
/// returns to the menu when asked. Ends on `Quit` or when the UI drops its sender.
pub async fn local_game_task(
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
    config: Config,
) {
    let mut next_game: Option<Difficulty> = None;

    loop {
        let difficulty = match next_game.take() {
            Some(difficulty) => difficulty,
            None => {
                let Some(command) = command_rx.recv().await else {
                    break;
                };

                match command {
                    ClientCommand::StartGame { difficulty } => difficulty,
                    ClientCommand::BackToMenu => {
                        shared_state.set_state(AppState::ChoosingDifficulty);
                        continue;
                    }
                    ClientCommand::Quit => break,
                    ClientCommand::Turn { .. } => continue,
                }
            }
        };

        match run_snake_game(&shared_state, &mut command_rx, &config, difficulty).await {
            RunnerExit::Finished => {}
            RunnerExit::Restart(difficulty) => next_game = Some(difficulty),
            RunnerExit::BackToMenu => shared_state.set_state(AppState::ChoosingDifficulty),
            RunnerExit::Quit => break,
        }
    }

    log!("Game task stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::snake::Direction;
    use std::time::Duration;

    async fn wait_for(shared_state: &SharedState, predicate: impl Fn(&AppState) -> bool) -> AppState {
        for _ in 0..500 {
            let state = shared_state.get_state();
            if predicate(&state) {
                return state;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("state never matched, last: {:?}", shared_state.get_state());
    }

    #[tokio::test]
    async fn test_game_starts_and_returns_to_menu() {
        let shared_state = SharedState::new();
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(local_game_task(shared_state.clone(), command_rx, Config::default()));

        command_tx.send(ClientCommand::StartGame { difficulty: Difficulty::Hard }).unwrap();
        let state = wait_for(&shared_state, |s| matches!(s, AppState::InGame { .. })).await;
        let AppState::InGame { difficulty, snapshot } = state else {
            unreachable!();
        };
        assert_eq!(difficulty, Difficulty::Hard);
        assert_eq!(snapshot.grid_size, 25);
        assert!(snapshot.alive);

        command_tx.send(ClientCommand::Turn { direction: Direction::Down }).unwrap();
        command_tx.send(ClientCommand::BackToMenu).unwrap();
        wait_for(&shared_state, |s| *s == AppState::ChoosingDifficulty).await;

        command_tx.send(ClientCommand::Quit).unwrap();
        tokio::time::timeout(Duration::from_secs(2), task)
            .await
            .expect("task should stop on quit")
            .unwrap();
    }

    #[tokio::test]
    async fn test_task_stops_when_ui_is_gone() {
        let shared_state = SharedState::new();
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(local_game_task(shared_state, command_rx, Config::default()));

        drop(command_tx);
        tokio::time::timeout(Duration::from_secs(2), task)
            .await
            .expect("task should stop when the sender is dropped")
            .unwrap();
    }
}
