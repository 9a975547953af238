use common::games::snake::{Difficulty, Direction, GameOverNotification, SnakeSnapshot};
use eframe::egui;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    StartGame { difficulty: Difficulty },
    Turn { direction: Direction },
    BackToMenu,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    ChoosingDifficulty,
    Starting {
        difficulty: Difficulty,
    },
    InGame {
        difficulty: Difficulty,
        snapshot: SnakeSnapshot,
    },
    GameOver {
        difficulty: Difficulty,
        last_snapshot: Option<SnakeSnapshot>,
        notification: GameOverNotification,
    },
}

/// State shared between the UI thread and the offline game task. The game task writes, the
/// UI reads a fresh copy every frame.
#[derive(Clone)]
pub struct SharedState {
    state: Arc<Mutex<AppState>>,
    error: Arc<Mutex<Option<String>>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(AppState::ChoosingDifficulty)),
            error: Arc::new(Mutex::new(None)),
            context: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_state(&self, state: AppState) {
        *lock(&self.state) = state;
        self.request_repaint();
    }

    pub fn get_state(&self) -> AppState {
        lock(&self.state).clone()
    }

    pub fn update_snapshot(&self, difficulty: Difficulty, snapshot: SnakeSnapshot) {
        self.set_state(AppState::InGame { difficulty, snapshot });
    }

    pub fn finish_game(&self, difficulty: Difficulty, notification: GameOverNotification) {
        let last_snapshot = match self.get_state() {
            AppState::InGame { snapshot, .. } => Some(snapshot),
            _ => None,
        };
        self.set_state(AppState::GameOver {
            difficulty,
            last_snapshot,
            notification,
        });
    }

    pub fn set_error(&self, error: String) {
        *lock(&self.error) = Some(error);
        self.request_repaint();
    }

    pub fn get_error(&self) -> Option<String> {
        lock(&self.error).clone()
    }

    pub fn clear_error(&self) {
        *lock(&self.error) = None;
    }

    pub fn has_context(&self) -> bool {
        lock(&self.context).is_some()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *lock(&self.context) = Some(ctx);
    }

    fn request_repaint(&self) {
        if let Some(ctx) = lock(&self.context).as_ref() {
            ctx.request_repaint();
        }
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}
