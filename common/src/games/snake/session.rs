use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};

use crate::config::Validate;
use crate::games::{GameBroadcaster, SessionRng};
use crate::log;
use super::apple::AppleSpawner;
use super::settings::SnakeSessionSettings;
use super::snake::Snake;
use super::types::{Cell, Direction, GameEndReason};

#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSnapshot {
    pub body: Vec<Cell>,
    pub apple: Option<Cell>,
    pub direction: Direction,
    pub score: u32,
    pub tick: u64,
    pub alive: bool,
    pub grid_size: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameOverNotification {
    pub score: u32,
    pub length: usize,
    pub ticks: u64,
    pub reason: GameEndReason,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnakeCommand {
    Turn(Direction),
    Stop,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickOutcome {
    pub ate: bool,
    pub alive: bool,
}

/// Everything one game owns. Only the session loop mutates it, so input from other threads
/// has to arrive as `SnakeCommand`s.
pub struct SnakeSessionState {
    snake: Snake,
    apples: AppleSpawner,
    score: u32,
    tick: u64,
    tick_interval: Duration,
}

impl SnakeSessionState {
    pub fn create(settings: &SnakeSessionSettings, seed: u64) -> Result<Self, String> {
        settings.validate()?;

        let snake = Snake::new(settings.initial_body(), settings.grid_size)
            .map_err(|e| format!("Failed to create snake: {}", e))?;
        let apples = AppleSpawner::new(settings.grid_size, SessionRng::new(seed));

        Ok(Self::from_parts(snake, apples, settings.tick_interval))
    }

    /// Places the first apple unless the snake already has one.
    pub fn from_parts(mut snake: Snake, mut apples: AppleSpawner, tick_interval: Duration) -> Self {
        if snake.apple().is_none() {
            snake.set_apple(apples.next_apple());
        }

        Self {
            snake,
            apples,
            score: 0,
            tick: 0,
            tick_interval,
        }
    }

    pub fn turn(&mut self, direction: Direction) {
        self.snake.set_direction(direction);
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.snake.is_alive() {
            return TickOutcome { ate: false, alive: false };
        }

        let ate = self.snake.step();
        self.tick += 1;

        if ate {
            self.score += 1;
            let apple = self.apples.next_apple();
            self.snake.set_apple(apple);
            log!("the snake ate the apple. Score: {}, next apple at {}", self.score, apple);
        }

        TickOutcome {
            ate,
            alive: self.snake.is_alive(),
        }
    }

    pub fn snapshot(&self) -> SnakeSnapshot {
        SnakeSnapshot {
            body: self.snake.body().iter().copied().collect(),
            apple: self.snake.apple(),
            direction: self.snake.direction(),
            score: self.score,
            tick: self.tick,
            alive: self.snake.is_alive(),
            grid_size: self.snake.grid_size(),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn seed(&self) -> u64 {
        self.apples.seed()
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    fn game_over(&self, reason: GameEndReason) -> GameOverNotification {
        GameOverNotification {
            score: self.score,
            length: self.snake.body().len(),
            ticks: self.tick,
            reason,
        }
    }
}

pub struct SnakeSession;

impl SnakeSession {
    /// Drives `state` at its tick interval until the snake dies, a `Stop` arrives or every
    /// command sender is dropped.
    pub async fn run(
        mut state: SnakeSessionState,
        mut command_rx: mpsc::UnboundedReceiver<SnakeCommand>,
        broadcaster: impl GameBroadcaster,
    ) -> GameOverNotification {
        log!(
            "[session] started: grid {}x{}, tick {}ms, seed {}",
            state.snake.grid_size(),
            state.snake.grid_size(),
            state.tick_interval.as_millis(),
            state.seed()
        );

        let mut tick_interval_timer = interval(state.tick_interval);
        tick_interval_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tick_interval_timer.tick().await;

        broadcaster.broadcast_state(state.snapshot()).await;

        let reason = loop {
            tokio::select! {
                _ = tick_interval_timer.tick() => {
                    let outcome = state.tick();
                    broadcaster.broadcast_state(state.snapshot()).await;
                    if !outcome.alive {
                        break GameEndReason::SelfCollision;
                    }
                }
                command = command_rx.recv() => match command {
                    Some(SnakeCommand::Turn(direction)) => state.turn(direction),
                    Some(SnakeCommand::Stop) | None => break GameEndReason::Stopped,
                }
            }
        };

        let notification = state.game_over(reason);
        log!(
            "[session] game over: {}. Score: {}, length: {}, ticks: {}",
            notification.reason,
            notification.score,
            notification.length,
            notification.ticks
        );
        broadcaster.broadcast_game_over(notification.clone()).await;
        notification
    }
}
