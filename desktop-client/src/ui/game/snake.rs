use common::games::snake::{Cell, Difficulty, Direction, GameOverNotification, SnakeSnapshot};
use eframe::egui;

use crate::colors;
use crate::state::ClientCommand;
use crate::CommandSender;

const KEY_BINDINGS: [(egui::Key, Direction); 8] = [
    (egui::Key::ArrowUp, Direction::Up),
    (egui::Key::W, Direction::Up),
    (egui::Key::ArrowDown, Direction::Down),
    (egui::Key::S, Direction::Down),
    (egui::Key::ArrowLeft, Direction::Left),
    (egui::Key::A, Direction::Left),
    (egui::Key::ArrowRight, Direction::Right),
    (egui::Key::D, Direction::Right),
];

pub fn direction_for_key(key: egui::Key) -> Option<Direction> {
    KEY_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, direction)| *direction)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverAction {
    PlayAgain,
    ChangeDifficulty,
}

pub struct SnakeGameUi {
    cell_size: f32,
}

impl SnakeGameUi {
    pub fn new(cell_size: f32) -> Self {
        Self { cell_size }
    }

    /// Forwards every direction key pressed this frame, in order, so two quick presses
    /// between ticks both reach the snake.
    pub fn handle_input(&self, ctx: &egui::Context, command_sender: &CommandSender) {
        let directions: Vec<Direction> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key { key, pressed: true, repeat: false, .. } => direction_for_key(*key),
                    _ => None,
                })
                .collect()
        });

        for direction in directions {
            command_sender.send(ClientCommand::Turn { direction });
        }
    }

    pub fn render_game(&self, ui: &mut egui::Ui, snapshot: &SnakeSnapshot, difficulty: Difficulty) {
        ui.vertical_centered(|ui| {
            render_score(ui, snapshot.score);
            ui.label(format!("Difficulty: {}", difficulty));
            ui.add_space(8.0);
            self.render_board(ui, snapshot);
            ui.add_space(8.0);
            ui.label("Use Arrow Keys or WASD to steer");
        });
    }

    pub fn render_game_over(
        &self,
        ui: &mut egui::Ui,
        last_snapshot: Option<&SnakeSnapshot>,
        notification: &GameOverNotification,
        difficulty: Difficulty,
    ) -> Option<GameOverAction> {
        let mut action = None;

        ui.vertical_centered(|ui| {
            render_score(ui, notification.score);
            ui.label(
                egui::RichText::new("Game Over")
                    .color(colors::GAME_OVER_TEXT)
                    .size(40.0)
                    .strong(),
            );
            ui.label(format!("Game ended: {}", notification.reason));
            ui.label(format!(
                "Length: {}  Ticks: {}  Difficulty: {}",
                notification.length, notification.ticks, difficulty
            ));
            ui.add_space(8.0);

            if let Some(snapshot) = last_snapshot {
                self.render_board(ui, snapshot);
                ui.add_space(8.0);
            }

            ui.horizontal(|ui| {
                if ui.button("Play again").clicked() {
                    action = Some(GameOverAction::PlayAgain);
                }
                if ui.button("Change difficulty").clicked() {
                    action = Some(GameOverAction::ChangeDifficulty);
                }
            });
        });

        action
    }

    fn render_board(&self, ui: &mut egui::Ui, snapshot: &SnakeSnapshot) {
        let side = snapshot.grid_size as f32 * self.cell_size;
        let (response, painter) =
            ui.allocate_painter(egui::vec2(side, side), egui::Sense::hover());
        let origin = response.rect.min;

        for y in 0..snapshot.grid_size {
            for x in 0..snapshot.grid_size {
                painter.rect_filled(self.cell_rect(origin, Cell::new(x, y)), 0.0, colors::cell_color(x, y));
            }
        }

        let body_color = if snapshot.alive {
            colors::SNAKE_BODY
        } else {
            colors::DEAD_SNAKE_BODY
        };
        for cell in &snapshot.body {
            painter.rect_filled(self.cell_rect(origin, *cell), 0.0, body_color);
        }

        if let Some(apple) = snapshot.apple {
            let rect = self.cell_rect(origin, apple);
            painter.circle_filled(rect.center(), self.cell_size / 2.0, colors::APPLE);
        }
    }

    fn cell_rect(&self, origin: egui::Pos2, cell: Cell) -> egui::Rect {
        egui::Rect::from_min_size(
            origin + egui::vec2(cell.x() as f32 * self.cell_size, cell.y() as f32 * self.cell_size),
            egui::vec2(self.cell_size, self.cell_size),
        )
    }
}

fn render_score(ui: &mut egui::Ui, score: u32) {
    ui.label(egui::RichText::new(format!("Score: {}", score)).size(32.0).strong());
}
