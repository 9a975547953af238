use common::games::snake::Difficulty;
use common::log;
use eframe::egui;

use crate::config::{ClientConfigManager, Config};
use crate::state::{AppState, ClientCommand, SharedState};
use crate::CommandSender;
use super::game::{GameOverAction, SnakeGameUi};

pub struct MenuApp {
    shared_state: SharedState,
    command_sender: CommandSender,
    config_manager: ClientConfigManager,
    selected_difficulty: Difficulty,
    game_ui: SnakeGameUi,
}

impl MenuApp {
    pub fn new(
        shared_state: SharedState,
        command_sender: CommandSender,
        config_manager: ClientConfigManager,
        config: &Config,
    ) -> Self {
        Self {
            shared_state,
            command_sender,
            config_manager,
            selected_difficulty: config.last_difficulty.unwrap_or_default(),
            game_ui: SnakeGameUi::new(config.cell_size_px as f32),
        }
    }

    fn start_game(&mut self, difficulty: Difficulty) {
        self.selected_difficulty = difficulty;
        if let Err(e) = self
            .config_manager
            .update_config(|config| config.last_difficulty = Some(difficulty))
        {
            log!("Failed to remember difficulty: {}", e);
        }
        self.command_sender.send(ClientCommand::StartGame { difficulty });
    }

    fn render_difficulty_dialog(&mut self, ctx: &egui::Context) {
        let mut chosen = None;
        let mut quit = false;

        egui::Window::new("Choose difficulty")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Select a difficulty level:");
                ui.add_space(5.0);

                for difficulty in Difficulty::ALL {
                    ui.radio_value(
                        &mut self.selected_difficulty,
                        difficulty,
                        format!("{} ({} ms per step)", difficulty, difficulty.tick_interval_ms()),
                    );
                }

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("Start").clicked() {
                        chosen = Some(self.selected_difficulty);
                    }
                    if ui.button("Quit").clicked() {
                        quit = true;
                    }
                });
            });

        if let Some(difficulty) = chosen {
            log!("difficulty chosen: {}", difficulty);
            self.start_game(difficulty);
        } else if quit {
            log!("the user did not choose the difficulty");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn render_error(&self, ctx: &egui::Context) {
        let Some(error) = self.shared_state.get_error() else {
            return;
        };

        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(&error);
                if ui.button("OK").clicked() {
                    self.shared_state.clear_error();
                }
            });
    }
}

impl eframe::App for MenuApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        match self.shared_state.get_state() {
            AppState::ChoosingDifficulty => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Snake");
                    });
                });
                self.render_difficulty_dialog(ctx);
            }
            AppState::Starting { difficulty } => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.centered_and_justified(|ui| {
                        ui.label(format!("Starting {} game...", difficulty));
                    });
                });
            }
            AppState::InGame { difficulty, snapshot } => {
                self.game_ui.handle_input(ctx, &self.command_sender);
                egui::CentralPanel::default().show(ctx, |ui| {
                    self.game_ui.render_game(ui, &snapshot, difficulty);
                });
            }
            AppState::GameOver { difficulty, last_snapshot, notification } => {
                let action = egui::CentralPanel::default()
                    .show(ctx, |ui| {
                        self.game_ui
                            .render_game_over(ui, last_snapshot.as_ref(), &notification, difficulty)
                    })
                    .inner;

                match action {
                    Some(GameOverAction::PlayAgain) => self.start_game(difficulty),
                    Some(GameOverAction::ChangeDifficulty) => {
                        self.command_sender.send(ClientCommand::BackToMenu);
                    }
                    None => {}
                }
            }
        }

        self.render_error(ctx);
    }
}
