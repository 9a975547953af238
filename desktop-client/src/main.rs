mod colors;
mod command_sender;
mod config;
mod offline;
mod state;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use common::config::Validate;
use common::games::snake::Difficulty;
use common::{log, logger};
use eframe::egui;
use tokio::sync::mpsc;

use command_sender::CommandSender;
use config::get_config_manager;
use offline::local_game_task;
use state::{ClientCommand, SharedState};
use ui::MenuApp;

#[derive(Parser)]
#[command(name = "snake_game")]
struct Args {
    /// Skip the difficulty dialog and start straight away (easy, normal or hard).
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Overrides the grid size from the config file.
    #[arg(long)]
    grid_size: Option<u32>,

    /// Path to the YAML config. Defaults to a file next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config);
    let mut config = config_manager.get_config().unwrap_or_else(|e| {
        log!("Failed to load config, using defaults: {}", e);
        Default::default()
    });
    if let Some(grid_size) = args.grid_size {
        config.grid_size = grid_size;
    }
    config.validate()?;

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let command_sender = CommandSender::new(command_tx);

    let game_state = shared_state.clone();
    let game_config = config.clone();
    let game_thread = std::thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log!("Failed to start the game runtime: {}", e);
                game_state.set_error(format!("Failed to start the game runtime: {}", e));
                return;
            }
        };
        rt.block_on(local_game_task(game_state, command_rx, game_config));
    });

    if let Some(difficulty) = args.difficulty {
        log!("difficulty chosen on the command line: {}", difficulty);
        command_sender.send(ClientCommand::StartGame { difficulty });
    }

    let board_size = config.board_size_px();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([board_size + 40.0, board_size + 120.0])
            .with_title("Snake"),
        ..Default::default()
    };

    let app_sender = command_sender.clone();
    let result = eframe::run_native(
        "Snake",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(MenuApp::new(
                shared_state,
                app_sender,
                config_manager,
                &config,
            )))
        }),
    );

    command_sender.send(ClientCommand::Quit);
    if game_thread.join().is_err() {
        log!("Game thread panicked");
    }

    result?;
    log!("Snake closed");
    Ok(())
}
