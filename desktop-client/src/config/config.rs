use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::snake::{
    Difficulty, SnakeSessionSettings, DEFAULT_GRID_SIZE, DEFAULT_INITIAL_LENGTH, MAX_GRID_SIZE,
    MIN_GRID_SIZE,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const CONFIG_FILE_NAME: &str = "snake_game_config.yaml";

pub type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(path_override: Option<PathBuf>) -> ClientConfigManager {
    ConfigManager::from_yaml_file(path_override.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub grid_size: u32,
    pub initial_length: u32,
    pub cell_size_px: u32,
    #[serde(default)]
    pub last_difficulty: Option<Difficulty>,
}

impl Config {
    pub fn session_settings(&self, difficulty: Difficulty) -> SnakeSessionSettings {
        SnakeSessionSettings::new(
            self.grid_size as usize,
            self.initial_length as usize,
            difficulty,
        )
    }

    pub fn board_size_px(&self) -> f32 {
        (self.grid_size * self.cell_size_px) as f32
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        let grid_size = self.grid_size as usize;
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&grid_size) {
            return Err(format!(
                "grid_size must be between {} and {}",
                MIN_GRID_SIZE, MAX_GRID_SIZE
            ));
        }
        if self.initial_length == 0 || self.initial_length >= self.grid_size {
            return Err("initial_length must be at least 1 and shorter than grid_size".to_string());
        }
        if !(8..=64).contains(&self.cell_size_px) {
            return Err("cell_size_px must be between 8 and 64".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE as u32,
            initial_length: DEFAULT_INITIAL_LENGTH as u32,
            cell_size_px: 20,
            last_difficulty: None,
        }
    }
}
