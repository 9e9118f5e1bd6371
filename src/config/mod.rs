// Configuration module for Pong
// Loads game constants from a TOML file with built-in defaults

pub mod loader;
pub mod types;

pub use loader::{create_default_config, get_config_path, load_config, parse_config};
pub use types::{
    AIConfig, BallConfig, Config, CourtConfig, DisplayConfig, GameConfig, PaddleConfig,
};
