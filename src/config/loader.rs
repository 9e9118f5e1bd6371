// Configuration file loading and creation

use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::types::Config;

/// Default per-user configuration path
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("pong");
    path.push("config.toml");
    path
}

/// Load configuration from `path` (or the per-user default), creating a default file
/// at the per-user location on first run
///
/// A file that fails to parse or validate is reported and replaced by the defaults in
/// memory; only I/O failures are returned as errors.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => get_config_path(),
    };

    if !config_path.exists() {
        if path.is_some() {
            anyhow::bail!("config file {} does not exist", config_path.display());
        }
        create_default_config(&config_path)?;
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read {}", config_path.display()))?;

    match parse_config(&contents) {
        Ok(config) => {
            info!(path = %config_path.display(), "loaded configuration");
            Ok(config)
        }
        Err(e) => {
            warn!(path = %config_path.display(), error = %e, "invalid config, using defaults");
            eprintln!("Warning: {:#}", e);
            eprintln!("Using default configuration");
            Ok(Config::default())
        }
    }
}

/// Parse and validate configuration text
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents).context("failed to parse config file")?;
    config.validate().context("config file has invalid values")?;
    Ok(config)
}

/// Write the default configuration with a short explanatory header
pub fn create_default_config(path: &Path) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }

    let toml_string =
        toml::to_string_pretty(&Config::default()).context("failed to serialize defaults")?;

    let commented_toml = format!(
        "# Pong configuration file\n\
         # Restart the game after editing\n\
         #\n\
         # Distances are court units, speeds are units per second\n\
         # AI difficulty: \"easy\", \"medium\", \"hard\"\n\
         # Colors: RGB values from 0-255\n\n\
         {}",
        toml_string
    );

    fs::write(path, commented_toml)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "created default config file");
    Ok(())
}
