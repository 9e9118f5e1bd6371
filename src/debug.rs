// Debug logging for Pong
// File-based so it never draws over the TUI; enabled with --debug

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;

use anyhow::Context;
use tracing_subscriber::filter::EnvFilter;

pub const LOG_FILE_PATH: &str = "/tmp/pong-debug.log";

const DEFAULT_FILTER: &str = "pong=debug";

/// Install the global `tracing` subscriber
///
/// # Behavior
/// - If enabled=false: returns immediately, no subscriber and no file
/// - If enabled=true: truncates the log file, writes a header and sends every event
///   there, filtered by `RUST_LOG` (default `pong=debug`)
pub fn init(enabled: bool) -> anyhow::Result<()> {
    if !enabled {
        return Ok(());
    }
    init_at(Path::new(LOG_FILE_PATH))
}

fn init_at(path: &Path) -> anyhow::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    writeln!(file, "=== Pong Debug Log ===")?;
    writeln!(file, "Session started: {:?}", SystemTime::now())?;
    writeln!(file, "To monitor: tail -f {}", path.display())?;
    writeln!(file, "========================================\n")?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    tracing::info!("logging to {}", path.display());
    Ok(())
}
