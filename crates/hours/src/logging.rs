//! File logging, kept off the terminal the UI is drawn on.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::eyre::{OptionExt, WrapErr};
use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `HOURS_LOG=debug`.
const LOG_ENV: &str = "HOURS_LOG";

/// Install a global subscriber writing to `hours.log` in the data directory.
/// Returns the log file path.
pub fn init() -> color_eyre::Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "hours").ok_or_eyre("no home directory for logs")?;
    let dir = dirs.data_dir();
    std::fs::create_dir_all(dir)
        .wrap_err_with(|| format!("creating log directory {}", dir.display()))?;

    let path = dir.join("hours.log");
    let file = File::create(&path).wrap_err_with(|| format!("creating {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(path)
}
