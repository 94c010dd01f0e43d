use std::fs::{self, File, OpenOptions};
use std::io;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install the global tracing subscriber.
///
/// The terminal belongs to the UI, so events go to the configured log file.
/// `RUST_LOG` takes precedence over `level`.
pub fn init_tracing(config: &LoggingConfig, level: Option<&str>) -> io::Result<()> {
    let file = open_log_file(config)?;
    let fallback = level.unwrap_or(&config.level).to_string();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| io::Error::new(io::ErrorKind::AlreadyExists, err.to_string()))
}

fn open_log_file(config: &LoggingConfig) -> io::Result<File> {
    let path = config.log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
