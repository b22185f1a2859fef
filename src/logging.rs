// Logging setup for ttypong
// The game owns the terminal, so tracing output goes to a file

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::SystemTime;

use tracing::Level;

use crate::config::LoggingConfig;

/// Initialize file logging
///
/// # Behavior
/// - If `enabled` is false: returns immediately, no subscriber, no file
/// - Otherwise: truncates the log file, writes a session header and installs
///   a `tracing` fmt subscriber at the configured level
pub fn init(config: &LoggingConfig) -> io::Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let path = config.log_path();
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)?;

    writeln!(file, "=== ttypong log ===")?;
    writeln!(file, "Session started: {:?}", SystemTime::now())?;
    writeln!(file, "To monitor: tail -f {}", path.display())?;
    writeln!(file, "========================================\n")?;

    let level = parse_level(&config.level);

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level.unwrap_or(Level::INFO))
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    if level.is_none() {
        tracing::warn!(level = %config.level, "unknown log level, using info");
    }

    Ok(())
}

/// Level name or number (1 = error .. 5 = trace) to `tracing::Level`
pub fn parse_level(name: &str) -> Option<Level> {
    name.trim().parse().ok()
}
