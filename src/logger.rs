//! File-backed `log` sink for the terminal runner.
//!
//! Writing log lines to the terminal would tear the frame, so records go to
//! the file named by `BLOCKFALL_LOG_PATH`. Without it nothing is installed and
//! the `log` macros compile down to a level check.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use log::{LevelFilter, Log, Metadata, Record};

struct FileLogger {
    level: LevelFilter,
    file: Mutex<File>,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(
                file,
                "{ts} {:<5} [{}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Install the file logger if `BLOCKFALL_LOG_PATH` is set.
///
/// `BLOCKFALL_LOG_LEVEL` picks the level (`error` .. `trace`, default `info`).
pub fn init_from_env() -> Result<()> {
    let Some(path) = std::env::var("BLOCKFALL_LOG_PATH")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    else {
        return Ok(());
    };

    let level = match std::env::var("BLOCKFALL_LOG_LEVEL") {
        Ok(raw) => raw
            .trim()
            .parse::<LevelFilter>()
            .with_context(|| format!("invalid BLOCKFALL_LOG_LEVEL `{raw}`"))?,
        Err(_) => LevelFilter::Info,
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {path}"))?;

    log::set_boxed_logger(Box::new(FileLogger {
        level,
        file: Mutex::new(file),
    }))
    .context("installing logger")?;
    log::set_max_level(level);
    Ok(())
}
