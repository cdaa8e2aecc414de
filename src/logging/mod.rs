// src/logging/mod.rs
use std::path::{Path, PathBuf};
use std::fs::{self, OpenOptions};
use std::io;
use chrono::Utc;
use thiserror::Error;

use crate::app::Config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Log rotation error: {0}")]
    RotationError(String),

    #[error("Logger already initialized: {0}")]
    InitError(String),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

/// Routes the `log` facade into `config.log_file`, rotating it first if it
/// has grown past `config.max_log_size`.
pub fn init(config: &Config) -> Result<()> {
    let log_file = &config.log_file;
    if let Some(parent) = log_file.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    check_rotation(log_file, config.max_log_size, config.max_log_files)?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| LoggingError::InitError(e.to_string()))?;

    Ok(())
}

// Check if log rotation is needed
pub fn check_rotation(log_file: &Path, max_log_size: u64, max_log_files: usize) -> Result<bool> {
    let metadata = match fs::metadata(log_file) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e.into()),
    };

    if metadata.len() > max_log_size {
        rotate_logs(log_file, max_log_files)?;
        return Ok(true);
    }

    Ok(false)
}

fn rotated_prefix(log_file: &Path) -> Result<String> {
    let stem = log_file
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| LoggingError::RotationError(format!("Bad log file name: {}", log_file.display())))?;
    Ok(format!("{}-", stem))
}

fn log_dir(log_file: &Path) -> PathBuf {
    match log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

// Rotate log files
fn rotate_logs(log_file: &Path, max_log_files: usize) -> Result<()> {
    let timestamp = Utc::now().format("%Y%m%d%H%M%S%3f");
    let rotated = log_dir(log_file).join(format!("{}{}.log", rotated_prefix(log_file)?, timestamp));

    fs::rename(log_file, &rotated)?;
    cleanup_old_logs(log_file, max_log_files)?;

    Ok(())
}

// Clean up old log files, keeping only the most recent ones
fn cleanup_old_logs(log_file: &Path, max_log_files: usize) -> Result<()> {
    let prefix = rotated_prefix(log_file)?;
    let mut log_files = Vec::new();

    for entry in fs::read_dir(log_dir(log_file))? {
        let path = entry?.path();
        let is_rotated = path.is_file()
            && path.extension().map_or(false, |ext| ext == "log")
            && path
                .file_name()
                .and_then(|n| n.to_str())
                .map_or(false, |n| n.starts_with(&prefix));

        if is_rotated {
            log_files.push(path);
        }
    }

    // Timestamped names sort oldest first
    log_files.sort();

    let excess = log_files.len().saturating_sub(max_log_files);
    for file in log_files.iter().take(excess) {
        fs::remove_file(file)?;
    }

    Ok(())
}
