use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Where log lines go. The form owns the terminal, so it logs to a file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogTarget {
    Stderr,
    File,
}

pub fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("ytdlp-cmdgen/ytdlp-cmdgen.log"))
}

/// Resolved destination for log lines.
#[derive(Debug, Clone, PartialEq)]
pub enum LogSink {
    File(PathBuf),
    Stderr,
    /// The form has no log file to write to; stderr would corrupt the screen.
    Discard,
}

pub fn sink_for(target: LogTarget, path: Option<PathBuf>) -> LogSink {
    match (target, path) {
        (LogTarget::Stderr, _) => LogSink::Stderr,
        (LogTarget::File, Some(path)) => LogSink::File(path),
        (LogTarget::File, None) => LogSink::Discard,
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `-v`.
pub fn init(verbose: u8, target: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    match sink_for(target, log_file_path()) {
        LogSink::File(path) => {
            let file = open_log_file(&path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        LogSink::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        LogSink::Discard => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::sink)
                .init();
        }
    }

    Ok(())
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(0), "warn");
        assert_eq!(default_level(1), "debug");
        assert_eq!(default_level(5), "trace");
    }

    #[test]
    fn test_log_file_name() {
        if let Some(path) = log_file_path() {
            assert!(path.ends_with("ytdlp-cmdgen/ytdlp-cmdgen.log"));
        }
    }

    #[test]
    fn test_form_without_log_path_discards() {
        assert_eq!(sink_for(LogTarget::File, None), LogSink::Discard);
    }

    #[test]
    fn test_sink_for_file_and_stderr() {
        let path = PathBuf::from("/tmp/x.log");
        assert_eq!(sink_for(LogTarget::File, Some(path.clone())), LogSink::File(path.clone()));
        assert_eq!(sink_for(LogTarget::Stderr, Some(path)), LogSink::Stderr);
        assert_eq!(sink_for(LogTarget::Stderr, None), LogSink::Stderr);
    }

    #[test]
    fn test_open_log_file_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/app.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
