//! Logger setup for the terminal shell.
//!
//! The page is redrawn on stdout after every state change, so log lines must
//! not land there. File logging is the default; terminal logging goes to
//! stderr and is only useful when stderr is redirected.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

pub const DEFAULT_LOG_FILE: &str = "site.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogDestination {
    /// The configured log file, truncated at startup.
    File,
    /// stderr.
    Terminal,
    Both,
}

/// Installs the global logger. A log file that cannot be created is reported
/// on stderr and skipped; the shell still starts.
pub fn initialize(destination: LogDestination, log_file: &Path) {
    let level = site_logging::default_level();
    let config = shell_log_config();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if matches!(destination, LogDestination::Terminal | LogDestination::Both) {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }
    if matches!(destination, LogDestination::File | LogDestination::Both) {
        match open_log_file(log_file) {
            Ok(file) => loggers.push(WriteLogger::new(level, config, file)),
            Err(err) => eprintln!("cleo: not logging to {}: {}", log_file.display(), err),
        }
    }
    if loggers.is_empty() {
        return;
    }

    let _ = CombinedLogger::init(loggers);
}

fn shell_log_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    File::create(path)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn log_file_is_truncated_on_open() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.log");
        std::fs::write(&path, "previous session\n").unwrap();

        let mut file = open_log_file(&path).unwrap();
        file.write_all(b"fresh\n").unwrap();
        drop(file);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn unwritable_log_path_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(open_log_file(&temp.path().join("missing-dir").join("site.log")).is_err());
    }
}
