use crate::config::LogConfig;
use log::LevelFilter;
use simplelog::WriteLogger;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Install a logger that appends to the file given by `config`.  The screen
/// belongs to the game, so nothing is ever logged to the terminal.
///
/// Returns the path being logged to, or `None` if logging is disabled or no
/// log location could be determined.
pub(crate) fn init(config: &LogConfig) -> Result<Option<PathBuf>, LogError> {
    if config.level == LevelFilter::Off {
        return Ok(None);
    }
    let Some(path) = config.path() else {
        return Ok(None);
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).map_err(LogError::Mkdir)?;
    }
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(LogError::Open)?;
    WriteLogger::init(config.level, simplelog::Config::default(), file)?;
    Ok(Some(path))
}

#[derive(Debug, Error)]
pub(crate) enum LogError {
    #[error("failed to create log directory")]
    Mkdir(#[source] io::Error),
    #[error("failed to open log file")]
    Open(#[source] io::Error),
    #[error("failed to install logger")]
    Install(#[from] log::SetLoggerError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn disabled() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("logs").join("snake.log");
        let config = LogConfig {
            file: Some(path.clone()),
            level: LevelFilter::Off,
        };
        assert_eq!(init(&config).unwrap(), None);
        assert!(!path.exists());
        assert!(!path.parent().unwrap().exists());
    }
}
