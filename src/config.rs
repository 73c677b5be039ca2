use crate::consts;
use crate::game::{Grid, GridError};
use log::LevelFilter;
use serde::Deserialize;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Size of the board
    pub(crate) grid: Grid,

    /// Time between steps of the snake
    #[serde(rename = "tick-ms")]
    pub(crate) tick: TickPeriod,

    /// Where & how much to log
    pub(crate) log: LogConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("baguette-snake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

/// Time between steps of the snake.  Configured as a whole number of
/// milliseconds, which must be nonzero.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "u64")]
pub(crate) struct TickPeriod(Duration);

impl TickPeriod {
    pub(crate) fn from_millis(ms: u64) -> Result<TickPeriod, TickError> {
        if ms == 0 {
            Err(TickError::Zero)
        } else {
            Ok(TickPeriod(Duration::from_millis(ms)))
        }
    }

    pub(crate) fn get(self) -> Duration {
        self.0
    }
}

impl Default for TickPeriod {
    fn default() -> TickPeriod {
        TickPeriod(consts::TICK_PERIOD)
    }
}

impl TryFrom<u64> for TickPeriod {
    type Error = TickError;

    fn try_from(value: u64) -> Result<TickPeriod, TickError> {
        TickPeriod::from_millis(value)
    }
}

impl FromStr for TickPeriod {
    type Err = TickError;

    fn from_str(s: &str) -> Result<TickPeriod, TickError> {
        TickPeriod::from_millis(s.parse::<u64>()?)
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum TickError {
    #[error("tick period must be at least 1 millisecond")]
    Zero,
    #[error("invalid tick period")]
    Parse(#[from] ParseIntError),
}

/// Logging settings
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub(crate) struct LogConfig {
    /// File to append log messages to.  If unset, the default log path is
    /// used.
    pub(crate) file: Option<PathBuf>,

    /// Most verbose level of message to log; `off` disables logging
    pub(crate) level: LevelFilter,
}

impl LogConfig {
    /// Return the path to log to: the file given in the configuration or, if
    /// that is not set, a file in the local state directory (falling back to
    /// the cache directory on platforms without one).  Returns `None` if
    /// neither directory could be determined.
    pub(crate) fn path(&self) -> Option<PathBuf> {
        self.file.clone().or_else(|| {
            dirs::state_dir()
                .or_else(dirs::cache_dir)
                .map(|p| p.join("baguette-snake").join("baguette-snake.log"))
        })
    }
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
    #[error("invalid grid size")]
    Grid(#[from] GridError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn empty_config() {
        let config = toml::from_str::<Config>("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.grid, Grid::new(24, 18).unwrap());
        assert_eq!(config.tick.get(), Duration::from_millis(110));
        assert_eq!(config.log.level, LevelFilter::Info);
        assert_eq!(config.log.file, None);
    }

    #[test]
    fn full_config() {
        let src = concat!(
            "tick-ms = 80\n",
            "\n",
            "[grid]\n",
            "width = 30\n",
            "height = 12\n",
            "\n",
            "[log]\n",
            "file = \"/tmp/snake.log\"\n",
            "level = \"debug\"\n",
        );
        let config = toml::from_str::<Config>(src).unwrap();
        assert_eq!(
            config,
            Config {
                grid: Grid::new(30, 12).unwrap(),
                tick: TickPeriod::from_millis(80).unwrap(),
                log: LogConfig {
                    file: Some(PathBuf::from("/tmp/snake.log")),
                    level: LevelFilter::Debug,
                },
            }
        );
        assert_eq!(config.log.path(), Some(PathBuf::from("/tmp/snake.log")));
    }

    #[test]
    fn partial_grid() {
        let config = toml::from_str::<Config>("[grid]\nheight = 5\n").unwrap();
        assert_eq!(config.grid, Grid::new(24, 5).unwrap());
    }

    #[test]
    fn grid_too_big() {
        let r = toml::from_str::<Config>("[grid]\nwidth = 100\n");
        assert!(r.is_err());
    }

    #[test]
    fn zero_tick() {
        let r = toml::from_str::<Config>("tick-ms = 0\n");
        assert!(r.is_err());
    }

    #[test]
    fn logging_off() {
        let config = toml::from_str::<Config>("[log]\nlevel = \"off\"\n").unwrap();
        assert_eq!(config.log.level, LevelFilter::Off);
    }

    #[test]
    fn parse_tick_period() {
        assert_eq!(
            "250".parse::<TickPeriod>(),
            Ok(TickPeriod(Duration::from_millis(250)))
        );
        assert_eq!("0".parse::<TickPeriod>(), Err(TickError::Zero));
        assert!(matches!(
            "fast".parse::<TickPeriod>(),
            Err(TickError::Parse(_))
        ));
    }

    #[test]
    fn load_file() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "tick-ms = 200\n").unwrap();
        let config = Config::load(&path, false).unwrap();
        assert_eq!(config.tick.get(), Duration::from_millis(200));
    }

    #[test]
    fn load_missing_allowed() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        assert_eq!(Config::load(&path, true).unwrap(), Config::default());
    }

    #[test]
    fn load_missing_disallowed() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(_))
        ));
    }

    #[test]
    fn load_invalid() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "[grid]\nwidth = \"wide\"\n").unwrap();
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Parse(_))
        ));
    }
}
