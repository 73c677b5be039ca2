use crate::config::{Config, ConfigError, TickPeriod};
use crate::game::Grid;
use lexopt::{Arg, Parser, ValueExt};
use std::path::PathBuf;

pub(crate) static USAGE: &str = "\
Usage: baguette-snake [OPTIONS]

Guide a baguette around the tray and eat as much butter as you can.

Options:
  -c, --config <FILE>    Read configuration from FILE
      --width <N>        Width of the board, in cells
      --height <N>       Height of the board, in cells
      --tick <MS>        Milliseconds between moves
      --log-file <FILE>  Append log messages to FILE
  -h, --help             Show this help and exit
  -V, --version          Show the program version and exit

Keys:
  Arrows, WASD, or HJKL  Steer
  Space, p, or Esc       Pause/resume
  r                      Restart
  q or Ctrl-C            Quit
";

/// What the command line asked for
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Invocation {
    Run(Arguments),
    Help,
    Version,
}

impl Invocation {
    pub(crate) fn from_parser(mut parser: Parser) -> Result<Invocation, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("width") => args.width = Some(parser.value()?.parse()?),
                Arg::Long("height") => args.height = Some(parser.value()?.parse()?),
                Arg::Long("tick") => args.tick = Some(parser.value()?.parse()?),
                Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Invocation::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Invocation::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Invocation::Run(args))
    }
}

/// Settings given on the command line, which take precedence over the
/// configuration file
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    config: Option<PathBuf>,
    width: Option<u16>,
    height: Option<u16>,
    tick: Option<TickPeriod>,
    log_file: Option<PathBuf>,
}

impl Arguments {
    /// Read the configuration file given with `--config` (or the default
    /// one, if it exists) and apply the command-line overrides
    pub(crate) fn configure(self) -> Result<Config, ConfigError> {
        let mut config = match self.config {
            Some(ref path) => Config::load(path, false)?,
            None => match Config::default_path() {
                Ok(path) => Config::load(&path, true)?,
                Err(ConfigError::NoPath) => Config::default(),
                Err(e) => return Err(e),
            },
        };
        if self.width.is_some() || self.height.is_some() {
            config.grid = Grid::new(
                self.width.unwrap_or(config.grid.width()),
                self.height.unwrap_or(config.grid.height()),
            )?;
        }
        if let Some(tick) = self.tick {
            config.tick = tick;
        }
        if let Some(file) = self.log_file {
            config.log.file = Some(file);
        }
        Ok(config)
    }
}
