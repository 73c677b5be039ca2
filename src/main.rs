mod app;
mod cli;
mod command;
mod config;
mod consts;
mod game;
mod logging;
mod ticker;
mod util;
use crate::app::App;
use crate::cli::{Arguments, Invocation, USAGE};
use anyhow::Context;
use crossterm::event::{DisableFocusChange, EnableFocusChange};
use crossterm::execute;
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    match Invocation::from_parser(lexopt::Parser::from_env()) {
        Ok(Invocation::Run(args)) => match run(args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                log::error!("{e:#}");
                eprintln!("baguette-snake: {e:?}");
                ExitCode::FAILURE
            }
        },
        Ok(Invocation::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Invocation::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("baguette-snake: {e}\n\n{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn run(args: Arguments) -> anyhow::Result<()> {
    let config = args.configure().context("failed to load configuration")?;
    let logfile = logging::init(&config.log).context("failed to set up logging")?;
    log::info!(
        "Starting {} {} on a {}x{} board",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.grid.width(),
        config.grid.height(),
    );
    if let Some(path) = logfile {
        log::debug!("Logging to {}", path.display());
    }
    let terminal = ratatui::init();
    let r = execute!(io::stdout(), EnableFocusChange)
        .and_then(|()| App::new(&config, rand::rng()).run(terminal));
    if let Err(e) = execute!(io::stdout(), DisableFocusChange) {
        log::warn!("Failed to disable focus change reporting: {e}");
    }
    ratatui::restore();
    match r {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        r => r.context("terminal I/O failed"),
    }
}
