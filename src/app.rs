use crate::config::Config;
use crate::game::Game;
use crate::ticker::Ticker;
use crossterm::event::{poll, read};
use rand::{rngs::ThreadRng, Rng};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Instant;

#[derive(Clone, Debug)]
pub(crate) struct App<R = ThreadRng> {
    game: Game<R>,
    ticker: Ticker,
    quitting: bool,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(config: &Config, rng: R) -> App<R> {
        App {
            game: Game::new(config.grid, rng),
            ticker: Ticker::new(config.tick.get()),
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| self.game.draw(frame))?;
        Ok(())
    }

    /// Wait for either the next tick or the next input event, whichever comes
    /// first, and handle it.  While the game is paused or over, there is
    /// nothing to tick, so just block on input.
    fn process_input(&mut self) -> io::Result<()> {
        if self.game.running() {
            let wait = self.ticker.time_left(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.ticker.cancel();
                self.game.tick();
                return Ok(());
            }
        } else {
            self.ticker.cancel();
        }
        if self.game.handle_event(read()?).is_break() {
            log::info!("Quitting");
            self.quitting = true;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use ratatui::backend::TestBackend;

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buf = terminal.backend().buffer();
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn draw_new_game() {
        let app = App::new(&Config::default(), ChaCha12Rng::seed_from_u64(0x0123456789ABCDEF));
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        app.draw(&mut terminal).unwrap();
        assert!(row_text(&terminal, 0).starts_with(" Butter eaten: 0 | "));
        assert_eq!(row_text(&terminal, 23).trim(), "Ready to bake.");
        assert_eq!(row_text(&terminal, 1).trim(), "");
        assert!(row_text(&terminal, 2).contains('┌'));
    }
}
