mod banner;
mod direction;
mod grid;
mod snake;
mod state;
use self::banner::Banner;
use self::direction::Direction;
pub(crate) use self::grid::{Grid, GridError};
use self::state::{GameOver, GameState, Step};
use crate::command::Command;
use crate::consts;
use crate::util::{center_rect, get_display_area};
use crossterm::event::Event;
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::Line,
    widgets::{Block, Widget},
    Frame,
};
use std::ops::ControlFlow;

/// The game screen: a [`GameState`] plus what's needed to drive it from the
/// keyboard and draw it
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    state: GameState<R>,

    /// What happened on the most recent tick since the game started.  Set to
    /// `Idle` when play resumes from a pause.
    last_step: Option<Step>,
}

impl<R: Rng> Game<R> {
    pub(crate) fn new(grid: Grid, rng: R) -> Game<R> {
        Game {
            state: GameState::new(grid, rng),
            last_step: None,
        }
    }

    /// Advance the game by one tick
    pub(crate) fn tick(&mut self) {
        let step = self.state.step();
        log::trace!("Step: {step:?}");
        if step == Step::Ate {
            log::debug!("Butter eaten: {}", self.state.score());
        }
        self.last_step = Some(step);
    }

    /// Handle an input event.  Returns `Break` if the user asked to quit.
    pub(crate) fn handle_event(&mut self, event: Event) -> ControlFlow<()> {
        if event == Event::FocusLost {
            self.state.pause();
            return ControlFlow::Continue(());
        }
        let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) else {
            return ControlFlow::Continue(());
        };
        match cmd {
            Command::Quit => return ControlFlow::Break(()),
            Command::Up => self.state.set_direction(Direction::North),
            Command::Down => self.state.set_direction(Direction::South),
            Command::Left => self.state.set_direction(Direction::West),
            Command::Right => self.state.set_direction(Direction::East),
            Command::Pause => {
                self.state.toggle_pause();
                if self.running() {
                    self.last_step = Some(Step::Idle);
                }
            }
            Command::Restart => {
                log::info!("Restarting; final score was {}", self.state.score());
                self.state.reset();
                self.last_step = None;
            }
        }
        ControlFlow::Continue(())
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    /// Should the snake be moving on its own?
    pub(crate) fn running(&self) -> bool {
        !self.state.paused() && !self.state.game_over()
    }

    fn status_text(&self) -> String {
        let score = self.state.score();
        if self.state.game_over() {
            format!("GAME OVER — Butter eaten: {score} | Press R to restart")
        } else if self.state.paused() {
            format!("PAUSED — Butter eaten: {score} | ←↑→↓ Move | Space Pause | R Restart")
        } else {
            format!("Butter eaten: {score} | ←↑→↓ Move | Space Pause | R Restart")
        }
    }

    fn message(&self) -> &'static str {
        if let Some(over) = self.state.outcome() {
            over.message()
        } else if self.state.paused() {
            "Paused (space to resume)."
        } else {
            match self.last_step {
                None => "Ready to bake.",
                Some(Step::Ate) => "Butter acquired!",
                Some(_) => "Baking...",
            }
        }
    }

    fn banner(&self) -> Option<Banner> {
        if self.state.game_over() {
            Some(Banner::GameOver)
        } else if self.state.paused() {
            Some(Banner::Paused)
        } else {
            None
        }
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [status_area, board_area, msg_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(format!(" {}", self.status_text()), consts::STATUS_BAR_STYLE)
            .render(status_area, buf);

        let grid = self.state.grid();
        let block_size = Size {
            width: grid.width().saturating_mul(consts::CELL_WIDTH).saturating_add(2),
            height: grid.height().saturating_add(2),
        };
        let block_area = center_rect(board_area, block_size);
        Block::bordered().render(block_area, buf);

        let cells_area = block_area.inner(Margin::new(1, 1));
        let mut board = Canvas {
            area: cells_area,
            buf,
        };
        for pos in grid.positions() {
            board.draw_cell(pos, consts::GRID_SYMBOL, consts::GRID_STYLE);
        }
        if let Some(pos) = self.state.food() {
            board.draw_cell(pos, consts::BUTTER_SYMBOL, consts::BUTTER_STYLE);
        }
        let snake = self.state.snake();
        for pos in snake.body() {
            board.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_BODY_STYLE);
        }
        // Draw the head last so that, after a collision, it's drawn over the
        // body part it ran into
        match self.state.outcome() {
            Some(GameOver::Wall | GameOver::Knotted) => board.draw_cell(
                snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            ),
            _ => board.draw_cell(
                snake.head(),
                consts::SNAKE_HEAD_SYMBOL,
                consts::SNAKE_HEAD_STYLE,
            ),
        }

        Line::raw(format!(" {}", self.message())).render(msg_area, buf);

        if let Some(banner) = self.banner() {
            // Keep the head's row clear so that a collision stays visible
            let head_row = cells_area.y.saturating_add(snake.head().y);
            let above = Rect {
                height: head_row.saturating_sub(display.y),
                ..display
            };
            let below_top = head_row.saturating_add(1);
            let below = Rect {
                y: below_top,
                height: display.bottom().saturating_sub(below_top),
                ..display
            };
            let region = if above.height >= below.height {
                above
            } else {
                below
            };
            let banner_area = center_rect(
                region,
                Size {
                    width: Banner::WIDTH,
                    height: Banner::HEIGHT,
                },
            );
            banner.render(banner_area, buf);
        }
    }
}

/// A view of the region of a buffer in which the board's cells are drawn
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Draw the board cell at `pos`, which spans
    /// [`CELL_WIDTH`][consts::CELL_WIDTH] terminal columns, one for each
    /// character in `symbol`
    fn draw_cell(&mut self, pos: Position, symbol: &str, style: Style) {
        let Some(x) = pos
            .x
            .checked_mul(consts::CELL_WIDTH)
            .and_then(|x| self.area.x.checked_add(x))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        for (x, ch) in (x..).zip(symbol.chars()) {
            if let Some(cell) = self.buf.cell_mut((x, y)) {
                cell.set_char(ch);
                cell.set_style(Style::reset().patch(style));
            }
        }
    }
}
