use super::direction::Direction;
use super::grid::Grid;
use super::snake::Snake;
use rand::{seq::IteratorRandom, Rng};
use ratatui::layout::Position;
use std::collections::HashSet;

/// Everything about a game in progress: the snake, the butter, the score, and
/// whether play is paused or over
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameState<R = rand::rngs::ThreadRng> {
    rng: R,
    grid: Grid,
    pub(super) snake: Snake,
    pub(super) food: Option<Position>,
    pub(super) score: u32,
    paused: bool,
    /// Set once the game has ended, and to why it did
    over: Option<GameOver>,
}

impl<R: Rng> GameState<R> {
    /// Start a new game on `grid`, drawing butter placements from `rng`
    pub(crate) fn new(grid: Grid, rng: R) -> GameState<R> {
        let mut state = GameState {
            rng,
            grid,
            snake: Snake::new(grid.center(), Direction::East, grid),
            food: None,
            score: 0,
            paused: false,
            over: None,
        };
        state.reset();
        state
    }

    /// Put everything back the way it is at the start of a game
    pub(crate) fn reset(&mut self) {
        self.snake = Snake::new(self.grid.center(), Direction::East, self.grid);
        self.score = 0;
        self.paused = false;
        self.over = None;
        self.food = self.spawn_food();
    }

    /// Advance the game by one tick
    pub(crate) fn step(&mut self) -> Step {
        if self.over.is_some() || self.paused {
            return Step::Idle;
        }
        let Some(head) = self.snake.next_head(self.grid) else {
            return self.end(GameOver::Wall);
        };
        let growing = self.food == Some(head);
        if self.snake.bites(head, growing) {
            return self.end(GameOver::Knotted);
        }
        self.snake.slither(head, growing);
        if growing {
            self.score += 1;
            self.food = self.spawn_food();
        }
        if self.food.is_none() {
            self.end(GameOver::BoardFull)
        } else if growing {
            Step::Ate
        } else {
            Step::Moved
        }
    }

    /// Pick a random unoccupied cell for the butter, or `None` if the snake
    /// covers the whole board
    fn spawn_food(&mut self) -> Option<Position> {
        let occupied = self.snake.cells().iter().copied().collect::<HashSet<_>>();
        let food = self
            .grid
            .positions()
            .filter(|p| !occupied.contains(p))
            .choose(&mut self.rng);
        if let Some(pos) = food {
            log::debug!("Butter placed at ({}, {})", pos.x, pos.y);
        }
        food
    }
}

impl<R> GameState<R> {
    /// Queue a change of direction for the next step.  Ignored once the game
    /// is over or if `direction` would reverse the snake into itself.
    pub(crate) fn set_direction(&mut self, direction: Direction) {
        if self.over.is_some() {
            return;
        }
        if !self.snake.turn(direction) {
            log::debug!("Ignoring reversal to {direction:?}");
        }
    }

    /// Pause or unpause.  Does nothing once the game is over.
    pub(crate) fn toggle_pause(&mut self) {
        if self.over.is_none() {
            self.paused = !self.paused;
            log::debug!("Paused: {}", self.paused);
        }
    }

    /// Pause if not already paused
    pub(crate) fn pause(&mut self) {
        if self.over.is_none() && !self.paused {
            self.toggle_pause();
        }
    }

    pub(crate) fn grid(&self) -> Grid {
        self.grid
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn food(&self) -> Option<Position> {
        self.food
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn paused(&self) -> bool {
        self.paused
    }

    pub(crate) fn game_over(&self) -> bool {
        self.over.is_some()
    }

    /// Return how the game ended, if it has
    pub(crate) fn outcome(&self) -> Option<GameOver> {
        self.over
    }

    fn end(&mut self, reason: GameOver) -> Step {
        log::info!(
            "Game over ({reason:?}) with score {} and length {}",
            self.score,
            self.snake.len()
        );
        self.over = Some(reason);
        Step::Over(reason)
    }
}

/// What happened during a call to [`GameState::step()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Step {
    /// The game is paused or over, so nothing moved
    Idle,

    /// The snake moved without eating
    Moved,

    /// The snake ate the butter and grew
    Ate,

    /// The game has just ended
    Over(GameOver),
}

/// The ways a game can end
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameOver {
    /// The snake tried to move off the board
    Wall,

    /// The snake ran into its own body
    Knotted,

    /// The snake fills the board, leaving no room for butter.  A win, of
    /// sorts.
    BoardFull,
}

impl GameOver {
    pub(crate) fn message(self) -> &'static str {
        match self {
            GameOver::Wall => "Game over — your baguette hit the oven wall. Press R.",
            GameOver::Knotted => "Game over — you knotted your baguette. Press R.",
            GameOver::BoardFull => "You filled the tray — Master Baker! Press R.",
        }
    }
}
