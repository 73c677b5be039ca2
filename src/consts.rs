//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Default time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(110);

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Default size of the board, in cells
pub(crate) const GRID_SIZE: Size = Size {
    width: 24,
    height: 18,
};

/// Number of terminal columns used to draw a single board cell
pub(crate) const CELL_WIDTH: u16 = 2;

/// Length of the snake at the start of a game
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// Glyphs for an empty board cell; together these form the grid
pub(crate) const GRID_SYMBOL: &str = " ·";

/// Glyphs for the snake's head
pub(crate) const SNAKE_HEAD_SYMBOL: &str = "██";

/// Glyphs for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: &str = "▓▓";

/// Glyphs for the butter
pub(crate) const BUTTER_SYMBOL: &str = "▄▄";

/// Glyphs for the snake's head when it's collided with a wall or itself
pub(crate) const COLLISION_SYMBOL: &str = "××";

/// Toasted crust
pub(crate) const BAGUETTE_COLOR: Color = Color::Rgb(0xA6, 0x8B, 0x6B);

/// Darker crust, for the end that's going places
pub(crate) const BAGUETTE_HEAD_COLOR: Color = Color::Rgb(0x6F, 0x5B, 0x3E);

pub(crate) const BUTTER_COLOR: Color = Color::Rgb(0xF3, 0xD2, 0x7A);

/// Style for the grid dots on empty cells
pub(crate) const GRID_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Style for the snake's head
pub(crate) const SNAKE_HEAD_STYLE: Style = Style::new()
    .fg(BAGUETTE_HEAD_COLOR)
    .add_modifier(Modifier::BOLD);

/// Style for the snake's body
pub(crate) const SNAKE_BODY_STYLE: Style = Style::new().fg(BAGUETTE_COLOR);

/// Style for the butter
pub(crate) const BUTTER_STYLE: Style = Style::new().fg(BUTTER_COLOR);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key names shown in banners
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the status bar at the top of the game screen
pub(crate) const STATUS_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
