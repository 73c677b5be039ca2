use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// A pop-up drawn over the board while the game is paused or over
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Banner {
    Paused,
    GameOver,
}

impl Banner {
    /// The height that should be used for the `Rect` passed to
    /// `Banner::render()`
    pub(super) const HEIGHT: u16 = 3;

    /// The width that should be used for the `Rect` passed to
    /// `Banner::render()`
    pub(super) const WIDTH: u16 = 25;

    fn title(self) -> &'static str {
        match self {
            Banner::Paused => " PAUSED ",
            Banner::GameOver => " GAME OVER ",
        }
    }

    fn hint(self) -> Line<'static> {
        let (key, action) = match self {
            Banner::Paused => ("Space", " to resume"),
            Banner::GameOver => ("R", " to restart"),
        };
        Line::from_iter([
            Span::raw("Press "),
            Span::styled(key, consts::KEY_STYLE),
            Span::raw(action),
        ])
    }
}

impl Widget for Banner {
    /*
     * ┌─────── PAUSED ────────┐
     * │ Press Space to resume │
     * └───────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::bordered()
            .title(self.title())
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);
        self.hint().centered().render(inner, buf);
    }
}
