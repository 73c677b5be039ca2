use crate::consts;
use ratatui::layout::{Position, Positions, Rect, Size};
use serde::Deserialize;
use thiserror::Error;

/// The dimensions of the board.  Cells are addressed by `Position`s in
/// `[0, width) × [0, height)`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "RawGrid")]
pub(crate) struct Grid {
    width: u16,
    height: u16,
}

impl Grid {
    /// The starting snake extends two cells west of the center column.
    pub(crate) const MIN_WIDTH: u16 = 4;

    /// Widest board that fits (with its border) inside the display area
    pub(crate) const MAX_WIDTH: u16 = (consts::DISPLAY_SIZE.width - 2) / consts::CELL_WIDTH;

    pub(crate) const MIN_HEIGHT: u16 = 1;

    /// Tallest board that fits inside the display area along with its border,
    /// the status bar, and the message line
    pub(crate) const MAX_HEIGHT: u16 = consts::DISPLAY_SIZE.height - 4;

    pub(crate) fn new(width: u16, height: u16) -> Result<Grid, GridError> {
        if !(Self::MIN_WIDTH..=Self::MAX_WIDTH).contains(&width) {
            Err(GridError::Width(width))
        } else if !(Self::MIN_HEIGHT..=Self::MAX_HEIGHT).contains(&height) {
            Err(GridError::Height(height))
        } else {
            Ok(Grid { width, height })
        }
    }

    pub(crate) fn width(self) -> u16 {
        self.width
    }

    pub(crate) fn height(self) -> u16 {
        self.height
    }

    pub(crate) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Where the snake's head starts out
    pub(crate) fn center(self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    pub(crate) fn contains(self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Iterate over every cell in the grid, row by row
    pub(crate) fn positions(self) -> Positions {
        Rect::from((Position::ORIGIN, self.size())).positions()
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid {
            width: consts::GRID_SIZE.width,
            height: consts::GRID_SIZE.height,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default)]
struct RawGrid {
    width: u16,
    height: u16,
}

impl Default for RawGrid {
    fn default() -> RawGrid {
        RawGrid {
            width: consts::GRID_SIZE.width,
            height: consts::GRID_SIZE.height,
        }
    }
}

impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(value: RawGrid) -> Result<Grid, GridError> {
        Grid::new(value.width, value.height)
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum GridError {
    #[error("grid width must be between {min} and {max}; got {0}", min = Grid::MIN_WIDTH, max = Grid::MAX_WIDTH)]
    Width(u16),
    #[error("grid height must be between {min} and {max}; got {0}", min = Grid::MIN_HEIGHT, max = Grid::MAX_HEIGHT)]
    Height(u16),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn default_fits_display() {
        let grid = Grid::default();
        assert_eq!(Grid::new(grid.width(), grid.height()), Ok(grid));
    }

    #[rstest]
    #[case(4, 1, Ok(()))]
    #[case(39, 20, Ok(()))]
    #[case(3, 10, Err(GridError::Width(3)))]
    #[case(40, 10, Err(GridError::Width(40)))]
    #[case(10, 0, Err(GridError::Height(0)))]
    #[case(10, 21, Err(GridError::Height(21)))]
    fn test_new(#[case] width: u16, #[case] height: u16, #[case] r: Result<(), GridError>) {
        assert_eq!(Grid::new(width, height).map(|_| ()), r);
    }

    #[test]
    fn error_message() {
        assert_eq!(
            GridError::Width(50).to_string(),
            "grid width must be between 4 and 39; got 50"
        );
    }

    #[test]
    fn positions_cover_grid() {
        let grid = Grid::new(5, 3).unwrap();
        let cells = grid.positions().collect::<Vec<_>>();
        assert_eq!(cells.len(), 15);
        assert!(cells.iter().all(|&p| grid.contains(p)));
        assert_eq!(cells.first(), Some(&Position::new(0, 0)));
        assert_eq!(cells.last(), Some(&Position::new(4, 2)));
        assert!(!grid.contains(Position::new(5, 0)));
        assert!(!grid.contains(Position::new(0, 3)));
    }
}
