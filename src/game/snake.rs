use super::direction::Direction;
use super::grid::Grid;
use crate::consts;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// Snake state.  Baguette state.
///
/// All positions are relative to the top-left corner of the grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The positions of all of the cells in the snake, head first.  Never
    /// empty.
    pub(super) cells: VecDeque<Position>,

    /// The direction in which the snake is currently moving
    pub(super) direction: Direction,

    /// The direction the snake will adopt at the start of its next move
    pub(super) pending: Direction,
}

impl Snake {
    /// Create a new snake with its head at `head`, facing `direction`, and
    /// with [`INITIAL_SNAKE_LENGTH`][consts::INITIAL_SNAKE_LENGTH] cells
    /// trailing straight behind it.  The body is cut short if it would leave
    /// `grid`.
    pub(super) fn new(head: Position, direction: Direction, grid: Grid) -> Snake {
        let behind = direction.reverse();
        let cells = std::iter::successors(Some(head), |&p| behind.advance(p, grid))
            .take(consts::INITIAL_SNAKE_LENGTH)
            .collect();
        Snake {
            cells,
            direction,
            pending: direction,
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Position {
        self.cells[0]
    }

    /// Return the positions of the cells in the snake, head first
    pub(crate) fn cells(&self) -> &VecDeque<Position> {
        &self.cells
    }

    /// Return the cells after the head
    pub(crate) fn body(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().skip(1).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    /// Queue up a change of direction for the next move.  Turning straight
    /// back into the body is refused, in which case `false` is returned.
    ///
    /// Only the current direction is consulted, so when several turns are
    /// requested between moves, the last acceptable one wins.
    pub(super) fn turn(&mut self, direction: Direction) -> bool {
        if direction == self.direction.reverse() {
            false
        } else {
            self.pending = direction;
            true
        }
    }

    /// Adopt the pending direction and return the cell the head would move
    /// into, or `None` if that's off the edge of `grid`
    pub(super) fn next_head(&mut self, grid: Grid) -> Option<Position> {
        self.direction = self.pending;
        self.direction.advance(self.head(), grid)
    }

    /// Would moving the head into `pos` make the snake run into itself?  If
    /// the snake is not `growing`, its tail moves out of the way this turn
    /// and so doesn't count.
    pub(super) fn bites(&self, pos: Position, growing: bool) -> bool {
        let span = if growing {
            self.cells.len()
        } else {
            self.cells.len() - 1
        };
        self.cells.iter().take(span).any(|&p| p == pos)
    }

    /// Move the head into `pos`.  Unless `growing`, the tail is dropped so
    /// that the length stays the same.
    pub(super) fn slither(&mut self, pos: Position, growing: bool) {
        self.cells.push_front(pos);
        if !growing {
            let _ = self.cells.pop_back();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn snake(cells: &[(u16, u16)], direction: Direction) -> Snake {
        Snake {
            cells: cells.iter().map(|&(x, y)| Position::new(x, y)).collect(),
            direction,
            pending: direction,
        }
    }

    #[test]
    fn new_snake_trails_behind_head() {
        let grid = Grid::new(24, 18).unwrap();
        let s = Snake::new(grid.center(), Direction::East, grid);
        assert_eq!(
            s,
            snake(&[(12, 9), (11, 9), (10, 9)], Direction::East)
        );
        assert_eq!(s.head(), Position::new(12, 9));
        assert_eq!(s.cells().back(), Some(&Position::new(10, 9)));
        assert_eq!(
            s.body().collect::<Vec<_>>(),
            [Position::new(11, 9), Position::new(10, 9)]
        );
    }

    #[test]
    fn new_snake_is_cut_short_at_edge() {
        let grid = Grid::new(10, 10).unwrap();
        let s = Snake::new(Position::new(1, 4), Direction::East, grid);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn reverse_turn_refused() {
        let mut s = snake(&[(2, 2), (1, 2), (0, 2)], Direction::East);
        assert!(!s.turn(Direction::West));
        assert_eq!(s.pending, Direction::East);
        assert!(s.turn(Direction::North));
        assert_eq!(s.pending, Direction::North);
        assert_eq!(s.direction, Direction::East);
    }

    #[test]
    fn last_turn_wins() {
        let mut s = snake(&[(2, 2), (1, 2), (0, 2)], Direction::East);
        assert!(s.turn(Direction::North));
        assert!(s.turn(Direction::South));
        // Still judged against the current direction, not the pending one
        assert!(!s.turn(Direction::West));
        assert_eq!(s.pending, Direction::South);
    }

    #[test]
    fn tail_does_not_count_unless_growing() {
        let s = snake(&[(1, 1), (2, 1), (2, 2), (1, 2)], Direction::West);
        assert!(!s.bites(Position::new(1, 2), false));
        assert!(s.bites(Position::new(1, 2), true));
        assert!(s.bites(Position::new(2, 2), false));
        assert!(!s.bites(Position::new(0, 1), true));
    }

    #[test]
    fn slither_keeps_or_grows_length() {
        let mut s = snake(&[(2, 2), (1, 2), (0, 2)], Direction::East);
        s.slither(Position::new(3, 2), false);
        assert_eq!(s, snake(&[(3, 2), (2, 2), (1, 2)], Direction::East));
        s.slither(Position::new(4, 2), true);
        assert_eq!(
            s,
            snake(&[(4, 2), (3, 2), (2, 2), (1, 2)], Direction::East)
        );
    }
}
