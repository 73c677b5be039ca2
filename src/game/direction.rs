use super::grid::Grid;
use ratatui::layout::Position;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Return the unit vector `(dx, dy)` for the direction, with `y` growing
    /// downwards
    pub(crate) fn delta(self) -> (i16, i16) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// Return the cell one step from `pos` in this direction, or `None` if
    /// that would leave `grid`
    pub(crate) fn advance(self, pos: Position, grid: Grid) -> Option<Position> {
        let (dx, dy) = self.delta();
        let x = pos.x.checked_add_signed(dx)?;
        let y = pos.y.checked_add_signed(dy)?;
        Some(Position { x, y }).filter(|&p| grid.contains(p))
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn grid() -> Grid {
        Grid::new(10, 15).unwrap()
    }

    #[rstest]
    #[case(Direction::North, Position::new(2, 7), Some(Position::new(2, 6)))]
    #[case(Direction::South, Position::new(2, 7), Some(Position::new(2, 8)))]
    #[case(Direction::East, Position::new(2, 7), Some(Position::new(3, 7)))]
    #[case(Direction::West, Position::new(2, 7), Some(Position::new(1, 7)))]
    #[case(Direction::North, Position::new(2, 0), None)]
    #[case(Direction::South, Position::new(2, 14), None)]
    #[case(Direction::East, Position::new(9, 7), None)]
    #[case(Direction::West, Position::new(0, 7), None)]
    #[case(Direction::West, Position::new(0, 0), None)]
    #[case(Direction::East, Position::new(8, 14), Some(Position::new(9, 14)))]
    fn test_direction_advance(
        #[case] d: Direction,
        #[case] pos: Position,
        #[case] r: Option<Position>,
    ) {
        assert_eq!(d.advance(pos, grid()), r);
    }

    #[rstest]
    #[case(Direction::North)]
    #[case(Direction::East)]
    #[case(Direction::South)]
    #[case(Direction::West)]
    fn reverse_negates_delta(#[case] d: Direction) {
        let (dx, dy) = d.delta();
        assert_eq!(d.reverse().delta(), (-dx, -dy));
        assert_eq!(d.reverse().reverse(), d);
    }
}
