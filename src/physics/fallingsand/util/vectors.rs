use std::fmt;

/// My personal coordinate type
/// x is the column, positive is to the right
/// y is the row, 0 is the bottom of the grid and positive is up
///
/// Signed so that a position past any edge of the grid can still be described,
/// the grid decides whether it is in bounds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XyVector {
    pub x: isize,
    pub y: isize,
}

/// Convienient constants
impl XyVector {
    pub const ZERO: Self = Self { x: 0, y: 0 };
}

impl XyVector {
    pub fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    /// The position shifted by the given amount on each axis
    pub fn offset(&self, dx: isize, dy: isize) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Like offset, but takes the offset from a direction
    pub fn neighbor(&self, direction: Direction, n: isize) -> Self {
        let (dx, dy) = direction.unit();
        self.offset(dx * n, dy * n)
    }
}

impl fmt::Display for XyVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(isize, isize)> for XyVector {
    fn from((x, y): (isize, isize)) -> Self {
        Self { x, y }
    }
}

/// The eight neighbors of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// The (dx, dy) step one cell in this direction
    pub fn unit(&self) -> (isize, isize) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::UpLeft => (-1, 1),
            Direction::UpRight => (1, 1),
            Direction::DownLeft => (-1, -1),
            Direction::DownRight => (1, -1),
        }
    }
}
