use std::fmt::{Display, Formatter};
use std::num::NonZero;
use std::ops::Add;
use std::str::FromStr;

use ndarray::Ix;

use crate::board::BoardError;

pub(crate) type Coord = usize;
/// A board dimension; zero-sized boards are unrepresentable.
pub type Dimension = NonZero<Coord>;

/// A location `(row, col)` on a board. The top left corner is `Location(0, 0)`.
#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
pub struct Location(pub Coord, pub Coord);

/// A signed `(row, col)` displacement, such as a single knight jump.
#[derive(Clone, Eq, Hash, Copy, PartialEq, Debug)]
pub struct Offset(pub isize, pub isize);

impl Location {
    pub(crate) fn as_index(&self) -> (Ix, Ix) {
        (self.0, self.1)
    }

    /// Displace this location by `rhs`.
    ///
    /// Stepping off the top or left edge wraps around to an index no board can hold,
    /// so the result is always safe to hand to a bounds check.
    pub fn offset_by(self, rhs: Offset) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }
}

impl Add<Offset> for Location {
    type Output = Location;

    fn add(self, rhs: Offset) -> Self::Output {
        self.offset_by(rhs)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl FromStr for Location {
    type Err = BoardError;

    /// Parse `"row,col"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || BoardError::Malformed(s.to_owned());
        let (row, col) = s.split_once(',').ok_or_else(malformed)?;

        Ok(Self(
            row.trim().parse().map_err(|_| malformed())?,
            col.trim().parse().map_err(|_| malformed())?,
        ))
    }
}

/// Board dimensions as `rows x cols`, e.g. `"5x5"`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct BoardSize {
    /// Number of ranks.
    pub rows: Dimension,
    /// Number of files.
    pub cols: Dimension,
}

impl BoardSize {
    /// Validate a pair of raw dimensions.
    pub fn new(rows: Coord, cols: Coord) -> Result<Self, BoardError> {
        match (NonZero::new(rows), NonZero::new(cols)) {
            (Some(rows), Some(cols)) => Ok(Self { rows, cols }),
            _ => Err(BoardError::InvalidSize { rows, cols }),
        }
    }

    /// Number of squares on the board.
    pub fn area(&self) -> usize {
        self.rows.get() * self.cols.get()
    }

    /// Whether `location` lies on a board of this size.
    pub fn contains(&self, location: Location) -> bool {
        location.0 < self.rows.get() && location.1 < self.cols.get()
    }
}

impl Display for BoardSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl FromStr for BoardSize {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || BoardError::Malformed(s.to_owned());
        let (rows, cols) = s.split_once('x').ok_or_else(malformed)?;
        let rows = rows.trim().parse::<Coord>().map_err(|_| malformed())?;
        let cols = cols.trim().parse::<Coord>().map_err(|_| malformed())?;

        Self::new(rows, cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_off_the_top_left_never_fits() {
        let size = BoardSize::new(8, 8).unwrap();
        let wrapped = Location(0, 1) + Offset(-1, -2);
        assert!(!size.contains(wrapped));
        assert_eq!(Location(2, 3) + Offset(-1, 2), Location(1, 5));
    }

    #[test]
    fn parse_board_size() {
        assert_eq!("5x6".parse::<BoardSize>().unwrap(), BoardSize::new(5, 6).unwrap());
        assert!(matches!("0x5".parse::<BoardSize>(), Err(BoardError::InvalidSize { rows: 0, cols: 5 })));
        assert!(matches!("5".parse::<BoardSize>(), Err(BoardError::Malformed(_))));
        assert!(matches!("ax5".parse::<BoardSize>(), Err(BoardError::Malformed(_))));
        assert!(matches!("-1x5".parse::<BoardSize>(), Err(BoardError::Malformed(_))));
    }

    #[test]
    fn parse_location() {
        assert_eq!("2, 3".parse::<Location>().unwrap(), Location(2, 3));
        assert!("2;3".parse::<Location>().is_err());
    }
}
