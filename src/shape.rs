use strum::{Display, EnumString, VariantArray};

use crate::location::{Location, Offset};

/// A displacement a piece may make in one move.
///
/// The order of [`VariantArray::VARIANTS`] is the order in which moves are generated,
/// and with it the order in which searches try them.
pub trait Step: Sized + Copy + VariantArray + PartialEq + Eq {
    /// The displacement this step describes.
    fn offset(&self) -> Offset;

    /// Attempt the step from `location` and return the resultant [`Location`].
    /// The result may lie off the board.
    fn attempt_from(&self, location: Location) -> Location {
        location + self.offset()
    }
}

/// The eight knight jumps.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug)]
pub enum KnightStep {
    /// One rank down, two files right.
    DownRightRight,
    /// Two ranks down, one file right.
    DownDownRight,
    /// One rank down, two files left.
    DownLeftLeft,
    /// Two ranks down, one file left.
    DownDownLeft,
    /// One rank up, two files left.
    UpLeftLeft,
    /// Two ranks up, one file left.
    UpUpLeft,
    /// One rank up, two files right.
    UpRightRight,
    /// Two ranks up, one file right.
    UpUpRight,
}

impl Step for KnightStep {
    fn offset(&self) -> Offset {
        match self {
            Self::DownRightRight => Offset(1, 2),
            Self::DownDownRight => Offset(2, 1),
            Self::DownLeftLeft => Offset(1, -2),
            Self::DownDownLeft => Offset(2, -1),
            Self::UpLeftLeft => Offset(-1, -2),
            Self::UpUpLeft => Offset(-2, -1),
            Self::UpRightRight => Offset(-1, 2),
            Self::UpUpRight => Offset(-2, 1),
        }
    }
}

/// Most squares a knight can ever reach in one move.
pub const MAX_KNIGHT_DEGREE: usize = KnightStep::VARIANTS.len();

/// An edge of the board.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    /// Row 0.
    Up,
    /// The last row.
    Down,
    /// Column 0.
    Left,
    /// The last column.
    Right,
}
