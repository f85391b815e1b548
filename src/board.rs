use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::{Array2, ArrayView2};
use strum::VariantArray;
use thiserror::Error;

use crate::location::{BoardSize, Coord, Dimension, Location};
use crate::shape::{KnightStep, Side, Step};

/// Visit order of a square; `0` means the square has not been visited.
pub type VisitOrder = usize;

/// Ranks or files, counted from an edge, that still count as "at" that edge.
const BORDER_DEPTH: Coord = 2;

/// Reasons a board could not be set up.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum BoardError {
    /// One of the dimensions was zero.
    #[error("board must be at least 1x1, got {rows}x{cols}")]
    InvalidSize {
        /// Requested ranks.
        rows: Coord,
        /// Requested files.
        cols: Coord,
    },
    /// The input could not be read as a size or location at all.
    #[error("could not parse {0:?}; expected e.g. 5x5 for a size or 0,0 for a square")]
    Malformed(String),
    /// The starting square does not lie on the board.
    #[error("origin {origin} is outside a {size} board")]
    OriginOutOfBounds {
        /// The rejected square.
        origin: Location,
        /// The board it was checked against.
        size: BoardSize,
    },
}

/// A rectangular board recording the order in which a knight visited each square.
///
/// The board only records and reverses moves; it never chooses them.
/// Every square holding a nonzero value was visited, and those values are exactly `1..=visits`.
#[derive(Clone, Debug)]
pub struct Board {
    cells: Array2<VisitOrder>,
    size: BoardSize,
    knight: Option<Location>,
    visits: usize,
    // squares the knight stood on before each move, most recent last
    undo_stack: Vec<Location>,
    operations: u64,
}

impl Board {
    /// An empty `rows` by `cols` board, failing with [`BoardError::InvalidSize`] if either is zero.
    pub fn new(rows: Coord, cols: Coord) -> Result<Self, BoardError> {
        BoardSize::new(rows, cols).map(Self::with_size)
    }

    /// An empty board with the given, already valid, dimensions in `(rows, cols)` order.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self::with_size(BoardSize { rows: dims.0, cols: dims.1 })
    }

    /// An empty board of `size`.
    pub fn with_size(size: BoardSize) -> Self {
        Self {
            cells: Array2::zeros((size.rows.get(), size.cols.get())),
            size,
            knight: None,
            visits: 0,
            undo_stack: Vec::with_capacity(size.area()),
            operations: 0,
        }
    }

    /// Place or move the knight onto `target`, recording it as the next visited square.
    ///
    /// `target` must be on the board and unvisited; take it from [`Self::find_moves`] or [`Self::find_moves_from`].
    pub fn move_knight(&mut self, target: Location) {
        debug_assert!(self.size.contains(target), "knight moved off the board to {target}");
        debug_assert_eq!(self.cells[target.as_index()], 0, "knight moved onto visited square {target}");

        if let Some(previous) = self.knight {
            self.undo_stack.push(previous);
        }

        self.visits += 1;
        self.cells[target.as_index()] = self.visits;
        self.knight = Some(target);
        self.operations += 1;
    }

    /// Reverse the most recent [`Self::move_knight`].
    ///
    /// Does nothing if there is no earlier square to return to, including right after the first placement.
    pub fn undo_move(&mut self) {
        let Some(previous) = self.undo_stack.pop() else {
            return;
        };

        if let Some(current) = self.knight {
            self.cells[current.as_index()] = 0;
        }
        self.visits -= 1;
        self.knight = Some(previous);
        self.operations += 1;
    }

    /// Take the knight off its starting square, leaving the board empty.
    ///
    /// Only meaningful once every later move has been undone; otherwise does nothing.
    pub fn lift_knight(&mut self) {
        if !self.undo_stack.is_empty() {
            return;
        }

        if let Some(origin) = self.knight.take() {
            self.cells[origin.as_index()] = 0;
            self.visits = 0;
        }
    }

    /// Every unvisited square one knight jump away from `origin`, in [`KnightStep`] order.
    pub fn find_moves_from(&self, origin: Location) -> Vec<Location> {
        KnightStep::VARIANTS.iter()
            .map(|step| step.attempt_from(origin))
            .filter(|target| self.is_open(*target))
            .collect_vec()
    }

    /// [`Self::find_moves_from`] the knight's square; empty if the knight has not been placed.
    pub fn find_moves(&self) -> Vec<Location> {
        match self.knight {
            Some(knight) => self.find_moves_from(knight),
            None => Vec::new(),
        }
    }

    /// Whether the knight stands within the two outermost ranks or files along `side`.
    pub fn in_border(&self, side: Side) -> bool {
        let Some(Location(row, col)) = self.knight else {
            return false;
        };

        match side {
            Side::Up => row < BORDER_DEPTH,
            Side::Down => row + BORDER_DEPTH >= self.size.rows.get(),
            Side::Left => col < BORDER_DEPTH,
            Side::Right => col + BORDER_DEPTH >= self.size.cols.get(),
        }
    }

    #[inline]
    fn is_open(&self, location: Location) -> bool {
        self.cells.get(location.as_index()).is_some_and(|order| *order == 0)
    }

    /// The board's dimensions.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Number of ranks.
    pub fn rows(&self) -> Coord {
        self.size.rows.get()
    }

    /// Number of files.
    pub fn cols(&self) -> Coord {
        self.size.cols.get()
    }

    /// Number of squares.
    pub fn area(&self) -> usize {
        self.size.area()
    }

    /// Squares visited so far, including the one the knight stands on.
    pub fn visits(&self) -> usize {
        self.visits
    }

    /// Whether every square has been visited.
    pub fn is_complete(&self) -> bool {
        self.visits == self.area()
    }

    /// Where the knight stands, if it has been placed.
    pub fn knight(&self) -> Option<Location> {
        self.knight
    }

    /// Moves and undos applied to this board so far.
    pub fn operations(&self) -> u64 {
        self.operations
    }

    /// Number of moves that [`Self::undo_move`] could still reverse.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// The visit order at `location`, or [`None`] off the board.
    pub fn get(&self, location: Location) -> Option<VisitOrder> {
        self.cells.get(location.as_index()).copied()
    }

    /// Read-only view of the grid, indexed `[row, col]`.
    pub fn cells(&self) -> ArrayView2<'_, VisitOrder> {
        self.cells.view()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // one column of padding beyond the widest visit number
        let width = self.visits.max(1).to_string().len() + 1;

        for row in self.cells.rows() {
            writeln!(f, "|{}|", row.iter().map(|order| format!("{order:>width$}")).join("|"))?;
        }

        Ok(())
    }
}
