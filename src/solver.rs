use log::{debug, info, trace};
use strum::{Display, EnumString, VariantArray};
use thiserror::Error;

use crate::board::{Board, BoardError};
use crate::location::{BoardSize, Location};
use crate::shape::{Side, MAX_KNIGHT_DEGREE};

/// Larger than any degree a knight's square can have; marks "no candidate yet".
const UNSET_DEGREE: usize = MAX_KNIGHT_DEGREE + 1;

/// How a [`Solver`] looks for a tour.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Display, EnumString, VariantArray)]
pub enum Strategy {
    /// Depth-first backtracking over every move; finds a tour whenever one exists.
    #[default]
    #[strum(serialize = "dumb")]
    Exhaustive,
    /// Backtracking that only accepts tours ending next to the configured [`Side`].
    #[strum(serialize = "stubborn")]
    BorderEnd,
    /// Warnsdorff's rule: always jump to the square with the fewest onward moves. Never backtracks.
    #[strum(serialize = "smart")]
    Warnsdorff,
}

/// Reasons a [`Solver`] may fail.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum SolverFailure {
    /// Every move sequence from the origin was tried and none was accepted.
    /// The board was unwound back to empty.
    #[error("no tour found after exhausting the search ({operations} moves and undos)")]
    Exhausted {
        /// Moves and undos applied before giving up.
        operations: u64,
    },
}

/// Searches for knight's tours on boards of one size.
///
/// Every call to a `solve` method works on a fresh [`Board`], so one solver may be reused freely.
#[derive(Clone, Debug)]
pub struct Solver {
    size: BoardSize,
    origin: Location,
    border: Side,
    debug: bool,
}

impl From<BoardSize> for Solver {
    fn from(size: BoardSize) -> Self {
        Self {
            size,
            origin: Location(0, 0),
            border: Side::Down,
            debug: false,
        }
    }
}

impl Solver {
    /// Set the square the knight starts on. Defaults to the top left corner.
    ///
    /// Fails with [`BoardError::OriginOutOfBounds`] if `origin` is not on the board.
    pub fn origin(&mut self, origin: Location) -> Result<&mut Self, BoardError> {
        if !self.size.contains(origin) {
            return Err(BoardError::OriginOutOfBounds { origin, size: self.size });
        }

        self.origin = origin;
        Ok(self)
    }

    /// Set the edge that [`Strategy::BorderEnd`] tours must finish next to. Defaults to [`Side::Down`].
    pub fn border(&mut self, side: Side) -> &mut Self {
        self.border = side;
        self
    }

    /// Log every complete tour that [`Strategy::BorderEnd`] turns down.
    pub fn debug(&mut self, debug: bool) -> &mut Self {
        self.debug = debug;
        self
    }

    /// Run `strategy`, returning the board with the tour on it.
    ///
    /// The backtracking strategies fail with [`SolverFailure::Exhausted`] when no tour exists.
    /// [`Strategy::Warnsdorff`] never fails; check [`Board::is_complete`] on its result.
    pub fn solve(&self, strategy: Strategy) -> Result<Board, SolverFailure> {
        debug!("solving {} from {} using {:?}", self.size, self.origin, strategy);

        let result = match strategy {
            Strategy::Exhaustive => self.solve_full(),
            Strategy::BorderEnd => self.solve_border_end(),
            Strategy::Warnsdorff => Ok(self.solve_heuristic()),
        };

        match &result {
            Ok(board) => debug!("visited {} of {} squares in {} operations", board.visits(), board.area(), board.operations()),
            Err(failure) => debug!("{failure}"),
        }

        result
    }

    /// Backtrack until every square is visited.
    pub fn solve_full(&self) -> Result<Board, SolverFailure> {
        self.backtrack(Board::is_complete).map_err(exhausted)
    }

    /// Backtrack until every square is visited and the knight finishes within two ranks or files of the border side.
    pub fn solve_border_end(&self) -> Result<Board, SolverFailure> {
        self.backtrack(|board| {
            if !board.is_complete() {
                return false;
            }
            if board.in_border(self.border) {
                return true;
            }

            if self.debug {
                if let Some(knight) = board.knight() {
                    info!("rejecting tour ending at {knight}, too far from the {} edge:\n{board}", self.border);
                }
            }
            false
        })
        .map_err(exhausted)
    }

    /// Follow Warnsdorff's rule for at most twice as many steps as there are squares.
    ///
    /// Each step goes to the reachable square with the fewest onward moves, the earliest in [`KnightStep`](crate::shape::KnightStep) order on ties.
    /// Squares with no onward moves are skipped unless only one square remains to visit.
    /// If every candidate was skipped the knight takes the first available move and stops.
    pub fn solve_heuristic(&self) -> Board {
        let mut board = Board::with_size(self.size);
        board.move_knight(self.origin);

        for _ in 0..board.area() * 2 {
            if board.is_complete() {
                break;
            }

            let moves = board.find_moves();
            let Some(&first) = moves.first() else {
                break;
            };

            match fewest_onward_moves(&board, &moves) {
                Some(next) => board.move_knight(next),
                None => {
                    trace!("every move after {} visits is a dead end, taking {first}", board.visits());
                    board.move_knight(first);
                    break;
                }
            }
        }

        board
    }

    /// Depth-first search from the origin, trying moves in generation order and undoing on dead ends.
    ///
    /// Frames live on the heap, one per tentative move, so the search depth is bounded by the board's area rather than the thread's stack.
    /// On failure the board comes back unwound to empty.
    pub(crate) fn backtrack(&self, mut accept: impl FnMut(&Board) -> bool) -> Result<Board, Board> {
        let mut board = Board::with_size(self.size);
        board.move_knight(self.origin);
        if accept(&board) {
            return Ok(board);
        }

        // untried moves from each square on the current path
        let mut frames = vec![board.find_moves().into_iter()];

        while let Some(candidates) = frames.last_mut() {
            match candidates.next() {
                Some(target) => {
                    board.move_knight(target);
                    if accept(&board) {
                        return Ok(board);
                    }
                    frames.push(board.find_moves().into_iter());
                }
                None => {
                    frames.pop();
                    if frames.is_empty() {
                        board.lift_knight();
                    } else {
                        board.undo_move();
                    }
                }
            }
        }

        Err(board)
    }
}

fn exhausted(board: Board) -> SolverFailure {
    SolverFailure::Exhausted { operations: board.operations() }
}

/// The candidate with the fewest onward moves, skipping dead ends unless the next move is the last.
fn fewest_onward_moves(board: &Board, candidates: &[Location]) -> Option<Location> {
    let last_move = board.visits() + 1 == board.area();

    let mut best = None;
    let mut min_degree = UNSET_DEGREE;
    for candidate in candidates {
        let degree = board.find_moves_from(*candidate).len();
        if degree == 0 && !last_move {
            continue;
        }
        // strictly fewer, so the earliest candidate keeps a tie
        if degree < min_degree {
            min_degree = degree;
            best = Some(*candidate);
        }
    }

    if let Some(next) = best {
        trace!("jumping to {next} with {min_degree} onward moves");
    }
    best
}
