#![warn(missing_docs)]

//! # `knights-tour`
//!
//! A solver for the [knight's tour](https://en.wikipedia.org/wiki/Knight%27s_tour) on rectangular boards of any size:
//! a sequence of knight jumps, starting from a fixed square, that visits every square exactly once.
//!
//! Describe the board with a [`BoardSize`], configure a [`Solver`] from it, then call [`solve()`](Solver::solve) with a [`Strategy`].
//! The result is a [`Board`] holding the order in which each square was visited, together with the number of moves and undos the search spent.
//!
//! # Strategies
//! - [`Strategy::Exhaustive`] is plain depth-first backtracking.
//!   It tries moves in a fixed order (see [`KnightStep`](shape::KnightStep)) and finds a tour whenever one exists, in time exponential in the board's area.
//! - [`Strategy::BorderEnd`] backtracks the same way but only accepts tours whose last square lies within two ranks or files of one edge,
//!   the kind of tour that could carry on onto a neighbouring board.
//! - [`Strategy::Warnsdorff`] follows Warnsdorff's rule, always jumping to the square with the fewest onward moves.
//!   It never backtracks, so it is fast but may stop short of a full tour.
//!
//! # Internals
//! A [`Board`] only records and reverses moves. Each move pushes the square the knight left onto an undo stack,
//! and the backtracking strategies undo on dead ends instead of cloning the board, so memory stays linear in the board's area.

pub use board::{Board, BoardError, VisitOrder};
pub use location::{BoardSize, Dimension, Location, Offset};
pub use solver::{Solver, SolverFailure, Strategy};

pub(crate) mod board;
pub(crate) mod location;
pub mod shape;
pub(crate) mod solver;
