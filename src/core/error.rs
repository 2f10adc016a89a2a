//! Board errors

use thiserror::Error;

/// The two ways a board can be constructed, shown when neither was given.
pub const USAGE: &str = "construct a Board in one of the following formats:
  1. BoardSpec::Size(n) - an empty n x n board, e.g. Board::new(Some(BoardSpec::Size(5)))
  2. BoardSpec::Matrix(rows) - a populated board, e.g. Board::new(Some(BoardSpec::Matrix(vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]])))";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("no board argument given; {}", USAGE)]
    MissingArgument,

    #[error("board size must be at least 1")]
    ZeroSize,

    #[error("cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("matrix has no rows")]
    EmptyMatrix,

    #[error("row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },

    #[error("cell ({row}, {col}) holds {value}, expected 0 or 1")]
    NonBinary { row: usize, col: usize, value: u8 },

    #[error("invalid FEN: {0}")]
    Fen(String),

    #[error("chess interop needs an 8x8 board, this one is {0}x{0}")]
    NotChessSized(usize),
}
