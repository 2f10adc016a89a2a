//! Cell coordinates and diagonal ids
//!
//! Diagonals are never stored; each one is named by an integer id derived
//! from any cell lying on it.

use std::fmt;
use std::ops::RangeInclusive;

/// Cell position, row 0 being the first row and col 0 the first column
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// Check whether the cell lies on an n×n board
    #[inline]
    pub const fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Id of the ↘ diagonal through this cell (`col - row`)
    #[inline]
    pub const fn major_diagonal(self) -> isize {
        self.col as isize - self.row as isize
    }

    /// Id of the ↙ diagonal through this cell (`col + row`)
    #[inline]
    pub const fn minor_diagonal(self) -> isize {
        self.col as isize + self.row as isize
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Every major diagonal id of an n×n board: `-(n-1) ..= n-1`
pub fn major_diagonal_ids(size: usize) -> RangeInclusive<isize> {
    let last = size as isize - 1;
    -last..=last
}

/// Every minor diagonal id of an n×n board: `0 ..= 2(n-1)`
pub fn minor_diagonal_ids(size: usize) -> RangeInclusive<isize> {
    let last = size as isize - 1;
    0..=2 * last
}
