//! Board representation and conflict queries
//!
//! A board is an n×n grid of cells. A cell holding 0 is empty, any other
//! value is occupied. Two or more occupied cells on the same row, column or
//! diagonal are a conflict.

use super::coords::{Coord, major_diagonal_ids, minor_diagonal_ids};
use super::error::{BoardError, USAGE};
use super::observer::{BoardEvent, Observers};
use crossbeam_channel::Receiver;
use log::{debug, trace, warn};
use std::fmt;

/// One row of cells
pub type Row = Vec<u8>;

/// Construction argument for [`Board::new`]
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum BoardSpec {
    /// An empty n×n board
    Size(usize),
    /// A populated board, adopted as-is
    Matrix(Vec<Row>),
}

/// Every line currently in conflict
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ConflictReport {
    pub rows: Vec<usize>,
    pub cols: Vec<usize>,
    pub major_diagonals: Vec<isize>,
    pub minor_diagonals: Vec<isize>,
}

impl ConflictReport {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
            && self.cols.is_empty()
            && self.major_diagonals.is_empty()
            && self.minor_diagonals.is_empty()
    }

    pub fn has_rooks_conflicts(&self) -> bool {
        !self.rows.is_empty() || !self.cols.is_empty()
    }
}

impl fmt::Display for ConflictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "no conflicts");
        }
        writeln!(f, "rows:            {:?}", self.rows)?;
        writeln!(f, "cols:            {:?}", self.cols)?;
        writeln!(f, "major diagonals: {:?}", self.major_diagonals)?;
        write!(f, "minor diagonals: {:?}", self.minor_diagonals)
    }
}

/// An n×n grid of pieces
pub struct Board {
    size: usize,
    grid: Vec<Row>,
    observers: Observers,
}

impl Board {
    /// Build a board from an optional construction argument.
    ///
    /// `None` is a usage error: the two valid forms are logged and returned
    /// in the error message.
    pub fn new(spec: Option<BoardSpec>) -> Result<Self, BoardError> {
        match spec {
            None => {
                warn!("{}", USAGE);
                Err(BoardError::MissingArgument)
            }
            Some(BoardSpec::Size(0)) => Err(BoardError::ZeroSize),
            Some(BoardSpec::Size(n)) => Ok(Self::from_size(n)),
            Some(BoardSpec::Matrix(matrix)) => Ok(Self::from_matrix(matrix)),
        }
    }

    /// Create an empty n×n board
    pub fn from_size(size: usize) -> Self {
        debug!("new empty board, size {}", size);
        Board {
            size,
            grid: vec![vec![0; size]; size],
            observers: Observers::new(),
        }
    }

    /// Adopt `matrix` as the grid; the size is its row count.
    ///
    /// The shape is not checked. A ragged or non-square matrix gives
    /// unspecified query results; use [`Board::try_from_matrix`] for input
    /// that is not known to be well formed.
    pub fn from_matrix(matrix: Vec<Row>) -> Self {
        let size = matrix.len();
        debug!("board adopted from {}-row matrix", size);
        Board {
            size,
            grid: matrix,
            observers: Observers::new(),
        }
    }

    /// Adopt `matrix` after checking it is non-empty, square and binary
    pub fn try_from_matrix(matrix: Vec<Row>) -> Result<Self, BoardError> {
        let size = matrix.len();
        if size == 0 {
            return Err(BoardError::EmptyMatrix);
        }
        for (row, cells) in matrix.iter().enumerate() {
            if cells.len() != size {
                return Err(BoardError::NotSquare { row, len: cells.len(), size });
            }
            if let Some((col, &value)) = cells.iter().enumerate().find(|&(_, &v)| v > 1) {
                return Err(BoardError::NonBinary { row, col, value });
            }
        }
        Ok(Self::from_matrix(matrix))
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The live grid, rows in index order
    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.grid
    }

    /// Cell value, or `None` off the board
    pub fn cell(&self, row: usize, col: usize) -> Option<u8> {
        if !Coord::new(row, col).in_bounds(self.size) {
            return None;
        }
        self.grid.get(row).and_then(|r| r.get(col)).copied()
    }

    #[inline]
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_some_and(|v| v != 0)
    }

    /// Number of occupied cells
    pub fn piece_count(&self) -> usize {
        self.grid.iter().map(|row| occupied(row.iter().copied())).sum()
    }

    /// Coordinates of every occupied cell, row by row
    pub fn pieces(&self) -> Vec<Coord> {
        self.grid
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &v)| v != 0)
                    .map(move |(c, _)| Coord::new(r, c))
            })
            .collect()
    }

    // Row queries

    /// Check if `row` holds two or more pieces
    ///
    /// # Panics
    /// If `row >= size`.
    pub fn has_row_conflict_at(&self, row: usize) -> bool {
        self.check_row(row);
        occupied(self.grid[row].iter().copied()) > 1
    }

    pub fn has_any_row_conflicts(&self) -> bool {
        (0..self.size).any(|r| self.has_row_conflict_at(r))
    }

    // Column queries

    /// Check if `col` holds two or more pieces
    ///
    /// # Panics
    /// If `col >= size`.
    pub fn has_col_conflict_at(&self, col: usize) -> bool {
        self.check_col(col);
        occupied(self.grid.iter().filter_map(|row| row.get(col).copied())) > 1
    }

    pub fn has_any_col_conflicts(&self) -> bool {
        (0..self.size).any(|c| self.has_col_conflict_at(c))
    }

    // Major diagonals (↘), id = col - row

    /// Check if the major diagonal `id` holds two or more pieces. Any id is
    /// accepted; cells off the board count as empty.
    pub fn has_major_diagonal_conflict_at(&self, id: isize) -> bool {
        occupied(self.diagonal(move |r| id.checked_add(r))) > 1
    }

    pub fn has_any_major_diagonal_conflicts(&self) -> bool {
        major_diagonal_ids(self.size).any(|id| self.has_major_diagonal_conflict_at(id))
    }

    // Minor diagonals (↙), id = col + row

    /// Check if the minor diagonal `id` holds two or more pieces. Any id is
    /// accepted; cells off the board count as empty.
    pub fn has_minor_diagonal_conflict_at(&self, id: isize) -> bool {
        occupied(self.diagonal(move |r| id.checked_sub(r))) > 1
    }

    pub fn has_any_minor_diagonal_conflicts(&self) -> bool {
        minor_diagonal_ids(self.size).any(|id| self.has_minor_diagonal_conflict_at(id))
    }

    // Whole board

    pub fn has_any_rooks_conflicts(&self) -> bool {
        self.has_any_row_conflicts() || self.has_any_col_conflicts()
    }

    /// Check every line through `(row, col)`. The cell itself need not be
    /// occupied.
    ///
    /// # Panics
    /// If the cell is off the board.
    pub fn has_any_queen_conflicts_on(&self, row: usize, col: usize) -> bool {
        let at = Coord::new(row, col);
        self.has_row_conflict_at(row)
            || self.has_col_conflict_at(col)
            || self.has_major_diagonal_conflict_at(at.major_diagonal())
            || self.has_minor_diagonal_conflict_at(at.minor_diagonal())
    }

    pub fn has_any_queens_conflicts(&self) -> bool {
        self.has_any_rooks_conflicts()
            || self.has_any_major_diagonal_conflicts()
            || self.has_any_minor_diagonal_conflicts()
    }

    /// Collect every conflicting line
    pub fn conflicts(&self) -> ConflictReport {
        ConflictReport {
            rows: (0..self.size).filter(|&r| self.has_row_conflict_at(r)).collect(),
            cols: (0..self.size).filter(|&c| self.has_col_conflict_at(c)).collect(),
            major_diagonals: major_diagonal_ids(self.size)
                .filter(|&id| self.has_major_diagonal_conflict_at(id))
                .collect(),
            minor_diagonals: minor_diagonal_ids(self.size)
                .filter(|&id| self.has_minor_diagonal_conflict_at(id))
                .collect(),
        }
    }

    // Mutation

    /// Flip the cell at `(row, col)` between empty and occupied, then notify
    /// observers. Returns the new cell value.
    pub fn toggle_piece(&mut self, row: usize, col: usize) -> Result<u8, BoardError> {
        let size = self.size;
        let out_of_bounds = BoardError::OutOfBounds { row, col, size };
        if !Coord::new(row, col).in_bounds(size) {
            return Err(out_of_bounds);
        }
        let cell = self
            .grid
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(out_of_bounds)?;
        *cell = u8::from(*cell == 0);
        let value = *cell;
        trace!("toggled ({}, {}) -> {}", row, col, value);
        self.observers.notify(BoardEvent::Changed);
        Ok(value)
    }

    /// Register a callback run after every toggle
    pub fn on_change<F>(&mut self, callback: F)
    where
        F: FnMut(BoardEvent) + 'static,
    {
        self.observers.on_change(callback);
    }

    /// Receive a [`BoardEvent::Changed`] after every toggle
    pub fn subscribe(&mut self) -> Receiver<BoardEvent> {
        self.observers.subscribe()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Cells along a diagonal; `col_of` maps a row index to the column the
    /// diagonal crosses it at.
    fn diagonal<F>(&self, col_of: F) -> impl Iterator<Item = u8> + '_
    where
        F: Fn(isize) -> Option<isize> + 'static,
    {
        let size = self.size;
        self.grid.iter().enumerate().filter_map(move |(r, row)| {
            let col = usize::try_from(col_of(r as isize)?).ok()?;
            if col < size { row.get(col).copied() } else { None }
        })
    }

    fn check_row(&self, row: usize) {
        assert!(
            row < self.size,
            "row index {} out of range for a {}x{} board",
            row,
            self.size,
            self.size
        );
    }

    fn check_col(&self, col: usize) {
        assert!(
            col < self.size,
            "column index {} out of range for a {}x{} board",
            col,
            self.size,
            self.size
        );
    }
}

/// Count occupied cells in a line
#[inline]
fn occupied<I: Iterator<Item = u8>>(cells: I) -> usize {
    cells.filter(|&v| v != 0).count()
}

impl Clone for Board {
    /// Copies the grid; observers stay with the original.
    fn clone(&self) -> Self {
        Board {
            size: self.size,
            grid: self.grid.clone(),
            observers: Observers::new(),
        }
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.grid == other.grid
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.size.saturating_sub(1).to_string().len();
        writeln!(f)?;
        for (r, row) in self.grid.iter().enumerate() {
            write!(f, "  {:>width$} ", r, width = width)?;
            for &cell in row {
                let mark = if cell != 0 { 'Q' } else { '.' };
                write!(f, "{:>width$} ", mark, width = width)?;
            }
            writeln!(f)?;
        }
        write!(f, "  {:>width$} ", "", width = width)?;
        for c in 0..self.size {
            write!(f, "{:>width$} ", c, width = width)?;
        }
        writeln!(f)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
