//! Interop with chess positions for 8×8 boards
//!
//! Row 0 is rank 8 and column 0 is file a, so a board prints the way a
//! chess diagram reads. Every chess piece, whatever its kind or color,
//! becomes an occupied cell.

use super::board::Board;
use super::error::BoardError;
use shakmaty::Bitboard;

pub const CHESS_SIZE: usize = 8;

/// Bit index of `(row, col)` in a shakmaty bitboard (a1 = 0, h8 = 63)
#[inline]
const fn square_index(row: usize, col: usize) -> usize {
    (CHESS_SIZE - 1 - row) * CHESS_SIZE + col
}

impl Board {
    /// Create an 8×8 board with a piece on every square set in `occupancy`
    pub fn from_occupancy(occupancy: Bitboard) -> Self {
        let grid = (0..CHESS_SIZE)
            .map(|row| {
                (0..CHESS_SIZE)
                    .map(|col| ((occupancy.0 >> square_index(row, col)) & 1) as u8)
                    .collect()
            })
            .collect();
        Board::from_matrix(grid)
    }

    /// Parse the piece placement of a FEN string. A full FEN is accepted;
    /// only its first field is read.
    pub fn from_fen_placement(fen: &str) -> Result<Self, BoardError> {
        let placement = fen
            .split_whitespace()
            .next()
            .ok_or_else(|| BoardError::Fen("empty string".to_string()))?;
        let position = placement
            .parse::<shakmaty::Board>()
            .map_err(|e| BoardError::Fen(e.to_string()))?;
        Ok(Self::from_occupancy(position.occupied()))
    }

    /// Occupied squares as a bitboard, `None` unless the board is 8×8
    pub fn occupancy(&self) -> Option<Bitboard> {
        if self.size() != CHESS_SIZE {
            return None;
        }
        let mut bits = 0u64;
        for (row, cells) in self.rows().iter().enumerate() {
            for (col, &cell) in cells.iter().take(CHESS_SIZE).enumerate() {
                if cell != 0 {
                    bits |= 1u64 << square_index(row, col);
                }
            }
        }
        Some(Bitboard(bits))
    }

    /// Like [`Board::occupancy`] but reports the wrong size as an error
    pub fn try_occupancy(&self) -> Result<Bitboard, BoardError> {
        self.occupancy().ok_or(BoardError::NotChessSized(self.size()))
    }
}
