//! Chess Interop Tests
//!
//! FEN loading, bitboard conversion, and shakmaty's attack tables used as an
//! independent oracle for queen and rook conflicts on 8x8 boards.

use queens_board::core::{Board, BoardError};
use shakmaty::{Bitboard, Square, attacks};

const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// True if some piece lies on another's lines, ignoring blockers.
fn oracle(occupancy: Bitboard, lines: fn(Square, Bitboard) -> Bitboard) -> bool {
    (0..64u32).filter(|&i| (occupancy.0 >> i) & 1 == 1).any(|i| {
        let others = Bitboard(occupancy.0 & !(1u64 << i));
        !(lines(Square::new(i), Bitboard(0)) & others).is_empty()
    })
}

fn random_occupancy(pieces: usize) -> Bitboard {
    let mut bits = 0u64;
    for _ in 0..pieces {
        bits |= 1u64 << (rand::random::<u64>() % 64);
    }
    Bitboard(bits)
}

// ============================================================================
// FEN Tests
// ============================================================================

#[test]
fn test_fen_startpos() {
    let board = Board::from_fen_placement(STARTPOS).unwrap();
    assert_eq!(board.size(), 8);
    assert_eq!(board.piece_count(), 32);
    for row in [0, 1, 6, 7] {
        assert!(board.rows()[row].iter().all(|&c| c == 1));
    }
    for row in 2..6 {
        assert!(board.rows()[row].iter().all(|&c| c == 0));
    }
    assert!(board.has_any_row_conflicts());
    assert!(board.has_any_col_conflicts());
}

#[test]
fn test_full_fen_is_accepted() {
    let fen = "8/8/8/3Q4/8/8/8/8 w - - 0 1";
    let board = Board::from_fen_placement(fen).unwrap();
    assert_eq!(board.piece_count(), 1);
    // rank 5 is row 3, file d is column 3
    assert_eq!(board.cell(3, 3), Some(1));
    assert!(!board.has_any_queens_conflicts());
}

#[test]
fn test_fen_errors() {
    assert!(matches!(Board::from_fen_placement(""), Err(BoardError::Fen(_))));
    assert!(matches!(Board::from_fen_placement("8/8/x"), Err(BoardError::Fen(_))));
}

#[test]
fn test_fen_eight_queens() {
    // One of the 92 solutions
    let board = Board::from_fen_placement("Q7/4Q3/7Q/5Q2/2Q5/6Q1/1Q6/3Q4").unwrap();
    assert_eq!(board.piece_count(), 8);
    assert!(!board.has_any_queens_conflicts());
}

// ============================================================================
// Bitboard Tests
// ============================================================================

#[test]
fn test_startpos_occupancy() {
    let board = Board::from_fen_placement(STARTPOS).unwrap();
    assert_eq!(board.occupancy(), Some(Bitboard(0xFFFF_0000_0000_FFFF)));
}

#[test]
fn test_corner_mapping() {
    // a1 is the bottom-left square: last row, first column
    let board = Board::from_occupancy(Bitboard(1));
    assert_eq!(board.cell(7, 0), Some(1));
    // h8 is the top-right square
    let board = Board::from_occupancy(Bitboard(1 << 63));
    assert_eq!(board.cell(0, 7), Some(1));
}

#[test]
fn test_occupancy_round_trip() {
    for _ in 0..50 {
        let occupancy = random_occupancy(12);
        assert_eq!(Board::from_occupancy(occupancy).occupancy(), Some(occupancy));
    }
}

#[test]
fn test_occupancy_needs_eight_by_eight() {
    assert_eq!(Board::from_size(5).occupancy(), None);
    assert_eq!(Board::from_size(5).try_occupancy(), Err(BoardError::NotChessSized(5)));
    assert_eq!(Board::from_size(8).try_occupancy(), Ok(Bitboard(0)));
}

// ============================================================================
// Attack Oracle Tests
// ============================================================================

#[test]
fn test_queen_conflicts_match_attack_tables() {
    for pieces in 0..12 {
        for _ in 0..25 {
            let occupancy = random_occupancy(pieces);
            let board = Board::from_occupancy(occupancy);
            assert_eq!(
                board.has_any_queens_conflicts(),
                oracle(occupancy, attacks::queen_attacks),
                "{:?}",
                board
            );
            assert_eq!(
                board.has_any_rooks_conflicts(),
                oracle(occupancy, attacks::rook_attacks),
                "{:?}",
                board
            );
        }
    }
}

#[test]
fn test_queen_on_cell_matches_rays() {
    for _ in 0..100 {
        let occupancy = random_occupancy(6);
        let board = Board::from_occupancy(occupancy);
        let pieces: Vec<Square> = (0..64u32)
            .filter(|&i| (occupancy.0 >> i) & 1 == 1)
            .map(Square::new)
            .collect();
        for row in 0..8 {
            for col in 0..8 {
                let cell = Square::new(((7 - row) * 8 + col) as u32);
                // two pieces whose full line passes through the cell
                let expected = pieces.iter().enumerate().any(|(i, &a)| {
                    pieces[i + 1..].iter().any(|&b| attacks::ray(a, b).contains(cell))
                });
                assert_eq!(board.has_any_queen_conflicts_on(row, col), expected, "{:?}", board);
            }
        }
    }
}
