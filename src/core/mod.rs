//! Core board types
//!
//! This module contains the conflict-detection engine:
//! - Board grid and conflict queries
//! - Coordinates and diagonal ids
//! - Change notification
//! - Chess position interop for 8×8 boards

pub mod board;
pub mod chess;
pub mod coords;
pub mod error;
pub mod observer;

pub use board::{Board, BoardSpec, ConflictReport, Row};
pub use chess::CHESS_SIZE;
pub use coords::{Coord, major_diagonal_ids, minor_diagonal_ids};
pub use error::{BoardError, USAGE};
pub use observer::BoardEvent;
