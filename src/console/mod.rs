//! Text console
//!
//! A line-oriented front end that edits a board and reports its conflicts.

pub mod protocol;

pub use protocol::{CommandError, Console, Flow};
