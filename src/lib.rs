pub mod config;
pub mod console;
pub mod core;
pub mod logging;

pub use crate::core::{Board, BoardError, BoardEvent, BoardSpec, ConflictReport, Coord};
pub use config::Config;
pub use console::Console;
pub use shakmaty;
