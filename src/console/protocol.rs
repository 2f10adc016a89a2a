use crate::config::{Config, ConfigError, MAX_SIZE};
use crate::core::{Board, BoardError, BoardEvent, Coord};
use crossbeam_channel::Receiver;
use log::{debug, info};
use std::io::{self, BufRead, Write};
use thiserror::Error;

const HELP: &str = "commands:
  new <n>                 empty n x n board
  load <row> <row> ...    board from digit rows, e.g. load 100 001 010
  fen <placement>         8 x 8 board from a FEN piece placement
  toggle <row> <col>      place or remove a piece
  d | display             draw the board
  check                   list every conflict on the board
  queen <row> <col>       conflicts on the lines through a cell
  random <k>              clear the board and scatter k pieces
  set <name> <value>      change autodraw or verbose
  help                    this text
  quit                    leave";

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("board size {size} is larger than {max}")]
    TooLarge { size: usize, max: usize },

    #[error("cannot place {count} pieces on {cells} cells")]
    TooManyPieces { count: usize, cells: usize },

    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),
}

/// What the loop does after a command
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Flow {
    Continue,
    Quit,
}

/// Text front end for a board. It redraws whenever the board reports a
/// change, the way a rendering layer would.
pub struct Console {
    board: Board,
    config: Config,
    changes: Receiver<BoardEvent>,
}

impl Console {
    pub fn new(config: Config) -> Self {
        let mut board = Board::from_size(config.size.clamp(1, MAX_SIZE));
        let changes = board.subscribe();
        Console { board, config, changes }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            if self.handle_line(&line, out)? == Flow::Quit {
                break;
            }
            out.flush()?;
        }
        out.flush()
    }

    /// Run one command line. Command errors are written to `out`; only I/O
    /// errors are returned.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&first) = parts.first() else {
            return Ok(Flow::Continue);
        };

        let result = match first {
            "quit" | "exit" => return Ok(Flow::Quit),
            "help" => writeln!(out, "{}", HELP).map_err(Failure::from),
            "new" => self.cmd_new(&parts, out),
            "load" => self.cmd_load(&parts, out),
            "fen" => self.cmd_fen(&parts, out),
            "toggle" | "t" => self.cmd_toggle(&parts),
            "d" | "display" => self.cmd_display(out).map_err(Failure::from),
            "check" => self.cmd_check(out),
            "queen" => self.cmd_queen(&parts, out),
            "random" => self.cmd_random(&parts),
            "set" => self.cmd_set(&parts),
            other => Err(Failure::Command(CommandError::Unknown(other.to_string()))),
        };

        match result {
            Ok(()) => {}
            Err(Failure::Io(e)) => return Err(e),
            Err(Failure::Command(e)) => {
                debug!("command '{}' failed: {}", line.trim(), e);
                writeln!(out, "error: {}", e)?;
            }
        }

        self.redraw_if_changed(out)?;
        Ok(Flow::Continue)
    }

    fn cmd_new<W: Write>(&mut self, parts: &[&str], out: &mut W) -> Result<(), Failure> {
        let size = parse_arg(parts, 1, "new <n>")?;
        if size == 0 {
            return Err(BoardError::ZeroSize.into());
        }
        check_size(size)?;
        self.replace_board(Board::from_size(size), out)
    }

    fn cmd_load<W: Write>(&mut self, parts: &[&str], out: &mut W) -> Result<(), Failure> {
        const USAGE: &str = "load <row> <row> ... (rows of 0 and 1)";
        if parts.len() < 2 {
            return Err(CommandError::Usage(USAGE).into());
        }
        check_size(parts.len() - 1)?;
        let matrix = parts[1..]
            .iter()
            .map(|row| {
                row.chars()
                    .map(|c| c.to_digit(10).map(|d| d as u8))
                    .collect::<Option<Vec<u8>>>()
            })
            .collect::<Option<Vec<_>>>()
            .ok_or(CommandError::Usage(USAGE))?;
        let board = Board::try_from_matrix(matrix)?;
        self.replace_board(board, out)
    }

    fn cmd_fen<W: Write>(&mut self, parts: &[&str], out: &mut W) -> Result<(), Failure> {
        let placement = parts.get(1).ok_or(CommandError::Usage("fen <placement>"))?;
        let board = Board::from_fen_placement(placement)?;
        self.replace_board(board, out)
    }

    fn cmd_toggle(&mut self, parts: &[&str]) -> Result<(), Failure> {
        let row = parse_arg(parts, 1, "toggle <row> <col>")?;
        let col = parse_arg(parts, 2, "toggle <row> <col>")?;
        self.board.toggle_piece(row, col)?;
        Ok(())
    }

    fn cmd_display<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self.board)
    }

    fn cmd_check<W: Write>(&self, out: &mut W) -> Result<(), Failure> {
        let board = &self.board;
        writeln!(out, "pieces:           {}", board.piece_count())?;
        writeln!(out, "rows:             {}", yes_no(board.has_any_row_conflicts()))?;
        writeln!(out, "cols:             {}", yes_no(board.has_any_col_conflicts()))?;
        writeln!(out, "major diagonals:  {}", yes_no(board.has_any_major_diagonal_conflicts()))?;
        writeln!(out, "minor diagonals:  {}", yes_no(board.has_any_minor_diagonal_conflicts()))?;
        writeln!(out, "rooks:            {}", yes_no(board.has_any_rooks_conflicts()))?;
        writeln!(out, "queens:           {}", yes_no(board.has_any_queens_conflicts()))?;
        let report = board.conflicts();
        if !report.is_empty() {
            writeln!(out, "{}", report)?;
        }
        Ok(())
    }

    fn cmd_queen<W: Write>(&self, parts: &[&str], out: &mut W) -> Result<(), Failure> {
        let row = parse_arg(parts, 1, "queen <row> <col>")?;
        let col = parse_arg(parts, 2, "queen <row> <col>")?;
        let size = self.board.size();
        if !Coord::new(row, col).in_bounds(size) {
            return Err(BoardError::OutOfBounds { row, col, size }.into());
        }
        let conflict = self.board.has_any_queen_conflicts_on(row, col);
        writeln!(out, "queen conflicts on ({}, {}): {}", row, col, yes_no(conflict))?;
        Ok(())
    }

    /// Clear the board and toggle `k` distinct random cells. Each toggle
    /// notifies observers; the console redraws once afterwards.
    fn cmd_random(&mut self, parts: &[&str]) -> Result<(), Failure> {
        let count = parse_arg(parts, 1, "random <k>")?;
        let size = self.board.size();
        let cells = size * size;
        if count > cells {
            return Err(CommandError::TooManyPieces { count, cells }.into());
        }

        for at in self.board.pieces() {
            self.board.toggle_piece(at.row, at.col)?;
        }
        let mut free: Vec<usize> = (0..cells).collect();
        for _ in 0..count {
            let index = free.swap_remove(rand::random::<u64>() as usize % free.len());
            self.board.toggle_piece(index / size, index % size)?;
        }
        info!("scattered {} pieces on the {}x{} board", count, size, size);
        Ok(())
    }

    fn cmd_set(&mut self, parts: &[&str]) -> Result<(), Failure> {
        const USAGE: &str = "set <autodraw|verbose> <value>";
        let name = parts.get(1).ok_or(CommandError::Usage(USAGE))?;
        let value = parts.get(2).ok_or(CommandError::Usage(USAGE))?;
        if name.eq_ignore_ascii_case("size") {
            return Err(CommandError::Usage("new <n> (the size of the live board is fixed)").into());
        }
        self.config.set(name, value)?;
        crate::logging::set_verbose(self.config.verbose);
        Ok(())
    }

    fn replace_board<W: Write>(&mut self, mut board: Board, out: &mut W) -> Result<(), Failure> {
        self.changes = board.subscribe();
        self.board = board;
        let size = self.board.size();
        info!("new {}x{} board with {} pieces", size, size, self.board.piece_count());
        if self.config.autodraw {
            self.cmd_display(out)?;
        }
        Ok(())
    }

    /// Drain pending change notifications and redraw at most once
    fn redraw_if_changed<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let changed = self.changes.try_iter().count() > 0;
        if changed && self.config.autodraw {
            self.cmd_display(out)?;
        }
        Ok(())
    }
}

/// A command either fails with something to tell the user, or the output
/// itself broke.
#[derive(Debug)]
enum Failure {
    Command(CommandError),
    Io(io::Error),
}

impl From<io::Error> for Failure {
    fn from(e: io::Error) -> Self {
        Failure::Io(e)
    }
}

impl From<CommandError> for Failure {
    fn from(e: CommandError) -> Self {
        Failure::Command(e)
    }
}

impl From<BoardError> for Failure {
    fn from(e: BoardError) -> Self {
        Failure::Command(e.into())
    }
}

impl From<ConfigError> for Failure {
    fn from(e: ConfigError) -> Self {
        Failure::Command(e.into())
    }
}

fn parse_arg(parts: &[&str], index: usize, usage: &'static str) -> Result<usize, CommandError> {
    parts
        .get(index)
        .and_then(|s| s.parse().ok())
        .ok_or(CommandError::Usage(usage))
}

fn check_size(size: usize) -> Result<(), CommandError> {
    if size > MAX_SIZE {
        return Err(CommandError::TooLarge { size, max: MAX_SIZE });
    }
    Ok(())
}

fn yes_no(conflict: bool) -> &'static str {
    if conflict { "conflict" } else { "ok" }
}

impl Default for Console {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
