//! queens_board console

use clap::Parser;
use queens_board::config::Config;
use queens_board::console::Console;
use queens_board::logging;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = Config::parse();
    if let Err(e) = logging::init(config.log_level()) {
        eprintln!("warning: logging disabled: {}", e);
    }

    println!("queens_board v0.1.0 - N-Queens conflict checker");
    println!("Type 'help' for commands, 'd' to display the board, 'quit' to exit");

    let mut console = Console::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(e) = console.run(stdin.lock(), &mut stdout) {
        log::error!("console stopped: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
