//! rollcall entry point
//!
//! Everything is delegated to the CLI module; this only reports a fatal
//! error and sets the exit status.

use rollcall::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
