use brandkit_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Log to the XDG state file; stderr at warn keeps stdout clean for exports.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("brandkit error: {:#}", err);
        std::process::exit(1);
    }
}
