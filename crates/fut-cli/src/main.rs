use fut_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // File logging first; stderr-only if the state dir is unwritable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("fut error: {:#}", err);
        std::process::exit(1);
    }
}
