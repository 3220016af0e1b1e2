use clap::Parser;
use lines_cli::args::Args;
use lines_cli::{logging, presentation};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init(args.log_level()) {
        presentation::print_error(&mut std::io::stderr().lock(), &e);
        return e.exit_code();
    }

    match lines_cli::run(args) {
        Ok(code) => code,
        Err(e) => {
            presentation::print_error(&mut std::io::stderr().lock(), &e);
            e.exit_code()
        }
    }
}
