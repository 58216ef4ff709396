use std::{
    io,
    process::ExitCode,
};

use clap::Parser;
use land_cli::{
    cli::{
        run,
        Cli,
    },
    logs::log_error,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log_error("land-cli", format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
