use clap::Parser;
use log::error;
use std::process::ExitCode;

mod cli;

/*-------------------------------------------------------------------------------------------------
  Main
-------------------------------------------------------------------------------------------------*/

fn main() -> ExitCode {
    let args = cli::Args::parse();

    if let Err(error) = stderrlog::new()
        .module(module_path!())
        .verbosity(args.verbose.log_level_filter())
        .init()
    {
        eprintln!("Unable to initialize logging: {error}");
    }

    cli::core::run(&args).unwrap_or_else(|error| {
        error!("{error}");
        ExitCode::FAILURE
    })
}
