use crate::cli;
use ipcat::providers::{aws, text};
use ipcat::{Config, ConfigBuilder, Error, IntervalSet, Result};
use log::{error, info};
use std::fs;
use std::io::ErrorKind;
use std::process::ExitCode;

/*-------------------------------------------------------------------------------------------------
  Core functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Build configuration from environment and CLI arguments
--------------------------------------------------------------------------------------*/

pub fn build_config(args: &cli::Args) -> Config {
    let mut builder = ConfigBuilder::new();

    if let Some(csv_file) = &args.csv_file {
        builder.csv_file(csv_file);
    }
    if let Some(stats_file) = &args.stats_file {
        builder.stats_file(Some(stats_file));
    }
    if args.no_stats {
        builder.stats_file(None::<&str>);
    }

    builder.build()
}

/*--------------------------------------------------------------------------------------
  Run
--------------------------------------------------------------------------------------*/

pub fn run(args: &cli::Args) -> Result<ExitCode> {
    let config = build_config(args);
    let mut set = load(&config)?;

    if let Some(lookup) = &args.lookup {
        return match set.contains(lookup)? {
            Some(interval) => {
                cli::output::interval_table(&[interval]);
                Ok(ExitCode::SUCCESS)
            }
            None => {
                error!("Not found: {lookup}");
                Ok(ExitCode::FAILURE)
            }
        };
    }

    // Provider refreshes
    if let Some(path) = &args.aws_file {
        set.refresh(&aws::batch(&fs::read_to_string(path)?)?)?;
    }
    if let Some(path) = &args.cloudflare_file {
        set.refresh(&text::cloudflare(&fs::read_to_string(path)?))?;
    }
    if let Some(path) = &args.tor_file {
        set.refresh(&text::tor(&fs::read_to_string(path)?))?;
    }

    // Manual edits
    for name in args.delete_names.iter().flatten() {
        let removed = set.delete_by_name(name);
        info!("Deleted {removed} range(s) owned by {name:?}");
    }
    for add_cidr in args.add_cidrs.iter().flatten() {
        set.add_cidr(&add_cidr.cidr, &add_cidr.name, &add_cidr.url)?;
        info!("Range added successfully: {}", add_cidr.cidr);
    }

    // Statistics
    let rank = set.rank_by_size()?;
    if let Some(stats_file) = config.stats_file() {
        cli::csv::save_stats(&rank, stats_file)?;
        info!("Saved statistics for {} provider(s) to {:?}", rank.len(), stats_file);
    }
    if args.summary {
        cli::output::rank_table(&rank);
    }

    set.save(config.csv_file())?;

    Ok(ExitCode::SUCCESS)
}

/*--------------------------------------------------------------------------------------
  Helper Functions
--------------------------------------------------------------------------------------*/

/// Load the index; a missing CSV file is an empty index.
fn load(config: &Config) -> Result<IntervalSet> {
    match IntervalSet::load(config.csv_file()) {
        Err(Error::Io(error)) if error.kind() == ErrorKind::NotFound => {
            info!("{:?} not found; starting with an empty index", config.csv_file());
            Ok(IntervalSet::new())
        }
        result => result,
    }
}
