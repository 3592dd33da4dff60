use clap::Parser;
use std::path::PathBuf;

/*-------------------------------------------------------------------------------------------------
  Command Line Interface (CLI) Arguments
-------------------------------------------------------------------------------------------------*/

#[derive(Parser, Debug)]
#[command(author, version, about = "Categorize IP address space by owner.", long_about = None)]
pub struct Args {
    /// Look up the owner of this IP address and exit
    #[arg(
        short = 'l',
        long,
        conflicts_with_all = [
            "stats_file",
            "aws_file",
            "cloudflare_file",
            "tor_file",
            "delete_names",
            "add_cidrs",
            "summary",
        ]
    )]
    pub lookup: Option<String>,

    /// Read and write the index from this CSV file [env: IPCAT_CSV_FILE] [default: datacenters.csv]
    #[arg(long = "csvfile")]
    pub csv_file: Option<PathBuf>,

    /// Write per-provider address totals to this file [env: IPCAT_STATS_FILE] [default: datacenters-stats.csv]
    #[arg(long = "statsfile")]
    pub stats_file: Option<PathBuf>,

    /// Do not write the statistics file
    #[arg(long, conflicts_with = "stats_file")]
    pub no_stats: bool,

    /// Refresh Amazon AWS ranges from this ip-ranges.json file
    #[arg(long = "aws", value_name = "FILE")]
    pub aws_file: Option<PathBuf>,

    /// Refresh Cloudflare ranges from this list of CIDRs
    #[arg(long = "cloudflare", value_name = "FILE")]
    pub cloudflare_file: Option<PathBuf>,

    /// Refresh Tor exit nodes from this list of addresses and ranges
    #[arg(long = "tor", value_name = "FILE")]
    pub tor_file: Option<PathBuf>,

    /// Delete every range owned by this provider name
    #[arg(long = "delete", value_name = "NAME")]
    pub delete_names: Option<Vec<String>>,

    /// Add a range to the index
    #[arg(long = "add-cidr", value_name = "CIDR,NAME,URL", value_parser = parse_add_cidr)]
    pub add_cidrs: Option<Vec<AddCidr>>,

    /// Print a summary of address totals per provider
    #[arg(long)]
    pub summary: bool,

    /// Logging verbosity
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,
}

/*--------------------------------------------------------------------------------------
  Add CIDR Argument
--------------------------------------------------------------------------------------*/

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AddCidr {
    pub cidr: String,
    pub name: String,
    pub url: String,
}

fn parse_add_cidr(value: &str) -> Result<AddCidr, String> {
    match value.split(',').collect::<Vec<&str>>()[..] {
        [cidr, name, url] => Ok(AddCidr {
            cidr: cidr.to_string(),
            name: name.to_string(),
            url: url.to_string(),
        }),
        _ => Err("range must be in format: CIDR,name,url".to_string()),
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
