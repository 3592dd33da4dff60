use log::{info, warn};
use std::env;
use std::path::{Path, PathBuf};

/*-------------------------------------------------------------------------------------------------
  Configuration Builder
-------------------------------------------------------------------------------------------------*/

/// A builder for the [Config] struct.
///
/// ```
/// let config = ipcat::ConfigBuilder::default()
///     .csv_file("/tmp/datacenters.csv")
///     .stats_file(None::<&str>)
///     .build();
///
/// assert_eq!(config.csv_file(), std::path::Path::new("/tmp/datacenters.csv"));
/// assert_eq!(config.stats_file(), None);
/// ```
///
/// The [ConfigBuilder::new] method sources initial values from environment variables when set and
/// uses default values otherwise; [ConfigBuilder::default] ignores the environment.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    csv_file: PathBuf,
    stats_file: Option<PathBuf>,
}

/*--------------------------------------------------------------------------------------
  Configuration Builder Implementation
--------------------------------------------------------------------------------------*/

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            csv_file: PathBuf::from("datacenters.csv"),
            stats_file: Some(PathBuf::from("datacenters-stats.csv")),
        }
    }
}

impl ConfigBuilder {
    /// Create a new [ConfigBuilder] reading initial values from the environment variables:
    /// - `IPCAT_CSV_FILE`
    /// - `IPCAT_STATS_FILE` (an empty value disables the statistics file)
    pub fn new() -> Self {
        let default = ConfigBuilder::default();

        Self {
            csv_file: get_env_var("IPCAT_CSV_FILE", default.csv_file),
            stats_file: get_optional_env_var("IPCAT_STATS_FILE", default.stats_file),
        }
    }

    /*-------------------------------------------------------------------------
      Setters
    -------------------------------------------------------------------------*/

    /// Set the CSV file the index is loaded from and saved to; defaults to `datacenters.csv`.
    pub fn csv_file<P: AsRef<Path>>(&mut self, csv_file: P) -> &mut Self {
        self.csv_file = csv_file.as_ref().to_path_buf();
        self
    }

    /// Set the file the per-provider address totals are written to, or `None` to skip writing
    /// them; defaults to `datacenters-stats.csv`.
    pub fn stats_file<P: AsRef<Path>>(&mut self, stats_file: Option<P>) -> &mut Self {
        self.stats_file = stats_file.map(|path| path.as_ref().to_path_buf());
        self
    }

    pub fn build(&self) -> Config {
        Config {
            csv_file: self.csv_file.clone(),
            stats_file: self.stats_file.clone(),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Configuration
-------------------------------------------------------------------------------------------------*/

/// File locations used by the `ipcat` command.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Config {
    csv_file: PathBuf,
    stats_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        ConfigBuilder::default().build()
    }
}

impl Config {
    pub fn new() -> Self {
        ConfigBuilder::new().build()
    }

    pub fn csv_file(&self) -> &Path {
        &self.csv_file
    }

    pub fn stats_file(&self) -> Option<&Path> {
        self.stats_file.as_deref()
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

/// Get and parse an environment variable value or return a default value.
fn get_env_var<T: std::str::FromStr>(env_var: &str, default: T) -> T {
    env::var(env_var)
        .ok()
        .and_then(|value| {
            value
                .parse::<T>()
                .inspect(|_| info!("Using {}: {}", env_var, value))
                .inspect_err(|_| warn!("Invalid {}: {}", env_var, value))
                .ok()
        })
        .unwrap_or(default)
}

/// Like [get_env_var], where an empty value means "none".
fn get_optional_env_var<T: std::str::FromStr>(env_var: &str, default: Option<T>) -> Option<T> {
    match env::var(env_var) {
        Ok(value) if value.is_empty() => {
            info!("Using {}: <none>", env_var);
            None
        }
        Ok(value) => value
            .parse::<T>()
            .inspect(|_| info!("Using {}: {}", env_var, value))
            .inspect_err(|_| warn!("Invalid {}: {}", env_var, value))
            .ok()
            .or(default),
        Err(_) => default,
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
