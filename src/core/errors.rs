use crate::core::address::Address;
use crate::core::interval::Interval;
use thiserror::Error;

/*-------------------------------------------------------------------------------------------------
  Errors and Results
-------------------------------------------------------------------------------------------------*/

/// Error type used throughout the crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Text that is not an IPv4 or IPv6 address literal.
    #[error("invalid IP address: {0:?}")]
    InvalidAddress(String),

    /// Text that is not `address/prefix-length` notation with a prefix valid for its family.
    #[error("invalid CIDR: {0:?}")]
    InvalidCidr(String),

    /// Range whose left bound is greater than its right bound.
    #[error("inverted range: {left} > {right}")]
    InvertedRange { left: Address, right: Address },

    /// Range whose bounds belong to different address families.
    #[error("address family mismatch: {left} and {right}")]
    FamilyMismatch { left: Address, right: Address },

    /// Two records claim some of the same address space.
    #[error("overlapping ranges: {earlier} vs. {later}")]
    OverlappingRanges {
        earlier: Box<Interval>,
        later: Box<Interval>,
    },

    /// CSV row with the wrong shape.
    #[error("line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    /// Row-level error annotated with the CSV line it came from.
    #[error("line {line}: {source}")]
    Line {
        line: u64,
        #[source]
        source: Box<Error>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The error with any line annotation removed.
    pub fn root(&self) -> &Error {
        match self {
            Error::Line { source, .. } => source.root(),
            error => error,
        }
    }
}

/*--------------------------------------------------------------------------------------
  Log Error Function
--------------------------------------------------------------------------------------*/

#[cfg(test)]
pub(crate) fn log_error(error: &Error) {
    log::error!("{}", error);
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
