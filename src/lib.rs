//! Categorize IP address space by owner.
//!
//! An [IntervalSet] maps closed IPv4 and IPv6 address ranges to the provider (name and reference
//! URL) that owns them. Ranges are added one at a time or a whole provider at once
//! ([IntervalSet::refresh]), merged when adjacent, checked for overlaps, searched by binary search,
//! ranked by size, and persisted as CSV.
//!
//! ```
//! let mut set = ipcat::IntervalSet::new();
//! set.add_cidr("10.0.0.0/24", "A", "http://a.example")?;
//! set.add_cidr("192.168.0.0/30", "B", "http://b.example")?;
//!
//! assert_eq!(set.contains("10.0.0.42")?.map(|found| found.name()), Some("A"));
//! assert!(set.contains("172.16.0.1")?.is_none());
//!
//! let rank = set.rank_by_size()?;
//! assert_eq!(rank[0].name, "A");
//! assert_eq!(rank[0].total, ipcat::num_bigint::BigUint::from(256u32));
//! # Ok::<(), ipcat::Error>(())
//! ```

/*-------------------------------------------------------------------------------------------------
  Modules
-------------------------------------------------------------------------------------------------*/

mod core;
pub mod providers;

/*-------------------------------------------------------------------------------------------------
  Public Interface
-------------------------------------------------------------------------------------------------*/

pub use crate::core::address::{
    cidr_to_range, format_address, increment_equals, network_to_range, parse_address, Address,
    Family,
};
pub use crate::core::batch::{Batch, Block};
pub use crate::core::config::{Config, ConfigBuilder};
pub use crate::core::errors::{Error, Result};
pub use crate::core::interval::Interval;
pub use crate::core::interval_set::{IntervalSet, State};
pub use crate::core::rank::{compare as compare_rank, rank_by_size, RankEntry};

/*--------------------------------------------------------------------------------------
  Re-exports
--------------------------------------------------------------------------------------*/

pub use ipnetwork;
pub use num_bigint;
