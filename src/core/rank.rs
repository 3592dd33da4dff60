use crate::core::interval::Interval;
use num_bigint::BigUint;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/*-------------------------------------------------------------------------------------------------
  Rank Entry
-------------------------------------------------------------------------------------------------*/

/// Total number of addresses owned by one provider.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RankEntry {
    pub name: String,
    pub total: BigUint,
}

impl RankEntry {
    pub fn new(name: &str, total: BigUint) -> Self {
        Self {
            name: name.to_string(),
            total,
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Rank By Size
-------------------------------------------------------------------------------------------------*/

/// Order entries by descending total, then case-insensitive name, then exact name.
pub fn compare(a: &RankEntry, b: &RankEntry) -> Ordering {
    b.total
        .cmp(&a.total)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}

/// Sum interval sizes per provider name and order the totals with [compare].
///
/// The intervals must be disjoint (a normalized set) for the totals to be exact.
pub fn rank_by_size(intervals: &[Interval]) -> Vec<RankEntry> {
    let mut totals: BTreeMap<&str, BigUint> = BTreeMap::new();
    for interval in intervals {
        *totals.entry(interval.name()).or_default() += interval.size();
    }

    let mut rank: Vec<RankEntry> = totals
        .into_iter()
        .map(|(name, total)| RankEntry::new(name, total))
        .collect();
    rank.sort_by(compare);
    rank
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
