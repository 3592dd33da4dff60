use crate::core::address::{self, Address};
use crate::core::batch::{Batch, Block};
use crate::core::errors::{Error, Result};
use crate::core::interval::Interval;
use crate::core::rank::{self, RankEntry};
use ipnetwork::IpNetwork;
use log::{debug, info};

/*-------------------------------------------------------------------------------------------------
  Interval Set State
-------------------------------------------------------------------------------------------------*/

/// Normalization state of an [IntervalSet].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum State {
    /// Modified since the last successful normalization; order and disjointness are unknown.
    #[default]
    Dirty,

    /// Sorted by left bound, free of overlaps, and adjacent same-name intervals merged.
    Normalized,
}

/*-------------------------------------------------------------------------------------------------
  Interval Set
-------------------------------------------------------------------------------------------------*/

/// Ordered, non-overlapping collection of [Interval]s mapping IP address space to providers.
///
/// Insertions and deletions are cheap; the set sorts, checks and merges itself lazily (at most
/// once per batch of changes) before answering a query.
///
/// ```
/// let mut set = ipcat::IntervalSet::new();
/// set.add_cidr("10.0.0.0/24", "A", "http://a.example").unwrap();
/// set.add_cidr("10.0.1.0/24", "A", "http://a.example").unwrap();
///
/// let found = set.contains("10.0.1.7").unwrap().unwrap();
/// assert_eq!(found.name(), "A");
/// assert_eq!(set.len(), 1); // Adjacent ranges merged
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
    state: State,
}

/*--------------------------------------------------------------------------------------
  Interval Set Implementation
--------------------------------------------------------------------------------------*/

impl IntervalSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            intervals: Vec::with_capacity(capacity),
            state: State::Dirty,
        }
    }

    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    pub fn state(&self) -> State {
        self.state
    }

    /// Number of intervals (after merging, when normalized).
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Intervals in their current order; sorted only when [State::Normalized].
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /*-------------------------------------------------------------------------
      Insertion and Deletion
    -------------------------------------------------------------------------*/

    /// Add the inclusive range `[left, right]` owned by `name`.
    pub fn add_range(&mut self, left: &str, right: &str, name: &str, url: &str) -> Result<()> {
        let left = address::parse_address(left)?;
        let right = address::parse_address(right)?;
        self.add_addresses(left, right, name, url)
    }

    /// Add the block described by `cidr` (`address/prefix-length`) owned by `name`.
    pub fn add_cidr(&mut self, cidr: &str, name: &str, url: &str) -> Result<()> {
        let (left, right) = address::cidr_to_range(cidr)?;
        self.add_addresses(left, right, name, url)
    }

    /// Add a parsed network prefix owned by `name`.
    pub fn add_network(&mut self, network: &IpNetwork, name: &str, url: &str) -> Result<()> {
        let (left, right) = address::network_to_range(network);
        self.add_addresses(left, right, name, url)
    }

    /// Add the range `[left, right]` owned by `name`.
    pub fn add_addresses(
        &mut self,
        left: Address,
        right: Address,
        name: &str,
        url: &str,
    ) -> Result<()> {
        let interval = Interval::new(left, right, name, url)?;
        self.intervals.push(interval);
        self.state = State::Dirty;
        Ok(())
    }

    /// Add one provider [Block] owned by `name`.
    pub fn add_block(&mut self, block: &Block, name: &str, url: &str) -> Result<()> {
        match block {
            Block::Cidr(cidr) => self.add_cidr(cidr, name, url),
            Block::Network(network) => self.add_network(network, name, url),
            Block::Range(left, right) => self.add_range(left, right, name, url),
        }
    }

    /// Remove every interval owned by `name`, keeping the order of the rest; returns the number
    /// of intervals removed.
    ///
    /// Removal only opens gaps, so a normalized set stays normalized.
    pub fn delete_by_name(&mut self, name: &str) -> usize {
        let before = self.intervals.len();
        self.intervals.retain(|interval| interval.name != name);
        let removed = before - self.intervals.len();
        debug!("Deleted {removed} interval(s) named {name:?}");
        removed
    }

    /*-------------------------------------------------------------------------
      Provider Refresh
    -------------------------------------------------------------------------*/

    /// Replace everything owned by `batch.name()` with the blocks in `batch`.
    ///
    /// The replacement is built and normalized on a copy of the set; on any error the set is left
    /// exactly as it was.
    pub fn refresh(&mut self, batch: &Batch) -> Result<()> {
        let mut refreshed = self.clone();
        let removed = refreshed.delete_by_name(batch.name());

        for block in batch.blocks() {
            refreshed.add_block(block, batch.name(), batch.url())?;
        }
        refreshed.normalize()?;

        info!(
            "Refreshed {:?}: removed {} interval(s), added {} block(s)",
            batch.name(),
            removed,
            batch.len()
        );

        *self = refreshed;
        Ok(())
    }

    /*-------------------------------------------------------------------------
      Normalize
    -------------------------------------------------------------------------*/

    /// Sort the intervals, reject overlaps, and merge adjacent intervals with the same name.
    ///
    /// A merged interval keeps the URL of its lowest part. Fails with
    /// [Error::OverlappingRanges] before anything is merged; the set then stays [State::Dirty].
    pub fn normalize(&mut self) -> Result<()> {
        if self.state == State::Normalized {
            return Ok(());
        }

        self.intervals.sort_by(|a, b| a.left.cmp(&b.left));

        if let Some(pair) = self
            .intervals
            .windows(2)
            .find(|pair| pair[1].left <= pair[0].right)
        {
            return Err(Error::OverlappingRanges {
                earlier: Box::new(pair[0].clone()),
                later: Box::new(pair[1].clone()),
            });
        }

        let before = self.intervals.len();
        let mut merged: Vec<Interval> = Vec::with_capacity(before);
        for interval in std::mem::take(&mut self.intervals) {
            match merged.last_mut() {
                Some(last)
                    if last.name == interval.name
                        && last.right.increment_equals(&interval.left) =>
                {
                    last.right = interval.right;
                }
                _ => merged.push(interval),
            }
        }
        self.intervals = merged;
        self.state = State::Normalized;

        debug!(
            "Normalized {} interval(s) into {}",
            before,
            self.intervals.len()
        );
        Ok(())
    }

    /*-------------------------------------------------------------------------
      Queries
    -------------------------------------------------------------------------*/

    /// Find the interval containing the address written as `text`.
    ///
    /// Returns `Ok(None)` when no interval covers a well-formed address.
    pub fn contains(&mut self, text: &str) -> Result<Option<&Interval>> {
        let address = address::parse_address(text)?;
        self.contains_address(&address)
    }

    /// Find the interval containing `address`.
    pub fn contains_address(&mut self, address: &Address) -> Result<Option<&Interval>> {
        self.normalize()?;

        // First interval starting at or after the address
        let index = self
            .intervals
            .partition_point(|interval| interval.left < *address);

        if let Some(interval) = self.intervals.get(index) {
            if interval.contains(address) {
                return Ok(Some(interval));
            }
        }

        // Otherwise only the interval before it can cover the address
        if index > 0 {
            let interval = &self.intervals[index - 1];
            if interval.contains(address) {
                return Ok(Some(interval));
            }
        }

        Ok(None)
    }

    /// Total address count per provider name, largest first.
    pub fn rank_by_size(&mut self) -> Result<Vec<RankEntry>> {
        self.normalize()?;
        Ok(rank::rank_by_size(&self.intervals))
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::log_error;
    use crate::core::interval::tests::test_interval;
    use num_bigint::BigUint;
    use test_log::test;

    const DC_NAME: &str = "foobar";
    const DC_URL: &str = "http://junk";

    fn ranges(set: &IntervalSet) -> Vec<(String, String, String)> {
        set.intervals()
            .iter()
            .map(|interval| {
                (
                    interval.left().to_string(),
                    interval.right().to_string(),
                    interval.name().to_string(),
                )
            })
            .collect()
    }

    fn range(left: &str, right: &str, name: &str) -> (String, String, String) {
        (left.to_string(), right.to_string(), name.to_string())
    }

    /*----------------------------------------------------------------------------------
      Insertion
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_add_range() {
        let mut set = IntervalSet::with_capacity(100);

        assert!(set.add_range("10.0.0.0", "10.0.1.0", DC_NAME, DC_URL).is_ok());
        assert_eq!(set.len(), 1);
        assert_eq!(set.state(), State::Dirty);

        assert!(set.add_range("1.0.0.0", "1.255.255.255", DC_NAME, DC_URL).is_ok());
        assert!(set.add_range("0.0.0.0", "0.0.0.0", DC_NAME, DC_URL).is_ok());
        assert!(set.add_range("2001:db8::", "2001:db8::ffff", DC_NAME, DC_URL).is_ok());
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_add_single_address() {
        let mut set = IntervalSet::new();
        set.add_range("2.0.0.0", "2.0.0.0", DC_NAME, DC_URL).unwrap();
        assert_eq!(set.intervals()[0].size(), BigUint::from(1u32));
    }

    #[test]
    fn test_add_range_errors_leave_set_unchanged() {
        let mut set = IntervalSet::new();
        set.add_range("10.0.0.0", "10.0.0.255", DC_NAME, DC_URL).unwrap();
        set.normalize().unwrap();
        let before = set.clone();

        assert!(matches!(
            set.add_range("10.1.0.0", "10.0.0.0", DC_NAME, DC_URL),
            Err(Error::InvertedRange { .. })
        ));
        assert!(matches!(
            set.add_range("Busted", "2.0.0.0", DC_NAME, DC_URL),
            Err(Error::InvalidAddress(_))
        ));
        assert!(matches!(
            set.add_range("2.0.0.0", "Busted", DC_NAME, DC_URL),
            Err(Error::InvalidAddress(_))
        ));
        assert!(matches!(
            set.add_range("2.0.0.0", "2001:db8::", DC_NAME, DC_URL),
            Err(Error::FamilyMismatch { .. })
        ));

        assert_eq!(set, before);
        assert_eq!(set.state(), State::Normalized);
    }

    #[test]
    fn test_add_cidr() {
        let mut set = IntervalSet::new();
        set.add_cidr("192.168.0.0/24", DC_NAME, DC_URL).unwrap();
        set.add_cidr("2001:db8::/32", DC_NAME, DC_URL).unwrap();

        assert_eq!(
            ranges(&set),
            vec![
                range("192.168.0.0", "192.168.0.255", DC_NAME),
                range("2001:db8::", "2001:db8:ffff:ffff:ffff:ffff:ffff:ffff", DC_NAME),
            ]
        );
    }

    #[test]
    fn test_add_invalid_cidr_leaves_set_unchanged() {
        let mut set = IntervalSet::new();
        set.add_cidr("10.0.0.0/8", DC_NAME, DC_URL).unwrap();
        let before = set.clone();

        assert!(matches!(
            set.add_cidr("not-a-cidr", DC_NAME, DC_URL),
            Err(Error::InvalidCidr(_))
        ));
        assert_eq!(set, before);
    }

    /*----------------------------------------------------------------------------------
      Normalize
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_normalize_sorts() {
        let mut set = IntervalSet::new();
        set.add_range("2001:db8::", "2001:db8::ff", "c", DC_URL).unwrap();
        set.add_range("192.168.0.0", "192.168.0.255", "b", DC_URL).unwrap();
        set.add_range("10.0.0.0", "10.0.0.255", "a", DC_URL).unwrap();

        set.normalize().inspect_err(log_error).unwrap();

        assert_eq!(set.state(), State::Normalized);
        assert_eq!(
            ranges(&set),
            vec![
                range("10.0.0.0", "10.0.0.255", "a"),
                range("192.168.0.0", "192.168.0.255", "b"),
                range("2001:db8::", "2001:db8::ff", "c"),
            ]
        );
    }

    #[test]
    fn test_normalize_merges_adjacent_same_name() {
        let mut set = IntervalSet::new();
        set.add_range("10.0.1.0", "10.0.1.255", "A", "http://second").unwrap();
        set.add_range("10.0.0.0", "10.0.0.255", "A", "http://first").unwrap();

        set.normalize().unwrap();

        assert_eq!(ranges(&set), vec![range("10.0.0.0", "10.0.1.255", "A")]);
        assert_eq!(set.intervals()[0].url(), "http://first");
    }

    #[test]
    fn test_normalize_merges_chains() {
        let mut set = IntervalSet::new();
        for cidr in ["10.0.3.0/24", "10.0.0.0/24", "10.0.2.0/24", "10.0.1.0/24"] {
            set.add_cidr(cidr, "A", DC_URL).unwrap();
        }

        set.normalize().unwrap();

        assert_eq!(ranges(&set), vec![range("10.0.0.0", "10.0.3.255", "A")]);
    }

    #[test]
    fn test_normalize_does_not_merge_different_names() {
        let mut set = IntervalSet::new();
        set.add_range("10.0.0.0", "10.0.0.255", "A", DC_URL).unwrap();
        set.add_range("10.0.1.0", "10.0.1.255", "B", DC_URL).unwrap();

        set.normalize().unwrap();

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_normalize_does_not_merge_gaps() {
        let mut set = IntervalSet::new();
        set.add_range("10.0.0.0", "10.0.0.254", "A", DC_URL).unwrap();
        set.add_range("10.0.1.0", "10.0.1.255", "A", DC_URL).unwrap();

        set.normalize().unwrap();

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_normalize_does_not_merge_across_families() {
        let mut set = IntervalSet::new();
        set.add_range("255.255.255.0", "255.255.255.255", "A", DC_URL).unwrap();
        set.add_range("::", "::ff", "A", DC_URL).unwrap();

        set.normalize().unwrap();

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_normalize_rejects_overlaps() {
        let mut set = IntervalSet::new();
        set.add_range("10.0.0.0", "10.0.0.10", "A", DC_URL).unwrap();
        set.add_range("10.0.0.5", "10.0.0.20", "A", DC_URL).unwrap();

        let result = set.normalize();

        match result {
            Err(Error::OverlappingRanges { earlier, later }) => {
                assert_eq!(*earlier, test_interval("10.0.0.0", "10.0.0.10", "A"));
                assert_eq!(*later, test_interval("10.0.0.5", "10.0.0.20", "A"));
            }
            other => panic!("expected overlapping ranges, got {other:?}"),
        }
        assert_eq!(set.state(), State::Dirty);
        assert_eq!(set.len(), 2); // Nothing merged
    }

    #[test]
    fn test_normalize_rejects_shared_endpoint_and_containment() {
        let mut shared = IntervalSet::new();
        shared.add_range("10.0.0.0", "10.0.0.10", "A", DC_URL).unwrap();
        shared.add_range("10.0.0.10", "10.0.0.20", "B", DC_URL).unwrap();
        assert!(matches!(
            shared.normalize(),
            Err(Error::OverlappingRanges { .. })
        ));

        let mut nested = IntervalSet::new();
        nested.add_cidr("10.0.0.0/8", "A", DC_URL).unwrap();
        nested.add_cidr("10.1.0.0/16", "B", DC_URL).unwrap();
        assert!(matches!(
            nested.normalize(),
            Err(Error::OverlappingRanges { .. })
        ));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut set = IntervalSet::new();
        set.add_cidr("10.0.1.0/24", "A", DC_URL).unwrap();
        set.add_cidr("10.0.0.0/24", "A", DC_URL).unwrap();
        set.add_cidr("172.16.0.0/12", "B", DC_URL).unwrap();

        set.normalize().unwrap();
        let once = set.clone();
        set.normalize().unwrap();

        assert_eq!(set, once);
    }

    /*----------------------------------------------------------------------------------
      Delete By Name
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_delete_by_name() {
        let mut set = IntervalSet::new();
        set.add_range("10.0.0.0", "10.0.0.255", "X", DC_URL).unwrap();
        set.add_range("10.0.1.0", "10.0.1.255", "Y", DC_URL).unwrap();
        set.add_range("10.0.2.0", "10.0.2.255", "X", DC_URL).unwrap();
        set.add_range("10.0.3.0", "10.0.3.255", "Z", DC_URL).unwrap();
        set.normalize().unwrap();

        assert_eq!(set.delete_by_name("X"), 2);

        assert_eq!(set.state(), State::Normalized);
        assert_eq!(
            ranges(&set),
            vec![
                range("10.0.1.0", "10.0.1.255", "Y"),
                range("10.0.3.0", "10.0.3.255", "Z"),
            ]
        );
        assert!(set.contains("10.0.0.7").unwrap().is_none());
        assert!(set.contains("10.0.2.7").unwrap().is_none());
        assert_eq!(set.contains("10.0.1.7").unwrap().unwrap().name(), "Y");
    }

    #[test]
    fn test_delete_by_name_preserves_unsorted_order() {
        let mut set = IntervalSet::new();
        set.add_range("10.0.3.0", "10.0.3.255", "Z", DC_URL).unwrap();
        set.add_range("10.0.0.0", "10.0.0.255", "X", DC_URL).unwrap();
        set.add_range("10.0.1.0", "10.0.1.255", "Y", DC_URL).unwrap();

        assert_eq!(set.delete_by_name("X"), 1);
        assert_eq!(set.delete_by_name("missing"), 0);

        assert_eq!(set.state(), State::Dirty);
        assert_eq!(
            ranges(&set),
            vec![
                range("10.0.3.0", "10.0.3.255", "Z"),
                range("10.0.1.0", "10.0.1.255", "Y"),
            ]
        );
    }

    /*----------------------------------------------------------------------------------
      Contains
    ----------------------------------------------------------------------------------*/

    fn test_lookup_set() -> IntervalSet {
        let mut set = IntervalSet::new();
        set.add_range("10.0.0.0", "10.0.0.255", "A", DC_URL).unwrap();
        set.add_range("10.0.2.0", "10.0.2.0", "B", DC_URL).unwrap();
        set.add_range("192.168.0.0", "192.168.255.255", "C", DC_URL).unwrap();
        set.add_range("2001:db8::", "2001:db8::ffff", "D", DC_URL).unwrap();
        set
    }

    #[test]
    fn test_contains() {
        let mut set = test_lookup_set();

        let cases = [
            ("10.0.0.0", Some("A")), // Left bound
            ("10.0.0.77", Some("A")), // Strictly inside
            ("10.0.0.255", Some("A")), // Right bound
            ("10.0.1.0", None), // Gap
            ("10.0.2.0", Some("B")), // Single address interval
            ("10.0.2.1", None),
            ("9.255.255.255", None), // Below everything
            ("192.168.100.100", Some("C")),
            ("255.255.255.255", None), // Above every IPv4 interval
            ("0.0.0.0", None),
            ("2001:db8::1", Some("D")),
            ("2001:db8::1:0", None),
            ("::", None),
            ("::ffff:10.0.0.1", None), // IPv6 never matches IPv4 intervals
        ];

        for (text, expected) in cases {
            let found = set
                .contains(text)
                .inspect_err(log_error)
                .unwrap()
                .map(|interval| interval.name().to_string());
            assert_eq!(found.as_deref(), expected, "lookup {text}");
        }
        assert_eq!(set.state(), State::Normalized);
    }

    #[test]
    fn test_contains_invalid_address() {
        let mut set = test_lookup_set();
        assert!(matches!(
            set.contains("Busted"),
            Err(Error::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_contains_empty_set() {
        let mut set = IntervalSet::new();
        assert!(set.contains("10.0.0.1").unwrap().is_none());
    }

    #[test]
    fn test_contains_fails_on_overlap() {
        let mut set = IntervalSet::new();
        set.add_range("10.0.0.0", "10.0.0.10", "A", DC_URL).unwrap();
        set.add_range("10.0.0.5", "10.0.0.20", "B", DC_URL).unwrap();

        assert!(matches!(
            set.contains("10.0.0.1"),
            Err(Error::OverlappingRanges { .. })
        ));
    }

    #[test]
    fn test_contains_matches_brute_force() {
        let mut set = IntervalSet::new();
        let inserted = [
            ("1.0.0.0", "1.0.0.9", "A"),
            ("1.0.0.20", "1.0.0.29", "B"),
            ("1.0.0.30", "1.0.0.30", "C"),
            ("1.0.0.31", "1.0.0.40", "A"),
            ("1.0.0.50", "1.0.0.255", "B"),
        ];
        for (left, right, name) in inserted {
            set.add_range(left, right, name, DC_URL).unwrap();
        }

        for last_octet in 0..=255u8 {
            let text = format!("1.0.0.{last_octet}");
            let address = address::parse_address(&text).unwrap();
            let expected = inserted
                .iter()
                .find(|(left, right, _)| {
                    address::parse_address(left).unwrap() <= address
                        && address <= address::parse_address(right).unwrap()
                })
                .map(|(_, _, name)| name.to_string());

            let found = set
                .contains(&text)
                .unwrap()
                .map(|interval| interval.name().to_string());
            assert_eq!(found, expected, "lookup {text}");
        }
    }

    /*----------------------------------------------------------------------------------
      Rank By Size
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_rank_by_size() {
        let mut set = IntervalSet::new();
        set.add_cidr("192.168.0.0/30", "B", DC_URL).unwrap();
        set.add_cidr("10.0.0.0/24", "A", DC_URL).unwrap();

        let rank = set.rank_by_size().unwrap();

        assert_eq!(
            rank,
            vec![
                RankEntry::new("A", BigUint::from(256u32)),
                RankEntry::new("B", BigUint::from(4u32)),
            ]
        );
    }

    #[test]
    fn test_rank_by_size_fails_on_overlap() {
        let mut set = IntervalSet::new();
        set.add_cidr("10.0.0.0/8", "A", DC_URL).unwrap();
        set.add_cidr("10.0.0.0/24", "B", DC_URL).unwrap();

        assert!(set.rank_by_size().is_err());
    }

    /*----------------------------------------------------------------------------------
      Refresh
    ----------------------------------------------------------------------------------*/

    fn test_refresh_set() -> IntervalSet {
        let mut set = IntervalSet::new();
        set.add_cidr("10.0.0.0/24", "Old", "http://old").unwrap();
        set.add_cidr("10.0.5.0/24", "Old", "http://old").unwrap();
        set.add_cidr("192.168.0.0/16", "Other", "http://other").unwrap();
        set.normalize().unwrap();
        set
    }

    #[test]
    fn test_refresh_replaces_name() {
        let mut set = test_refresh_set();

        let mut batch = Batch::new("Old", "http://new");
        batch
            .cidr("10.0.1.0/24")
            .range("10.0.2.0", "10.0.2.255")
            .network("2001:db8::/48".parse().unwrap());

        set.refresh(&batch).inspect_err(log_error).unwrap();

        assert_eq!(set.state(), State::Normalized);
        assert_eq!(
            ranges(&set),
            vec![
                range("10.0.1.0", "10.0.2.255", "Old"),
                range("192.168.0.0", "192.168.255.255", "Other"),
                range("2001:db8::", "2001:db8:0:ffff:ffff:ffff:ffff:ffff", "Old"),
            ]
        );
        assert!(set
            .intervals()
            .iter()
            .filter(|interval| interval.name() == "Old")
            .all(|interval| interval.url() == "http://new"));
    }

    #[test]
    fn test_refresh_with_invalid_block_leaves_set_unchanged() {
        let mut set = test_refresh_set();
        let before = set.clone();

        let mut batch = Batch::new("Old", "http://new");
        batch.cidr("10.0.1.0/24").cidr("not-a-cidr");

        assert!(matches!(set.refresh(&batch), Err(Error::InvalidCidr(_))));
        assert_eq!(set, before);
    }

    #[test]
    fn test_refresh_overlapping_other_provider_leaves_set_unchanged() {
        let mut set = test_refresh_set();
        let before = set.clone();

        let mut batch = Batch::new("Old", "http://new");
        batch.cidr("192.168.1.0/24");

        assert!(matches!(
            set.refresh(&batch),
            Err(Error::OverlappingRanges { .. })
        ));
        assert_eq!(set, before);
    }

    #[test]
    fn test_refresh_may_reuse_own_old_space() {
        let mut set = test_refresh_set();

        let mut batch = Batch::new("Old", "http://old");
        batch.cidr("10.0.0.0/16");

        set.refresh(&batch).unwrap();

        assert_eq!(
            ranges(&set),
            vec![
                range("10.0.0.0", "10.0.255.255", "Old"),
                range("192.168.0.0", "192.168.255.255", "Other"),
            ]
        );
    }
}
