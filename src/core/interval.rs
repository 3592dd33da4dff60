use crate::core::address::{Address, Family};
use crate::core::errors::{Error, Result};
use num_bigint::BigUint;
use std::fmt;

/*-------------------------------------------------------------------------------------------------
  Interval
-------------------------------------------------------------------------------------------------*/

/// Closed range of IP addresses `[left, right]` and the provider (name and reference URL) that
/// owns it.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Interval {
    pub(crate) left: Address,
    pub(crate) right: Address,
    pub(crate) name: String,
    pub(crate) url: String,
}

impl Interval {
    /// Create an interval, validating that both bounds share a family and are in order.
    pub fn new(left: Address, right: Address, name: &str, url: &str) -> Result<Self> {
        validate(&left, &right)?;

        Ok(Self {
            left,
            right,
            name: name.to_string(),
            url: url.to_string(),
        })
    }

    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    /// First address in the range.
    pub fn left(&self) -> &Address {
        &self.left
    }

    /// Last address in the range.
    pub fn right(&self) -> &Address {
        &self.right
    }

    /// Provider name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Provider reference URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn family(&self) -> Family {
        self.left.family()
    }

    /*-------------------------------------------------------------------------
      Queries
    -------------------------------------------------------------------------*/

    /// Number of addresses in the range (`right - left + 1`).
    ///
    /// ```
    /// let (left, right) = ipcat::cidr_to_range("::/0").unwrap();
    /// let interval = ipcat::Interval::new(left, right, "everything", "").unwrap();
    /// assert_eq!(interval.size(), num_bigint::BigUint::from(1u8) << 128);
    /// ```
    pub fn size(&self) -> BigUint {
        BigUint::from_bytes_be(self.right.octets()) - BigUint::from_bytes_be(self.left.octets())
            + 1u32
    }

    /// True when `address` is in the same family and within `[left, right]`.
    pub fn contains(&self, address: &Address) -> bool {
        address.family() == self.family() && self.left <= *address && *address <= self.right
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] {} {}", self.left, self.right, self.name, self.url)
    }
}

/*-------------------------------------------------------------------------------------------------
  Validation
-------------------------------------------------------------------------------------------------*/

/// Check that `left` and `right` can bound an interval.
pub fn validate(left: &Address, right: &Address) -> Result<()> {
    if left.family() != right.family() {
        return Err(Error::FamilyMismatch {
            left: *left,
            right: *right,
        });
    }
    if left > right {
        return Err(Error::InvertedRange {
            left: *left,
            right: *right,
        });
    }
    Ok(())
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
