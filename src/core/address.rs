use crate::core::errors::{Error, Result};
use ipnetwork::IpNetwork;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/*-------------------------------------------------------------------------------------------------
  Address Family
-------------------------------------------------------------------------------------------------*/

/// IP address family; determines the byte width of an [Address].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Width of the family's addresses in bytes.
    pub fn width(&self) -> usize {
        match self {
            Family::V4 => 4,
            Family::V6 => 16,
        }
    }

    /// Width of the family's addresses in bits.
    pub fn bits(&self) -> u8 {
        match self {
            Family::V4 => 32,
            Family::V6 => 128,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Address
-------------------------------------------------------------------------------------------------*/

/// Fixed-width, family-tagged IP address.
///
/// Addresses of the same family order byte-wise (network byte order). For sorting mixed sets,
/// every IPv4 address orders before every IPv6 address; the two families are never adjacent and
/// never overlap.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Address {
    V4([u8; 4]),
    V6([u8; 16]),
}

impl Address {
    pub fn family(&self) -> Family {
        match self {
            Address::V4(_) => Family::V4,
            Address::V6(_) => Family::V6,
        }
    }

    /// Address bytes in network byte order.
    pub fn octets(&self) -> &[u8] {
        match self {
            Address::V4(octets) => octets,
            Address::V6(octets) => octets,
        }
    }

    pub fn to_ip_addr(&self) -> IpAddr {
        match *self {
            Address::V4(octets) => IpAddr::V4(Ipv4Addr::from(octets)),
            Address::V6(octets) => IpAddr::V6(Ipv6Addr::from(octets)),
        }
    }

    /// True when `next` is exactly this address plus one.
    pub fn increment_equals(&self, next: &Address) -> bool {
        increment_equals(self, next)
    }
}

impl From<IpAddr> for Address {
    fn from(value: IpAddr) -> Self {
        match value {
            IpAddr::V4(ipv4) => Address::V4(ipv4.octets()),
            IpAddr::V6(ipv6) => Address::V6(ipv6.octets()),
        }
    }
}

impl From<Ipv4Addr> for Address {
    fn from(value: Ipv4Addr) -> Self {
        Address::V4(value.octets())
    }
}

impl From<Ipv6Addr> for Address {
    fn from(value: Ipv6Addr) -> Self {
        Address::V6(value.octets())
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        parse_address(text)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_ip_addr())
    }
}

/*-------------------------------------------------------------------------------------------------
  Address Codec
-------------------------------------------------------------------------------------------------*/

/// Parse an IPv4 (dotted-quad) or IPv6 (colon-hex) address literal.
///
/// ```
/// let zero = ipcat::parse_address("0.0.0.0").unwrap();
/// assert_eq!(zero, ipcat::Address::V4([0, 0, 0, 0]));
/// assert!(ipcat::parse_address("Busted").is_err());
/// ```
pub fn parse_address(text: &str) -> Result<Address> {
    text.parse::<IpAddr>()
        .map(Address::from)
        .map_err(|_| Error::InvalidAddress(text.to_string()))
}

/// Canonical text form of an address; round-trips with [parse_address].
pub fn format_address(address: &Address) -> String {
    address.to_string()
}

/// First and last address of a CIDR block written as `address/prefix-length`.
///
/// Host bits of the address are ignored: `10.1.2.3/8` yields `10.0.0.0` - `10.255.255.255`.
pub fn cidr_to_range(text: &str) -> Result<(Address, Address)> {
    let invalid = || Error::InvalidCidr(text.to_string());

    let (address, prefix) = text.split_once('/').ok_or_else(invalid)?;
    let address: IpAddr = address.parse().map_err(|_| invalid())?;
    // Decimal digits only
    if prefix.is_empty() || !prefix.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(invalid());
    }
    let prefix: u8 = prefix.parse().map_err(|_| invalid())?;
    let network = IpNetwork::new(address, prefix).map_err(|_| invalid())?;

    Ok(network_to_range(&network))
}

/// First and last address of a parsed [IpNetwork].
pub fn network_to_range(network: &IpNetwork) -> (Address, Address) {
    match network {
        IpNetwork::V4(ipv4_network) => {
            let (left, right) = block_bounds(ipv4_network.ip().octets(), ipv4_network.prefix());
            (Address::V4(left), Address::V4(right))
        }
        IpNetwork::V6(ipv6_network) => {
            let (left, right) = block_bounds(ipv6_network.ip().octets(), ipv6_network.prefix());
            (Address::V6(left), Address::V6(right))
        }
    }
}

/// True iff `next == address + 1`, computed by carry propagation over the full width.
///
/// The top of the address space does not wrap around to the bottom.
pub fn increment_equals(address: &Address, next: &Address) -> bool {
    if address.family() != next.family() {
        return false;
    }

    let mut carry = true;
    for (byte, next_byte) in address.octets().iter().rev().zip(next.octets().iter().rev()) {
        let (sum, overflow) = byte.overflowing_add(carry as u8);
        if sum != *next_byte {
            return false;
        }
        carry = overflow;
    }

    !carry
}

/*--------------------------------------------------------------------------------------
  Block Bounds
--------------------------------------------------------------------------------------*/

/// Network mask of `prefix` leading one-bits, `N` bytes wide.
fn prefix_mask<const N: usize>(prefix: u8) -> [u8; N] {
    let mut mask = [0u8; N];
    let mut remaining = prefix as usize;
    for byte in mask.iter_mut() {
        let bits = remaining.min(8);
        if bits > 0 {
            *byte = 0xffu8 << (8 - bits);
        }
        remaining -= bits;
    }
    mask
}

/// Clear (left) and set (right) the host bits of an `N`-byte address.
fn block_bounds<const N: usize>(octets: [u8; N], prefix: u8) -> ([u8; N], [u8; N]) {
    let mask = prefix_mask::<N>(prefix);
    let mut left = [0u8; N];
    let mut right = [0u8; N];
    for i in 0..N {
        left[i] = octets[i] & mask[i];
        right[i] = octets[i] | !mask[i];
    }
    (left, right)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
