//! IPv4 address parsing and arithmetic.
//!
//! Addresses are kept as [`std::net::Ipv4Addr`]; [`Ipv4`] pairs one with a prefix length
//! for CIDR style display.

use crate::error::CalcError;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Number of addresses in the IPv4 space.
const ADDRESS_SPACE: i128 = 1 << MAX_LENGTH;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, CalcError> {
    if len > MAX_LENGTH {
        Err(CalcError::InvalidPrefix(i64::from(len)))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Parse one decimal octet. Only plain digits are accepted.
pub(crate) fn parse_octet(part: &str) -> Option<u8> {
    let part = part.trim();
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Parse a dotted-decimal IPv4 address.
///
/// Exactly four octets are required, each an integer in 0-255.
pub fn parse_address(s: &str) -> Result<Ipv4Addr, CalcError> {
    let invalid = || CalcError::InvalidAddress(s.to_string());
    let parts: Vec<&str> = s.trim().split('.').collect();
    if parts.len() != 4 {
        return Err(invalid());
    }
    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(&parts) {
        *octet = parse_octet(part).ok_or_else(invalid)?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Move an address by `offset`, carrying between octets.
///
/// The result wraps around the 32-bit address space in both directions,
/// so `255.255.255.255 + 1` is `0.0.0.0`.
pub fn offset_addr(addr: Ipv4Addr, offset: i64) -> Ipv4Addr {
    let bits = i128::from(u32::from(addr));
    let wrapped = (bits + i128::from(offset)).rem_euclid(ADDRESS_SPACE);
    Ipv4Addr::from(wrapped as u32)
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// Pair an address with a prefix length, rejecting lengths above 32.
    pub fn new(addr: Ipv4Addr, mask: u8) -> Result<Ipv4, CalcError> {
        if mask > MAX_LENGTH {
            return Err(CalcError::InvalidPrefix(i64::from(mask)));
        }
        Ok(Ipv4 { addr, mask })
    }
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.mask);
        serializer.serialize_str(&cidr)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
