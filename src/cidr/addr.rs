//! IPv4 address parsing and arithmetic

use std::net::Ipv4Addr;

use crate::error::CidrError;

/// Parse a dotted-quad IPv4 address.
pub fn parse_addr(text: &str) -> Result<Ipv4Addr, CidrError> {
    text.parse::<Ipv4Addr>().map_err(|_| CidrError::InvalidAddress {
        text: text.to_string(),
    })
}

/// Next address after `addr`.
///
/// `255.255.255.255` has no successor; the overflow is checked explicitly
/// instead of wrapping.
pub fn successor(addr: Ipv4Addr) -> Result<Ipv4Addr, CidrError> {
    u32::from(addr)
        .checked_add(1)
        .map(Ipv4Addr::from)
        .ok_or(CidrError::AddressOverflow)
}
