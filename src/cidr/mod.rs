//! CIDR arithmetic engine
//!
//! Pure address arithmetic over the 32-bit IPv4 space: decomposing
//! inclusive ranges into aligned blocks, carving blocks around excluded
//! addresses and aggregating block lists into their minimal form. No I/O
//! happens here; the surrounding collaborators feed this module and
//! consume its output.

use std::collections::BTreeSet;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use ipnetwork::Ipv4Network;
use tracing::debug;

use crate::error::CidrError;

pub mod addr;
pub mod exclude;
pub mod range;
pub mod summarize;

/// Network mask for a prefix length. All-zero for /0.
pub(crate) fn netmask(prefix: u8) -> u32 {
    if prefix == 0 {
        0
    } else {
        u32::MAX << (32 - prefix)
    }
}

/// An aligned IPv4 CIDR block.
///
/// The base address is always the network address: host bits beyond the
/// prefix are zeroed on construction. Ordering is by numeric base address,
/// which is the ordering contract of every block list in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CidrBlock {
    base: u32,
    prefix: u8,
}

impl CidrBlock {
    /// Build a block from an address and prefix length, masking the
    /// address down to its network address.
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<Self, CidrError> {
        if prefix > 32 {
            return Err(CidrError::InvalidPrefix { prefix });
        }
        Ok(Self {
            base: u32::from(addr) & netmask(prefix),
            prefix,
        })
    }

    /// Internal constructor for callers that already hold an aligned base.
    pub(crate) fn from_raw(base: u32, prefix: u8) -> Self {
        debug_assert_eq!(base & !netmask(prefix), 0, "base must be aligned");
        Self { base, prefix }
    }

    /// Network address of the block.
    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.base)
    }

    /// Prefix length of the block. 32 denotes a single address.
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Numeric first address of the block.
    pub(crate) fn first(&self) -> u32 {
        self.base
    }

    /// Numeric last address of the block (the broadcast address).
    pub(crate) fn last(&self) -> u32 {
        self.base | !netmask(self.prefix)
    }

    /// True if the numeric address falls inside this block.
    pub fn contains(&self, addr: u32) -> bool {
        (addr ^ self.base) & netmask(self.prefix) == 0
    }

    /// Split into the two equal sibling halves one prefix level down.
    /// Must not be called on a /32.
    pub(crate) fn halves(&self) -> (Self, Self) {
        debug_assert!(self.prefix < 32, "a /32 cannot be halved");
        let prefix = self.prefix + 1;
        let low = Self {
            base: self.base,
            prefix,
        };
        let high = Self {
            base: self.base + (1u32 << (32 - prefix)),
            prefix,
        };
        (low, high)
    }

    /// Merge with the sibling block directly above this one.
    ///
    /// Succeeds only when both blocks share a prefix length, this block is
    /// aligned at the coarser prefix and `other` starts at the address
    /// right after this block ends.
    pub(crate) fn merge(&self, other: &Self) -> Option<Self> {
        if self.prefix == 0 || self.prefix != other.prefix {
            return None;
        }
        if self.base & !netmask(self.prefix - 1) != 0 {
            return None;
        }
        if self.last().checked_add(1)? != other.base {
            return None;
        }
        Some(Self {
            base: self.base,
            prefix: self.prefix - 1,
        })
    }
}

impl fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network(), self.prefix)
    }
}

impl FromStr for CidrBlock {
    type Err = CidrError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let network = text.parse::<Ipv4Network>().map_err(|_| CidrError::InvalidCidr {
            text: text.to_string(),
        })?;
        Self::new(network.network(), network.prefix())
    }
}

/// Set of individual addresses that must stay isolated in their own /32
/// blocks so later aggregation cannot absorb them.
///
/// Matching is existential ("does any excluded address fall inside this
/// block"), so the container's iteration order never matters.
#[derive(Debug, Default, Clone)]
pub struct ExclusionSet {
    addrs: BTreeSet<u32>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the set from textual addresses.
    ///
    /// Entries that do not parse as IPv4 addresses are dropped: a
    /// malformed entry can never match any block, so it is a no-op
    /// rather than an error.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for entry in entries {
            let entry = entry.as_ref().trim();
            match addr::parse_addr(entry) {
                Ok(parsed) => set.insert(parsed),
                Err(_) => debug!("Dropping unparseable excluded address: {:?}", entry),
            }
        }
        set
    }

    pub fn insert(&mut self, addr: Ipv4Addr) {
        self.addrs.insert(u32::from(addr));
    }

    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.addrs.len()
    }

    /// True if any excluded address falls inside `block`.
    pub fn intersects(&self, block: &CidrBlock) -> bool {
        self.addrs
            .range(block.first()..=block.last())
            .next()
            .is_some()
    }
}
