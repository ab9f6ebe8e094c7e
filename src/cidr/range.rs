//! Decomposition of inclusive address ranges into aligned CIDR blocks

use std::net::Ipv4Addr;

use crate::cidr::CidrBlock;
use crate::error::CidrError;

/// Convert the inclusive range `[start, end]` into the minimal ordered
/// sequence of aligned CIDR blocks whose union is exactly that range.
///
/// Greedy walk: at each cursor position emit the largest block that keeps
/// the cursor aligned and does not reach past `end`, then continue right
/// after it. Blocks come back ascending, disjoint and gap-free.
pub fn decompose(start: Ipv4Addr, end: Ipv4Addr) -> Result<Vec<CidrBlock>, CidrError> {
    let range_start = u32::from(start);
    let range_end = u32::from(end);
    if range_start > range_end {
        return Err(CidrError::InvertedRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let mut blocks = Vec::new();
    let mut cursor = range_start;
    loop {
        let block = CidrBlock::from_raw(cursor, widest_prefix(cursor, range_end));
        let block_end = block.last();
        blocks.push(block);
        // Bound check after emission: the final block may end at
        // 255.255.255.255, which has no successor.
        if block_end >= range_end {
            break;
        }
        cursor = block_end + 1;
    }
    Ok(blocks)
}

/// Shortest prefix length (largest block) usable at `cursor` without
/// breaking alignment or reaching past `end`.
fn widest_prefix(cursor: u32, end: u32) -> u8 {
    // trailing_zeros is 32 for cursor 0, covering the full-space case
    let alignment = cursor.trailing_zeros();
    let span = (u64::from(end - cursor) + 1).ilog2();
    (32 - alignment.min(span)) as u8
}
