//! Isolation of excluded addresses inside a CIDR block

use std::collections::VecDeque;

use crate::cidr::{CidrBlock, ExclusionSet};

/// Partition `block` so that every excluded address inside it ends up in
/// its own /32 block.
///
/// This isolates rather than removes: the partition still covers every
/// address of `block`, excluded ones included. Bisection runs over an
/// explicit work queue, so the depth is bounded at 32 levels regardless
/// of input. The partition comes back sorted ascending by base address.
pub fn split(block: CidrBlock, excluded: &ExclusionSet) -> Vec<CidrBlock> {
    let mut queue = VecDeque::from([block]);
    let mut parts = Vec::new();

    while let Some(current) = queue.pop_front() {
        // A clean block is emitted whole; a /32 cannot be split further,
        // so an excluded singleton is emitted as its own block.
        if current.prefix() == 32 || !excluded.intersects(&current) {
            parts.push(current);
            continue;
        }
        let (low, high) = current.halves();
        queue.push_back(low);
        queue.push_back(high);
    }

    // The queue drains level by level; the output contract is ascending.
    parts.sort_unstable();
    parts
}
