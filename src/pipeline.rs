//! Resource entry expansion and final block list assembly

use tracing::warn;

use crate::cidr::{addr, exclude, range, summarize, CidrBlock, ExclusionSet};
use crate::error::CidrError;

/// Expand every fetched resource entry, carve excluded addresses out of
/// the resulting blocks and aggregate the pooled list into its minimal
/// form.
///
/// A malformed entry aborts only itself: it is logged and skipped so one
/// bad resource never loses the rest of the listing.
pub fn build_block_list(resources: &[String], excluded: &ExclusionSet) -> Vec<CidrBlock> {
    let mut pooled = Vec::new();
    for entry in resources {
        match expand_entry(entry, excluded) {
            Ok(blocks) => pooled.extend(blocks),
            Err(err) => warn!("Skipping resource entry {:?}: {}", entry, err),
        }
    }
    summarize::summarize(pooled)
}

/// Expand one resource entry into its exclusion-split blocks.
///
/// An entry is either a plain CIDR (`a.b.c.d/n`) or a hyphenated
/// inclusive range (`a.b.c.d-e.f.g.h`); ranges are decomposed into
/// aligned blocks first.
fn expand_entry(entry: &str, excluded: &ExclusionSet) -> Result<Vec<CidrBlock>, CidrError> {
    let entry = entry.trim();
    let mut blocks = Vec::new();
    if let Some((start, end)) = entry.split_once('-') {
        let start = addr::parse_addr(start.trim())?;
        let end = addr::parse_addr(end.trim())?;
        for block in range::decompose(start, end)? {
            blocks.extend(exclude::split(block, excluded));
        }
    } else {
        blocks.extend(exclude::split(entry.parse()?, excluded));
    }
    Ok(blocks)
}
