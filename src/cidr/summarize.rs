//! Aggregation of CIDR blocks into the minimal equivalent set

use crate::cidr::CidrBlock;

/// Collapse a collection of disjoint blocks into the smallest equivalent
/// list.
///
/// Blocks are sorted ascending by base address and folded left to right:
/// whenever the incoming block is the aligned sibling of the accumulator
/// tail, the pair is replaced by its parent. A fresh parent is re-tested
/// against the entry before it, so chains of 2^k contiguous equal-sized
/// blocks collapse fully in one pass. Coverage is never changed, only the
/// representation.
pub fn summarize(blocks: Vec<CidrBlock>) -> Vec<CidrBlock> {
    let mut sorted = blocks;
    sorted.sort_unstable();

    let mut merged: Vec<CidrBlock> = Vec::with_capacity(sorted.len());
    for block in sorted {
        merged.push(block);
        while merged.len() >= 2 {
            let upper = merged[merged.len() - 1];
            let lower = merged[merged.len() - 2];
            match lower.merge(&upper) {
                Some(parent) => {
                    merged.truncate(merged.len() - 2);
                    merged.push(parent);
                }
                None => break,
            }
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(pairs: &[&str]) -> Vec<CidrBlock> {
        pairs.iter().map(|t| t.parse().unwrap()).collect()
    }

    fn address_count(list: &[CidrBlock]) -> u64 {
        list.iter()
            .map(|b| u64::from(b.last()) - u64::from(b.first()) + 1)
            .sum()
    }

    #[test]
    fn test_adjacent_siblings_merge() {
        let result = summarize(blocks(&["192.168.0.0/24", "192.168.1.0/24"]));
        assert_eq!(result, blocks(&["192.168.0.0/23"]));
    }

    #[test]
    fn test_adjacent_slash_28_pair_merges() {
        let result = summarize(blocks(&["10.0.0.0/28", "10.0.0.16/28"]));
        assert_eq!(result, blocks(&["10.0.0.0/27"]));
    }

    #[test]
    fn test_chain_of_four_collapses_two_levels() {
        let result = summarize(blocks(&[
            "192.168.0.0/24",
            "192.168.1.0/24",
            "192.168.2.0/24",
            "192.168.3.0/24",
        ]));
        assert_eq!(result, blocks(&["192.168.0.0/22"]));
    }

    #[test]
    fn test_unaligned_neighbors_stay_apart() {
        // Adjacent and equal-sized, but 192.168.1.0 is no /23 boundary.
        let input = blocks(&["192.168.1.0/24", "192.168.2.0/24"]);
        assert_eq!(summarize(input.clone()), input);
    }

    #[test]
    fn test_gap_prevents_merge() {
        let input = blocks(&["10.0.0.0/24", "10.0.2.0/24"]);
        assert_eq!(summarize(input.clone()), input);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let result = summarize(blocks(&["10.0.0.16/28", "10.0.1.0/24", "10.0.0.0/28"]));
        assert_eq!(result, blocks(&["10.0.0.0/27", "10.0.1.0/24"]));
    }

    #[test]
    fn test_merge_cascades_into_earlier_entries() {
        // The two /25 merge into a /24, which must then fold into the /24
        // already sitting below it in the accumulator.
        let result = summarize(blocks(&["10.0.0.0/24", "10.0.1.0/25", "10.0.1.128/25"]));
        assert_eq!(result, blocks(&["10.0.0.0/23"]));
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let inputs = vec![
            blocks(&["10.0.0.0/24", "10.0.1.0/25", "10.0.1.128/25"]),
            blocks(&["192.168.1.0/24", "192.168.2.0/24"]),
            blocks(&["10.0.0.0/32", "10.0.0.1/32", "10.0.0.2/31", "10.0.0.4/30"]),
        ];
        for input in inputs {
            let once = summarize(input);
            let twice = summarize(once.clone());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_summarize_preserves_coverage() {
        let input = blocks(&[
            "10.0.0.0/32",
            "10.0.0.1/32",
            "10.0.0.2/31",
            "10.0.0.4/30",
            "172.16.4.0/22",
        ]);
        let before = address_count(&input);
        let result = summarize(input);
        assert_eq!(address_count(&result), before);
        assert_eq!(result, blocks(&["10.0.0.0/29", "172.16.4.0/22"]));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(summarize(Vec::new()), Vec::new());
    }
}
