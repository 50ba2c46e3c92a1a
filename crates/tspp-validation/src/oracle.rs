//! Exhaustive reference: tries every ordering of the intermediates. Only
//! usable for a handful of points.

use tspp_core::{distance, is_hop_valid, Point, PointSet};

/// Largest instance the sweep will hand to the oracle.
pub const ORACLE_LIMIT: usize = 8;

/// Shortest total length over all orderings whose every hop is visible with
/// respect to the then-unvisited points, or `None` if no ordering qualifies.
pub fn brute_force_optimum(set: &PointSet) -> Option<i64> {
    let mut remaining: Vec<usize> = (0..set.len()).collect();
    let mut best = None;
    permute(set, *set.start(), &mut remaining, 0, &mut best);
    best
}

fn permute(set: &PointSet, last: Point, remaining: &mut Vec<usize>, acc: i64, best: &mut Option<i64>) {
    if remaining.is_empty() {
        let total = acc + distance(&last, set.end());
        if best.map_or(true, |b| total < b) {
            *best = Some(total);
        }
        return;
    }
    for i in 0..remaining.len() {
        let next = *set.point(remaining[i]);
        if !is_hop_valid(&last, &next, remaining.iter().map(|&s| set.point(s))) {
            continue;
        }
        let slot = remaining.swap_remove(i);
        permute(set, next, remaining, acc + distance(&last, &next), best);
        remaining.push(slot);
        let last_idx = remaining.len() - 1;
        remaining.swap(i, last_idx);
    }
}
