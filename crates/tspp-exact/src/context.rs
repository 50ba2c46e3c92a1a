use super::types::{Frame, StateKey};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tspp_core::{Path, Point, PointSet, SearchStats};

/// Everything one solver invocation owns: the memo table, the counters and the
/// incumbent. Dropped when the invocation returns.
pub(crate) struct SearchContext<'a> {
    set: &'a PointSet,
    use_memo: bool,
    memo: HashMap<StateKey, i64>,
    pub stats: SearchStats,

    // Best complete route so far (intermediate slots only) and its length.
    best: Option<(Vec<usize>, i64)>,
}

impl<'a> SearchContext<'a> {
    pub fn new(set: &'a PointSet, use_memo: bool) -> Self {
        SearchContext {
            set,
            use_memo,
            memo: HashMap::new(),
            stats: SearchStats::default(),
            best: None,
        }
    }

    /// Last point of a frame's partial path.
    #[inline]
    pub fn last_point(&self, frame: &Frame) -> &'a Point {
        match frame.path.last() {
            Some(&slot) => self.set.point(slot),
            None => self.set.start(),
        }
    }

    /// Records the arrival at `frame`'s state. Returns false when an earlier
    /// arrival was at least as cheap, meaning this branch can be dropped.
    pub fn admit(&mut self, frame: &Frame) -> bool {
        if !self.use_memo {
            return true;
        }
        match self.memo.entry(frame.key()) {
            Entry::Occupied(e) if *e.get() <= frame.distance => {
                self.stats.pruned += 1;
                false
            }
            Entry::Occupied(mut e) => {
                e.insert(frame.distance);
                true
            }
            Entry::Vacant(e) => {
                e.insert(frame.distance);
                true
            }
        }
    }

    /// Offers a completed route. Ties keep the earlier one.
    pub fn offer(&mut self, route: &[usize], total: i64) {
        if self.best.as_ref().map_or(true, |(_, best)| total < *best) {
            self.best = Some((route.to_vec(), total));
        }
    }

    /// Materialises the incumbent as a start-to-end [`Path`].
    pub fn best_path(&self) -> Option<Path> {
        let (route, _) = self.best.as_ref()?;
        let mut points = Vec::with_capacity(route.len() + 2);
        points.push(*self.set.start());
        points.extend(route.iter().map(|&slot| *self.set.point(slot)));
        points.push(*self.set.end());
        Some(Path::from_points(points))
    }

    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }
}
