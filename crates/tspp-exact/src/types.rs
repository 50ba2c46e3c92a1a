use fixedbitset::FixedBitSet;

/// One pending search node: the slots visited so far in order, the slots still
/// to visit, and the length accumulated from the start.
#[derive(Clone, Debug)]
pub(crate) struct Frame {
    pub path: Vec<usize>,
    pub remaining: FixedBitSet,
    pub distance: i64,
}

/// Memo key. The visited set is the complement of `remaining` (plus the start,
/// which every state shares), so `remaining` stands in for it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct StateKey {
    /// `None` while the path is still at the start.
    pub last: Option<usize>,
    pub remaining: FixedBitSet,
}

impl Frame {
    pub fn root(n: usize) -> Self {
        let mut remaining = FixedBitSet::with_capacity(n);
        remaining.insert_range(..);
        Self { path: Vec::with_capacity(n), remaining, distance: 0 }
    }

    pub fn key(&self) -> StateKey {
        StateKey { last: self.path.last().copied(), remaining: self.remaining.clone() }
    }

    pub fn child(&self, slot: usize, hop: i64) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(slot);

        let mut remaining = self.remaining.clone();
        remaining.set(slot, false);

        Self { path, remaining, distance: self.distance + hop }
    }
}
