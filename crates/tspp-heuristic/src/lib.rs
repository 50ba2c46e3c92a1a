//! Greedy pairwise-scoring path constructor.
//!
//! From the current point it keeps only the visible unvisited points, scores
//! every pair of them against the leftmost and lowest unvisited points, and
//! steps to the best-scoring one. Deterministic and polynomial; the result is
//! always a valid path but usually not the shortest.

mod scoring;

use log::{debug, trace};
use tspp_core::{
    is_hop_valid, Optimality, Path, PathSolver, Point, PointSet, SearchStats, Solution, SolveError,
    SolverKind,
};

pub use scoring::{pick_candidate, Extremes};

#[derive(Clone, Copy, Debug, Default)]
pub struct GreedySolver;

impl GreedySolver {
    pub fn new() -> Self {
        Self
    }
}

impl PathSolver for GreedySolver {
    fn kind(&self) -> SolverKind {
        SolverKind::Heuristic
    }

    fn solve(&self, set: &PointSet) -> Result<Solution, SolveError> {
        construct(set)
    }
}

/// Builds one path greedily. Fails with [`SolveError::NoFeasiblePath`] if a
/// step finds no visible candidate while points remain.
///
/// A lone visible candidate is taken even when other points remain; the legacy
/// pairwise-only constructor gave up in that case.
pub fn construct(set: &PointSet) -> Result<Solution, SolveError> {
    let mut stats = SearchStats::default();
    let mut remaining: Vec<usize> = (0..set.len()).collect();
    let mut points = Vec::with_capacity(set.len() + 2);
    points.push(*set.start());
    let mut current = *set.start();

    while !remaining.is_empty() {
        let chosen = if remaining.len() == 1 {
            stats.explored += 1;
            Some(0)
        } else {
            step(set, &current, &remaining, &mut stats)
        };

        let Some(idx) = chosen else {
            debug!(
                "[Greedy] stuck at {} with {} points unvisited",
                current,
                remaining.len()
            );
            return Err(SolveError::NoFeasiblePath { stats });
        };

        let slot = remaining.remove(idx);
        current = *set.point(slot);
        trace!("[Greedy] step {} -> slot {} at {}", points.len(), slot, current);
        points.push(current);
    }

    points.push(*set.end());
    let path = Path::from_points(points);
    debug!(
        "[Greedy] built path of {} hops, length {}",
        path.points().len() - 1,
        path.total_distance()
    );
    Ok(Solution { path, stats, optimality: Optimality::Heuristic })
}

/// Picks the index into `remaining` of the next stop, or `None` if nothing
/// is visible from `current`.
fn step(
    set: &PointSet,
    current: &Point,
    remaining: &[usize],
    stats: &mut SearchStats,
) -> Option<usize> {
    let unvisited = || remaining.iter().map(|&slot| set.point(slot));
    let extremes = Extremes::of(unvisited())?;

    let visible: Vec<(usize, Point)> = remaining
        .iter()
        .enumerate()
        .filter(|&(_, &slot)| {
            stats.explored += 1;
            is_hop_valid(current, set.point(slot), unvisited())
        })
        .map(|(idx, &slot)| (idx, *set.point(slot)))
        .collect();

    pick_candidate(&visible, &extremes)
}
