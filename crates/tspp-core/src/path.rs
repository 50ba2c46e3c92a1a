//! Completed paths and a hop-by-hop checker for them.

use crate::instance::PointSet;
use crate::point::{distance, Point};
use crate::visibility::is_hop_valid;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A complete route from start to end with its L1 length.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    points: Vec<Point>,
    total_distance: i64,
}

/// Ways a path can fail to be a valid answer for a point set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathDefect {
    #[error("path has {0} points, a complete path needs at least 2")]
    TooShort(usize),

    #[error("path starts at {found}, expected {expected}")]
    WrongStart { expected: Point, found: Point },

    #[error("path ends at {found}, expected {expected}")]
    WrongEnd { expected: Point, found: Point },

    #[error("stop {index} at {point} is not an unvisited intermediate point")]
    UnknownStop { index: usize, point: Point },

    #[error("hop {index} from {from} to {to} is shielded by an unvisited point")]
    BlockedHop { index: usize, from: Point, to: Point },

    #[error("{0} intermediate points were never visited")]
    MissedStops(usize),

    #[error("recorded length {recorded} differs from the hop sum {actual}")]
    LengthMismatch { recorded: i64, actual: i64 },
}

impl Path {
    /// Builds a path from its ordered points, summing the hop lengths.
    pub fn from_points(points: Vec<Point>) -> Self {
        let total_distance = points.windows(2).map(|w| distance(&w[0], &w[1])).sum();
        Self { points, total_distance }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn total_distance(&self) -> i64 {
        self.total_distance
    }

    /// Consecutive `(from, to)` pairs.
    pub fn hops(&self) -> impl Iterator<Item = (&Point, &Point)> + '_ {
        self.points.windows(2).map(|w| (&w[0], &w[1]))
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Replays the path against `set`: it must run start to end, visit each
    /// intermediate exactly once, and every hop must be visible with respect to
    /// the points still unvisited when it is taken.
    pub fn verify(&self, set: &PointSet) -> Result<(), PathDefect> {
        let n = self.points.len();
        if n < 2 {
            return Err(PathDefect::TooShort(n));
        }
        if self.points[0] != *set.start() {
            return Err(PathDefect::WrongStart { expected: *set.start(), found: self.points[0] });
        }
        if self.points[n - 1] != *set.end() {
            return Err(PathDefect::WrongEnd { expected: *set.end(), found: self.points[n - 1] });
        }

        // Coincident stops are interchangeable for shielding, so matching by
        // coordinate is enough here.
        let mut remaining: Vec<Point> = set.intermediates().to_vec();
        for (index, w) in self.points.windows(2).enumerate() {
            let (from, to) = (&w[0], &w[1]);
            if !is_hop_valid(from, to, &remaining) {
                return Err(PathDefect::BlockedHop { index, from: *from, to: *to });
            }
            if index + 2 == n {
                break;
            }
            match remaining.iter().position(|p| p == to) {
                Some(pos) => {
                    remaining.swap_remove(pos);
                }
                None => return Err(PathDefect::UnknownStop { index: index + 1, point: *to }),
            }
        }
        if !remaining.is_empty() {
            return Err(PathDefect::MissedStops(remaining.len()));
        }

        let actual = self.points.windows(2).map(|w| distance(&w[0], &w[1])).sum();
        if actual != self.total_distance {
            return Err(PathDefect::LengthMismatch { recorded: self.total_distance, actual });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i64, y: i64) -> Point {
        Point::new(x, y)
    }

    fn set() -> PointSet {
        PointSet::new(p(0, 0), p(10, 10), vec![p(5, 5), p(2, 8)]).unwrap()
    }

    #[test]
    fn sums_hops() {
        let path = Path::from_points(vec![p(0, 0), p(5, 5), p(0, 10)]);
        assert_eq!(path.total_distance(), 20);
        assert_eq!(path.hops().count(), 2);
    }

    #[test]
    fn accepts_valid_path() {
        let path = Path::from_points(vec![p(0, 0), p(2, 8), p(5, 5), p(10, 10)]);
        assert_eq!(path.verify(&set()), Ok(()));
    }

    #[test]
    fn flags_blocked_hop() {
        let set = PointSet::new(p(0, 0), p(10, 10), vec![p(8, 8), p(4, 4)]).unwrap();
        let path = Path::from_points(vec![p(0, 0), p(8, 8), p(4, 4), p(10, 10)]);
        assert_eq!(
            path.verify(&set),
            Err(PathDefect::BlockedHop { index: 0, from: p(0, 0), to: p(8, 8) })
        );
    }

    #[test]
    fn flags_missed_and_unknown_stops() {
        let short = Path::from_points(vec![p(0, 0), p(5, 5), p(10, 10)]);
        assert_eq!(short.verify(&set()), Err(PathDefect::MissedStops(1)));

        let repeated = Path::from_points(vec![p(0, 0), p(5, 5), p(5, 5), p(10, 10)]);
        assert_eq!(
            repeated.verify(&set()),
            Err(PathDefect::UnknownStop { index: 2, point: p(5, 5) })
        );
    }

    #[test]
    fn flags_wrong_endpoints() {
        let path = Path::from_points(vec![p(1, 0), p(10, 10)]);
        assert!(matches!(path.verify(&set()), Err(PathDefect::WrongStart { .. })));
        let path = Path::from_points(vec![p(0, 0), p(2, 8), p(5, 5), p(10, 9)]);
        assert!(matches!(path.verify(&set()), Err(PathDefect::WrongEnd { .. })));
        assert_eq!(Path::from_points(vec![p(0, 0)]).verify(&set()), Err(PathDefect::TooShort(1)));
    }

    #[test]
    fn coincident_stops_are_both_required() {
        let set = PointSet::new(p(0, 0), p(10, 0), vec![p(3, 3), p(3, 3)]).unwrap();
        let once = Path::from_points(vec![p(0, 0), p(3, 3), p(10, 0)]);
        assert_eq!(once.verify(&set), Err(PathDefect::MissedStops(1)));
        let twice = Path::from_points(vec![p(0, 0), p(3, 3), p(3, 3), p(10, 0)]);
        assert_eq!(twice.verify(&set), Ok(()));
    }
}
