use serde::{Deserialize, Serialize};
use std::fmt;

/// A location on the integer plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

// Matches the tuple rendering used by the saved-path files.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Largest coordinate magnitude a [`PointSet`](crate::PointSet) accepts. Keeps
/// every hop below 2^42 so path sums stay far from overflow.
pub const COORD_LIMIT: i64 = 1 << 40;

impl Point {
    /// Whether both coordinates are within [`COORD_LIMIT`].
    #[inline]
    pub fn in_range(&self) -> bool {
        self.x.unsigned_abs() <= COORD_LIMIT as u64 && self.y.unsigned_abs() <= COORD_LIMIT as u64
    }
}

/// Manhattan (L1) distance. Saturates at `i64::MAX` instead of overflowing.
#[inline(always)]
pub fn distance(p: &Point, q: &Point) -> i64 {
    let d = p.x.abs_diff(q.x).saturating_add(p.y.abs_diff(q.y));
    i64::try_from(d).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case((0, 0), (5, 5), 10)]
    #[case((550, 550), (550, 50), 500)]
    #[case((-3, 4), (3, -4), 14)]
    #[case((7, 7), (7, 7), 0)]
    fn l1_distance(#[case] p: (i64, i64), #[case] q: (i64, i64), #[case] expected: i64) {
        let (p, q) = (Point::from(p), Point::from(q));
        assert_eq!(distance(&p, &q), expected);
        assert_eq!(distance(&q, &p), expected);
    }

    #[test]
    fn distance_is_non_negative_and_zero_on_self() {
        let pts = [Point::new(-10, 3), Point::new(0, 0), Point::new(12, -40), Point::new(5, 5)];
        for p in &pts {
            assert_eq!(distance(p, p), 0);
            for q in &pts {
                assert!(distance(p, q) >= 0);
                assert_eq!(distance(p, q), distance(q, p));
            }
        }
    }

    #[test]
    fn extreme_coordinates_saturate() {
        let far_left = Point::new(i64::MIN, 0);
        let far_right = Point::new(i64::MAX, 0);
        assert_eq!(distance(&far_left, &far_right), i64::MAX);
        assert_eq!(distance(&far_left, &far_left), 0);
        assert!(!far_left.in_range());
        assert!(Point::new(COORD_LIMIT, -COORD_LIMIT).in_range());
    }

    #[test]
    fn displays_as_tuple() {
        assert_eq!(Point::new(550, -50).to_string(), "(550, -50)");
    }
}
