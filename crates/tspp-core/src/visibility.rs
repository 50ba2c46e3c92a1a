//! The shielding rule for direct hops.

use crate::point::Point;

/// Whether `p` lies strictly inside the open rectangle spanned by `a` and `b`.
#[inline]
fn strictly_inside(a: &Point, b: &Point, p: &Point) -> bool {
    let (lo_x, hi_x) = (a.x.min(b.x), a.x.max(b.x));
    let (lo_y, hi_y) = (a.y.min(b.y), a.y.max(b.y));
    lo_x < p.x && p.x < hi_x && lo_y < p.y && p.y < hi_y
}

/// Returns false iff some blocker lies strictly inside the open rectangle of
/// `from` and `to`. Points on the rectangle's boundary never block, so a
/// straight horizontal or vertical hop is always valid.
///
/// `blockers` should be the points still unvisited at the time of the hop;
/// visited points and the start/end never shield.
pub fn is_hop_valid<'a, I>(from: &Point, to: &Point, blockers: I) -> bool
where
    I: IntoIterator<Item = &'a Point>,
{
    !blockers.into_iter().any(|p| strictly_inside(from, to, p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_point_blocks() {
        let from = Point::new(0, 0);
        let to = Point::new(10, 10);
        assert!(!is_hop_valid(&from, &to, &[Point::new(5, 5)]));
        // Orientation of the hop does not matter.
        assert!(!is_hop_valid(&to, &from, &[Point::new(5, 5)]));
        assert!(!is_hop_valid(&Point::new(10, 0), &Point::new(0, 10), &[Point::new(1, 9)]));
    }

    #[test]
    fn boundary_points_do_not_block() {
        let from = Point::new(0, 0);
        let to = Point::new(10, 10);
        let boundary = [
            Point::new(0, 5),
            Point::new(10, 5),
            Point::new(5, 0),
            Point::new(5, 10),
            Point::new(0, 0),
            Point::new(10, 10),
        ];
        assert!(is_hop_valid(&from, &to, &boundary));
    }

    #[test]
    fn outside_points_do_not_block() {
        let blockers = [Point::new(-1, 5), Point::new(11, 5), Point::new(5, 11), Point::new(5, -1)];
        assert!(is_hop_valid(&Point::new(0, 0), &Point::new(10, 10), &blockers));
    }

    #[test]
    fn degenerate_rectangle_is_always_valid() {
        let blockers = [Point::new(5, 0), Point::new(0, 5), Point::new(3, 3)];
        assert!(is_hop_valid(&Point::new(0, 0), &Point::new(10, 0), &blockers));
        assert!(is_hop_valid(&Point::new(0, 0), &Point::new(0, 10), &blockers));
        assert!(is_hop_valid(&Point::new(4, 4), &Point::new(4, 4), &blockers));
    }

    #[test]
    fn no_blockers() {
        assert!(is_hop_valid(&Point::new(0, 0), &Point::new(9, 9), std::iter::empty()));
    }
}
