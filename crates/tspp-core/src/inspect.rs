//! Per-point readouts for the drawing front end.

use crate::path::Path;
use crate::point::{distance, Point};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointInfo {
    pub x: i64,
    pub y: i64,
    pub distance_from_end: i64,
    /// 0 when no point is currently selected.
    pub distance_from_current: i64,
    /// Closest hop endpoint of the drawn path; `None` when nothing is drawn.
    pub distance_to_closest_path: Option<i64>,
    pub current_minus_end: i64,
}

impl PointInfo {
    pub fn describe(point: &Point, end: &Point, current: Option<&Point>, path: Option<&Path>) -> Self {
        let distance_from_end = distance(point, end);
        let distance_from_current = current.map_or(0, |c| distance(point, c));
        let distance_to_closest_path = path.and_then(|path| {
            path.hops()
                .map(|(a, b)| distance(point, a).min(distance(point, b)))
                .min()
        });

        Self {
            x: point.x,
            y: point.y,
            distance_from_end,
            distance_from_current,
            distance_to_closest_path,
            current_minus_end: distance_from_current - distance_from_end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_against_path() {
        let path = Path::from_points(vec![Point::new(0, 0), Point::new(10, 0), Point::new(10, 10)]);
        let info = PointInfo::describe(
            &Point::new(9, 2),
            &Point::new(10, 10),
            Some(&Point::new(0, 0)),
            Some(&path),
        );
        assert_eq!(info.distance_from_end, 9);
        assert_eq!(info.distance_from_current, 11);
        assert_eq!(info.distance_to_closest_path, Some(3));
        assert_eq!(info.current_minus_end, 2);
    }

    #[test]
    fn defaults_without_selection_or_path() {
        let info = PointInfo::describe(&Point::new(1, 1), &Point::new(4, 5), None, None);
        assert_eq!(info.distance_from_current, 0);
        assert_eq!(info.distance_to_closest_path, None);
        assert_eq!(info.current_minus_end, -7);
    }
}
