use tspp_core::Point;

/// Reference extremes over the unvisited points: the smallest x ("leftmost")
/// and the largest y ("lowest" with y growing downwards).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Extremes {
    pub leftmost_x: i64,
    pub lowest_y: i64,
}

impl Extremes {
    pub fn of<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Extremes { leftmost_x: p.x, lowest_y: p.y },
                Some(e) => Extremes {
                    leftmost_x: e.leftmost_x.min(p.x),
                    lowest_y: e.lowest_y.max(p.y),
                },
            })
        })
    }

    /// Scores one pair: the higher point (smaller y) is scored by its height
    /// above the lowest point, the lower one by its offset from the leftmost.
    /// Returns the representative with the smaller score; ties go to the lower.
    fn score_pair<T: Copy>(&self, a: (T, Point), b: (T, Point)) -> (i64, T) {
        let (higher, lower) = if a.1.y < b.1.y { (a, b) } else { (b, a) };
        let higher_score = higher.1.y - self.lowest_y;
        let lower_score = lower.1.x - self.leftmost_x;
        if higher_score < lower_score {
            (higher_score, higher.0)
        } else {
            (lower_score, lower.0)
        }
    }
}

/// Chooses among the visible candidates by minimum pair score. The first pair
/// reaching the minimum wins. A lone visible candidate is taken as is.
pub fn pick_candidate<T: Copy>(visible: &[(T, Point)], extremes: &Extremes) -> Option<T> {
    match visible {
        [] => None,
        [(only, _)] => Some(*only),
        _ => {
            let mut best: Option<(i64, T)> = None;
            for (i, &a) in visible.iter().enumerate() {
                for &b in &visible[i + 1..] {
                    let (score, candidate) = extremes.score_pair(a, b);
                    if best.map_or(true, |(s, _)| score < s) {
                        best = Some((score, candidate));
                    }
                }
            }
            best.map(|(_, candidate)| candidate)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i64, y: i64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn extremes() {
        let pts = [p(4, 1), p(-2, 7), p(9, 12)];
        assert_eq!(Extremes::of(&pts), Some(Extremes { leftmost_x: -2, lowest_y: 12 }));
        assert_eq!(Extremes::of(std::iter::empty()), None);
    }

    #[test]
    fn higher_point_wins_when_lower_is_off_left_edge() {
        let visible = [("a", p(10, 2)), ("b", p(3, 9))];
        let extremes = Extremes { leftmost_x: 3, lowest_y: 9 };
        assert_eq!(pick_candidate(&visible, &extremes), Some("a"));
    }

    #[test]
    fn tie_goes_to_lower_point() {
        // Same height: the pair's "lower" is the first of the two, and both
        // scores are zero.
        let visible = [("a", p(2, 5)), ("b", p(7, 5))];
        let extremes = Extremes { leftmost_x: 2, lowest_y: 5 };
        assert_eq!(pick_candidate(&visible, &extremes), Some("a"));
    }

    #[test]
    fn minimum_across_all_pairs() {
        let visible = [(0, p(1, 8)), (1, p(6, 6)), (2, p(4, 1))];
        let extremes = Extremes { leftmost_x: 1, lowest_y: 8 };
        // Pairs: (0,1) -> 1 scores -2; (0,2) -> 2 scores -7; (1,2) -> 2 scores -7.
        assert_eq!(pick_candidate(&visible, &extremes), Some(2));
    }

    #[test]
    fn lone_and_empty() {
        let extremes = Extremes { leftmost_x: 0, lowest_y: 0 };
        assert_eq!(pick_candidate(&[(7u8, p(3, 3))], &extremes), Some(7));
        assert_eq!(pick_candidate::<u8>(&[], &extremes), None);
    }
}
