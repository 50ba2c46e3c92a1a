//! Uniform result shape for either solver, plus the saved-path text format.

use crate::outcome::{Optimality, SearchStats, Solution, SolveError};
use crate::path::Path;
use crate::point::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Optimal,
    Heuristic,
    NoFeasiblePath,
    BudgetExhausted,
    InvalidInput,
}

/// What a caller renders: the path if any, its length, and search effort.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub status: ReportStatus,
    pub path: Option<Vec<Point>>,
    pub total_distance: Option<i64>,
    pub explored: u64,
    pub pruned: u64,
    /// Failure description for statuses without a trustworthy path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Report {
    fn with_path(status: ReportStatus, path: Option<&Path>, stats: SearchStats) -> Self {
        Self {
            status,
            path: path.map(|p| p.points().to_vec()),
            total_distance: path.map(Path::total_distance),
            explored: stats.explored,
            pruned: stats.pruned,
            message: None,
        }
    }

    pub fn from_solution(solution: &Solution) -> Self {
        let status = match solution.optimality {
            Optimality::Proven => ReportStatus::Optimal,
            Optimality::Heuristic => ReportStatus::Heuristic,
        };
        Self::with_path(status, Some(&solution.path), solution.stats)
    }

    pub fn from_error(err: &SolveError) -> Self {
        let mut report = match err {
            SolveError::InvalidInput(_) => {
                Self::with_path(ReportStatus::InvalidInput, None, SearchStats::default())
            }
            SolveError::NoFeasiblePath { stats } => {
                Self::with_path(ReportStatus::NoFeasiblePath, None, *stats)
            }
            SolveError::BudgetExhausted { best, stats } => {
                Self::with_path(ReportStatus::BudgetExhausted, best.as_ref(), *stats)
            }
        };
        report.message = Some(err.to_string());
        report
    }

    pub fn from_result(result: &Result<Solution, SolveError>) -> Self {
        match result {
            Ok(solution) => Self::from_solution(solution),
            Err(err) => Self::from_error(err),
        }
    }

    /// Text export of the reported path, if there is one.
    pub fn saved_path(&self) -> Option<SavedPath<'_>> {
        match (&self.path, self.total_distance) {
            (Some(points), Some(total)) if points.len() >= 2 => Some(SavedPath { points, total }),
            _ => None,
        }
    }
}

/// Line-oriented path export: one `Path k: (x1, y1) -> (x2, y2)` line per
/// hop followed by `Total Path Length: n`, with no trailing newline.
#[derive(Clone, Copy, Debug)]
pub struct SavedPath<'a> {
    points: &'a [Point],
    total: i64,
}

impl<'a> SavedPath<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self { points: path.points(), total: path.total_distance() }
    }
}

impl fmt::Display for SavedPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, w) in self.points.windows(2).enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "Path {}: {} -> {}", i + 1, w[0], w[1])?;
        }
        write!(f, "\nTotal Path Length: {}", self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> Path {
        Path::from_points(vec![Point::new(0, 0), Point::new(5, 5), Point::new(0, 10)])
    }

    #[test]
    fn saved_path_format() {
        let path = path();
        assert_eq!(
            SavedPath::new(&path).to_string(),
            "Path 1: (0, 0) -> (5, 5)\nPath 2: (5, 5) -> (0, 10)\nTotal Path Length: 20"
        );
    }

    #[test]
    fn report_from_solution() {
        let solution = Solution {
            path: path(),
            stats: SearchStats { explored: 3, pruned: 0 },
            optimality: Optimality::Proven,
        };
        let report = Report::from_solution(&solution);
        assert_eq!(report.status, ReportStatus::Optimal);
        assert_eq!(report.total_distance, Some(20));
        assert_eq!(report.explored, 3);
        assert_eq!(report.path.as_deref().map(<[Point]>::len), Some(3));
        assert!(report.saved_path().is_some());
    }

    #[test]
    fn report_from_budget_exhaustion_keeps_best() {
        let err = SolveError::BudgetExhausted {
            best: Some(path()),
            stats: SearchStats { explored: 10, pruned: 2 },
        };
        let report = Report::from_error(&err);
        assert_eq!(report.status, ReportStatus::BudgetExhausted);
        assert_eq!(report.total_distance, Some(20));
        assert_eq!(report.pruned, 2);
        assert!(report.message.is_some());
    }

    #[test]
    fn report_from_infeasible() {
        let err = SolveError::NoFeasiblePath { stats: SearchStats { explored: 7, pruned: 1 } };
        let report = Report::from_result(&Err(err));
        assert_eq!(report.status, ReportStatus::NoFeasiblePath);
        assert_eq!(report.path, None);
        assert_eq!(report.total_distance, None);
        assert_eq!(report.explored, 7);
        assert!(report.saved_path().is_none());
    }

    #[test]
    fn report_serializes_snake_case() {
        let err = SolveError::NoFeasiblePath { stats: SearchStats::default() };
        let json = serde_json::to_value(Report::from_error(&err)).unwrap();
        assert_eq!(json["status"], "no_feasible_path");
        assert!(json["path"].is_null());
    }
}
