use crate::instance::{InputError, PointSet};
use crate::path::Path;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Search effort counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Expansion steps attempted (one per candidate next point considered).
    pub explored: u64,
    /// Branches discarded because the same state was reached at least as cheaply before.
    pub pruned: u64,
}

/// How much trust to put in a returned path's length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Optimality {
    /// Exhaustive search confirmed no shorter valid path exists.
    Proven,
    /// Valid, but produced without an optimality guarantee.
    Heuristic,
}

/// A successful solve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub path: Path,
    pub stats: SearchStats,
    pub optimality: Optimality,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("no feasible path under the visibility constraint ({} explored, {} pruned)", .stats.explored, .stats.pruned)]
    NoFeasiblePath { stats: SearchStats },

    #[error("search budget exhausted after {} expansions", .stats.explored)]
    BudgetExhausted {
        /// Best complete path seen before the budget ran out, never proven optimal.
        best: Option<Path>,
        stats: SearchStats,
    },
}

impl SolveError {
    /// Counters gathered before the failure, if the search got that far.
    pub fn stats(&self) -> Option<SearchStats> {
        match self {
            SolveError::InvalidInput(_) => None,
            SolveError::NoFeasiblePath { stats } | SolveError::BudgetExhausted { stats, .. } => {
                Some(*stats)
            }
        }
    }
}

/// Which solver a request should run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverKind {
    #[default]
    Exact,
    Heuristic,
}

impl std::str::FromStr for SolverKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exact" | "optimal" => Ok(SolverKind::Exact),
            "heuristic" | "simple" | "greedy" => Ok(SolverKind::Heuristic),
            other => Err(format!("unknown solver `{other}`")),
        }
    }
}

/// Common interface over the path producers.
pub trait PathSolver {
    fn kind(&self) -> SolverKind;

    fn solve(&self, set: &PointSet) -> Result<Solution, SolveError>;
}
