//! Exact solver: depth-first branch-and-bound over `(last point, visited set)`
//! states with dominance pruning.
//!
//! The search is driven by an explicit work-list rather than native recursion
//! so that depth is bounded by the heap, and the caller's [`SearchBudget`] is
//! checked before every expansion step.

mod context;
mod search;
mod types;

use log::debug;
use serde::{Deserialize, Serialize};
use tspp_core::{PathSolver, PointSet, SearchBudget, Solution, SolveError, SolverKind};

/// Tuning for one exact solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExactOptions {
    pub budget: SearchBudget,
    /// Dominance pruning on repeated states. Turning it off never changes the
    /// optimal length, only how much work is done.
    pub use_memo: bool,
}

impl Default for ExactOptions {
    fn default() -> Self {
        Self { budget: SearchBudget::unlimited(), use_memo: true }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ExactSolver {
    options: ExactOptions,
}

impl ExactSolver {
    pub fn new(options: ExactOptions) -> Self {
        Self { options }
    }

    pub fn with_budget(budget: SearchBudget) -> Self {
        Self::new(ExactOptions { budget, ..ExactOptions::default() })
    }

    pub fn options(&self) -> &ExactOptions {
        &self.options
    }
}

impl PathSolver for ExactSolver {
    fn kind(&self) -> SolverKind {
        SolverKind::Exact
    }

    fn solve(&self, set: &PointSet) -> Result<Solution, SolveError> {
        debug!(
            "[Exact] solving {} intermediate points, memo={}, budget={:?}",
            set.len(),
            self.options.use_memo,
            self.options.budget
        );
        let result = search::run(set, &self.options);
        match &result {
            Ok(solution) => debug!(
                "[Exact] optimum {} ({} explored, {} pruned)",
                solution.path.total_distance(),
                solution.stats.explored,
                solution.stats.pruned
            ),
            Err(err) => debug!("[Exact] {err}"),
        }
        result
    }
}

/// Solves `set` to optimality with default options.
pub fn solve(set: &PointSet) -> Result<Solution, SolveError> {
    ExactSolver::default().solve(set)
}
