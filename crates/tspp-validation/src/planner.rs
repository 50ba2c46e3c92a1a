//! Solver selection.

use tspp_core::{PathSolver, PointSet, SearchBudget, Solution, SolveError, SolverKind};
use tspp_exact::ExactSolver;
use tspp_heuristic::GreedySolver;

/// Boxed solver for `kind`. The budget only applies to the exact solver.
pub fn solver_for(kind: SolverKind, budget: SearchBudget) -> Box<dyn PathSolver + Send + Sync> {
    match kind {
        SolverKind::Exact => Box::new(ExactSolver::with_budget(budget)),
        SolverKind::Heuristic => Box::new(GreedySolver::new()),
    }
}

/// Runs the selected solver on `set`.
pub fn plan(set: &PointSet, kind: SolverKind, budget: &SearchBudget) -> Result<Solution, SolveError> {
    solver_for(kind, *budget).solve(set)
}
