//! Shared types and primitives for the shielded rectilinear path problem.
//!
//! A path starts at a fixed origin, visits every intermediate point exactly
//! once and ends at a fixed terminal, measured in the L1 metric. A hop between
//! two points is only allowed when no still-unvisited point lies strictly
//! inside the axis-aligned rectangle the hop spans.

pub mod budget;
pub mod inspect;
pub mod instance;
pub mod outcome;
pub mod path;
pub mod point;
pub mod report;
pub mod visibility;

pub use budget::{BudgetClock, SearchBudget};
pub use inspect::PointInfo;
pub use instance::{InputError, PointSet};
pub use outcome::{Optimality, PathSolver, SearchStats, Solution, SolveError, SolverKind};
pub use path::{Path, PathDefect};
pub use point::{distance, Point, COORD_LIMIT};
pub use report::{Report, ReportStatus, SavedPath};
pub use visibility::is_hop_valid;
