#![deny(clippy::all)]

use napi::{Error, Result};
use napi_derive::napi;
use tspp_core::{Path, Point, PointInfo, PointSet, Report, SavedPath, SearchBudget, SolveError, SolverKind};

mod models;

use models::{JsPoint, JsPointInfo, PlanReport, PlanRequest};

fn point_set(points: &[JsPoint], start: u32, end: u32) -> Result<PointSet> {
    let points: Vec<Point> = points.iter().copied().map(Point::from).collect();
    PointSet::from_designated(&points, start as usize, end as usize)
        .map_err(|e| Error::from_reason(e.to_string()))
}

fn to_report(result: std::result::Result<tspp_core::Solution, SolveError>) -> Result<PlanReport> {
    if let Err(SolveError::InvalidInput(e)) = &result {
        return Err(Error::from_reason(e.to_string()));
    }
    Ok(Report::from_result(&result).into())
}

fn budget(max_expansions: Option<i64>, time_limit_ms: Option<i64>) -> SearchBudget {
    SearchBudget {
        max_expansions: max_expansions.map(|n| n.max(0) as u64),
        time_limit_ms: time_limit_ms.map(|ms| ms.max(0) as u64),
    }
}

#[napi]
pub fn plan_path(request: PlanRequest) -> Result<PlanReport> {
    let set = point_set(&request.points, request.start_index, request.end_index)?;
    let kind = match request.solver.as_deref() {
        Some(name) => name.parse::<SolverKind>().map_err(Error::from_reason)?,
        None => SolverKind::Exact,
    };
    let budget = budget(request.max_expansions, request.time_limit_ms);
    to_report(tspp_validation::plan(&set, kind, &budget))
}

#[napi]
pub fn solve_exact(points: Vec<JsPoint>, start_index: u32, end_index: u32) -> Result<PlanReport> {
    let set = point_set(&points, start_index, end_index)?;
    to_report(tspp_exact::solve(&set))
}

#[napi]
pub fn solve_heuristic(points: Vec<JsPoint>, start_index: u32, end_index: u32) -> Result<PlanReport> {
    let set = point_set(&points, start_index, end_index)?;
    to_report(tspp_heuristic::construct(&set))
}

/// Text for the "Save Path" export; `None` when the path has no hops.
#[napi]
pub fn format_saved_path(path: Vec<JsPoint>) -> Option<String> {
    if path.len() < 2 {
        return None;
    }
    let path = Path::from_points(path.into_iter().map(Point::from).collect());
    Some(SavedPath::new(&path).to_string())
}

#[napi]
pub fn describe_point(
    point: JsPoint,
    end: JsPoint,
    current: Option<JsPoint>,
    path: Option<Vec<JsPoint>>,
) -> JsPointInfo {
    let path = path.map(|pts| Path::from_points(pts.into_iter().map(Point::from).collect()));
    let current = current.map(Point::from);
    PointInfo::describe(&point.into(), &end.into(), current.as_ref(), path.as_ref()).into()
}
