use napi_derive::napi;
use tspp_core::{Point, PointInfo, Report};

#[napi(object)]
#[derive(Clone, Copy, Debug)]
pub struct JsPoint {
    pub x: i64,
    pub y: i64,
}

impl From<JsPoint> for Point {
    fn from(p: JsPoint) -> Self {
        Point::new(p.x, p.y)
    }
}

impl From<Point> for JsPoint {
    fn from(p: Point) -> Self {
        JsPoint { x: p.x, y: p.y }
    }
}

/// All canvas points, with start and end designated by index.
#[napi(object)]
#[derive(Clone, Debug)]
pub struct PlanRequest {
    pub points: Vec<JsPoint>,
    pub start_index: u32,
    pub end_index: u32,
    /// "exact" (default) or "heuristic".
    pub solver: Option<String>,
    pub max_expansions: Option<i64>,
    pub time_limit_ms: Option<i64>,
}

#[napi(object)]
#[derive(Clone, Debug)]
pub struct PlanReport {
    /// optimal | heuristic | no_feasible_path | budget_exhausted
    pub status: String,
    pub path: Option<Vec<JsPoint>>,
    pub total_distance: Option<i64>,
    pub explored: i64,
    pub pruned: i64,
    pub message: Option<String>,
}

impl From<Report> for PlanReport {
    fn from(report: Report) -> Self {
        let status = serde_json::to_value(report.status)
            .ok()
            .and_then(|v| v.as_str().map(str::to_owned))
            .unwrap_or_default();
        PlanReport {
            status,
            path: report.path.map(|pts| pts.into_iter().map(JsPoint::from).collect()),
            total_distance: report.total_distance,
            explored: report.explored as i64,
            pruned: report.pruned as i64,
            message: report.message,
        }
    }
}

#[napi(object)]
#[derive(Clone, Debug)]
pub struct JsPointInfo {
    pub x: i64,
    pub y: i64,
    pub distance_from_end: i64,
    pub distance_from_current: i64,
    pub distance_to_closest_path: Option<i64>,
    pub current_minus_end: i64,
}

impl From<PointInfo> for JsPointInfo {
    fn from(info: PointInfo) -> Self {
        JsPointInfo {
            x: info.x,
            y: info.y,
            distance_from_end: info.distance_from_end,
            distance_from_current: info.distance_from_current,
            distance_to_closest_path: info.distance_to_closest_path,
            current_minus_end: info.current_minus_end,
        }
    }
}
