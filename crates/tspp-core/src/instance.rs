//! Planning instances.
//!
//! Intermediate points are identified by their slot (index) rather than their
//! coordinates, so two stops may share a location and still both be visited.

use crate::point::{Point, COORD_LIMIT};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejections raised before any search starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("point set needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    #[error("{role} slot {slot} is out of range for {len} points")]
    MissingEndpoint { role: &'static str, slot: usize, len: usize },

    #[error("start and end designate the same slot {0}")]
    SameSlot(usize),

    #[error("start and end coincide at {0}")]
    CoincidentEndpoints(Point),

    #[error("{0} lies outside the supported range of ±{limit}", limit = COORD_LIMIT)]
    CoordinateOutOfRange(Point),
}

/// The points of one planning request: a start, an end and zero or more
/// intermediate stops. Read-only once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPointSet")]
pub struct PointSet {
    start: Point,
    end: Point,
    intermediates: Vec<Point>,
}

#[derive(Deserialize)]
struct RawPointSet {
    start: Point,
    end: Point,
    #[serde(default)]
    intermediates: Vec<Point>,
}

impl TryFrom<RawPointSet> for PointSet {
    type Error = InputError;

    fn try_from(raw: RawPointSet) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end, raw.intermediates)
    }
}

impl PointSet {
    pub fn new(start: Point, end: Point, intermediates: Vec<Point>) -> Result<Self, InputError> {
        if let Some(p) = [start, end].iter().chain(&intermediates).find(|p| !p.in_range()) {
            return Err(InputError::CoordinateOutOfRange(*p));
        }
        if start == end {
            return Err(InputError::CoincidentEndpoints(start));
        }
        Ok(Self { start, end, intermediates })
    }

    /// Builds a set from a flat point list with the start and end designated by
    /// index, the way the drawing front end holds its points.
    pub fn from_designated(points: &[Point], start: usize, end: usize) -> Result<Self, InputError> {
        let len = points.len();
        if len < 2 {
            return Err(InputError::TooFewPoints(len));
        }
        if start >= len {
            return Err(InputError::MissingEndpoint { role: "start", slot: start, len });
        }
        if end >= len {
            return Err(InputError::MissingEndpoint { role: "end", slot: end, len });
        }
        if start == end {
            return Err(InputError::SameSlot(start));
        }

        let intermediates = points
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != start && i != end)
            .map(|(_, p)| *p)
            .collect();

        Self::new(points[start], points[end], intermediates)
    }

    #[inline]
    pub fn start(&self) -> &Point {
        &self.start
    }

    #[inline]
    pub fn end(&self) -> &Point {
        &self.end
    }

    #[inline]
    pub fn intermediates(&self) -> &[Point] {
        &self.intermediates
    }

    /// Number of intermediate stops.
    #[inline]
    pub fn len(&self) -> usize {
        self.intermediates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intermediates.is_empty()
    }

    /// Intermediate point at `slot`.
    #[inline]
    pub fn point(&self, slot: usize) -> &Point {
        &self.intermediates[slot]
    }
}
