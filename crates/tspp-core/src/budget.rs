//! Caller-imposed search limits.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Limits on an exact search. Both are optional; the default is unlimited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchBudget {
    /// Maximum number of expansion steps.
    pub max_expansions: Option<u64>,
    /// Wall-clock limit in milliseconds.
    pub time_limit_ms: Option<u64>,
}

impl SearchBudget {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_max_expansions(mut self, max: u64) -> Self {
        self.max_expansions = Some(max);
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit_ms = Some(limit.as_millis().min(u64::MAX as u128) as u64);
        self
    }

    pub fn is_unlimited(&self) -> bool {
        self.max_expansions.is_none() && self.time_limit_ms.is_none()
    }

    /// Starts the clock for one solver invocation.
    pub fn start(&self) -> BudgetClock {
        BudgetClock {
            max_expansions: self.max_expansions,
            deadline: self
                .time_limit_ms
                .map(|ms| Instant::now() + Duration::from_millis(ms)),
        }
    }
}

/// Running budget for one invocation.
#[derive(Clone, Copy, Debug)]
pub struct BudgetClock {
    max_expansions: Option<u64>,
    deadline: Option<Instant>,
}

impl BudgetClock {
    // Reading the clock on every step is measurable on small instances.
    const CLOCK_STRIDE: u64 = 256;

    /// Whether a search that has made `expansions` steps must stop.
    #[inline]
    pub fn exhausted(&self, expansions: u64) -> bool {
        if let Some(max) = self.max_expansions {
            if expansions >= max {
                return true;
            }
        }
        match self.deadline {
            Some(deadline) if expansions % Self::CLOCK_STRIDE == 0 => Instant::now() >= deadline,
            _ => false,
        }
    }
}
