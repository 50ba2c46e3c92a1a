//! Batch comparison of the exact and heuristic solvers over generated
//! instances. Instances are generated up front from one seed, solved on a
//! pool of worker threads, and returned in generation order.

use crate::generate::{GeneratorConfig, InstanceGenerator};
use crate::oracle::{brute_force_optimum, ORACLE_LIMIT};
use crossbeam_channel::{bounded, unbounded};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::thread;
use std::time::Instant;
use tspp_core::{PathSolver, PointSet, Report, SearchBudget, SolveError};
use tspp_exact::{ExactOptions, ExactSolver};
use tspp_heuristic::GreedySolver;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Instances generated per intermediate-point count.
    pub instances: usize,
    pub min_intermediates: usize,
    pub max_intermediates: usize,
    pub seed: u64,
    pub generator: GeneratorConfig,
    /// Worker threads; 0 means one per available core.
    pub threads: usize,
    pub budget: SearchBudget,
    /// Cross-check the exact optimum against full enumeration (small sets only).
    pub check_oracle: bool,
    /// Re-run the exact solver with dominance pruning off and compare totals.
    pub check_without_memo: bool,
    /// When set, each exact path is written there as `path_<index>.txt`.
    pub save_dir: Option<PathBuf>,
    pub log_level: String,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            instances: 10,
            min_intermediates: 0,
            max_intermediates: 8,
            seed: 0x7155_2024,
            generator: GeneratorConfig::default(),
            threads: 0,
            budget: SearchBudget::unlimited(),
            check_oracle: true,
            check_without_memo: false,
            save_dir: None,
            log_level: "info".to_string(),
        }
    }
}

impl SweepConfig {
    fn worker_count(&self) -> usize {
        if self.threads > 0 {
            return self.threads;
        }
        thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
    }
}

/// Outcome of both solvers on one instance.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SweepRecord {
    pub index: usize,
    pub intermediates: usize,
    pub instance: PointSet,
    pub exact: Report,
    pub exact_ms: f64,
    pub heuristic: Report,
    pub heuristic_ms: f64,
    pub oracle_total: Option<i64>,
    pub memo_off_total: Option<i64>,
    /// Heuristic length over exact length, minus one.
    pub gap: Option<f64>,
    /// False when a cross-check disagreed with the exact solver.
    pub consistent: bool,
}

fn evaluate(index: usize, set: PointSet, config: &SweepConfig) -> SweepRecord {
    let exact_solver = ExactSolver::with_budget(config.budget);

    let t0 = Instant::now();
    let exact = exact_solver.solve(&set);
    let exact_ms = t0.elapsed().as_secs_f64() * 1000.0;

    let t0 = Instant::now();
    let heuristic = GreedySolver.solve(&set);
    let heuristic_ms = t0.elapsed().as_secs_f64() * 1000.0;

    let exact_total = exact.as_ref().ok().map(|s| s.path.total_distance());
    let heuristic_total = heuristic.as_ref().ok().map(|s| s.path.total_distance());

    let oracle_total = (config.check_oracle && set.len() <= ORACLE_LIMIT)
        .then(|| brute_force_optimum(&set))
        .flatten();

    let memo_off_total = if config.check_without_memo {
        let plain = ExactSolver::new(ExactOptions { budget: config.budget, use_memo: false });
        plain.solve(&set).ok().map(|s| s.path.total_distance())
    } else {
        None
    };

    let mut consistent = true;
    if let Some(exact_total) = exact_total {
        if oracle_total.is_some_and(|o| o != exact_total) {
            warn!("[Sweep] instance {index}: exact {exact_total} != oracle {oracle_total:?}");
            consistent = false;
        }
        if memo_off_total.is_some_and(|m| m != exact_total) {
            warn!("[Sweep] instance {index}: exact {exact_total} != memo-off {memo_off_total:?}");
            consistent = false;
        }
        if heuristic_total.is_some_and(|h| h < exact_total) {
            warn!("[Sweep] instance {index}: heuristic beat the exact optimum");
            consistent = false;
        }
    }
    if let Ok(solution) = &heuristic {
        if let Err(defect) = solution.path.verify(&set) {
            warn!("[Sweep] instance {index}: heuristic path invalid: {defect}");
            consistent = false;
        }
    }
    if let Err(SolveError::BudgetExhausted { .. }) = &exact {
        debug!("[Sweep] instance {index}: exact search hit the budget");
    }

    let gap = match (exact_total, heuristic_total) {
        (Some(e), Some(h)) if e > 0 => Some(h as f64 / e as f64 - 1.0),
        (Some(0), Some(0)) => Some(0.0),
        _ => None,
    };

    SweepRecord {
        index,
        intermediates: set.len(),
        exact: Report::from_result(&exact),
        exact_ms,
        heuristic: Report::from_result(&heuristic),
        heuristic_ms,
        oracle_total,
        memo_off_total,
        gap,
        consistent,
        instance: set,
    }
}

/// Generates and solves every instance described by `config`.
pub fn run_sweep(config: &SweepConfig) -> Vec<SweepRecord> {
    let mut generator = InstanceGenerator::new(config.generator, config.seed);
    let mut jobs = Vec::new();
    for n in config.min_intermediates..=config.max_intermediates {
        for _ in 0..config.instances {
            match generator.generate_intermediates(n) {
                Ok(set) => jobs.push(set),
                Err(e) => warn!("[Sweep] skipping instance with {n} intermediates: {e}"),
            }
        }
    }

    let workers = config.worker_count().min(jobs.len()).max(1);
    info!("[Sweep] {} instances on {} workers", jobs.len(), workers);

    let (job_tx, job_rx) = bounded::<(usize, PointSet)>(workers * 2);
    let (result_tx, result_rx) = unbounded::<SweepRecord>();
    let total = jobs.len();

    let mut records = thread::scope(|scope| {
        for _ in 0..workers {
            let job_rx = job_rx.clone();
            let result_tx = result_tx.clone();
            scope.spawn(move || {
                for (index, set) in job_rx.iter() {
                    let record = evaluate(index, set, config);
                    if result_tx.send(record).is_err() {
                        break;
                    }
                }
            });
        }
        drop(result_tx);

        for job in jobs.into_iter().enumerate() {
            if job_tx.send(job).is_err() {
                break;
            }
        }
        drop(job_tx);

        result_rx.iter().collect::<Vec<_>>()
    });

    records.sort_by_key(|r| r.index);
    if records.len() != total {
        warn!("[Sweep] {} of {} instances produced no record", total - records.len(), total);
    }
    records
}
