//! Runs both solvers over seeded random instances and prints one JSON record
//! per instance on stdout.
//!
//! Usage: `solver-sweep [config.json]`. Without an argument the defaults from
//! `SweepConfig::default()` are used.

use log::{info, LevelFilter};
use simplelog::{Config, SimpleLogger};
use std::error::Error;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tspp_core::ReportStatus;
use tspp_validation::{run_sweep, SweepConfig, SweepRecord};

fn load_config() -> Result<SweepConfig, Box<dyn Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&text)?)
        }
        None => Ok(SweepConfig::default()),
    }
}

fn save_paths(dir: &Path, records: &[SweepRecord]) -> Result<usize, Box<dyn Error>> {
    fs::create_dir_all(dir)?;
    let mut written = 0;
    for record in records {
        if let Some(saved) = record.exact.saved_path() {
            fs::write(dir.join(format!("path_{}.txt", record.index)), saved.to_string())?;
            written += 1;
        }
    }
    Ok(written)
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = load_config()?;
    let level: LevelFilter = config.log_level.parse().unwrap_or(LevelFilter::Info);
    SimpleLogger::init(level, Config::default())?;

    info!(
        "Sweeping {}..={} intermediates, {} instances each, seed {:#x}",
        config.min_intermediates, config.max_intermediates, config.instances, config.seed
    );
    let records = run_sweep(&config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for record in &records {
        serde_json::to_writer(&mut out, record)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    if let Some(dir) = &config.save_dir {
        let written = save_paths(dir, &records)?;
        info!("Saved {} paths to {}", written, dir.display());
    }

    let optimal = records.iter().filter(|r| r.exact.status == ReportStatus::Optimal).count();
    let inconsistent = records.iter().filter(|r| !r.consistent).count();
    let gaps: Vec<f64> = records.iter().filter_map(|r| r.gap).collect();
    let mean_gap = if gaps.is_empty() { 0.0 } else { gaps.iter().sum::<f64>() / gaps.len() as f64 };
    info!(
        "{} instances: {} solved to optimality, {} inconsistent, mean heuristic gap {:.2}%",
        records.len(),
        optimal,
        inconsistent,
        mean_gap * 100.0
    );

    if inconsistent > 0 {
        return Err(format!("{inconsistent} instances failed cross-checks").into());
    }
    Ok(())
}
