//! umec — compare a baseline station layout against a k-means proposal.
//!
//! Loads (or embeds) an emergency feed and runs the dispatch twin three
//! times over it: the baseline stations under the configured policy, the
//! stations proposed by weighted k-means under the same policy, and the
//! baseline stations with every call sent the closest compatible unit.  The
//! runs share nothing and execute in parallel.
//!
//! ```text
//! umec --emergencies feed.csv --config run.json --out output/umec
//! RUST_LOG=debug umec
//! ```

mod scenario;

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ed_core::{BudgetConfig, DispatchConfig, PolicyKind, SimRng, UnitKind};
use ed_feed::{
    EmergencyRecord, StationSpec, load_emergencies_csv, load_emergencies_reader, load_stations_csv,
    load_stations_json,
};
use ed_output::{CsvWriter, SimOutputObserver};
use ed_placement::propose_stations;
use ed_sim::{SimBuilder, Summary};

use scenario::{SAMPLE_FEED_CSV, baseline_stations};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "umec", about = "Baseline vs. k-means station layouts on one emergency feed")]
struct Cli {
    /// Emergency feed CSV (`t,x,y,etype,priority_s,id`).  Uses a built-in
    /// sample when omitted.
    #[arg(long)]
    emergencies: Option<PathBuf>,

    /// Baseline station table, CSV or `.json`.  Uses the built-in layout
    /// when omitted.
    #[arg(long)]
    stations: Option<PathBuf>,

    /// Run configuration JSON.  Defaults apply to missing keys.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Proposed stations per unit type.
    #[arg(long, default_value_t = 2)]
    per_type: usize,

    /// Output directory; each run writes into its own subdirectory.
    #[arg(long, default_value = "output/umec")]
    out: PathBuf,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    // 1. Inputs.
    let config = match &cli.config {
        Some(path) => DispatchConfig::from_json_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => DispatchConfig::benefit_per_cost(),
    };

    let feed = match &cli.emergencies {
        Some(path) => load_emergencies_csv(path)
            .with_context(|| format!("loading emergencies {}", path.display()))?,
        None => {
            warn!("no --emergencies given; using the built-in sample feed");
            load_emergencies_reader(Cursor::new(SAMPLE_FEED_CSV))?
        }
    };

    let baseline = match &cli.stations {
        Some(path) => load_station_file(path)?,
        None => baseline_stations(),
    };
    info!(emergencies = feed.len(), stations = baseline.len(), policy = ?config.policy, "inputs loaded");

    // 2. Proposed layout.
    let plan: Vec<(UnitKind, usize)> = UnitKind::ALL.iter().map(|&k| (k, cli.per_type)).collect();
    let mut rng = SimRng::new(config.seed);
    let proposed = propose_stations(&feed, &plan, &config.capabilities, &config.placement, &mut rng)?;

    println!("=== umec — emergency dispatch twin ===");
    println!("Emergencies: {}  |  Policy: {:?}  |  Seed: {}", feed.len(), config.policy, config.seed);
    println!();
    print_stations("Baseline stations", &baseline);
    print_stations("Proposed stations (weighted k-means)", &proposed);

    // 3. Run all three in parallel.  The nearest-unit run has no budget and
    //    no ignored tiers.
    let nearest_config = DispatchConfig {
        policy:                  PolicyKind::Nearest,
        budget:                  BudgetConfig::default(),
        ignore_tier_at_or_below: 0,
        ..config.clone()
    };
    let t0 = Instant::now();
    let (near, (base, opt)) = rayon::join(
        || run_layout(&nearest_config, &feed, baseline.clone(), &cli.out.join("nearest")),
        || {
            rayon::join(
                || run_layout(&config, &feed, baseline.clone(), &cli.out.join("baseline")),
                || run_layout(&config, &feed, proposed.clone(), &cli.out.join("optimized")),
            )
        },
    );
    let (near, base, opt) = (near?, base?, opt?);
    let elapsed = t0.elapsed();

    // 4. Report.
    println!("Nearest unit (baseline stations)\n{near}\n");
    println!("Baseline\n{base}\n");
    println!("Proposed\n{opt}\n");
    print_comparison("Baseline vs. nearest unit", &near, &base);
    print_comparison("Proposed vs. nearest unit", &near, &opt);
    print_comparison("Proposed vs. baseline", &base, &opt);
    println!("All runs complete in {:.3} s; output in {}", elapsed.as_secs_f64(), cli.out.display());

    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_station_file(path: &Path) -> Result<Vec<StationSpec>> {
    let stations = if path.extension().is_some_and(|e| e == "json") {
        load_stations_json(path)
    } else {
        load_stations_csv(path)
    };
    stations.with_context(|| format!("loading stations {}", path.display()))
}

/// One independent run.  Writes CSV output and `summary.json` under `dir`.
fn run_layout(
    config:   &DispatchConfig,
    feed:     &[EmergencyRecord],
    stations: Vec<StationSpec>,
    dir:      &Path,
) -> Result<Summary> {
    let mut sim = SimBuilder::from_config(config.clone())
        .emergencies(feed.to_vec())
        .stations(stations)
        .build()?;

    let mut obs = SimOutputObserver::new(CsvWriter::new(dir)?);
    let summary = sim.run(&mut obs)?;
    if let Some(e) = obs.take_error() {
        warn!(dir = %dir.display(), error = %e, "output incomplete");
    }

    let json = serde_json::to_string_pretty(&summary)?;
    std::fs::write(dir.join("summary.json"), json)?;
    Ok(summary)
}

fn print_comparison(title: &str, reference: &Summary, candidate: &Summary) {
    println!("{title}");
    println!("  score          {:+.2}", candidate.total_score - reference.total_score);
    println!("  success rate   {:+.1}%", (candidate.success_rate - reference.success_rate) * 100.0);
    println!("  net            {:+.1}", candidate.net_score - reference.net_score);
    println!();
}

fn print_stations(title: &str, stations: &[StationSpec]) {
    println!("{title}");
    println!("{:<6} {:<8} {:>8} {:>8} {:>6}", "Name", "Type", "x", "y", "Units");
    println!("{}", "-".repeat(40));
    for s in stations {
        println!(
            "{:<6} {:<8} {:>8.1} {:>8.1} {:>6}",
            s.name, s.kind.as_str(), s.location.x, s.location.y, s.unit_count
        );
    }
    println!();
}
