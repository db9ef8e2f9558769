//! planner — command-line driver for the barracks pipeline simulator.
//!
//! ```text
//! planner <input.json> [output_dir] [--producers <producers.csv>] [--compare]
//! ```
//!
//! Reads a `SimInput` from JSON, runs the scheduler, prints the activity
//! table, and writes `activities.csv` / `summary.csv` into `output_dir`
//! (default `output/`).  `--producers` replaces the JSON producer list with a
//! `level,capacity` CSV.  `--compare` also runs every strategy on the same
//! input, prints their totals, and writes each report under
//! `output_dir/compare/<strategy>/`.
//!
//! Set `RUST_LOG=debug` to trace every activity start and finish.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use log::info;

use bk_core::SimTime;
use bk_output::{CsvWriter, Report, ReportObserver};
use bk_schedule::{Activity, Ledger, Producer, ProducerRegistry, load_producers_csv};
use bk_sim::{LogObserver, SimInput, SimObserver, TrainStrategy};

// ── Arguments ─────────────────────────────────────────────────────────────────

struct Args {
    input:     PathBuf,
    out_dir:   PathBuf,
    producers: Option<PathBuf>,
    compare:   bool,
}

fn parse_args() -> Result<Args> {
    let mut positional = Vec::new();
    let mut producers = None;
    let mut compare = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--producers" => {
                let path = args.next().context("--producers needs a path")?;
                producers = Some(PathBuf::from(path));
            }
            "--compare" => compare = true,
            flag if flag.starts_with("--") => bail!("unknown flag {flag}"),
            _ => positional.push(PathBuf::from(arg)),
        }
    }

    let mut positional = positional.into_iter();
    let Some(input) = positional.next() else {
        bail!("usage: planner <input.json> [output_dir] [--producers <producers.csv>] [--compare]");
    };
    let out_dir = positional.next().unwrap_or_else(|| PathBuf::from("output"));

    Ok(Args { input, out_dir, producers, compare })
}

// ── Observer wrapper: log + CSV ───────────────────────────────────────────────

struct PlannerObserver {
    log:    LogObserver,
    report: ReportObserver<CsvWriter>,
}

impl SimObserver for PlannerObserver {
    fn on_sim_start(&mut self, producers: &ProducerRegistry, goal: u32) {
        self.log.on_sim_start(producers, goal);
        self.report.on_sim_start(producers, goal);
    }

    fn on_activity_start(&mut self, activity: &Activity) {
        self.log.on_activity_start(activity);
        self.report.on_activity_start(activity);
    }

    fn on_activity_retired(&mut self, activity: &Activity, ledger: &Ledger) {
        self.log.on_activity_retired(activity, ledger);
    }

    fn on_producer_idle(&mut self, producer: &Producer, now: SimTime) {
        self.log.on_producer_idle(producer, now);
    }

    fn on_pass_end(&mut self, now: SimTime, ledger: &Ledger, in_flight: u64) {
        self.log.on_pass_end(now, ledger, in_flight);
    }

    fn on_sim_end(&mut self, now: SimTime, ledger: &Ledger) {
        self.log.on_sim_end(now, ledger);
        self.report.on_sim_end(now, ledger);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn load_input(args: &Args) -> Result<SimInput> {
    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let mut input: SimInput = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", args.input.display()))?;
    if let Some(path) = &args.producers {
        input.producers = load_producers_csv(path)
            .with_context(|| format!("loading producers from {}", path.display()))?;
    }
    Ok(input)
}

fn print_table(activities: &[Activity]) {
    println!("{:<11} {:<12} {:<12} {:<8} Task", "Barrack", "Start@", "Finish@", "Type");
    println!("{}", "-".repeat(100));
    for a in activities {
        println!(
            "{:<11} {:<12} {:<12} {:<8} {}",
            a.producer.label(),
            a.start.to_string(),
            a.finish.to_string(),
            a.kind.as_str(),
            a.description(),
        );
    }
}

/// Re-run `input` under every strategy, writing each report to
/// `out_dir/compare/<strategy>/` and printing its summary.
fn compare_strategies(input: &SimInput, out_dir: &Path) -> Result<()> {
    println!();
    println!("{:<22} {:<14} {:<14} {:<11} Utilisation", "Strategy", "Wall", "Busy", "Activities");
    for strategy in TrainStrategy::ALL {
        let outcome = bk_sim::simulate(&SimInput { strategy, ..input.clone() })?;
        let report = Report::build(&outcome, input.base_unix_secs);

        let dir = out_dir.join("compare").join(strategy.name().replace(' ', "_"));
        std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
        report.write_to(&mut CsvWriter::new(&dir)?)?;

        let s = &report.summary;
        println!(
            "{:<22} {:<14} {:<14} {:<11} {:.1}%",
            strategy.name(),
            s.wall_time,
            s.busy_time,
            s.activity_count,
            s.utilisation * 100.0,
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = parse_args()?;
    let input = load_input(&args)?;

    println!("=== barracks planner ===");
    println!(
        "Goal: {}  |  Strategy: {}  |  Producers: {}",
        input.goal,
        input.strategy,
        input.producers.len()
    );
    println!();

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    let writer = CsvWriter::new(Path::new(&args.out_dir))?;
    let mut obs = PlannerObserver {
        log:    LogObserver,
        report: ReportObserver::new(writer, input.base_unix_secs),
    };

    let t0 = Instant::now();
    let outcome = bk_sim::simulate_with(&input, &mut obs)?;
    info!("simulation finished in {:.3} ms", t0.elapsed().as_secs_f64() * 1_000.0);

    if let Some(e) = obs.report.take_error() {
        eprintln!("output error: {e}");
    }

    print_table(&outcome.activities);
    println!();
    println!("Wall time   : {}", outcome.wall_time_text());
    println!("Busy time   : {}", outcome.busy_time_text());
    println!("Utilisation : {:.1}%", outcome.utilisation() * 100.0);
    println!("Output      : {}", args.out_dir.display());

    if args.compare {
        compare_strategies(&input, &args.out_dir)?;
    }

    Ok(())
}
