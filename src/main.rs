//! Command line front end of the proximity monitor.
//!
//! ```text
//! proxorbit -n 6 -s 7 -t 500
//! proxorbit --tle stations.tle --events-csv events.csv
//! proxorbit --config monitor.toml --json
//! ```
//!
//! Command line values override the configuration file, which overrides the defaults.
//! Logs go to stderr and are filtered with `RUST_LOG` (`warn` by default, `debug` with `-v`).
use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use proxorbit::{
    collision::csv_export::export_events_csv, MonitorConfig, ProxOrbitError, ProximityMonitor,
    SourceMode,
};

/// Orbital proximity monitor: flags satellite pairs closer than a distance threshold
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<Utf8PathBuf>,

    /// Trajectory source: synthetic or tle
    #[arg(short, long, value_name = "MODE")]
    mode: Option<SourceMode>,

    /// Number of synthetic objects (zero or negative falls back to 4)
    #[arg(short = 'n', long, value_name = "COUNT", allow_negative_numbers = true)]
    count: Option<i64>,

    /// Seed of the synthetic generator (zero falls back to 42)
    #[arg(short, long, value_name = "SEED", allow_negative_numbers = true)]
    seed: Option<i64>,

    /// TLE file to read (implies --mode tle)
    #[arg(long, value_name = "FILE")]
    tle: Option<Utf8PathBuf>,

    /// Close-approach threshold in kilometres
    #[arg(short, long, value_name = "KM", allow_negative_numbers = true)]
    threshold: Option<f64>,

    /// Number of extrapolated timesteps appended to each trajectory
    #[arg(long, value_name = "STEPS")]
    future_steps: Option<usize>,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Also write the close-approach events to a CSV file
    #[arg(long, value_name = "FILE")]
    events_csv: Option<Utf8PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn overrides(&self) -> MonitorConfig {
        MonitorConfig {
            mode: self.mode,
            object_count: self.count,
            seed: self.seed,
            tle_file: self.tle.clone(),
            tle_text: None,
            threshold_km: self.threshold,
            future_steps: self.future_steps,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(args: &Args) -> Result<(), ProxOrbitError> {
    let base = match &args.config {
        Some(path) => MonitorConfig::load(path)?,
        None => MonitorConfig::default(),
    };
    let params = base.merge(args.overrides()).resolve()?;
    info!("{params}");

    let report = ProximityMonitor::new(params).run()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }

    if let Some(path) = &args.events_csv {
        export_events_csv(&report.detection.events, path)?;
        info!(path = %path, events = report.detection.events.len(), "events exported");
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
