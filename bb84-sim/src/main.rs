//! bb84-sim: repeat a BB84 protocol variant and compare its rates with theory.

use clap::Parser;
use log::{info, warn};

use bb84_sim::params::{Protocol, SimulationParameters};
use bb84_sim::simulation::{run_fresh, run_seeded, SimulationReport};

#[derive(Parser)]
#[command(name = "bb84-sim")]
#[command(version)]
#[command(about = "Monte Carlo statistics for BB84 basis agreement and eavesdropping")]
struct Cli {
    /// Protocol variant to simulate
    #[arg(short, long, value_enum, default_value = "basis-agreement")]
    protocol: Protocol,

    /// Number of bits per run
    #[arg(short = 'n', long = "bits", default_value = "100")]
    bits: usize,

    /// Number of independent runs
    #[arg(short, long, default_value = "1000")]
    runs: usize,

    /// Theoretical probability (defaults to 0.5 for agreement, 0.25 otherwise)
    #[arg(long)]
    probability: Option<f64>,

    /// Seed for a reproducible simulation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,

    /// Include every per-run rate in the text output
    #[arg(long)]
    samples: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_target(false)
        .init();
}

fn print_report(report: &SimulationReport, with_samples: bool) {
    let stats = &report.summary;
    let label = report.protocol.rate_label();

    println!(
        "{:?} (N={}, runs={})",
        report.protocol,
        report.parameters.n(),
        report.requested_runs()
    );
    if report.excluded_runs() > 0 {
        println!(
            "  Excluded runs (empty sifted key): {}",
            report.excluded_runs()
        );
    }
    println!("  Mean {}: {:.5}", label, stats.empirical_mean);
    println!("  Standard deviation (simulated): {:.5}", stats.empirical_std);
    println!(
        "  Standard deviation (binomial theory): {:.5}",
        stats.theoretical_std
    );
    println!("  Theoretical p: {}", stats.expected);
    println!(
        "  N_sigma (|mean - p| / combined std): {:.5}",
        stats.significance
    );
    println!(
        "  N_sigma (|mean - p| / binomial std): {:.5}",
        stats.binomial_significance
    );

    if with_samples {
        for (i, rate) in report.samples.rates().iter().enumerate() {
            println!("  {:>6}: {:.5}", i, rate);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let p = cli
        .probability
        .unwrap_or_else(|| cli.protocol.theoretical_probability());
    let params = SimulationParameters::new(cli.bits, cli.runs, p)?;

    let report = match cli.seed {
        Some(seed) => {
            info!("Seeded run, seed = {}", seed);
            run_seeded(cli.protocol, params, seed)?
        }
        None => run_fresh(cli.protocol, params)?,
    };

    if !report.summary.is_consistent(3.0) {
        warn!(
            "Mean deviates from p = {} by {:.2} sigma",
            report.summary.expected, report.summary.significance
        );
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, cli.samples);
    }

    Ok(())
}
