//! u-randomize CLI
//!
//! Fills a stride sequence, randomizes it, and prints the mean and
//! population standard deviation of its consecutive differences.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use u_randomize::config::{build_config, CliArgs};
use u_randomize::experiment;

/// Randomize a stride sequence and report diff statistics
#[derive(Parser, Debug)]
#[command(name = "u-randomize")]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of consecutive differences (the sequence holds len + 1 values)
    #[arg(short, long, env = "U_RANDOMIZE_LEN")]
    len: Option<usize>,

    /// Stride between baseline values
    #[arg(short, long, env = "U_RANDOMIZE_STEP", allow_negative_numbers = true)]
    step: Option<i64>,

    /// Generator seed; drawn from OS entropy and logged when omitted
    #[arg(long, env = "U_RANDOMIZE_SEED")]
    seed: Option<u64>,

    /// Randomization method (transpositions, fisher-yates)
    #[arg(short, long, env = "U_RANDOMIZE_METHOD")]
    method: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "U_RANDOMIZE_LOG_LEVEL")]
    log_level: Option<String>,
}

impl From<Args> for CliArgs {
    fn from(args: Args) -> Self {
        CliArgs {
            len: args.len,
            step: args.step,
            seed: args.seed,
            method: args.method,
            log_level: args.log_level,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Builds the configuration, runs the experiment, and returns the report
/// text.
fn run(args: Args) -> u_randomize::Result<String> {
    let cli_args: CliArgs = args.into();
    let config = build_config(&cli_args)?;

    init_tracing(config.log_level.as_filter_str());
    tracing::debug!(?config, "configuration loaded");

    let report = experiment::run(&config)?;
    tracing::info!(seed = report.seed, method = %report.method, "seed used");
    Ok(report.to_string())
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
