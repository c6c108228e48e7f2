//! The fill → randomize → summarize experiment.
//!
//! Fills `len + 1` values with a fixed stride, randomizes them, and
//! reports the mean and population standard deviation of the `len`
//! consecutive differences. A well-mixed sequence shows a mean near zero
//! and a spread on the order of the value range.

use std::fmt;

use tracing::info;

use crate::config::{ExperimentConfig, Method};
use crate::error::{Error, Result};
use crate::random::{create_rng, entropy_seed, randomize, shuffle};
use crate::sequence::{filled, is_permutation_of};
use crate::stats::DiffSummary;

/// Outcome of one experiment run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentReport {
    /// Largest baseline value, `len * step`
    pub range_max: i64,
    /// Seed actually used, so an entropy-seeded run can be replayed
    pub seed: u64,
    pub method: Method,
    pub summary: DiffSummary,
    /// The randomized sequence
    pub sequence: Vec<i64>,
}

impl fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Range = [0, {}]", self.range_max)?;
        writeln!(f, "Mean = {}", self.summary.mean)?;
        write!(f, "StdDev = {}", self.summary.std_dev)
    }
}

/// Runs the experiment described by `config`.
///
/// # Errors
/// - [`Error::InvalidConfig`] if `config` fails validation.
/// - [`Error::NotAPermutation`] if randomization altered the values.
///
/// # Examples
/// ```
/// use u_randomize::config::ExperimentConfig;
/// use u_randomize::experiment::run;
///
/// let config = ExperimentConfig { seed: Some(1), ..Default::default() };
/// let report = run(&config).unwrap();
/// assert_eq!(report.sequence.len(), 1001);
/// assert!(report.to_string().starts_with("Range = [0, 10000]\n"));
/// ```
pub fn run(config: &ExperimentConfig) -> Result<ExperimentReport> {
    config.validate()?;
    let range_max = config.range_max().ok_or_else(|| {
        Error::InvalidConfig(format!(
            "len {} with step {} overflows the value range",
            config.len, config.step
        ))
    })?;
    let seed = config.seed.unwrap_or_else(entropy_seed);
    info!(
        len = config.len,
        step = config.step,
        seed,
        method = %config.method,
        "starting experiment"
    );

    let baseline = filled(config.len + 1, config.step);
    let mut sequence = baseline.clone();
    let mut rng = create_rng(seed);
    match config.method {
        Method::Transpositions => randomize(&mut sequence, &mut rng),
        Method::FisherYates => shuffle(&mut sequence, &mut rng),
    }
    if !is_permutation_of(&sequence, &baseline) {
        return Err(Error::NotAPermutation);
    }

    let summary = DiffSummary::from_sequence(&sequence)?;
    info!(
        mean = summary.mean,
        std_dev = summary.std_dev,
        "experiment complete"
    );

    Ok(ExperimentReport {
        range_max,
        seed,
        method: config.method,
        summary,
        sequence,
    })
}
