//! Experiment configuration.
//!
//! Turns raw command-line/environment values into a validated
//! [`ExperimentConfig`].

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::sequence::{LEN, STEP};

/// Log levels accepted by the binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(Error::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How the experiment randomizes its sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// `n` random transpositions (approximate mixing)
    #[default]
    Transpositions,
    /// Uniform Fisher-Yates shuffle
    FisherYates,
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "transpositions" | "transposition" => Ok(Method::Transpositions),
            "fisher-yates" | "fisher_yates" | "fy" => Ok(Method::FisherYates),
            _ => Err(Error::InvalidMethod(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Transpositions => write!(f, "transpositions"),
            Method::FisherYates => write!(f, "fisher-yates"),
        }
    }
}

/// Parameters of one fill → randomize → summarize run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentConfig {
    /// Number of consecutive differences; the sequence holds `len + 1` values
    pub len: usize,
    /// Stride between baseline values
    pub step: i64,
    /// Generator seed. `None` draws one from OS entropy at run time.
    pub seed: Option<u64>,
    pub method: Method,
    pub log_level: LogLevel,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            len: LEN,
            step: STEP,
            seed: None,
            method: Method::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl ExperimentConfig {
    /// Checks that the run produces at least one difference and that the
    /// largest baseline value `len * step` fits in an `i64`.
    pub fn validate(&self) -> Result<()> {
        if self.len == 0 {
            return Err(Error::InvalidConfig(
                "len must be at least 1 to produce a difference".to_string(),
            ));
        }
        if self.step == 0 {
            return Err(Error::InvalidConfig("step must be non-zero".to_string()));
        }
        // Differences span twice the range in the worst case.
        if self.range_max().and_then(|max| max.checked_mul(2)).is_none() {
            return Err(Error::InvalidConfig(format!(
                "len {} with step {} overflows the value range",
                self.len, self.step
            )));
        }
        Ok(())
    }

    /// Largest baseline value, `len * step`, or `None` if it does not fit
    /// in an `i64`.
    pub fn range_max(&self) -> Option<i64> {
        i64::try_from(self.len)
            .ok()
            .and_then(|len| len.checked_mul(self.step))
    }
}

/// Raw values gathered from the command line and environment.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub len: Option<usize>,
    pub step: Option<i64>,
    pub seed: Option<u64>,
    pub method: Option<String>,
    pub log_level: Option<String>,
}

/// Builds a validated configuration, falling back to defaults for every
/// value not supplied.
pub fn build_config(args: &CliArgs) -> Result<ExperimentConfig> {
    let defaults = ExperimentConfig::default();
    let config = ExperimentConfig {
        len: args.len.unwrap_or(defaults.len),
        step: args.step.unwrap_or(defaults.step),
        seed: args.seed,
        method: args
            .method
            .as_deref()
            .map(str::parse::<Method>)
            .transpose()?
            .unwrap_or(defaults.method),
        log_level: args
            .log_level
            .as_deref()
            .map(str::parse::<LogLevel>)
            .transpose()?
            .unwrap_or(defaults.log_level),
    };
    config.validate()?;
    Ok(config)
}
