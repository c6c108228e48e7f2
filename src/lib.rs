//! # u-randomize
//!
//! Approximate in-place sequence randomization and the statistics used to
//! sanity-check it.
//!
//! ## Modules
//!
//! - [`random`]: Seeded generators, the random-transposition randomizer,
//!   and a Fisher-Yates shuffle
//! - [`sequence`]: Stride-filled baseline sequences
//! - [`stats`]: Consecutive differences, mean, population standard deviation
//! - [`experiment`]: The fill → randomize → summarize pipeline
//! - [`config`]: Experiment parameters and validation
//!
//! ## Design Philosophy
//!
//! - **Explicit randomness**: every routine takes its generator by `&mut`;
//!   there is no process-wide random state
//! - **Length travels with the data**: sequences are slices/`Vec`s, never a
//!   pointer plus a separately passed length
//! - **Property-based testing**: permutation invariants verified via proptest

pub mod config;
pub mod error;
pub mod experiment;
pub mod random;
pub mod sequence;
pub mod stats;

pub use error::{Error, Result};
