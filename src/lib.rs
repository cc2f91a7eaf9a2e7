//! `gentest` writes random test data to a file: integers, doubles, or strings built from a POSIX character class.
//!
//! The command line is described by a single [`clarg`] format string ([`FORMAT`]).
//!
//! # Usage
//! ```console
//! $ gentest -n 3 -e 10
//! $ cat input.txt
//! 7
//! 2
//! 9
//! $ gentest -sv -n 2 -e 5 -t digit -o digits.txt
//! Writing strings to file digits.txt
//! Include characters: digit
//! Number of samples: 2
//! Length range: [1, 5)
//! ```
//!
//! Samples are drawn uniformly from the half-open range `[low, high)`, given by `-b` and `-e`.
//! For strings, the range bounds the string length.
//! Passing `--seed` makes the output reproducible.
//!
//! # Features
//! * `tracing_debug`: logs the parser's and generator's decisions via `tracing`.
//! The binary installs a `tracing-subscriber` filtered by `RUST_LOG`.
#![deny(missing_docs)]
mod app;
mod config;
mod generator;
mod writer;

pub use app::run;
pub use config::{options, ConfigError, GenerationConfig, SampleKind, FORMAT};
pub use generator::{
    character, double, integer, string, CharClass, CharClassError, GenerateError,
    GenerationRequest,
};
pub use writer::write_samples;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
