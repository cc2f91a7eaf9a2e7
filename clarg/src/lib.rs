//! `clarg` is a small command line parser configured by printf style format strings.
//!
//! A format string holds one *directive* per flag, separated by `;`:
//! ```text
//! NAME [TYPE] [| DEFAULT] [? ERROR]
//! ```
//! * `NAME` is the exact token expected on the Cli, including its `-` (short) or `--` (long) prefix.
//! * `TYPE` is one of `%s`, `%d`/`%i`, `%u`, `%li`/`%ld`, `%lu`, `%f`.
//! Without a type (or with `%b`) the flag is a switch that takes no value.
//! * `| DEFAULT` is the value [`ParsedArguments::get`] falls back to when the flag is absent.
//! * `? ERROR` is the message recorded when the flag is given without a valid value.
//!
//! When `|` or `?` is repeated, the last one wins.
//! A `;` belonging inside a directive is escaped as `\;`.
//!
//! # Usage
//! ```
//! use clarg::ArgumentParser;
//!
//! let arguments = ArgumentParser::new("program")
//!     .expect("-o %s | input.txt; -n %d ? integer expected; --limit %f | 1.5; -v")
//!     .parse_tokens(&["-vn", "12", "--limit", "abc", "leftover"]);
//!
//! assert!(arguments.has_short('v'));
//! assert_eq!(arguments.get::<i32>("n").unwrap(), 12);
//! assert_eq!(arguments.get::<String>("o").unwrap(), "input.txt");
//! // The invalid value is reported; the default still applies.
//! assert!(arguments.has_error("limit"));
//! assert_eq!(arguments.get::<f64>("limit").unwrap(), 1.5);
//! assert_eq!(arguments.objects(), &["leftover".to_string()]);
//! ```
//!
//! # Cli Semantics
//! * A token of at least two characters starting with `-` is a flag; any other token is a positional object.
//! * `--name` is matched against the directive named `--name`.
//! A non-switch takes the following token as its value, provided the token converts to the directive's type.
//! * `-abc` is a cluster of the short flags `-a`, `-b` and `-c`.
//! Each non-switch in the cluster takes the next unclaimed token following the cluster.
//! For example, `-eb 10 2` gives `10` to `-e` and `2` to `-b`.
//! * A flag without a valid value records its error message.
//! The rejected token is dropped, unless it is itself a flag.
//! * Flags without a directive are ignored.
//!
//! # Features
//! * `unit_test`: exposes [`InMemoryInterface`] for testing programs built on `clarg`.
//! * `tracing_debug`: logs the matcher's decisions via `tracing`.
#![deny(missing_docs)]
mod api;
mod matcher;
mod model;
mod parser;

pub use api::*;
pub use matcher::{GetError, ParsedArguments};
pub use model::*;
pub use parser::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
