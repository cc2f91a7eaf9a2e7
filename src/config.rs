use std::path::PathBuf;
use std::str::FromStr;

use clarg::{GetError, OptionDoc, ParsedArguments};
use thiserror::Error;

use crate::generator::{CharClassError, GenerationRequest};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The `clarg` format string of the `gentest` command line.
///
/// Every option is registered under both its short and long name.
pub const FORMAT: &str = concat!(
    "-n %d ? integer expected; --number-samples %d ? integer expected;",
    "-e %d | 1000 ? integer expected; --limit-end %d | 1000 ? integer expected;",
    "-b %d | 1 ? integer expected; --limit-begin %d | 1 ? integer expected;",
    "-o %s | input.txt; --output-file %s | input.txt;",
    "-t %s | alpha; --char-type %s | alpha;",
    "-r %lu ? unsigned integer expected; --seed %lu ? unsigned integer expected;",
    "-i; --integer; -d; --double; -s; --string; -v; --verbose; -h; --help",
);

pub(crate) struct Flag {
    short: char,
    name: &'static str,
}

pub(crate) const SAMPLES: Flag = Flag { short: 'n', name: "number-samples" };
pub(crate) const LIMIT_END: Flag = Flag { short: 'e', name: "limit-end" };
pub(crate) const LIMIT_BEGIN: Flag = Flag { short: 'b', name: "limit-begin" };
pub(crate) const OUTPUT_FILE: Flag = Flag { short: 'o', name: "output-file" };
pub(crate) const CHAR_TYPE: Flag = Flag { short: 't', name: "char-type" };
pub(crate) const SEED: Flag = Flag { short: 'r', name: "seed" };
pub(crate) const INTEGER: Flag = Flag { short: 'i', name: "integer" };
pub(crate) const DOUBLE: Flag = Flag { short: 'd', name: "double" };
pub(crate) const STRING: Flag = Flag { short: 's', name: "string" };
pub(crate) const VERBOSE: Flag = Flag { short: 'v', name: "verbose" };
pub(crate) const HELP: Flag = Flag { short: 'h', name: "help" };

impl Flag {
    fn doc(&self, help: &str) -> OptionDoc {
        OptionDoc::new(Some(self.short), Some(self.name), help)
    }

    pub(crate) fn is_present(&self, arguments: &ParsedArguments) -> bool {
        arguments.has_short(self.short) || arguments.has_named(self.name)
    }

    // The short spelling wins over the long one; either falls back to the shared default.
    fn resolve<T: FromStr>(&self, arguments: &ParsedArguments) -> Result<T, GetError> {
        let short = self.short.to_string();

        if arguments.value(&short).is_none() && arguments.value(self.name).is_some() {
            arguments.get(self.name)
        } else {
            arguments.get(&short)
        }
    }
}

/// The usage documentation of the `gentest` command line.
pub fn options() -> Vec<OptionDoc> {
    vec![
        SAMPLES
            .doc("Specify number of samples (required).")
            .meta("SAMPLES"),
        LIMIT_END
            .doc("Specify the exclusive upper limit (of value, or string length) - default 1000.")
            .meta("LIMIT"),
        LIMIT_BEGIN
            .doc("Specify the lowest value (or string length) - default 1.")
            .meta("LIMIT"),
        OUTPUT_FILE
            .doc("Specify output file - default input.txt.")
            .meta("FILE"),
        INTEGER.doc("Generate integers (the default)."),
        DOUBLE.doc("Generate doubles."),
        STRING.doc("Generate strings."),
        CHAR_TYPE
            .doc(
                "Specify type of characters in strings, one of alnum, alpha, blank, cntrl, \
                digit, graph, lower, print, punct, space, upper, xdigit - default alpha.",
            )
            .meta("TYPE"),
        SEED.doc("Seed the random generator - default the current time.")
            .meta("SEED"),
        VERBOSE.doc("Print more information about generated data."),
        HELP.doc("Show this help message and exit."),
    ]
}

/// Failure to resolve the configuration from the parsed arguments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The required sample count was not given.
    #[error("No sample size argument provided.")]
    MissingSamples,

    /// A resolved value does not convert to its type.
    #[error("{0}")]
    InvalidValue(#[from] GetError),
}

/// The kind of samples to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    /// Integers in `[low, high)`.
    Integer,
    /// Doubles in `[low, high)`.
    Double,
    /// Strings with a length in `[low, high)`.
    Text,
}

/// Everything a generation run needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    /// Where the samples are written.
    pub output: PathBuf,
    /// How many samples to write.
    pub samples: i32,
    /// Inclusive lower bound.
    pub low: i32,
    /// Exclusive upper bound.
    pub high: i32,
    /// What to generate.
    pub kind: SampleKind,
    /// The character class name for strings; only resolved when strings are generated.
    pub char_type: String,
    /// Whether to describe the run before generating.
    pub verbose: bool,
    /// A fixed seed for the random generator.
    pub seed: Option<u64>,
}

impl GenerationConfig {
    /// Resolve the configuration.
    ///
    /// When several kinds are requested, doubles win over strings, and strings over integers.
    pub fn from_arguments(arguments: &ParsedArguments) -> Result<Self, ConfigError> {
        if !SAMPLES.is_present(arguments) {
            return Err(ConfigError::MissingSamples);
        }

        let kind = if DOUBLE.is_present(arguments) {
            SampleKind::Double
        } else if STRING.is_present(arguments) {
            SampleKind::Text
        } else {
            SampleKind::Integer
        };
        let seed = if SEED.is_present(arguments) {
            Some(SEED.resolve(arguments)?)
        } else {
            None
        };
        let config = Self {
            output: PathBuf::from(OUTPUT_FILE.resolve::<String>(arguments)?),
            samples: SAMPLES.resolve(arguments)?,
            low: LIMIT_BEGIN.resolve(arguments)?,
            high: LIMIT_END.resolve(arguments)?,
            kind,
            char_type: CHAR_TYPE.resolve(arguments)?,
            verbose: VERBOSE.is_present(arguments),
            seed,
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Resolved {config:?}.");
        }

        Ok(config)
    }

    /// The generation request, resolving the character class for strings.
    pub fn request(&self) -> Result<GenerationRequest, CharClassError> {
        let GenerationConfig { low, high, .. } = *self;

        Ok(match self.kind {
            SampleKind::Integer => GenerationRequest::Integer { low, high },
            SampleKind::Double => GenerationRequest::Double {
                low: f64::from(low),
                high: f64::from(high),
            },
            SampleKind::Text => GenerationRequest::Text {
                low,
                high,
                class: self.char_type.parse()?,
            },
        })
    }

    /// The description printed in verbose mode, line by line.
    pub fn describe(&self) -> Vec<String> {
        let output = self.output.display();
        let mut lines = Vec::default();

        match self.kind {
            SampleKind::Integer => {
                lines.push(format!("Writing integers to file {output}"));
                lines.push(format!("Number of samples: {}", self.samples));
                lines.push(format!("Range: [{}, {})", self.low, self.high));
            }
            SampleKind::Double => {
                lines.push(format!("Writing doubles to file {output}"));
                lines.push(format!("Number of samples: {}", self.samples));
                lines.push(format!(
                    "Range: [{}, {})",
                    f64::from(self.low),
                    f64::from(self.high)
                ));
            }
            SampleKind::Text => {
                lines.push(format!("Writing strings to file {output}"));
                lines.push(format!("Include characters: {}", self.char_type));
                lines.push(format!("Number of samples: {}", self.samples));
                lines.push(format!("Length range: [{}, {})", self.low, self.high));
            }
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::CharClass;
    use clarg::ArgumentParser;
    use rstest::rstest;

    fn arguments(tokens: &[&str]) -> ParsedArguments {
        ArgumentParser::new("gentest").expect(FORMAT).parse_tokens(tokens)
    }

    fn config(tokens: &[&str]) -> GenerationConfig {
        GenerationConfig::from_arguments(&arguments(tokens)).unwrap()
    }

    #[test]
    fn defaults() {
        assert_eq!(
            config(&["-n", "5"]),
            GenerationConfig {
                output: PathBuf::from("input.txt"),
                samples: 5,
                low: 1,
                high: 1000,
                kind: SampleKind::Integer,
                char_type: "alpha".to_string(),
                verbose: false,
                seed: None,
            }
        );
    }

    #[test]
    fn long_names() {
        let config = config(&[
            "--number-samples",
            "7",
            "--limit-end",
            "20",
            "--limit-begin",
            "3",
            "--output-file",
            "out.txt",
            "--string",
            "--char-type",
            "digit",
            "--seed",
            "42",
            "--verbose",
        ]);

        assert_eq!(config.samples, 7);
        assert_eq!(config.high, 20);
        assert_eq!(config.low, 3);
        assert_eq!(config.output, PathBuf::from("out.txt"));
        assert_eq!(config.kind, SampleKind::Text);
        assert_eq!(config.char_type, "digit");
        assert_eq!(config.seed, Some(42));
        assert!(config.verbose);
    }

    #[test]
    fn short_name_wins() {
        let config = config(&["-n", "1", "--number-samples", "2", "--limit-end", "9"]);

        assert_eq!(config.samples, 1);
        assert_eq!(config.high, 9);
    }

    #[rstest]
    #[case(vec!["-n", "1"], SampleKind::Integer)]
    #[case(vec!["-n", "1", "-i"], SampleKind::Integer)]
    #[case(vec!["-n", "1", "-s"], SampleKind::Text)]
    #[case(vec!["-n", "1", "-d"], SampleKind::Double)]
    #[case(vec!["-n", "1", "-isd"], SampleKind::Double)]
    #[case(vec!["-n", "1", "-is"], SampleKind::Text)]
    #[case(vec!["-n", "1", "--double", "--string"], SampleKind::Double)]
    fn kind_precedence(#[case] tokens: Vec<&str>, #[case] expected: SampleKind) {
        assert_eq!(config(&tokens).kind, expected);
    }

    #[test]
    fn missing_samples() {
        assert_eq!(
            GenerationConfig::from_arguments(&arguments(&["-e", "10", "-i"])),
            Err(ConfigError::MissingSamples)
        );
    }

    #[test]
    fn request() {
        assert_eq!(
            config(&["-n", "5", "-e", "10", "-b", "2"]).request(),
            Ok(GenerationRequest::Integer { low: 2, high: 10 })
        );
        assert_eq!(
            config(&["-n", "5", "-d"]).request(),
            Ok(GenerationRequest::Double {
                low: 1.0,
                high: 1000.0
            })
        );
        assert_eq!(
            config(&["-n", "5", "-s", "-t", "xdigit"]).request(),
            Ok(GenerationRequest::Text {
                low: 1,
                high: 1000,
                class: CharClass::Xdigit
            })
        );
    }

    #[test]
    fn invalid_char_type_only_matters_for_strings() {
        assert!(config(&["-n", "5", "-t", "bogus"]).request().is_ok());
        assert_eq!(
            config(&["-n", "5", "-s", "-t", "bogus"]).request(),
            Err(CharClassError("bogus".to_string()))
        );
    }

    #[test]
    fn describe() {
        assert_eq!(
            config(&["-n", "5", "-e", "10", "-b", "2"]).describe(),
            vec![
                "Writing integers to file input.txt",
                "Number of samples: 5",
                "Range: [2, 10)",
            ]
        );
        assert_eq!(
            config(&["-n", "5", "-d", "-o", "d.txt"]).describe(),
            vec![
                "Writing doubles to file d.txt",
                "Number of samples: 5",
                "Range: [1, 1000)",
            ]
        );
        assert_eq!(
            config(&["-n", "5", "-s", "-t", "digit"]).describe(),
            vec![
                "Writing strings to file input.txt",
                "Include characters: digit",
                "Number of samples: 5",
                "Length range: [1, 1000)",
            ]
        );
    }

    #[test]
    fn options_cover_every_flag() {
        let parser = ArgumentParser::new("gentest").expect(FORMAT);
        let documented = options().len();

        // Each documented option has a short and a long expectation.
        assert_eq!(parser.expectations().len(), documented * 2);
    }
}
