use std::collections::BTreeMap;
use std::env;

use crate::api::{split_directives, Expectation};
use crate::matcher::{ParsedArguments, TokenMatcher};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The format string driven command line parser.
///
/// ### Example
/// ```
/// use clarg::ArgumentParser;
///
/// let arguments = ArgumentParser::new("program")
///     .expect("-n %d ? integer expected; -o %s | out.txt; -v")
///     .parse_tokens(&["-vn", "3", "extra"]);
///
/// assert!(!arguments.has_errors());
/// assert!(arguments.has_short('v'));
/// assert_eq!(arguments.get::<i32>("n").unwrap(), 3);
/// assert_eq!(arguments.get::<String>("o").unwrap(), "out.txt");
/// assert_eq!(arguments.objects(), &["extra".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct ArgumentParser {
    program: String,
    expectations: Vec<Expectation>,
    defaults: BTreeMap<String, String>,
}

impl ArgumentParser {
    /// Create a command line parser without any expectations.
    ///
    /// ### Example
    /// ```
    /// use clarg::ArgumentParser;
    ///
    /// let arguments = ArgumentParser::new("program").parse_tokens(&[]);
    /// assert!(arguments.objects().is_empty());
    /// ```
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            expectations: Vec::default(),
            defaults: BTreeMap::default(),
        }
    }

    /// Register the expectations of a format string.
    /// May be repeated; expectations accumulate.
    ///
    /// Each directive is written `NAME [TYPE] [| DEFAULT] [? ERROR]`, and directives are separated by `;`.
    /// Escape a `;` that belongs inside a directive as `\;`.
    ///
    /// Types use the printf specifiers: `%s`, `%d`/`%i`, `%u`, `%li`/`%ld`, `%lu`, `%f`.
    /// A directive without a type (or `%b`) is a switch.
    ///
    /// ### Example
    /// ```
    /// use clarg::ArgumentParser;
    ///
    /// let parser = ArgumentParser::new("program")
    ///     .expect("-a %s; --named %f | 0 ? float expected")
    ///     .expect("-b");
    ///
    /// assert_eq!(parser.expectations().len(), 3);
    /// ```
    pub fn expect(mut self, format: &str) -> Self {
        for directive in split_directives(format) {
            let expectation = Expectation::parse(&directive);

            #[cfg(feature = "tracing_debug")]
            {
                debug!(
                    "Expecting '{}' as {}.",
                    expectation.name(),
                    expectation.value_type()
                );
            }

            if let Some(default) = expectation.default() {
                self.defaults
                    .insert(expectation.name().to_string(), default.to_string());
            }

            self.expectations.push(expectation);
        }

        self
    }

    /// The program name, as shown in usage messages.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The registered expectations, in registration order.
    pub fn expectations(&self) -> &[Expectation] {
        &self.expectations
    }

    /// Match the input tokens (excluding the program name) against the expectations.
    ///
    /// Violated expectations are recorded in the result rather than returned as an error.
    pub fn parse_tokens(&self, tokens: &[&str]) -> ParsedArguments {
        let arguments = ParsedArguments::new(self.defaults.clone());
        TokenMatcher::new(&self.expectations, arguments).consume(tokens)
    }

    /// Match the Cli [`env::args`] (skipping the program name) against the expectations.
    pub fn parse(&self) -> ParsedArguments {
        let tokens = args();
        self.parse_tokens(tokens.iter().map(AsRef::as_ref).collect::<Vec<&str>>().as_slice())
    }
}

/// The Cli tokens of this process, excluding the program name.
pub fn args() -> Vec<String> {
    env::args().skip(1).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GetError;

    const FORMAT: &str = "-o %s | input.txt; -t %s | alpha; -n %d ? integer expected; \
        -e %d | 1000 ? integer expected; -b %d | 1 ? integer expected; -i; -d; -s; -v";

    #[test]
    fn defaults_registered() {
        let arguments = ArgumentParser::new("program")
            .expect(FORMAT)
            .parse_tokens(&[]);

        for (name, default) in [("o", "input.txt"), ("t", "alpha"), ("e", "1000"), ("b", "1")] {
            assert!(arguments.has_default(name));
            assert_eq!(arguments.default_value(name), Some(default));
        }

        assert!(!arguments.has_default("n"));
        assert_eq!(arguments.get::<i32>("e"), Ok(1000));
        assert_matches!(arguments.get::<i32>("n"), Err(GetError::Missing(_)));
    }

    #[test]
    fn expect_accumulates() {
        let parser = ArgumentParser::new("program").expect("-a %s").expect("-b %d | 4");

        assert_eq!(parser.program(), "program");
        assert_eq!(
            parser
                .expectations()
                .iter()
                .map(Expectation::name)
                .collect::<Vec<&str>>(),
            vec!["-a", "-b"]
        );
        assert_eq!(
            parser.parse_tokens(&[]).get::<u8>("b"),
            Ok(4)
        );
    }

    #[test]
    fn parse_full_command_line() {
        let arguments = ArgumentParser::new("program")
            .expect(FORMAT)
            .parse_tokens(&["-n", "5", "-e", "10", "-b", "2", "-i"]);

        assert!(!arguments.has_errors());
        assert_eq!(arguments.get::<i32>("n"), Ok(5));
        assert_eq!(arguments.get::<i32>("e"), Ok(10));
        assert_eq!(arguments.get::<i32>("b"), Ok(2));
        assert!(arguments.has_short('i'));
        assert!(!arguments.has_short('d'));
        assert_eq!(arguments.get::<String>("o"), Ok("input.txt".to_string()));
    }

    #[test]
    fn parse_errors() {
        let arguments = ArgumentParser::new("program")
            .expect(FORMAT)
            .parse_tokens(&["-n", "x", "-e"]);

        assert!(arguments.has_errors());
        assert_eq!(
            arguments.errors(),
            vec!["integer expected", "integer expected"]
        );
        // Even on error, the default still applies.
        assert_eq!(arguments.get::<i32>("e"), Ok(1000));
    }

    #[test]
    fn parse_is_deterministic() {
        let tokens = ["-vn", "3", "--unknown", "object", "-e", "oops", "-t", "digit"];
        let first = ArgumentParser::new("program")
            .expect(FORMAT)
            .parse_tokens(&tokens);
        let second = ArgumentParser::new("program")
            .expect(FORMAT)
            .parse_tokens(&tokens);

        assert_eq!(first, second);
    }

    #[test]
    fn parse_reads_process_arguments() {
        let parser = ArgumentParser::new("program");
        let tokens = args();
        let tokens: Vec<&str> = tokens.iter().map(String::as_str).collect();

        let arguments = parser.parse();

        assert!(!arguments.has_errors());
        assert_eq!(arguments, parser.parse_tokens(&tokens));
    }
}
