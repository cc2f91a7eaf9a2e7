use std::collections::BTreeMap;
use std::str::FromStr;
use thiserror::Error;

const SWITCH_MARKER: &str = "1";

/// Failure to `get` a typed value from the parsed arguments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GetError {
    /// Neither a captured value nor a default exists for the flag.
    #[error("no value provided for '{0}'.")]
    Missing(String),

    /// The value does not convert to the requested type.
    #[error("cannot convert '{token}' to {type_name}.")]
    InvalidConversion {
        /// The offending value.
        token: String,
        /// The requested type.
        type_name: &'static str,
    },
}

/// The outcome of matching the command line tokens against the registered expectations.
///
/// All keyed collections iterate in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArguments {
    short: BTreeMap<char, String>,
    named: BTreeMap<String, String>,
    objects: Vec<String>,
    errors: BTreeMap<String, String>,
    defaults: BTreeMap<String, String>,
}

impl ParsedArguments {
    pub(crate) fn new(defaults: BTreeMap<String, String>) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    pub(crate) fn switch_short(&mut self, short: char) {
        self.capture_short(short, SWITCH_MARKER.to_string());
    }

    pub(crate) fn switch_named(&mut self, name: &str) {
        self.capture_named(name, SWITCH_MARKER.to_string());
    }

    // A flag ends up with either a value or an error, whichever came last.
    pub(crate) fn capture_short(&mut self, short: char, value: String) {
        self.errors.remove(&format!("-{short}"));
        self.short.insert(short, value);
    }

    pub(crate) fn capture_named(&mut self, name: &str, value: String) {
        self.errors.remove(&format!("--{name}"));
        self.named.insert(name.to_string(), value);
    }

    pub(crate) fn reject(&mut self, token: &str, message: &str) {
        if let Some(name) = token.strip_prefix("--") {
            self.named.remove(name);
        } else if let Some(short) = token.strip_prefix('-').and_then(|s| s.chars().next()) {
            self.short.remove(&short);
        }

        self.errors.insert(token.to_string(), message.to_string());
    }

    pub(crate) fn push_object(&mut self, token: &str) {
        self.objects.push(token.to_string());
    }

    /// Whether the short flag `-c` was matched (without the leading `-`).
    pub fn has_short(&self, short: char) -> bool {
        self.short.contains_key(&short)
    }

    /// Whether the long flag `--name` was matched (without the leading `--`).
    pub fn has_named(&self, name: &str) -> bool {
        self.named.contains_key(name)
    }

    /// Whether any expectation was violated.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether the expectation for `name` was violated.
    ///
    /// Names with a leading `-` are used as is.
    /// Otherwise, single characters are taken as short flags and anything longer as a long flag.
    pub fn has_error(&self, name: &str) -> bool {
        self.errors.contains_key(&normalize(name))
    }

    /// The error message recorded for `name` (which is normalized as in [`ParsedArguments::has_error`]).
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(&normalize(name)).map(String::as_str)
    }

    /// All error messages, ordered by their flag.
    pub fn errors(&self) -> Vec<&str> {
        self.errors.values().map(String::as_str).collect()
    }

    /// Whether a default value was registered for `name`.
    pub fn has_default(&self, name: &str) -> bool {
        self.defaults.contains_key(&normalize(name))
    }

    /// The default value registered for `name`.
    pub fn default_value(&self, name: &str) -> Option<&str> {
        self.defaults.get(&normalize(name)).map(String::as_str)
    }

    /// The value captured for `name`, ignoring any default.
    ///
    /// Unlike [`ParsedArguments::get`], this tells a flag given an empty value apart from an absent flag.
    pub fn value(&self, name: &str) -> Option<&str> {
        let name = normalize(name);

        if let Some(long) = name.strip_prefix("--") {
            self.named.get(long).map(String::as_str)
        } else {
            name.chars()
                .nth(1)
                .and_then(|short| self.short.get(&short))
                .map(String::as_str)
        }
    }

    /// Get the value for `name` converted to `T`.
    ///
    /// An absent or empty captured value falls back to the registered default.
    /// Conversion must consume the entire value.
    ///
    /// ### Example
    /// ```
    /// # use clarg::ArgumentParser;
    /// let arguments = ArgumentParser::new("program")
    ///     .expect("-n %d | 0; -o %s | out.txt")
    ///     .parse_tokens(&["-o", "samples.txt"]);
    ///
    /// assert_eq!(arguments.get::<i32>("n").unwrap(), 0);
    /// assert_eq!(arguments.get::<String>("-o").unwrap(), "samples.txt");
    /// ```
    pub fn get<T: FromStr>(&self, name: &str) -> Result<T, GetError> {
        let value = match self.value(name) {
            Some(value) if !value.is_empty() => value,
            _ => self.default_value(name).unwrap_or_default(),
        };

        if value.is_empty() {
            return Err(GetError::Missing(normalize(name)));
        }

        T::from_str(value).map_err(|_| GetError::InvalidConversion {
            token: value.to_string(),
            type_name: std::any::type_name::<T>(),
        })
    }

    /// The positional tokens, in the order they appeared.
    pub fn objects(&self) -> &[String] {
        &self.objects
    }
}

fn normalize(name: &str) -> String {
    if name.starts_with('-') {
        name.to_string()
    } else if name.chars().count() == 1 {
        format!("-{name}")
    } else {
        format!("--{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn defaults(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[rstest]
    #[case("n", "-n")]
    #[case("-n", "-n")]
    #[case("--limit", "--limit")]
    #[case("limit", "--limit")]
    #[case("-", "-")]
    fn normalize_names(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(normalize(name), expected);
    }

    #[test]
    fn switches() {
        let mut arguments = ParsedArguments::default();
        arguments.switch_short('v');
        arguments.switch_named("verbose");

        assert!(arguments.has_short('v'));
        assert!(arguments.has_named("verbose"));
        assert!(!arguments.has_short('x'));
        assert!(!arguments.has_named("x"));
        assert_eq!(arguments.value("v"), Some(SWITCH_MARKER));
        assert_eq!(arguments.value("verbose"), Some(SWITCH_MARKER));
    }

    #[test]
    fn value_and_error_exclude_each_other() {
        let mut arguments = ParsedArguments::default();
        arguments.capture_short('n', "5".to_string());
        arguments.reject("-n", "integer expected");
        assert!(!arguments.has_short('n'));
        assert_eq!(arguments.error("n"), Some("integer expected"));

        arguments.capture_short('n', "7".to_string());
        assert!(!arguments.has_error("n"));
        assert_eq!(arguments.get::<i32>("n"), Ok(7));

        arguments.capture_named("limit", "9".to_string());
        arguments.reject("--limit", "");
        assert!(!arguments.has_named("limit"));
        assert_eq!(arguments.error("limit"), Some(""));
    }

    #[test]
    fn errors_in_key_order() {
        let mut arguments = ParsedArguments::default();
        arguments.reject("-z", "zed");
        arguments.reject("--alpha", "alpha");
        arguments.reject("-b", "bee");

        assert!(arguments.has_errors());
        assert_eq!(arguments.errors(), vec!["alpha", "bee", "zed"]);
        assert_eq!(arguments.error("q"), None);
    }

    #[test]
    fn get_falls_back_to_default() {
        let arguments = ParsedArguments::new(defaults(&[("-n", "0"), ("--out", "input.txt")]));

        assert!(arguments.has_default("n"));
        assert_eq!(arguments.default_value("--out"), Some("input.txt"));
        assert_eq!(arguments.get::<i32>("-n"), Ok(0));
        assert_eq!(arguments.get::<String>("out"), Ok("input.txt".to_string()));
        assert_eq!(arguments.value("n"), None);
    }

    #[test]
    fn get_empty_value_falls_back_to_default() {
        let mut arguments = ParsedArguments::new(defaults(&[("-o", "input.txt")]));
        arguments.capture_short('o', String::default());

        assert_eq!(arguments.value("o"), Some(""));
        assert_eq!(arguments.get::<String>("o"), Ok("input.txt".to_string()));
    }

    #[test]
    fn get_missing() {
        let mut arguments = ParsedArguments::default();
        arguments.capture_short('o', String::default());

        assert_eq!(
            arguments.get::<String>("o"),
            Err(GetError::Missing("-o".to_string()))
        );
        assert_eq!(
            arguments.get::<i32>("count"),
            Err(GetError::Missing("--count".to_string()))
        );
    }

    #[test]
    fn get_invalid_conversion() {
        let mut arguments = ParsedArguments::default();
        arguments.capture_named("count", "12abc".to_string());

        assert_eq!(
            arguments.get::<i32>("count"),
            Err(GetError::InvalidConversion {
                token: "12abc".to_string(),
                type_name: "i32",
            })
        );
        assert_eq!(arguments.get::<String>("count"), Ok("12abc".to_string()));
    }

    #[test]
    fn objects_in_order() {
        let mut arguments = ParsedArguments::default();
        arguments.push_object("b");
        arguments.push_object("a");
        assert_eq!(arguments.objects(), &["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn default_is_empty() {
        let arguments = ParsedArguments::default();

        assert_eq!(arguments, ParsedArguments::new(BTreeMap::default()));
        assert!(!arguments.has_errors());
        assert!(!arguments.has_default("n"));
        assert_eq!(arguments.default_value("n"), None);
        assert!(arguments.objects().is_empty());
    }

    #[test]
    fn default_value_is_not_a_capture() {
        let arguments = ParsedArguments::new(defaults(&[("-n", "3")]));

        assert_eq!(arguments.default_value("n"), Some("3"));
        assert_eq!(arguments.value("n"), None);
        assert_eq!(arguments.get::<i32>("n"), Ok(3));
    }
}
