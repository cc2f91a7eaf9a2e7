use crate::model::ValueType;

const DIRECTIVE_DELIMITER: char = ';';
const ESCAPE: char = '\\';
const DEFAULT_MARKER: char = '|';
const ERROR_MARKER: char = '?';

/// A registered rule describing one flag: its name, value type, default and error message.
///
/// Built from a single directive of the form `NAME [TYPE] [| DEFAULT] [? ERROR]`.
///
/// ### Example
/// ```
/// # use clarg::{Expectation, ValueType};
/// let expectation = Expectation::parse("-n %d | 0 ? integer expected");
/// assert_eq!(expectation.name(), "-n");
/// assert_eq!(expectation.value_type(), &ValueType::Int);
/// assert_eq!(expectation.default(), Some("0"));
/// assert_eq!(expectation.error(), "integer expected");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expectation {
    name: String,
    value_type: ValueType,
    default: String,
    error: String,
}

impl Expectation {
    /// Parse a single directive.
    ///
    /// The name runs up to the first space, and the type specifier up to the first `|` or `?` marker.
    /// Every marker thereafter starts a segment assigned to the default (`|`) or the error message (`?`).
    /// When a marker is repeated, the final segment wins.
    pub fn parse(directive: &str) -> Self {
        let directive = directive.trim();
        let (name, remainder) = directive.split_once(' ').unwrap_or((directive, ""));
        let is_marker = |c: char| c == DEFAULT_MARKER || c == ERROR_MARKER;
        let (specifier, mut annotations) = match remainder.find(is_marker) {
            Some(index) => remainder.split_at(index),
            None => (remainder, ""),
        };
        let mut default = String::default();
        let mut error = String::default();

        while let Some(marker) = annotations.chars().next() {
            let segment = &annotations[marker.len_utf8()..];
            let (value, rest) = match segment.find(is_marker) {
                Some(index) => segment.split_at(index),
                None => (segment, ""),
            };

            if marker == DEFAULT_MARKER {
                default = value.trim().to_string();
            } else {
                error = value.trim().to_string();
            }

            annotations = rest;
        }

        Self {
            name: name.to_string(),
            value_type: ValueType::from(specifier.trim()),
            default,
            error,
        }
    }

    /// The exact token that must appear on the command line, including its `-` or `--` prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type of value this expectation captures.
    pub fn value_type(&self) -> &ValueType {
        &self.value_type
    }

    /// The default value, if a non-empty one was registered.
    pub fn default(&self) -> Option<&str> {
        if self.default.is_empty() {
            None
        } else {
            Some(&self.default)
        }
    }

    /// The message recorded when this expectation is violated (possibly empty).
    pub fn error(&self) -> &str {
        &self.error
    }

    pub(crate) fn is_named(&self, token: &str) -> bool {
        self.name == token
    }
}

/// Split a format string into its directives on each `;` that is not escaped by a `\`.
///
/// The escaping backslash is dropped from the directive, and blank directives are skipped.
pub(crate) fn split_directives(format: &str) -> Vec<String> {
    let mut directives = Vec::default();
    let mut current = String::default();
    let mut characters = format.chars().peekable();

    while let Some(c) = characters.next() {
        if c == ESCAPE && characters.peek() == Some(&DIRECTIVE_DELIMITER) {
            current.push(DIRECTIVE_DELIMITER);
            characters.next();
        } else if c == DIRECTIVE_DELIMITER {
            directives.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    directives.push(current);
    directives.retain(|directive| !directive.trim().is_empty());
    directives
}
