use std::str::FromStr;

/// The type of value an expectation captures, as written with a printf style specifier.
///
/// Inspired by printf: <https://en.cppreference.com/w/c/io/fprintf>
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// `%b` (or no specifier): a switch that takes no value.
    Bool,
    /// `%s`: any token.
    Str,
    /// `%d` or `%i`: a signed 32 bit integer.
    Int,
    /// `%u`: an unsigned 32 bit integer.
    UnsignedInt,
    /// `%li` or `%ld`: a signed 64 bit integer.
    Long,
    /// `%lu`: an unsigned 64 bit integer.
    UnsignedLong,
    /// `%f`: a finite double.
    Double,
    /// Any other specifier.
    /// Accepted when registering, but never matches a token.
    Unknown(String),
}

impl ValueType {
    /// Whether this type captures no value (ex: `-v`).
    pub fn is_switch(&self) -> bool {
        matches!(self, ValueType::Bool)
    }

    /// Check whether `token` can be captured as this type.
    ///
    /// Numeric types must consume the whole token; partial parses (ex: `12abc`) do not match.
    pub fn accepts(&self, token: &str) -> bool {
        match self {
            ValueType::Str => true,
            ValueType::Int => parses::<i32>(token),
            ValueType::UnsignedInt => parses::<u32>(token),
            ValueType::Long => parses::<i64>(token),
            ValueType::UnsignedLong => parses::<u64>(token),
            ValueType::Double => f64::from_str(token).is_ok_and(f64::is_finite),
            ValueType::Bool | ValueType::Unknown(_) => false,
        }
    }
}

fn parses<T: FromStr>(token: &str) -> bool {
    T::from_str(token).is_ok()
}

impl From<&str> for ValueType {
    fn from(specifier: &str) -> Self {
        match specifier {
            "" | "%b" => ValueType::Bool,
            "%s" => ValueType::Str,
            "%d" | "%i" => ValueType::Int,
            "%u" => ValueType::UnsignedInt,
            "%li" | "%ld" => ValueType::Long,
            "%lu" => ValueType::UnsignedLong,
            "%f" => ValueType::Double,
            other => ValueType::Unknown(other.to_string()),
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueType::Bool => write!(f, "%b"),
            ValueType::Str => write!(f, "%s"),
            ValueType::Int => write!(f, "%d"),
            ValueType::UnsignedInt => write!(f, "%u"),
            ValueType::Long => write!(f, "%li"),
            ValueType::UnsignedLong => write!(f, "%lu"),
            ValueType::Double => write!(f, "%f"),
            ValueType::Unknown(specifier) => write!(f, "{specifier}"),
        }
    }
}
