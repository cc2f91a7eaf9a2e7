use std::path::Path;
use std::str::FromStr;

use rand::Rng;
use thiserror::Error;

use crate::writer::write_samples;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// Characters are drawn from the ASCII range [0, ASCII_LIMIT).
const ASCII_LIMIT: u8 = 128;

/// The POSIX character classes (in the "C" locale) strings may be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `[0-9A-Za-z]`
    Alnum,
    /// `[A-Za-z]`
    Alpha,
    /// Space and horizontal tab.
    Blank,
    /// `0x00..=0x1f` and `0x7f`.
    Cntrl,
    /// `[0-9]`
    Digit,
    /// Visible characters, `!` through `~`.
    Graph,
    /// `[a-z]`
    Lower,
    /// Graph characters and space.
    Print,
    /// Graph characters that are not alphanumeric.
    Punct,
    /// Space, `\t`, `\n`, vertical tab, form feed and `\r`.
    Space,
    /// `[A-Z]`
    Upper,
    /// `[0-9A-Fa-f]`
    Xdigit,
}

impl CharClass {
    /// Every character class, in alphabetical order.
    pub const ALL: [CharClass; 12] = [
        CharClass::Alnum,
        CharClass::Alpha,
        CharClass::Blank,
        CharClass::Cntrl,
        CharClass::Digit,
        CharClass::Graph,
        CharClass::Lower,
        CharClass::Print,
        CharClass::Punct,
        CharClass::Space,
        CharClass::Upper,
        CharClass::Xdigit,
    ];

    /// Whether the byte `c` belongs to this class.
    pub fn contains(&self, c: u8) -> bool {
        match self {
            CharClass::Alnum => c.is_ascii_alphanumeric(),
            CharClass::Alpha => c.is_ascii_alphabetic(),
            CharClass::Blank => c == b' ' || c == b'\t',
            CharClass::Cntrl => c.is_ascii_control(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Graph => c.is_ascii_graphic(),
            CharClass::Lower => c.is_ascii_lowercase(),
            CharClass::Print => c.is_ascii_graphic() || c == b' ',
            CharClass::Punct => c.is_ascii_punctuation(),
            // Unlike u8::is_ascii_whitespace, POSIX includes the vertical tab.
            CharClass::Space => c == b' ' || (b'\t'..=b'\r').contains(&c),
            CharClass::Upper => c.is_ascii_uppercase(),
            CharClass::Xdigit => c.is_ascii_hexdigit(),
        }
    }

    fn is_inhabited(&self) -> bool {
        (0..ASCII_LIMIT).any(|c| self.contains(c))
    }
}

/// Failure to parse a [`CharClass`] from its name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid char type {0}")]
pub struct CharClassError(pub String);

impl FromStr for CharClass {
    type Err = CharClassError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        CharClass::ALL
            .into_iter()
            .find(|class| class.to_string() == value)
            .ok_or_else(|| CharClassError(value.to_string()))
    }
}

impl std::fmt::Display for CharClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CharClass::Alnum => "alnum",
            CharClass::Alpha => "alpha",
            CharClass::Blank => "blank",
            CharClass::Cntrl => "cntrl",
            CharClass::Digit => "digit",
            CharClass::Graph => "graph",
            CharClass::Lower => "lower",
            CharClass::Print => "print",
            CharClass::Punct => "punct",
            CharClass::Space => "space",
            CharClass::Upper => "upper",
            CharClass::Xdigit => "xdigit",
        };
        write!(f, "{name}")
    }
}

/// Failure to generate samples.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The half-open range `[low, high)` holds no value.
    #[error("empty range [{low}, {high}).")]
    EmptyRange {
        /// Inclusive lower bound.
        low: i32,
        /// Exclusive upper bound.
        high: i32,
    },

    /// A string cannot have a negative length.
    #[error("negative string length {0}.")]
    NegativeLength(i32),

    /// No ASCII character belongs to the class.
    #[error("char type {0} has no characters.")]
    EmptyClass(CharClass),

    /// The output could not be written.
    #[error("cannot write samples: {0}")]
    Io(#[from] std::io::Error),
}

/// What to generate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GenerationRequest {
    /// Integers uniformly in `[low, high)`.
    Integer {
        /// Inclusive lower bound.
        low: i32,
        /// Exclusive upper bound.
        high: i32,
    },
    /// Doubles uniformly in `[low, high)`.
    Double {
        /// Inclusive lower bound.
        low: f64,
        /// Exclusive upper bound.
        high: f64,
    },
    /// Strings with a length uniformly in `[low, high)`, made of characters from `class`.
    Text {
        /// Inclusive minimum length.
        low: i32,
        /// Exclusive maximum length.
        high: i32,
        /// The class of every character.
        class: CharClass,
    },
}

impl GenerationRequest {
    /// Check the request can be sampled.
    ///
    /// Double ranges are never rejected: a degenerate range collapses onto `low`.
    pub fn validate(&self) -> Result<(), GenerateError> {
        match *self {
            GenerationRequest::Integer { low, high } => check_range(low, high),
            GenerationRequest::Double { .. } => Ok(()),
            GenerationRequest::Text { low, high, class } => {
                if low < 0 {
                    return Err(GenerateError::NegativeLength(low));
                }

                check_range(low, high)?;

                if !class.is_inhabited() {
                    return Err(GenerateError::EmptyClass(class));
                }

                Ok(())
            }
        }
    }

    /// Validate, then write `count` samples to `path`, one per line.
    pub fn write_to<R: Rng + ?Sized>(
        &self,
        path: &Path,
        count: i32,
        rng: &mut R,
    ) -> Result<(), GenerateError> {
        self.validate()?;

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Writing {count} samples of {self:?} to {}.", path.display());
        }

        match *self {
            GenerationRequest::Integer { low, high } => {
                write_samples(path, count, || integer(rng, low, high))?
            }
            GenerationRequest::Double { low, high } => {
                write_samples(path, count, || double(rng, low, high))?
            }
            GenerationRequest::Text { low, high, class } => {
                write_samples(path, count, || string(rng, low, high, class))?
            }
        };

        Ok(())
    }
}

fn check_range(low: i32, high: i32) -> Result<(), GenerateError> {
    if high > low {
        Ok(())
    } else {
        Err(GenerateError::EmptyRange { low, high })
    }
}

/// A non-negative 63 bit draw, reduced modulo the width of `[low, high)`.
///
/// Modulo bias is not corrected.
/// Requires `high > low`.
pub fn integer<R: Rng + ?Sized>(rng: &mut R, low: i32, high: i32) -> i32 {
    let width = i64::from(high) - i64::from(low);
    // Wider than any i32 range, so every value in it is reachable.
    let draw = (rng.gen::<u64>() >> 1) as i64;
    // Strictly below `high`, so always within i32.
    (i64::from(low) + draw % width) as i32
}

/// `low + unit * (high - low)`, with `unit` uniform in `[0, 1)`.
pub fn double<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    low + rng.gen::<f64>() * (high - low)
}

/// Rejection sample an ASCII character until it belongs to `class`.
///
/// Requires `class` to hold at least one ASCII character (always the case for the POSIX classes).
pub fn character<R: Rng + ?Sized>(rng: &mut R, class: CharClass) -> char {
    loop {
        let c = rng.gen_range(0..ASCII_LIMIT);

        if class.contains(c) {
            return char::from(c);
        }
    }
}

/// A string with a length uniformly in `[low, high)`, made of characters from `class`.
///
/// Requires `0 <= low < high`.
pub fn string<R: Rng + ?Sized>(rng: &mut R, low: i32, high: i32, class: CharClass) -> String {
    let length = integer(rng, low, high);
    (0..length).map(|_| character(rng, class)).collect()
}
