mod core;
mod expectation;

pub use self::core::*;
pub use expectation::Expectation;
pub(crate) use expectation::split_directives;
