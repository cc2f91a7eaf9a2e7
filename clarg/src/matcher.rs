mod core;
mod model;

pub(crate) use self::core::TokenMatcher;
pub use model::*;
