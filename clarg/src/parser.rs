mod interface;
mod printer;

pub use interface::*;
pub use printer::*;
