//! Human-readable tree rendering, for debugging and test failure output.

mod binary;
mod types;

pub use binary::print_binary;
pub use types::{PrintChild, Printable};
