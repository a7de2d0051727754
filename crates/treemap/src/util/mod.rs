//! Index-based walks over an arena-backed tree.

mod first;
mod last;
mod next;
mod prev;

pub use first::first;
pub use last::last;
pub use next::next;
pub use prev::prev;
