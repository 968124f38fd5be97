//! Command implementations.

mod inspect;
mod merge;
mod validate;

pub use inspect::run_inspect;
pub use merge::run_merge;
pub use validate::run_validate;
