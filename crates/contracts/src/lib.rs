//! # Contracts
//!
//! Frozen interface contracts, defining inter-module data structures and traits.
//! All business crates can only depend on this crate, reverse dependencies are prohibited.
//!
//! ## Data Model
//! - `NumericTable` is the only payload that moves between stages, always by value
//! - Timestamps are plain numbers in a table column; their unit is carried
//!   separately as a `TimeUnit`
//! - A zero-row table means "no data", never an error object

mod blueprint;
mod error;
mod sink;
mod table;
mod units;

pub use blueprint::*;
pub use error::*;
pub use sink::TableSink;
pub use table::{HeaderBlock, NumericTable};
pub use units::{FloatKind, TimeUnit};
