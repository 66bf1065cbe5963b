//! Ledger implementations of the [`traits`](crate::traits) seams.

mod in_memory;

pub use in_memory::{InMemoryLedger, DEFAULT_CLOCK_START};
