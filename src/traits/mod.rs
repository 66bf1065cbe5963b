//! Seams to the external collaborators of the pricing engine.
//!
//! The engine itself is pure.  Everything it needs from the outside world
//! is described by these traits: [`MarketReader`] for snapshots and
//! balances, [`TradeSubmitter`] for execution, [`TradeHistoryFeed`] for
//! chart data, and [`FromConfig`] for configuration-driven construction.
//! [`InMemoryLedger`](crate::ledger::InMemoryLedger) implements all of
//! them.

mod from_config;
mod history_feed;
mod market_reader;
mod trade_submitter;

pub use from_config::FromConfig;
pub use history_feed::TradeHistoryFeed;
pub use market_reader::MarketReader;
pub use trade_submitter::TradeSubmitter;
