//! In-process reference ledger.
//!
//! [`InMemoryLedger`] stores markets, share balances and trade history in
//! plain maps and settles every trade with the same arithmetic the
//! engine quotes with.  It is meant for tests, simulations and local
//! tooling.
//!
//! # Settlement
//!
//! 1. Look up the market (`MarketNotFound` otherwise).
//! 2. Refuse trades once the market has graduated.
//! 3. For sells, check the trader's own balance.
//! 4. Quote against the stored snapshot.
//! 5. Commit the post-trade snapshot, balance and history point, flipping
//!    the graduation flag once progress reaches 100%.
//!
//! A rejected trade leaves the ledger untouched.
//!
//! # Example
//!
//! ```rust
//! use blipp_curve::domain::{Amount, ContentId};
//! use blipp_curve::ledger::InMemoryLedger;
//! use blipp_curve::traits::{MarketReader, TradeSubmitter};
//!
//! let mut ledger = InMemoryLedger::default();
//! let video = ContentId::new("video-1").expect("non-empty");
//! ledger.initialize_market(&video, "0xcreator").expect("new market");
//!
//! let receipt = ledger.buy(&video, "0xalice", Amount::from_units(1)).expect("buy");
//! assert_eq!(
//!     ledger.share_balance(&video, "0xalice").expect("market exists"),
//!     receipt.amount_out
//! );
//! ```

use std::collections::HashMap;

use log::{info, warn};

use crate::config::CurveConfig;
use crate::curve::BondingCurveEngine;
use crate::domain::{
    Amount, ContentId, MarketInfo, MarketPhase, MarketState, TradeHistoryPoint, TradeReceipt,
    TradeSide,
};
use crate::error::CurveError;
use crate::traits::{FromConfig, MarketReader, TradeHistoryFeed, TradeSubmitter};

/// Default start of the logical clock (2023-11-14T22:13:20Z).
pub const DEFAULT_CLOCK_START: u64 = 1_700_000_000;

#[derive(Debug, Clone)]
struct MarketRecord {
    creator: String,
    state: MarketState,
    balances: HashMap<String, Amount>,
    history: Vec<TradeHistoryPoint>,
}

/// Ledger that keeps every market in memory.
///
/// Trades take `&mut self`; wrap the ledger in a lock to share it across
/// threads.  Timestamps come from a logical clock that advances by one
/// second per executed trade.
#[derive(Debug, Clone)]
pub struct InMemoryLedger {
    engine: BondingCurveEngine,
    markets: HashMap<ContentId, MarketRecord>,
    clock: u64,
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new(BondingCurveEngine::default())
    }
}

impl InMemoryLedger {
    /// Creates an empty ledger settling with `engine`.
    #[must_use]
    pub fn new(engine: BondingCurveEngine) -> Self {
        Self {
            engine,
            markets: HashMap::new(),
            clock: DEFAULT_CLOCK_START,
        }
    }

    /// Starts the logical clock at `epoch` (Unix seconds).
    #[must_use]
    pub fn with_clock_start(mut self, epoch: u64) -> Self {
        self.clock = epoch;
        self
    }

    /// The engine trades are settled with.
    #[must_use]
    pub const fn engine(&self) -> &BondingCurveEngine {
        &self.engine
    }

    /// Timestamp the next executed trade will carry.
    #[must_use]
    pub const fn now(&self) -> u64 {
        self.clock
    }

    /// Number of markets created so far.
    #[must_use]
    pub fn market_count(&self) -> usize {
        self.markets.len()
    }

    /// Lifecycle phase of the market for `content_id`.
    #[must_use]
    pub fn phase(&self, content_id: &ContentId) -> MarketPhase {
        self.engine.phase(self.markets.get(content_id).map(|m| &m.state))
    }

    /// Creates the market for `content_id` at the genesis snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::MarketAlreadyExists`] if the content already
    /// has a market.
    pub fn initialize_market(
        &mut self,
        content_id: &ContentId,
        creator: impl Into<String>,
    ) -> Result<MarketInfo, CurveError> {
        if self.markets.contains_key(content_id) {
            warn!("market initialisation rejected: {content_id} already exists");
            return Err(CurveError::MarketAlreadyExists(content_id.to_string()));
        }
        let record = MarketRecord {
            creator: creator.into(),
            state: self.engine.genesis(),
            balances: HashMap::new(),
            history: Vec::new(),
        };
        info!(
            "market initialised for {content_id} by {}: {}",
            record.creator, record.state
        );
        let market = MarketInfo {
            creator: record.creator.clone(),
            state: record.state,
        };
        self.markets.insert(content_id.clone(), record);
        Ok(market)
    }

    fn record(&self, content_id: &ContentId) -> Result<&MarketRecord, CurveError> {
        self.markets
            .get(content_id)
            .ok_or_else(|| CurveError::MarketNotFound(content_id.to_string()))
    }

    /// Post-trade snapshot with the graduation flag latched.
    fn settle(&self, state: MarketState) -> Result<MarketState, CurveError> {
        if state.graduated() {
            return Ok(state);
        }
        let reached = self.engine.has_reached_graduation(&state)?;
        Ok(state.with_graduated(reached))
    }

    fn commit(
        &mut self,
        content_id: &ContentId,
        trader: &str,
        state: MarketState,
        balance: Amount,
        mut receipt: TradeReceipt,
    ) -> Result<TradeReceipt, CurveError> {
        let timestamp = self.clock;
        let record = self
            .markets
            .get_mut(content_id)
            .ok_or_else(|| CurveError::MarketNotFound(content_id.to_string()))?;

        if state.graduated() && !record.state.graduated() {
            info!("{content_id} graduated at {state}");
        }
        record.state = state;
        if balance.is_zero() {
            record.balances.remove(trader);
        } else {
            record.balances.insert(trader.to_owned(), balance);
        }
        record
            .history
            .push(TradeHistoryPoint::new(receipt.price_per_share, timestamp));
        self.clock = self.clock.saturating_add(1);

        receipt.timestamp = timestamp;
        info!("{receipt} by {trader}");
        Ok(receipt)
    }

    fn try_buy(
        &mut self,
        content_id: &ContentId,
        trader: &str,
        base_amount_in: Amount,
    ) -> Result<TradeReceipt, CurveError> {
        let record = self.record(content_id)?;
        if record.state.graduated() {
            return Err(CurveError::InvalidMarketState("market has graduated"));
        }
        let held = record.balances.get(trader).copied().unwrap_or(Amount::ZERO);

        let quote = self.engine.quote_buy(&record.state, base_amount_in)?;
        let state = self.settle(record.state.apply_buy(&quote)?)?;
        let balance = held
            .checked_add(&quote.shares_out())
            .ok_or(CurveError::Overflow("share balance overflow"))?;

        let receipt = TradeReceipt {
            content_id: content_id.clone(),
            side: TradeSide::Buy,
            amount_in: quote.base_amount_in(),
            amount_out: quote.shares_out(),
            price_per_share: quote.price_per_share(),
            fee: quote.fee_amount(),
            timestamp: 0,
        };
        self.commit(content_id, trader, state, balance, receipt)
    }

    fn try_sell(
        &mut self,
        content_id: &ContentId,
        trader: &str,
        shares_in: Amount,
    ) -> Result<TradeReceipt, CurveError> {
        let record = self.record(content_id)?;
        if record.state.graduated() {
            return Err(CurveError::InvalidMarketState("market has graduated"));
        }
        let held = record.balances.get(trader).copied().unwrap_or(Amount::ZERO);
        let Some(balance) = held.checked_sub(&shares_in) else {
            return Err(CurveError::InsufficientBalance {
                requested: shares_in.get(),
                available: held.get(),
            });
        };

        let quote = self.engine.quote_sell(&record.state, shares_in)?;
        let state = self.settle(record.state.apply_sell(&quote)?)?;

        let receipt = TradeReceipt {
            content_id: content_id.clone(),
            side: TradeSide::Sell,
            amount_in: quote.shares_in(),
            amount_out: quote.proceeds_out(),
            price_per_share: quote.price_per_share(),
            fee: quote.fee_amount(),
            timestamp: 0,
        };
        self.commit(content_id, trader, state, balance, receipt)
    }
}

impl FromConfig<CurveConfig> for InMemoryLedger {
    fn from_config(config: &CurveConfig) -> Result<Self, CurveError> {
        BondingCurveEngine::from_config(config).map(Self::new)
    }
}

impl MarketReader for InMemoryLedger {
    fn market_info(&self, content_id: &ContentId) -> Result<MarketInfo, CurveError> {
        let record = self.record(content_id)?;
        Ok(MarketInfo {
            creator: record.creator.clone(),
            state: record.state,
        })
    }

    fn share_balance(&self, content_id: &ContentId, trader: &str) -> Result<Amount, CurveError> {
        let record = self.record(content_id)?;
        Ok(record.balances.get(trader).copied().unwrap_or(Amount::ZERO))
    }
}

impl TradeSubmitter for InMemoryLedger {
    fn buy(
        &mut self,
        content_id: &ContentId,
        trader: &str,
        base_amount_in: Amount,
    ) -> Result<TradeReceipt, CurveError> {
        self.try_buy(content_id, trader, base_amount_in).map_err(|e| {
            warn!("buy of {base_amount_in} on {content_id} by {trader} rejected: {e}");
            e
        })
    }

    fn sell(
        &mut self,
        content_id: &ContentId,
        trader: &str,
        shares_in: Amount,
    ) -> Result<TradeReceipt, CurveError> {
        self.try_sell(content_id, trader, shares_in).map_err(|e| {
            warn!("sell of {shares_in} on {content_id} by {trader} rejected: {e}");
            e
        })
    }
}

impl TradeHistoryFeed for InMemoryLedger {
    fn trade_history(&self, content_id: &ContentId) -> Result<Vec<TradeHistoryPoint>, CurveError> {
        Ok(self.record(content_id)?.history.clone())
    }
}
