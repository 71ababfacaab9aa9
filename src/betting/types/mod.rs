//! Types for the Betfair betting API.
//!
//! - **Enumerations** (this module): API constants such as [`Side`], [`MarketProjection`] and
//!   [`PriceData`]. Each serializes as its exact API literal (`"BACK"`, `"EX_BEST_OFFERS"`, ...).
//!   Enumerations that appear in responses also carry an `Unknown` variant holding the raw value,
//!   so a constant added by the exchange does not break decoding.
//!
//! - **Request types** ([`request`]): the [`request::MarketFilter`], the projections and the
//!   [`request::Params`] envelope posted as the body of every call.
//!
//! - **Response types** ([`response`]): typed mirrors of the results, e.g.
//!   [`response::MarketCatalogue`] and [`response::MarketBook`].
//!
//! ```
//! use betfair_client_sdk::betting::types::{MarketProjection, PriceData, Side};
//!
//! assert_eq!(serde_json::to_string(&Side::Back).unwrap(), "\"BACK\"");
//! assert_eq!(MarketProjection::RunnerDescription.to_string(), "RUNNER_DESCRIPTION");
//! assert_eq!(PriceData::ExBestOffers.to_string(), "EX_BEST_OFFERS");
//! ```

use serde::{Deserialize, Serialize};

pub mod request;
pub mod response;

/// Back (bet for) or lay (bet against) a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum Side {
    Back,
    Lay,
    /// Unknown side from the API (captures the raw value for debugging).
    #[serde(untagged)]
    Unknown(String),
}

/// Which of your orders are returned in a market book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum OrderProjection {
    All,
    Executable,
    ExecutionComplete,
}

/// Current status of an order.
///
/// The executable statuses mirror [`OrderProjection::Executable`] and
/// [`OrderProjection::ExecutionComplete`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum OrderStatus {
    /// An asynchronous order is yet to be processed.
    Pending,
    /// Fully matched, cancelled, lapsed or voided.
    ExecutionComplete,
    /// Has a remaining unmatched portion.
    Executable,
    /// Lapsed at the end of its time in force.
    Expired,
    /// Unknown status from the API (captures the raw value for debugging).
    #[serde(untagged)]
    Unknown(String),
}

/// How matches are rolled up in a market book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum MatchProjection {
    NoRollup,
    RolledUpByPrice,
    RolledUpByAvgPrice,
}

/// Optional parts of a market catalogue to include in the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum MarketProjection {
    Competition,
    Event,
    EventType,
    MarketStartTime,
    MarketDescription,
    RunnerDescription,
    RunnerMetadata,
}

/// Price data to include in a market book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum PriceData {
    /// Starting price amounts available.
    SpAvailable,
    /// Starting price amounts traded.
    SpTraded,
    /// Best prices, three deep unless overridden.
    ExBestOffers,
    /// Full available-to-back and available-to-lay ladders.
    ExAllOffers,
    /// Traded volume per price.
    ExTraded,
}

/// Status of a runner within a market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum RunnerStatus {
    Active,
    Winner,
    Loser,
    /// Placed in a place market (each-way).
    Placed,
    /// Removed from a market that had no reduction factor applied.
    RemovedVacant,
    Removed,
    Hidden,
    /// Unknown status from the API (captures the raw value for debugging).
    #[serde(untagged)]
    Unknown(String),
}

/// What happens to the unmatched part of an order when the market turns in-play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum PersistenceType {
    /// Cancel the unmatched part when the market turns in-play.
    Lapse,
    /// Keep the unmatched part in-play.
    Persist,
    /// Convert to a starting price bet at the market price.
    MarketOnClose,
    /// Unknown persistence type from the API (captures the raw value for debugging).
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum OrderType {
    Limit,
    LimitOnClose,
    MarketOnClose,
    /// Unknown order type from the API (captures the raw value for debugging).
    #[serde(untagged)]
    Unknown(String),
}

/// Status of a market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum MarketStatus {
    Inactive,
    Open,
    Suspended,
    Closed,
    /// Unknown status from the API (captures the raw value for debugging).
    #[serde(untagged)]
    Unknown(String),
}

/// Ordering of `listMarketCatalogue` results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum MarketSort {
    MinimumTraded,
    MaximumTraded,
    MinimumAvailable,
    MaximumAvailable,
    FirstToStart,
    LastToStart,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum MarketBettingType {
    Odds,
    Line,
    Range,
    AsianHandicapDoubleLine,
    AsianHandicapSingleLine,
    FixedOdds,
    /// Unknown betting type from the API (captures the raw value for debugging).
    #[serde(untagged)]
    Unknown(String),
}

/// How prices are rolled up when fewer than full offers are requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum RollupModel {
    Stake,
    Payout,
    ManagedLiability,
    None,
}
