//! Re-exported types from external crates for convenience.
//!
//! These types are commonly used in this SDK and are re-exported here
//! so users don't need to add these dependencies to their `Cargo.toml`.

/// Date and time types for market start times, order placement and match timestamps.
pub use chrono::{DateTime, Utc};
/// Arbitrary precision decimal type for odds, stakes and matched amounts.
pub use rust_decimal::Decimal;
/// Macro for creating [`Decimal`] literals at compile time.
///
/// # Example
/// ```
/// use betfair_client_sdk::types::dec;
/// let price = dec!(2.56);
/// ```
pub use rust_decimal_macros::dec;
