//! Betfair betting API client and types.
//!
//! **Feature flag:** `betting` (enabled by default)
//!
//! This module covers the read-only market discovery operations of the betting API. Every
//! operation posts a JSON [`Params`](types::request::Params) envelope to
//! `{host}betting/rest/v1.0/{operation}/` and decodes the JSON array it answers with.
//!
//! ## Available Operations
//!
//! | Operation | Method | Returns |
//! |-----------|--------|---------|
//! | `listCompetitions` | [`Client::list_competitions`] | competitions with market counts |
//! | `listCountries` | [`Client::list_countries`] | country codes with market counts |
//! | `listEvents` | [`Client::list_events`] | events with market counts |
//! | `listEventTypes` | [`Client::list_event_types`] | sports with market counts |
//! | `listMarketTypes` | [`Client::list_market_types`] | market type codes with market counts |
//! | `listMarketBook` | [`Client::list_market_book`] | prices, volumes, orders and matches |
//! | `listMarketCatalogue` | [`Client::list_market_catalogue`] | market, runner and event details |
//!
//! # Example
//!
//! ```no_run
//! use betfair_client_sdk::auth::Credentials;
//! use betfair_client_sdk::betting::{Client, Config};
//! use betfair_client_sdk::betting::types::request::{
//!     MarketFilter, PriceProjection, ProjectionParams,
//! };
//! use betfair_client_sdk::betting::types::{MarketProjection, PriceData};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = Credentials::new("my-app-key", "my-session-token");
//! let client = Client::production(credentials, Config::builder().locale("en").build())?;
//!
//! // Next ten soccer match odds markets in Great Britain
//! let filter = MarketFilter::builder()
//!     .event_type_ids(vec!["1".to_owned()])
//!     .market_countries(vec!["GB".to_owned()])
//!     .market_type_codes(vec!["MATCH_ODDS".to_owned()])
//!     .build();
//! let projections = ProjectionParams::builder()
//!     .market_projection(vec![MarketProjection::Event, MarketProjection::RunnerDescription])
//!     .build();
//! let catalogue = client.list_market_catalogue(&filter, 10, &projections).await?;
//!
//! // Best prices for those markets
//! let market_ids: Vec<String> = catalogue.iter().map(|m| m.market_id.clone()).collect();
//! let projections = ProjectionParams::builder()
//!     .price_projection(
//!         PriceProjection::builder()
//!             .price_data(vec![PriceData::ExBestOffers])
//!             .build(),
//!     )
//!     .build();
//! for book in client.list_market_book(&market_ids, &projections).await? {
//!     println!("{}: {:?}", book.market_id, book.status);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Base URL
//!
//! The default API endpoint is [`client::DEFAULT_HOST`].

pub mod client;
pub mod types;

pub use client::{Client, Config};
