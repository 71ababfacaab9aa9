//! Client for the Betfair betting API.
//!
//! # Example
//!
//! ```no_run
//! use betfair_client_sdk::auth::Credentials;
//! use betfair_client_sdk::betting::{Client, Config};
//! use betfair_client_sdk::betting::types::request::MarketFilter;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = Credentials::new("my-app-key", "my-session-token");
//! let client = Client::production(credentials, Config::default())?;
//!
//! for result in client.list_event_types(&MarketFilter::default()).await? {
//!     println!("{:?}: {:?}", result.event_type, result.market_count);
//! }
//! # Ok(())
//! # }
//! ```

use bon::Builder;
use reqwest::{
    Client as ReqwestClient, Method,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::de::DeserializeOwned;
use url::Url;

use super::types::MarketSort;
use super::types::request::{MarketFilter, Params, ProjectionParams};
use super::types::response::{
    CompetitionResult, CountryCodeResult, EventResult, EventTypeResult, MarketBook,
    MarketCatalogue, MarketTypeResult,
};
use crate::Result;
use crate::auth::Credentials;

/// The default API host for the global exchange.
pub const DEFAULT_HOST: &str = "https://api.betfair.com/exchange/";

/// Path of the JSON REST betting endpoint, relative to the host.
const BETTING_PATH: &str = "betting/rest/v1.0/";

/// Configuration for [`Client`]
#[non_exhaustive]
#[derive(Clone, Debug, Default, Builder)]
pub struct Config {
    /// Language for names and descriptions in responses, e.g. `"en"` or `"es"`. Sent as the
    /// `locale` field of every request; when unset the account's default language applies.
    #[builder(into)]
    pub locale: Option<String>,
}

/// HTTP client for the Betfair betting API.
///
/// Every call posts a [`Params`] envelope to `{host}betting/rest/v1.0/{operation}/` with the
/// `X-Application` and `X-Authentication` headers taken from the [`Credentials`].
#[derive(Clone, Debug)]
pub struct Client {
    host: Url,
    client: ReqwestClient,
    credentials: Credentials,
    config: Config,
}

impl Client {
    /// Creates a betting client for `host`.
    ///
    /// A trailing `/` is added to the host path when missing, so `https://host/exchange` and
    /// `https://host/exchange/` are equivalent.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be created.
    pub fn new(host: &str, credentials: Credentials, config: Config) -> Result<Client> {
        let mut headers = HeaderMap::new();

        headers.insert(USER_AGENT, HeaderValue::from_static(crate::USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client = ReqwestClient::builder().default_headers(headers).build()?;

        Ok(Self {
            host: crate::base_url(host)?,
            client,
            credentials,
            config,
        })
    }

    /// Creates a betting client for [`DEFAULT_HOST`].
    pub fn production(credentials: Credentials, config: Config) -> Result<Client> {
        Client::new(DEFAULT_HOST, credentials, config)
    }

    /// Returns the base URL of the API.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns a client sharing this client's connection pool but using `credentials`, e.g.
    /// after a fresh login.
    #[must_use]
    pub fn with_credentials(&self, credentials: Credentials) -> Client {
        Client {
            credentials,
            ..self.clone()
        }
    }

    /// Posts `params` to the betting operation `operation` and decodes the result.
    ///
    /// The configured locale is written into the envelope first, replacing any value the
    /// caller set. Encoding, transport and decoding errors are returned as they occur.
    async fn betting_request<Res: DeserializeOwned>(
        &self,
        operation: &str,
        mut params: Params,
    ) -> Result<Res> {
        params.locale.clone_from(&self.config.locale);

        let body = serde_json::to_vec(&params)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            operation,
            body = %String::from_utf8_lossy(&body),
            "dispatching betting request"
        );

        let request = self
            .client
            .request(
                Method::POST,
                format!("{}{BETTING_PATH}{operation}/", self.host),
            )
            .body(body)
            .build()?;

        crate::request(&self.client, request, Some(self.credentials.headers()?)).await
    }

    /// Returns the competitions (e.g. World Cup 2026) associated with the markets selected by
    /// `filter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_competitions(&self, filter: &MarketFilter) -> Result<Vec<CompetitionResult>> {
        self.betting_request("listCompetitions", Params::with_filter(filter)).await
    }

    /// Returns the countries associated with the markets selected by `filter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_countries(&self, filter: &MarketFilter) -> Result<Vec<CountryCodeResult>> {
        self.betting_request("listCountries", Params::with_filter(filter)).await
    }

    /// Returns the events (e.g. Reading v Man United) associated with the markets selected by
    /// `filter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_events(&self, filter: &MarketFilter) -> Result<Vec<EventResult>> {
        self.betting_request("listEvents", Params::with_filter(filter)).await
    }

    /// Returns the event types (i.e. sports) associated with the markets selected by `filter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_event_types(&self, filter: &MarketFilter) -> Result<Vec<EventTypeResult>> {
        self.betting_request("listEventTypes", Params::with_filter(filter)).await
    }

    /// Returns the market types (e.g. `MATCH_ODDS`, `NEXT_GOAL`) associated with the markets
    /// selected by `filter`. Market types are the same regardless of locale.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_market_types(&self, filter: &MarketFilter) -> Result<Vec<MarketTypeResult>> {
        self.betting_request("listMarketTypes", Params::with_filter(filter)).await
    }

    /// Returns dynamic data about the markets in `market_ids`: prices, market and runner status,
    /// traded volume and the status of any of your orders, as selected by `projections`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_market_book(
        &self,
        market_ids: &[String],
        projections: &ProjectionParams,
    ) -> Result<Vec<MarketBook>> {
        let mut params = Params {
            market_ids: market_ids.to_vec(),
            ..Params::default()
        };
        params.set_projections(projections);

        self.betting_request("listMarketBook", params).await
    }

    /// Returns information about markets that does not change, or changes very rarely: market
    /// and runner names and, depending on `projections`, the event, competition and market
    /// description.
    ///
    /// At most `max_results` markets are returned; zero leaves the limit to the exchange.
    /// Market data request limits apply.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_market_catalogue(
        &self,
        filter: &MarketFilter,
        max_results: u32,
        projections: &ProjectionParams,
    ) -> Result<Vec<MarketCatalogue>> {
        let params = Self::catalogue_params(filter, max_results, projections);

        self.betting_request("listMarketCatalogue", params).await
    }

    /// Same as [`Self::list_market_catalogue`], with results ordered by `sort`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_market_catalogue_sorted(
        &self,
        filter: &MarketFilter,
        max_results: u32,
        sort: MarketSort,
        projections: &ProjectionParams,
    ) -> Result<Vec<MarketCatalogue>> {
        let mut params = Self::catalogue_params(filter, max_results, projections);
        params.sort = Some(sort);

        self.betting_request("listMarketCatalogue", params).await
    }

    fn catalogue_params(
        filter: &MarketFilter,
        max_results: u32,
        projections: &ProjectionParams,
    ) -> Params {
        let mut params = Params::with_filter(filter);
        params.set_max_results(max_results);
        params.set_projections(projections);
        params
    }
}
