use bon::Builder;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::betting::types::{
    MarketBettingType, MarketProjection, MarketSort, MatchProjection, OrderProjection,
    OrderStatus, PriceData, RollupModel,
};

/// Criteria narrowing which markets a query applies to.
///
/// Every criterion is optional; unset options and empty lists are left out of the JSON so the
/// exchange applies no restriction for them. An empty filter (`{}`) selects all markets.
///
/// ```
/// use betfair_client_sdk::betting::types::request::MarketFilter;
///
/// let filter = MarketFilter::builder()
///     .event_type_ids(vec!["1".to_owned()])
///     .market_countries(vec!["GB".to_owned()])
///     .text_query("premier league")
///     .build();
///
/// assert_eq!(
///     serde_json::to_value(&filter).unwrap(),
///     serde_json::json!({
///         "textQuery": "premier league",
///         "eventTypeIds": ["1"],
///         "marketCountries": ["GB"]
///     })
/// );
/// ```
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct MarketFilter {
    /// Free text restriction on market, event and runner names.
    #[builder(into)]
    pub text_query: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub exchange_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub event_type_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub event_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub competition_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub market_ids: Vec<String>,
    /// Venues, horse and greyhound racing only.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub venues: Vec<String>,
    pub bsp_only: Option<bool>,
    pub turn_in_play_enabled: Option<bool>,
    pub in_play_only: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub market_betting_types: Vec<MarketBettingType>,
    /// ISO 3166-1 alpha-2 country codes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub market_countries: Vec<String>,
    /// e.g. `MATCH_ODDS`, `HALF_TIME_SCORE`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub market_type_codes: Vec<String>,
    pub market_start_time: Option<TimeRange>,
    /// Restrict to markets in which you hold orders with these statuses.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub with_orders: Vec<OrderStatus>,
}

/// Inclusive time window. Either bound may be left open.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Builder)]
#[non_exhaustive]
pub struct TimeRange {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

/// Selects the price data returned by `listMarketBook`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct PriceProjection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub price_data: Vec<PriceData>,
    /// Only used together with [`PriceData::ExBestOffers`].
    pub ex_best_offers_overrides: Option<ExBestOffersOverrides>,
    /// Include virtual (cross-matched) bets.
    pub virtualise: Option<bool>,
    /// Roll over stakes below the minimum into the next price.
    pub rollover_stakes: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExBestOffersOverrides {
    /// Number of prices per side, defaults to 3.
    pub best_prices_depth: Option<u32>,
    pub rollup_model: Option<RollupModel>,
    pub rollup_limit: Option<u32>,
}

/// The projections a caller can pass to `listMarketBook` and `listMarketCatalogue` in one go.
///
/// Not every projection applies to every call: the catalogue uses `market_projection`, the
/// book uses the other three. Unused projections are still transmitted if set, exactly as the
/// caller supplied them.
#[derive(Debug, Clone, Default, PartialEq, Builder)]
#[non_exhaustive]
pub struct ProjectionParams {
    #[builder(default)]
    pub market_projection: Vec<MarketProjection>,
    pub price_projection: Option<PriceProjection>,
    pub order_projection: Option<OrderProjection>,
    pub match_projection: Option<MatchProjection>,
}

/// The JSON envelope posted as the body of every betting call.
///
/// Each operation fills in the fields it needs; the client sets `locale` just before sending.
/// Unset fields are omitted from the body.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Params {
    #[serde(rename = "filter")]
    pub market_filter: Option<MarketFilter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub market_ids: Vec<String>,
    pub price_projection: Option<PriceProjection>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub market_projection: Vec<MarketProjection>,
    pub order_projection: Option<OrderProjection>,
    pub match_projection: Option<MatchProjection>,
    pub sort: Option<MarketSort>,
    pub max_results: Option<u32>,
    pub locale: Option<String>,
}

impl Params {
    /// Envelope carrying only a market filter.
    #[must_use]
    pub fn with_filter(filter: &MarketFilter) -> Self {
        Self {
            market_filter: Some(filter.clone()),
            ..Self::default()
        }
    }

    /// Copies all four projections from `projections`, replacing whatever was set before.
    pub fn set_projections(&mut self, projections: &ProjectionParams) {
        self.price_projection.clone_from(&projections.price_projection);
        self.market_projection
            .clone_from(&projections.market_projection);
        self.order_projection = projections.order_projection;
        self.match_projection = projections.match_projection;
    }

    /// Sets `maxResults`; zero leaves it unset since the exchange rejects it.
    pub fn set_max_results(&mut self, max_results: u32) {
        self.max_results = (max_results > 0).then_some(max_results);
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_filter_serializes_to_empty_object() {
        let value = serde_json::to_value(MarketFilter::default()).expect("encode");

        assert_eq!(value, json!({}));
    }

    #[test]
    fn full_filter_uses_api_field_names() {
        let filter = MarketFilter::builder()
            .text_query("cheltenham")
            .exchange_ids(vec!["1".to_owned()])
            .event_type_ids(vec!["7".to_owned()])
            .event_ids(vec!["31001".to_owned()])
            .competition_ids(vec!["10932509".to_owned()])
            .market_ids(vec!["1.2345".to_owned()])
            .venues(vec!["Cheltenham".to_owned()])
            .bsp_only(true)
            .turn_in_play_enabled(false)
            .in_play_only(false)
            .market_betting_types(vec![MarketBettingType::Odds])
            .market_countries(vec!["GB".to_owned(), "IE".to_owned()])
            .market_type_codes(vec!["WIN".to_owned()])
            .market_start_time(
                TimeRange::builder()
                    .from(Utc.with_ymd_and_hms(2024, 3, 12, 0, 0, 0).unwrap())
                    .build(),
            )
            .with_orders(vec![OrderStatus::Executable])
            .build();

        assert_eq!(
            serde_json::to_value(&filter).expect("encode"),
            json!({
                "textQuery": "cheltenham",
                "exchangeIds": ["1"],
                "eventTypeIds": ["7"],
                "eventIds": ["31001"],
                "competitionIds": ["10932509"],
                "marketIds": ["1.2345"],
                "venues": ["Cheltenham"],
                "bspOnly": true,
                "turnInPlayEnabled": false,
                "inPlayOnly": false,
                "marketBettingTypes": ["ODDS"],
                "marketCountries": ["GB", "IE"],
                "marketTypeCodes": ["WIN"],
                "marketStartTime": {"from": "2024-03-12T00:00:00Z"},
                "withOrders": ["EXECUTABLE"]
            })
        );
    }

    #[test]
    fn empty_params_serialize_to_empty_object() {
        assert_eq!(
            serde_json::to_value(Params::default()).expect("encode"),
            json!({})
        );
    }

    #[test]
    fn params_with_filter_only() {
        let filter = MarketFilter::builder()
            .event_type_ids(vec!["1".to_owned()])
            .build();

        assert_eq!(
            serde_json::to_value(Params::with_filter(&filter)).expect("encode"),
            json!({"filter": {"eventTypeIds": ["1"]}})
        );
    }

    #[test]
    fn set_projections_copies_every_projection() {
        let projections = ProjectionParams::builder()
            .market_projection(vec![MarketProjection::Event])
            .price_projection(
                PriceProjection::builder()
                    .price_data(vec![PriceData::ExBestOffers])
                    .ex_best_offers_overrides(
                        ExBestOffersOverrides::builder()
                            .best_prices_depth(1)
                            .rollup_model(RollupModel::Stake)
                            .build(),
                    )
                    .virtualise(true)
                    .build(),
            )
            .order_projection(OrderProjection::All)
            .match_projection(MatchProjection::NoRollup)
            .build();

        let mut params = Params::default();
        params.market_ids = vec!["1.23".to_owned()];
        params.set_projections(&projections);

        assert_eq!(
            serde_json::to_value(&params).expect("encode"),
            json!({
                "marketIds": ["1.23"],
                "priceProjection": {
                    "priceData": ["EX_BEST_OFFERS"],
                    "exBestOffersOverrides": {"bestPricesDepth": 1, "rollupModel": "STAKE"},
                    "virtualise": true
                },
                "marketProjection": ["EVENT"],
                "orderProjection": "ALL",
                "matchProjection": "NO_ROLLUP"
            })
        );
    }

    #[test]
    fn set_projections_clears_previous_values() {
        let mut params = Params::default();
        params.set_projections(
            &ProjectionParams::builder()
                .order_projection(OrderProjection::Executable)
                .build(),
        );
        params.set_projections(&ProjectionParams::default());

        assert_eq!(params, Params::default());
    }

    #[test]
    fn zero_max_results_is_omitted() {
        let mut params = Params::default();
        params.set_max_results(0);
        assert_eq!(serde_json::to_value(&params).expect("encode"), json!({}));

        params.set_max_results(100);
        assert_eq!(
            serde_json::to_value(&params).expect("encode"),
            json!({"maxResults": 100})
        );
    }

    #[test]
    fn empty_price_projection_omits_price_data() {
        assert_eq!(
            serde_json::to_value(PriceProjection::default()).expect("encode"),
            json!({})
        );
    }
}
