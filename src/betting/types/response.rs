use std::collections::HashMap;

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::betting::types::{
    MarketBettingType, MarketStatus, OrderStatus, OrderType, PersistenceType, RunnerStatus, Side,
};
use crate::types::Decimal;

/// A sport, e.g. Soccer (`"1"`) or Horse Racing (`"7"`).
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct EventType {
    pub id: String,
    pub name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct EventTypeResult {
    pub event_type: Option<EventType>,
    pub market_count: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct Competition {
    pub id: String,
    pub name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CompetitionResult {
    pub competition: Option<Competition>,
    pub market_count: Option<u32>,
    pub competition_region: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct CountryCodeResult {
    pub country_code: String,
    pub market_count: Option<u32>,
}

/// A sporting event, e.g. a football match or a race meeting.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct Event {
    pub id: String,
    pub name: Option<String>,
    pub country_code: Option<String>,
    pub timezone: Option<String>,
    pub venue: Option<String>,
    pub open_date: Option<DateTime<Utc>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct EventResult {
    pub event: Option<Event>,
    pub market_count: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct MarketTypeResult {
    /// e.g. `MATCH_ODDS`. Market types do not depend on the locale.
    pub market_type: String,
    pub market_count: Option<u32>,
}

/// An amount available or traded at a price.
///
/// Prices and sizes travel as JSON numbers. Decoding also accepts numeric strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PriceSize {
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub size: Decimal,
}

/// Betfair Starting Price information. Only present in BSP markets.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct StartingPrices {
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub near_price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub far_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub back_stake_taken: Vec<PriceSize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub lay_liability_taken: Vec<PriceSize>,
    /// Final starting price, available once the market is reconciled.
    #[serde(
        rename = "actualSP",
        default,
        with = "rust_decimal::serde::float_option"
    )]
    pub actual_sp: Option<Decimal>,
}

/// Prices available to back and lay, and volume traded per price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExchangePrices {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub available_to_back: Vec<PriceSize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub available_to_lay: Vec<PriceSize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub traded_volume: Vec<PriceSize>,
}

/// One of your orders on a runner.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct Order {
    pub bet_id: String,
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub persistence_type: PersistenceType,
    pub side: Side,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub size: Decimal,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub bsp_liability: Option<Decimal>,
    pub placed_date: Option<DateTime<Utc>>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub avg_price_matched: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub size_matched: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub size_remaining: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub size_lapsed: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub size_cancelled: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub size_voided: Option<Decimal>,
}

/// A single match, or a rollup of matches by price or average price depending on the
/// requested [`MatchProjection`](crate::betting::types::MatchProjection).
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Match {
    /// Absent when rolled up.
    pub bet_id: Option<String>,
    /// Absent when rolled up.
    pub match_id: Option<String>,
    pub side: Side,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub size: Decimal,
    pub match_date: Option<DateTime<Utc>>,
}

/// Dynamic data about a market: status, volumes and the runner books.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct MarketBook {
    pub market_id: String,
    pub is_market_data_delayed: Option<bool>,
    pub status: Option<MarketStatus>,
    /// Seconds an order is held before being matched in-play.
    pub bet_delay: Option<u32>,
    pub bsp_reconciled: Option<bool>,
    pub complete: Option<bool>,
    pub inplay: Option<bool>,
    pub number_of_winners: Option<u32>,
    pub number_of_runners: Option<u32>,
    pub number_of_active_runners: Option<u32>,
    pub last_match_time: Option<DateTime<Utc>>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total_matched: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total_available: Option<Decimal>,
    pub cross_matching: Option<bool>,
    pub runners_voidable: Option<bool>,
    /// Incremented whenever the market definition changes.
    pub version: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub runners: Vec<Runner>,
}

/// Book of a single runner, with your orders and matches on it.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Runner {
    pub selection_id: i64,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub handicap: Option<Decimal>,
    pub status: Option<RunnerStatus>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub adjustment_factor: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub last_price_traded: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total_matched: Option<Decimal>,
    pub removal_date: Option<DateTime<Utc>>,
    #[serde(rename = "sp")]
    pub starting_prices: Option<StartingPrices>,
    #[serde(rename = "ex")]
    pub exchange_prices: Option<ExchangePrices>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub orders: Vec<Order>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub matches: Vec<Match>,
}

/// Static description of a runner (selection) in a market.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct RunnerCatalog {
    pub selection_id: i64,
    pub runner_name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub handicap: Option<Decimal>,
    pub sort_priority: Option<u32>,
    /// Only present with [`MarketProjection::RunnerMetadata`](crate::betting::types::MarketProjection::RunnerMetadata).
    /// Values may be `null`.
    pub metadata: Option<HashMap<String, Option<String>>>,
}

/// Information about a market that does not change, or changes very rarely.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct MarketCatalogue {
    pub market_id: String,
    pub market_name: Option<String>,
    pub market_start_time: Option<DateTime<Utc>>,
    pub description: Option<MarketDescription>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total_matched: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub runners: Vec<RunnerCatalog>,
    pub event_type: Option<EventType>,
    pub competition: Option<Competition>,
    pub event: Option<Event>,
}

/// Market definition.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct MarketDescription {
    pub persistence_enabled: Option<bool>,
    pub bsp_market: Option<bool>,
    pub market_time: Option<DateTime<Utc>>,
    pub suspend_time: Option<DateTime<Utc>>,
    pub settle_time: Option<DateTime<Utc>>,
    pub betting_type: Option<MarketBettingType>,
    pub turn_in_play_enabled: Option<bool>,
    pub market_type: Option<String>,
    pub regulator: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub market_base_rate: Option<Decimal>,
    pub discount_allowed: Option<bool>,
    pub wallet: Option<String>,
    pub rules: Option<String>,
    pub rules_has_date: Option<bool>,
    pub clarifications: Option<String>,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde::Serialize;
    use serde::de::DeserializeOwned;
    use serde_json::{Value, json};

    use super::*;

    /// Decodes `fixture` and encodes the result again; the encoding must reproduce `fixture`.
    fn round_trip<T>(fixture: Value) -> T
    where
        T: DeserializeOwned + Serialize + PartialEq + std::fmt::Debug,
    {
        let decoded: T = serde_json::from_value(fixture.clone()).expect("fixture should decode");
        let encoded = serde_json::to_value(&decoded).expect("result should encode");
        assert_eq!(encoded, fixture, "encoding differs from the fixture");
        let again: T = serde_json::from_value(encoded).expect("encoded result should decode");
        assert_eq!(again, decoded, "round trip changed the value");
        decoded
    }

    #[test]
    fn event_type_result_round_trip() {
        let results: Vec<EventTypeResult> = round_trip(json!([
            {"eventType": {"id": "1", "name": "Soccer"}, "marketCount": 10453},
            {"eventType": {"id": "2", "name": "Tennis"}, "marketCount": 2871}
        ]));

        assert_eq!(
            results[0].event_type,
            Some(
                EventType::builder()
                    .id("1")
                    .name("Soccer".to_owned())
                    .build(),
            )
        );
        assert_eq!(results[1].market_count, Some(2871));
    }

    #[test]
    fn competition_result_round_trip() {
        let results: Vec<CompetitionResult> = round_trip(json!([
            {
                "competition": {"id": "10932509", "name": "English Premier League"},
                "marketCount": 624,
                "competitionRegion": "GBR"
            }
        ]));

        assert_eq!(results[0].competition_region.as_deref(), Some("GBR"));
    }

    #[test]
    fn country_and_market_type_round_trip() {
        let countries: Vec<CountryCodeResult> =
            round_trip(json!([{"countryCode": "GB", "marketCount": 1201}]));
        let market_types: Vec<MarketTypeResult> =
            round_trip(json!([{"marketType": "MATCH_ODDS", "marketCount": 312}]));

        assert_eq!(countries[0].country_code, "GB");
        assert_eq!(market_types[0].market_type, "MATCH_ODDS");
    }

    #[test]
    fn event_result_round_trip() {
        let results: Vec<EventResult> = round_trip(json!([
            {
                "event": {
                    "id": "32886541",
                    "name": "Arsenal v Chelsea",
                    "countryCode": "GB",
                    "timezone": "Europe/London",
                    "openDate": "2024-03-30T17:30:00Z"
                },
                "marketCount": 48
            }
        ]));

        let event = results[0].event.as_ref().expect("event");
        assert_eq!(event.venue, None);
        assert_eq!(
            event.open_date.map(|d| d.to_rfc3339()),
            Some("2024-03-30T17:30:00+00:00".to_owned())
        );
    }

    #[test]
    fn market_catalogue_round_trip() {
        let description = json!({
            "persistenceEnabled": true,
            "bspMarket": false,
            "marketTime": "2024-03-30T17:30:00Z",
            "suspendTime": "2024-03-30T17:30:00Z",
            "bettingType": "ODDS",
            "turnInPlayEnabled": true,
            "marketType": "MATCH_ODDS",
            "regulator": "GIBRALTAR REGULATOR",
            "marketBaseRate": 5.0,
            "discountAllowed": true,
            "wallet": "UK wallet",
            "rules": "<br>Football - Match Odds",
            "rulesHasDate": true
        });
        let runners = json!([
            {
                "selectionId": 1096,
                "runnerName": "Arsenal",
                "handicap": 0.0,
                "sortPriority": 1,
                "metadata": {"runnerId": "1096", "COLOURS_FILENAME": null}
            },
            {"selectionId": 25422, "runnerName": "Chelsea", "handicap": 0.0, "sortPriority": 2},
            {"selectionId": 58805, "runnerName": "The Draw", "handicap": 0.0, "sortPriority": 3}
        ]);
        let catalogue: Vec<MarketCatalogue> = round_trip(json!([
            {
                "marketId": "1.225874367",
                "marketName": "Match Odds",
                "marketStartTime": "2024-03-30T17:30:00Z",
                "description": description,
                "totalMatched": 3_456_789.12,
                "runners": runners,
                "eventType": {"id": "1", "name": "Soccer"},
                "competition": {"id": "10932509", "name": "English Premier League"},
                "event": {"id": "32886541", "name": "Arsenal v Chelsea", "countryCode": "GB"}
            }
        ]));

        let market = &catalogue[0];
        let description = market.description.as_ref().expect("description");
        assert_eq!(description.betting_type, Some(MarketBettingType::Odds));
        assert_eq!(description.market_base_rate, Some(dec!(5.0)));
        assert_eq!(market.total_matched, Some(dec!(3456789.12)));
        assert_eq!(market.runners.len(), 3);

        let metadata = market.runners[0].metadata.as_ref().expect("metadata");
        assert_eq!(metadata["runnerId"].as_deref(), Some("1096"));
        assert_eq!(metadata["COLOURS_FILENAME"], None);
        assert_eq!(market.runners[1].metadata, None);
    }

    #[test]
    fn market_book_round_trip() {
        let order = json!({
            "betId": "339281765432",
            "orderType": "LIMIT",
            "status": "EXECUTABLE",
            "persistenceType": "LAPSE",
            "side": "BACK",
            "price": 2.2,
            "size": 10.0,
            "bspLiability": 0.0,
            "placedDate": "2024-03-30T15:01:02Z",
            "avgPriceMatched": 0.0,
            "sizeMatched": 0.0,
            "sizeRemaining": 10.0,
            "sizeLapsed": 0.0,
            "sizeCancelled": 0.0,
            "sizeVoided": 0.0
        });
        let arsenal = json!({
            "selectionId": 1096,
            "handicap": 0.0,
            "status": "ACTIVE",
            "lastPriceTraded": 2.16,
            "totalMatched": 798_123.5,
            "ex": {
                "availableToBack": [
                    {"price": 2.14, "size": 1024.36},
                    {"price": 2.12, "size": 3301.0}
                ],
                "availableToLay": [{"price": 2.16, "size": 541.78}]
            },
            "orders": [order],
            "matches": [{"side": "LAY", "price": 2.3, "size": 4.5}]
        });
        let draw = json!({
            "selectionId": 58805,
            "handicap": 0.0,
            "status": "REMOVED",
            "adjustmentFactor": 27.1,
            "removalDate": "2024-03-30T12:00:00Z",
            "sp": {
                "nearPrice": 3.9,
                "farPrice": 4.1,
                "backStakeTaken": [{"price": 4.0, "size": 12.0}],
                "actualSP": 3.95
            }
        });
        let books: Vec<MarketBook> = round_trip(json!([
            {
                "marketId": "1.225874367",
                "isMarketDataDelayed": false,
                "status": "OPEN",
                "betDelay": 0,
                "bspReconciled": false,
                "complete": true,
                "inplay": false,
                "numberOfWinners": 1,
                "numberOfRunners": 3,
                "numberOfActiveRunners": 3,
                "lastMatchTime": "2024-03-30T16:59:41.374Z",
                "totalMatched": 1_523_377.49,
                "totalAvailable": 812_655.03,
                "crossMatching": true,
                "runnersVoidable": false,
                "version": 5_824_115_447_i64,
                "runners": [arsenal, draw]
            }
        ]));

        let book = &books[0];
        assert_eq!(book.status, Some(MarketStatus::Open));
        assert_eq!(book.version, Some(5_824_115_447));

        let arsenal = &book.runners[0];
        let ex = arsenal.exchange_prices.as_ref().expect("ex");
        assert_eq!(
            ex.available_to_back[0],
            PriceSize::builder().price(dec!(2.14)).size(dec!(1024.36)).build()
        );
        assert!(ex.traded_volume.is_empty(), "missing ladder should default");
        assert_eq!(arsenal.orders[0].side, Side::Back);
        assert_eq!(arsenal.orders[0].status, OrderStatus::Executable);
        assert_eq!(arsenal.matches[0].bet_id, None);
        assert_eq!(arsenal.matches[0].price, dec!(2.3));

        let draw = &book.runners[1];
        assert_eq!(draw.status, Some(RunnerStatus::Removed));
        let sp = draw.starting_prices.as_ref().expect("sp");
        assert_eq!(sp.actual_sp, Some(dec!(3.95)));
        assert!(sp.lay_liability_taken.is_empty(), "missing list should default");
    }

    #[test]
    fn prices_encode_as_json_numbers() {
        let level = PriceSize::builder()
            .price(dec!(2.14))
            .size(dec!(1024.36))
            .build();

        assert_eq!(
            serde_json::to_value(level).expect("encode"),
            json!({"price": 2.14, "size": 1024.36})
        );

        let runner = Runner::builder()
            .selection_id(1096)
            .last_price_traded(dec!(2.16))
            .build();
        assert_eq!(
            serde_json::to_value(&runner).expect("encode"),
            json!({"selectionId": 1096, "lastPriceTraded": 2.16})
        );
    }

    #[test]
    fn empty_ladders_decode_and_are_omitted() {
        let prices: ExchangePrices = serde_json::from_value(json!({
            "availableToBack": [],
            "availableToLay": [],
            "tradedVolume": []
        }))
        .expect("decode");

        assert_eq!(prices, ExchangePrices::default());
        assert_eq!(serde_json::to_value(&prices).expect("encode"), json!({}));
    }

    #[test]
    fn unset_fields_are_omitted_on_serialization() {
        let runner = Runner::builder().selection_id(47972).build();

        assert_eq!(
            serde_json::to_value(&runner).expect("encode"),
            json!({"selectionId": 47972})
        );

        let book = MarketBook::builder().market_id("1.1").build();
        assert_eq!(
            serde_json::to_value(&book).expect("encode"),
            json!({"marketId": "1.1"})
        );
    }

    #[test]
    fn match_price_decodes_from_string() {
        let matched: Match = serde_json::from_value(
            json!({"side": "BACK", "price": "1.98", "size": 2.0, "matchDate": null}),
        )
        .expect("decode");

        assert_eq!(matched.price, dec!(1.98));
        assert_eq!(
            serde_json::to_value(&matched).expect("encode"),
            json!({"side": "BACK", "price": 1.98, "size": 2.0})
        );
    }

    #[test]
    fn optional_price_decodes_from_string_or_null() {
        let runner: Runner = serde_json::from_value(json!({
            "selectionId": 1,
            "lastPriceTraded": "2.5",
            "adjustmentFactor": null
        }))
        .expect("decode");

        assert_eq!(runner.last_price_traded, Some(dec!(2.5)));
        assert_eq!(runner.adjustment_factor, None);
        assert_eq!(runner.total_matched, None);
    }
}
