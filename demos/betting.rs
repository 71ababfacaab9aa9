//! Betting API example walking from sports down to live prices.
//!
//! Needs an application key and a session token:
//! ```sh
//! BETFAIR_APP_KEY=... BETFAIR_SESSION_TOKEN=... \
//! RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example betting --features betting,tracing
//! ```
//!
//! Alternatively set `BETFAIR_USERNAME` and `BETFAIR_PASSWORD` instead of the session token to
//! log in through the identity SSO service first. Optionally log to a file with `LOG_FILE`.

use std::fs::File;

use betfair_client_sdk::auth::{self, Credentials, LoginRequest};
use betfair_client_sdk::betting::types::request::{
    MarketFilter, PriceProjection, ProjectionParams,
};
use betfair_client_sdk::betting::types::{MarketProjection, MarketSort, PriceData};
use betfair_client_sdk::betting::{Client, Config};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

const SOCCER: &str = "1";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(path) = std::env::var("LOG_FILE") {
        let file = File::create(path)?;
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let app_key = std::env::var("BETFAIR_APP_KEY")?;
    let sso = auth::Client::new(auth::DEFAULT_IDENTITY_HOST, app_key.clone())?;

    let (credentials, logged_in) = if let Ok(token) = std::env::var("BETFAIR_SESSION_TOKEN") {
        (Credentials::new(app_key, token), false)
    } else {
        let request = LoginRequest::builder()
            .username(std::env::var("BETFAIR_USERNAME")?)
            .password(std::env::var("BETFAIR_PASSWORD")?)
            .build();
        (sso.login(&request).await?, true)
    };

    let client = Client::production(credentials, Config::builder().locale("en").build())?;

    match client.list_event_types(&MarketFilter::default()).await {
        Ok(results) => {
            info!(endpoint = "list_event_types", count = results.len());
            for result in &results {
                if let Some(event_type) = &result.event_type {
                    info!(
                        endpoint = "list_event_types",
                        id = %event_type.id,
                        name = ?event_type.name,
                        markets = ?result.market_count
                    );
                }
            }
        }
        Err(e) => debug!(endpoint = "list_event_types", error = %e),
    }

    let soccer = MarketFilter::builder()
        .event_type_ids(vec![SOCCER.to_owned()])
        .build();

    match client.list_countries(&soccer).await {
        Ok(results) => info!(endpoint = "list_countries", count = results.len()),
        Err(e) => debug!(endpoint = "list_countries", error = %e),
    }

    match client.list_competitions(&soccer).await {
        Ok(results) => info!(endpoint = "list_competitions", count = results.len()),
        Err(e) => debug!(endpoint = "list_competitions", error = %e),
    }

    match client.list_events(&soccer).await {
        Ok(results) => info!(endpoint = "list_events", count = results.len()),
        Err(e) => debug!(endpoint = "list_events", error = %e),
    }

    match client.list_market_types(&soccer).await {
        Ok(results) => info!(endpoint = "list_market_types", count = results.len()),
        Err(e) => debug!(endpoint = "list_market_types", error = %e),
    }

    let match_odds = MarketFilter::builder()
        .event_type_ids(vec![SOCCER.to_owned()])
        .market_type_codes(vec!["MATCH_ODDS".to_owned()])
        .in_play_only(false)
        .build();
    let projections = ProjectionParams::builder()
        .market_projection(vec![
            MarketProjection::Event,
            MarketProjection::RunnerDescription,
        ])
        .build();

    let market_ids = match client
        .list_market_catalogue_sorted(&match_odds, 5, MarketSort::FirstToStart, &projections)
        .await
    {
        Ok(catalogue) => {
            for market in &catalogue {
                info!(
                    endpoint = "list_market_catalogue",
                    market_id = %market.market_id,
                    event = ?market.event.as_ref().and_then(|event| event.name.as_deref()),
                    runners = market.runners.len()
                );
            }
            catalogue
                .into_iter()
                .map(|market| market.market_id)
                .collect::<Vec<_>>()
        }
        Err(e) => {
            debug!(endpoint = "list_market_catalogue", error = %e);
            Vec::new()
        }
    };

    if !market_ids.is_empty() {
        let projections = ProjectionParams::builder()
            .price_projection(
                PriceProjection::builder()
                    .price_data(vec![PriceData::ExBestOffers])
                    .build(),
            )
            .build();

        match client.list_market_book(&market_ids, &projections).await {
            Ok(books) => {
                for book in &books {
                    for runner in &book.runners {
                        let best_back = runner
                            .exchange_prices
                            .as_ref()
                            .and_then(|prices| prices.available_to_back.first());
                        info!(
                            endpoint = "list_market_book",
                            market_id = %book.market_id,
                            selection_id = runner.selection_id,
                            best_back = ?best_back.map(|level| level.price)
                        );
                    }
                }
            }
            Err(e) => debug!(endpoint = "list_market_book", error = %e),
        }
    }

    if logged_in {
        match sso.logout(client.credentials()).await {
            Ok(()) => info!(endpoint = "logout"),
            Err(e) => debug!(endpoint = "logout", error = %e),
        }
    }

    Ok(())
}
