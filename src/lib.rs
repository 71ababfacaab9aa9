#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod auth;
#[cfg(feature = "betting")]
pub mod betting;
pub mod error;
pub(crate) mod serde_helpers;
pub mod types;

use reqwest::Request;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Value of the `User-Agent` header sent by every client in this crate.
pub(crate) const USER_AGENT: &str = "betfair_client_sdk";

/// Parses `host` as the base URL of an API, adding a trailing `/` to its path when missing so
/// endpoint paths can be appended to it.
pub(crate) fn base_url(host: &str) -> Result<Url> {
    let mut url = Url::parse(host)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Executes `request` and decodes a successful JSON body into `Response`.
///
/// `headers` are added on top of whatever the request already carries; defaults configured on
/// `client` fill in anything still missing. Non-2xx responses become [`error::Kind::Status`]
/// errors carrying the response body as message.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request, headers),
        fields(
            method = %request.method(),
            path = request.url().path(),
            status_code
        )
    )
)]
async fn request<Response: DeserializeOwned>(
    client: &reqwest::Client,
    mut request: Request,
    headers: Option<HeaderMap>,
) -> Result<Response> {
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    if let Some(h) = headers {
        request.headers_mut().extend(h);
    }

    let response = client.execute(request).await?;
    let status_code = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    if !status_code.is_success() {
        let message = response.text().await.unwrap_or_default();

        #[cfg(feature = "tracing")]
        tracing::warn!(
            status = %status_code,
            method = %method,
            path = %path,
            message = %message,
            "API request failed"
        );

        return Err(Error::status(status_code, method, path, message));
    }

    let body = response.bytes().await?;
    serde_helpers::decode(&body)
}
