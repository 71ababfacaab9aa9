//! Application key and session token handling.
//!
//! Every betting call carries two headers: `X-Application` with the application key issued by
//! Betfair, and `X-Authentication` with a session token. A session token is obtained from the
//! identity SSO service through [`Client::login`], extended with [`Client::keep_alive`] and
//! invalidated with [`Client::logout`].
//!
//! # Example
//!
//! ```no_run
//! use betfair_client_sdk::auth::{Client, LoginRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let sso = Client::new("https://identitysso.betfair.com", "my-app-key")?;
//!
//! let request = LoginRequest::builder()
//!     .username("punter")
//!     .password("hunter2")
//!     .build();
//! let credentials = sso.login(&request).await?;
//!
//! // ... use `credentials` with a betting client ...
//!
//! sso.logout(&credentials).await?;
//! # Ok(())
//! # }
//! ```

use bon::Builder;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client as ReqwestClient, Method};
/// Secret string types that redact values in debug output for security.
pub use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::Result;
use crate::error::Error;

/// Header carrying the application key.
pub const APPLICATION_HEADER: &str = "X-Application";
/// Header carrying the session token.
pub const AUTHENTICATION_HEADER: &str = "X-Authentication";

/// The default identity SSO host for the global exchange.
pub const DEFAULT_IDENTITY_HOST: &str = "https://identitysso.betfair.com";

/// Application key plus session token. Both are sent with every betting request.
///
/// The token is kept in a [`SecretString`] so it never shows up in debug output.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub(crate) app_key: String,
    pub(crate) session_token: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new<K: Into<String>, T: Into<String>>(app_key: K, session_token: T) -> Self {
        Self {
            app_key: app_key.into(),
            session_token: SecretString::from(session_token.into()),
        }
    }

    /// Returns the application key.
    #[must_use]
    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    /// Returns the session token.
    #[must_use]
    pub fn session_token(&self) -> &SecretString {
        &self.session_token
    }

    /// Builds the `X-Application` / `X-Authentication` header pair.
    pub(crate) fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(APPLICATION_HEADER, HeaderValue::from_str(&self.app_key)?);

        let mut token = HeaderValue::from_str(self.session_token.expose_secret())?;
        token.set_sensitive(true);
        headers.insert(AUTHENTICATION_HEADER, token);

        Ok(headers)
    }
}

/// Interactive (username/password) login request.
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct LoginRequest {
    #[builder(into)]
    pub username: String,
    #[builder(with = |password: impl Into<String>| SecretString::from(password.into()))]
    pub password: SecretString,
}

#[derive(Serialize)]
struct LoginForm<'req> {
    username: &'req str,
    password: &'req str,
}

/// Outcome reported by the identity SSO service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum SessionStatus {
    Success,
    Fail,
    LimitedAccess,
    LoginRestricted,
    /// Unknown status from the API (captures the raw value for debugging).
    #[serde(untagged)]
    Unknown(String),
}

/// Body returned by `login`, `keepAlive` and `logout`.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Deserialize, Builder)]
pub struct SessionResponse {
    pub token: Option<String>,
    pub product: Option<String>,
    pub status: SessionStatus,
    pub error: Option<String>,
}

impl SessionResponse {
    fn into_result(self) -> Result<Self> {
        if self.status == SessionStatus::Success {
            return Ok(self);
        }

        let status = match self.status {
            SessionStatus::Unknown(raw) => raw,
            known => known.to_string(),
        };
        Err(Error::authentication(status, self.error.unwrap_or_default()))
    }
}

/// Client for the identity SSO service.
#[derive(Clone, Debug)]
pub struct Client {
    host: Url,
    app_key: String,
    client: ReqwestClient,
}

impl Client {
    /// Creates an SSO client for `host` that identifies itself with `app_key`.
    ///
    /// A trailing `/` is added to the host path when missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the host URL is invalid or the HTTP client fails to build.
    pub fn new<K: Into<String>>(host: &str, app_key: K) -> Result<Client> {
        let mut headers = HeaderMap::new();

        headers.insert(USER_AGENT, HeaderValue::from_static(crate::USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = ReqwestClient::builder().default_headers(headers).build()?;

        Ok(Self {
            host: crate::base_url(host)?,
            app_key: app_key.into(),
            client,
        })
    }

    /// Returns the host URL for the client.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    async fn session_call(
        &self,
        path: &str,
        headers: HeaderMap,
        form: Option<String>,
    ) -> Result<SessionResponse> {
        let mut builder = self
            .client
            .request(Method::POST, format!("{}api/{path}", self.host));

        if let Some(body) = form {
            builder = builder
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(body);
        }

        let request = builder.build()?;
        let response: SessionResponse = crate::request(&self.client, request, Some(headers)).await?;

        #[cfg(feature = "tracing")]
        tracing::debug!(path, status = %response.status, "identity SSO call completed");

        response.into_result()
    }

    /// Logs in with username and password and returns the new session credentials.
    ///
    /// # Errors
    ///
    /// Returns an [`Authentication`](crate::error::Kind::Authentication) error when the
    /// service reports anything other than `SUCCESS`.
    pub async fn login(&self, request: &LoginRequest) -> Result<Credentials> {
        let form = serde_html_form::to_string(&LoginForm {
            username: &request.username,
            password: request.password.expose_secret(),
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(APPLICATION_HEADER, HeaderValue::from_str(&self.app_key)?);

        let response = self.session_call("login", headers, Some(form)).await?;
        let token = response
            .token
            .ok_or_else(|| Error::validation("login succeeded without a session token"))?;

        Ok(Credentials::new(self.app_key.clone(), token))
    }

    /// Extends the session behind `credentials`.
    ///
    /// The service normally echoes the same token; whatever it returns becomes the token of the
    /// returned credentials.
    pub async fn keep_alive(&self, credentials: &Credentials) -> Result<Credentials> {
        let response = self
            .session_call("keepAlive", credentials.headers()?, None)
            .await?;

        Ok(match response.token {
            Some(token) => Credentials::new(credentials.app_key.clone(), token),
            None => credentials.clone(),
        })
    }

    /// Invalidates the session behind `credentials`.
    pub async fn logout(&self, credentials: &Credentials) -> Result<()> {
        self.session_call("logout", credentials.headers()?, None)
            .await
            .map(|_| ())
    }
}
