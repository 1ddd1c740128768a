//! HTTP transport for the demonlist API.

use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::error::{DemonlistError, Result};


/// Base URL for the public demonlist API.
pub const DEMONLIST_BASE_URL: &str = "https://api.demonlist.org";

/// Stateless client over the demonlist REST endpoints.
///
/// Holds the base URL explicitly so callers (and tests) can point the
/// client elsewhere. Cloning is cheap; the underlying connection pool is
/// shared between clones.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Client against the public API endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEMONLIST_BASE_URL)
    }

    /// Client against a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .user_agent(concat!("demonlist-rs/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Client build");

        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One GET against the API; returns the `data` field of the response
    /// envelope.
    ///
    /// Exactly one attempt is made. Any status other than 200 fails with
    /// [`DemonlistError::Transport`] carrying the URL and status code.
    pub async fn fetch(&self, path: &str, params: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self.http.get(&url).query(params).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            let err = DemonlistError::Transport { url, status };
            tracing::error!("{}", err);
            return Err(err);
        }

        let mut body = response.json::<Value>().await?;
        match body.get_mut("data") {
            Some(data) => Ok(data.take()),
            None => Err(DemonlistError::NoData),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
