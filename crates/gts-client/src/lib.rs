//! # gts-client
//!
//! Typed client for the thesis registry HTTP API.
//!
//! Every method unwraps the response envelope and translates between the
//! wire rows (snake_case, integer ids) and the UI views of
//! [`gts_core::views`] (camelCase, string ids). Ids passed in are the view
//! ids and go into the URL as-is.

pub mod error;
mod http;
mod resources;

pub use error::ClientError;

/// Client for one registry API base URL, e.g. `http://localhost:3007/api`.
#[derive(Debug, Clone)]
pub struct GtsClient {
    http: reqwest::Client,
    base_url: String,
}

impl GtsClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Use a preconfigured `reqwest::Client` (timeouts, proxies, cookies).
    #[must_use]
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
