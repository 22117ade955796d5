//! HTTP GET transport used by the client

use async_trait::async_trait;
use std::time::Duration;

use crate::error::{Result, SteamApiError};

/// Issues a single GET request and returns the response body
///
/// Non-success status codes must be reported as errors so that callers never
/// try to parse an error page as JSON.
#[async_trait]
pub trait HttpGet: Send + Sync {
    async fn get(&self, url: &str) -> Result<String>;
}

/// [`HttpGet`] backed by a `reqwest::Client`
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
        })
    }

    /// Wrap an already configured client
    pub fn from_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl HttpGet for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<String> {
        let response = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SteamApiError::UnexpectedStatus(response.status().as_u16()));
        }

        Ok(response.text().await?)
    }
}
