//! HTTP transport to the dashboard backend

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::error::{DashboardError, Result};

/// Transport seam between the loader and the backend
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// GET `url` and return the body of a 2xx response
    async fn get(&self, url: &Url) -> Result<Vec<u8>>;

    /// POST to `url` with an empty body and return the status code
    async fn post(&self, url: &Url) -> Result<u16>;
}

/// reqwest-backed fetcher
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, url: &Url) -> Result<Vec<u8>> {
        let resp = self.client.get(url.clone()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(DashboardError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(resp.bytes().await?.to_vec())
    }

    async fn post(&self, url: &Url) -> Result<u16> {
        let resp = self.client.post(url.clone()).send().await?;
        Ok(resp.status().as_u16())
    }
}
