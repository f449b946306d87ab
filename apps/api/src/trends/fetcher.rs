//! HTML fetcher — the only outbound call in the trends pipeline.
//!
//! One GET per invocation, no retries. The caller decides what to fall back to.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use tracing::debug;

use crate::errors::FetchError;

/// Source of raw article HTML. Carried in the trends service as `Arc<dyn HtmlFetcher>`.
#[async_trait]
pub trait HtmlFetcher: Send + Sync {
    async fn fetch(&self) -> Result<String, FetchError>;
}

/// Fetches a fixed article URL with a browser-like user agent and a hard timeout.
#[derive(Clone)]
pub struct HttpHtmlFetcher {
    client: Client,
    url: String,
    timeout: Duration,
}

impl HttpHtmlFetcher {
    pub fn new(url: String, user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            url,
            timeout,
        })
    }
}

#[async_trait]
impl HtmlFetcher for HttpHtmlFetcher {
    async fn fetch(&self) -> Result<String, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .header(header::ACCEPT, "text/html")
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let html = response.text().await.map_err(|e| self.classify(e))?;
        debug!("Fetched {} bytes from {}", html.len(), self.url);
        Ok(html)
    }
}

impl HttpHtmlFetcher {
    fn classify(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout(self.timeout.as_secs())
        } else {
            FetchError::Http(err)
        }
    }
}
