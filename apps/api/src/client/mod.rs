//! Dashboard client for `/api/skills`: a polling hook plus the HTTP source it reads from.

pub mod fallback;
pub mod hook;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::trends::models::SkillTrendsResponse;

pub use hook::{MountedHook, SkillTrendsHook, TrendsState};

/// Polling interval for the dashboard view.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to fetch skill trends: {status}")]
    Status { status: u16 },

    #[error("{0}")]
    Unsuccessful(String),
}

/// Where the hook gets its envelope from. Carried as `Arc<dyn TrendsSource>`.
#[async_trait]
pub trait TrendsSource: Send + Sync {
    async fn fetch(&self) -> Result<SkillTrendsResponse, ClientError>;
}

/// Calls a running server's `/api/skills`.
#[derive(Clone)]
pub struct SkillTrendsClient {
    client: Client,
    endpoint: String,
}

impl SkillTrendsClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            client: Client::builder().timeout(Duration::from_secs(30)).build()?,
            endpoint: format!("{}/api/skills", base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl TrendsSource for SkillTrendsClient {
    async fn fetch(&self) -> Result<SkillTrendsResponse, ClientError> {
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }

        let envelope: SkillTrendsResponse = response.json().await?;
        if !envelope.success {
            return Err(ClientError::Unsuccessful(
                envelope.error.unwrap_or_else(|| "Unknown error".to_string()),
            ));
        }

        Ok(envelope)
    }
}
