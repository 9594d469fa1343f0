use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{AppError, FetchError};
use crate::search::SearchQuery;

use super::types::PlayerProfile;

/// Anything able to resolve a [`SearchQuery`] into a profile.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_profile(&self, query: &SearchQuery) -> Result<PlayerProfile, FetchError>;
}

/// HTTP client for the external profile service.
#[derive(Debug, Clone)]
pub struct ProfileClient {
    client: reqwest::Client,
    base_url: String,
}

impl ProfileClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    const PROFILE_ROUTE: &'static str = "api/profile";

    pub fn profile_url(&self, query: &SearchQuery) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.base_url,
            Self::PROFILE_ROUTE,
            query.region.as_str(),
            urlencoding::encode(&query.game_name),
            urlencoding::encode(&query.tag_line)
        )
    }

    async fn request(&self, url: String) -> Result<PlayerProfile, FetchError> {
        let res = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network {
                message: e.to_string(),
            })?;

        let status = res.status();
        let body = res.bytes().await.map_err(|e| FetchError::Network {
            message: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        serde_json::from_slice(&body).map_err(|e| FetchError::Parse {
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl ProfileSource for ProfileClient {
    async fn fetch_profile(&self, query: &SearchQuery) -> Result<PlayerProfile, FetchError> {
        let url = self.profile_url(query);
        debug!(%url, riot_id = %query.riot_id(), "🛰️ [PROFILE] requesting profile");

        let result = self.request(url).await;

        if let Err(e) = &result {
            warn!(
                status = ?e.status(),
                detail = e.detail(),
                riot_id = %query.riot_id(),
                "🛰️ ⚠️ [PROFILE] request failed"
            );
        }

        result
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Build the error for a non-success response, preferring the service's own
/// `message` field.
fn status_error(status: StatusCode, body: &[u8]) -> FetchError {
    let message = match serde_json::from_slice::<ErrorBody>(body) {
        Ok(ErrorBody {
            message: Some(message),
        }) if !message.is_empty() => message,
        Ok(_) => format!(
            "Error {} while contacting the profile service",
            status.as_u16()
        ),
        Err(_) => format!(
            "Server error: {} ({})",
            status.canonical_reason().unwrap_or("Unknown"),
            status.as_u16()
        ),
    };

    FetchError::Status {
        status: status.as_u16(),
        message,
    }
}
