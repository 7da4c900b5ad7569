//! HTTP client for the public SpaceX API.
//!
//! Fetches `GET {base}/launches` and `GET {base}/rockets/{id}`. Successful
//! responses are cached for the session: the launch list for
//! `launches_ttl`, each rocket for `rocket_ttl`. Failures are returned as
//! [`ExplorerError::Source`] and never cached; there are no retries.

use crate::domain::error::{ExplorerError, Result};
use crate::domain::{Launch, Rocket};
use crate::source::cache::TtlCache;
use crate::source::LaunchSource;
use crate::Config;
use async_trait::async_trait;
use chrono::Utc;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

/// Public v4 endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.spacexdata.com/v4";

const LAUNCHES_KEY: &str = "launches";

/// Caching SpaceX API client.
#[derive(Debug)]
pub struct SpacexClient {
    /// Base URL without trailing slash.
    base_url: String,
    client: reqwest::Client,
    launches: RwLock<TtlCache<&'static str, Vec<Launch>>>,
    rockets: RwLock<TtlCache<String, Rocket>>,
}

impl SpacexClient {
    /// Builds a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Source`] if the HTTP client cannot be built
    /// (for example when no TLS backend is available).
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ExplorerError::Source(format!("failed to build HTTP client: {e}")))?;

        tracing::debug!(base_url = %config.api_base_url, "creating SpaceX client");

        Ok(Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            client,
            launches: RwLock::new(TtlCache::new(ttl(config.launches_ttl_secs))),
            rockets: RwLock::new(TtlCache::new(ttl(config.rocket_ttl_secs))),
        })
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(url = %url, "sending request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ExplorerError::Source(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "API returned an error status");
            return Err(ExplorerError::Source(format!("{url} returned HTTP {status}")));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ExplorerError::Source(format!("failed to decode response from {url}: {e}")))
    }
}

/// Converts a configured TTL, capped at one year.
fn ttl(secs: u64) -> chrono::Duration {
    const MAX_TTL_SECS: u64 = 365 * 24 * 60 * 60;
    chrono::Duration::seconds(i64::try_from(secs.min(MAX_TTL_SECS)).unwrap_or(0))
}

#[async_trait]
impl LaunchSource for SpacexClient {
    async fn fetch_launches(&self) -> Result<Vec<Launch>> {
        if let Some(cached) = self.launches.write().await.get(&LAUNCHES_KEY, Utc::now()) {
            tracing::debug!(count = cached.len(), "launch list served from cache");
            return Ok(cached);
        }

        let launches: Vec<Launch> = self.get_json("launches").await?;
        tracing::debug!(count = launches.len(), "fetched launch list");

        self.launches
            .write()
            .await
            .insert(LAUNCHES_KEY, launches.clone(), Utc::now());
        Ok(launches)
    }

    async fn fetch_rocket(&self, id: &str) -> Result<Rocket> {
        if id.is_empty() {
            return Err(ExplorerError::Source("launch has no rocket id".to_string()));
        }

        let key = id.to_string();
        if let Some(cached) = self.rockets.write().await.get(&key, Utc::now()) {
            tracing::debug!(rocket_id = %id, "rocket served from cache");
            return Ok(cached);
        }

        let rocket: Rocket = self.get_json(&format!("rockets/{id}")).await?;
        tracing::debug!(rocket_id = %id, name = %rocket.name, "fetched rocket");

        self.rockets.write().await.insert(key, rocket.clone(), Utc::now());
        Ok(rocket)
    }

    async fn invalidate(&self) {
        tracing::debug!("dropping cached launch list");
        self.launches.write().await.invalidate(&LAUNCHES_KEY);
    }
}
