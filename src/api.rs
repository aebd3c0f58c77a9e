//! Registry acquisition: the network client and its composition with the
//! disk cache.
//!
//! [`RegistrySource`] is the one seam in the fetch pipeline: production
//! uses [`HttpRegistry`] against the well-known community registry, tests
//! substitute in-memory fakes. [`fetch_registry`] layers the 24-hour disk
//! cache on top of whichever source it is given.

use crate::cache::SearchCache;
use crate::error::{Result, ScoutError};
use crate::package::Registry;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

const REGISTRY_URL: &str = "https://raw.githubusercontent.com/pkgscout/registry/main/index.json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A source of raw registry payloads.
#[async_trait]
pub trait RegistrySource {
    /// Retrieve the full catalog payload. Single-shot: no retries.
    async fn fetch_raw(&self) -> Result<String>;
}

/// Network-backed registry source.
pub struct HttpRegistry {
    client: reqwest::Client,
    url: String,
}

impl HttpRegistry {
    /// Client for the well-known community registry.
    pub fn new() -> Result<Self> {
        Self::with_url(REGISTRY_URL)
    }

    /// Client for an alternate registry URL.
    pub fn with_url(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(format!("pkgscout/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl RegistrySource for HttpRegistry {
    async fn fetch_raw(&self) -> Result<String> {
        debug!("fetching registry from {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScoutError::RegistryStatus(status));
        }

        let body = response.text().await?;
        if body.is_empty() {
            return Err(ScoutError::EmptyRegistry);
        }

        Ok(body)
    }
}

/// Obtain the parsed registry, consulting the disk cache first.
///
/// `use_cache` gates reading only: a successful fetch always refreshes the
/// cache so the next run stays warm. A cached payload that no longer parses
/// (e.g. a half-written file) counts as a miss. Source failures are fatal;
/// cache write failures are not.
pub async fn fetch_registry<S: RegistrySource>(
    source: &S,
    cache: &SearchCache,
    use_cache: bool,
) -> Result<Registry> {
    if use_cache
        && cache.has_valid()
        && let Some(raw) = cache.read()
    {
        match Registry::parse(&raw) {
            Ok(registry) => {
                debug!("using cached registry ({} entries)", registry.len());
                return Ok(registry);
            }
            Err(err) => debug!("discarding unreadable registry cache: {err}"),
        }
    }

    let raw = source.fetch_raw().await?;

    // Store in cache (ignore errors)
    if let Err(err) = cache.write(&raw) {
        debug!("failed to write registry cache: {err}");
    }

    Registry::parse(&raw)
}
