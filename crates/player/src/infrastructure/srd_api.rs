//! Client for the remote 5e SRD reference API.
//!
//! Knows URLs, the response cache and rate limiting; knows nothing about
//! homebrew or domain mapping. Every successful response is cached forever
//! under its exact URL, so a URL is fetched from the network at most once.

use std::sync::Arc;

use charbldr_domain::ResourceType;
use charbldr_shared::dto::ResourceListDto;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::infrastructure::cache::ResponseCache;
use crate::ports::outbound::{HttpTransport, SleepPort, TransportError};

/// Default base URL of the public reference API
pub const DEFAULT_API_URL: &str = "https://www.dnd5eapi.co/api";

/// Errors from the reference API.
///
/// A 404 is not an error: lookups return `Ok(None)` for missing entities.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Still answered 429 after every allowed attempt
    #[error("Rate limited by {url} after {attempts} attempts")]
    RateLimited { url: String, attempts: u32 },

    /// Permanent HTTP failure, never retried
    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("Transport error for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: TransportError,
    },

    #[error("Failed to parse response from {url}: {message}")]
    Parse { url: String, message: String },
}

/// How rate-limited (429) requests are retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first one
    pub max_attempts: u32,
    /// Fixed delay between attempts
    pub backoff_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            backoff_ms: 1000,
        }
    }
}

pub struct SrdApiClient {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    cache: ResponseCache,
    sleep: Arc<dyn SleepPort>,
    retry: RetryPolicy,
}

impl SrdApiClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
        cache: ResponseCache,
        sleep: Arc<dyn SleepPort>,
        retry: RetryPolicy,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
            cache,
            sleep,
            retry,
        }
    }

    /// Canonical URL for a path.
    ///
    /// Accepts relative paths (`races/dwarf/traits`) as well as the absolute
    /// reference paths the API embeds in its own responses
    /// (`/api/classes/wizard/levels`).
    pub fn url_for(&self, path: &str) -> String {
        let relative = path
            .strip_prefix("/api/")
            .or_else(|| path.strip_prefix("api/"))
            .unwrap_or(path)
            .trim_start_matches('/');
        format!("{}/{}", self.base_url, relative)
    }

    /// `GET {base}/{resource}/{index}`
    pub async fn fetch_by_index<T: DeserializeOwned>(
        &self,
        resource: ResourceType,
        index: &str,
    ) -> Result<Option<T>, ApiError> {
        self.fetch_by_endpoint(&format!("{}/{}", resource, index))
            .await
    }

    /// `GET {base}/{resource}`
    ///
    /// A resource type the API does not serve yields an empty catalog.
    pub async fn fetch_all(&self, resource: ResourceType) -> Result<ResourceListDto, ApiError> {
        Ok(self
            .fetch_by_endpoint::<ResourceListDto>(resource.as_str())
            .await?
            .unwrap_or_default())
    }

    /// `GET {base}/{path}` for relational endpoints such as
    /// `races/dwarf/traits` or `classes/wizard/levels/3`.
    pub async fn fetch_by_endpoint<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, ApiError> {
        let url = self.url_for(path);
        let Some(value) = self.fetch_json(&url).await? else {
            return Ok(None);
        };

        serde_json::from_value(value).map(Some).map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Response does not match the expected shape");
            ApiError::Parse {
                url,
                message: e.to_string(),
            }
        })
    }

    /// Cache lookup, then the network with bounded 429 retry.
    async fn fetch_json(&self, url: &str) -> Result<Option<Value>, ApiError> {
        if let Some(cached) = self.cache.get(url) {
            tracing::trace!(url, "Response cache hit");
            return Ok(Some(cached));
        }

        let max_attempts = self.retry.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            let response = self.transport.get(url).await.map_err(|source| {
                tracing::error!(url, error = %source, "Reference API request failed");
                ApiError::Transport {
                    url: url.to_string(),
                    source,
                }
            })?;

            match response.status {
                status if (200..300).contains(&status) => {
                    let value: Value = serde_json::from_str(&response.body).map_err(|e| {
                        tracing::error!(url, error = %e, "Reference API returned invalid JSON");
                        ApiError::Parse {
                            url: url.to_string(),
                            message: e.to_string(),
                        }
                    })?;
                    if attempt > 1 {
                        tracing::info!(url, attempt, "Reference API request succeeded after retry");
                    }
                    self.cache.set(url, &response.body);
                    return Ok(Some(value));
                }
                404 => {
                    tracing::debug!(url, "Reference API has no such resource");
                    return Ok(None);
                }
                429 if attempt < max_attempts => {
                    tracing::warn!(
                        url,
                        attempt,
                        max_attempts,
                        delay_ms = self.retry.backoff_ms,
                        "Rate limited by reference API, retrying..."
                    );
                    self.sleep.sleep_ms(self.retry.backoff_ms).await;
                }
                429 => break,
                status => {
                    tracing::error!(url, status, "Reference API request failed");
                    return Err(ApiError::Status {
                        url: url.to_string(),
                        status,
                    });
                }
            }
        }

        tracing::error!(
            url,
            attempts = max_attempts,
            "Reference API still rate limiting after all attempts"
        );
        Err(ApiError::RateLimited {
            url: url.to_string(),
            attempts: max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::MemoryKeyValueStore;
    use crate::infrastructure::testing::{fixtures, FakeTransport, InstantSleep};
    use crate::ports::outbound::HttpResponse;
    use charbldr_shared::dto::RaceDto;

    fn client(transport: Arc<FakeTransport>, sleep: Arc<InstantSleep>) -> SrdApiClient {
        SrdApiClient::new(
            fixtures::BASE_URL,
            transport,
            ResponseCache::new(Arc::new(MemoryKeyValueStore::new())),
            sleep,
            RetryPolicy::default(),
        )
    }

    #[test]
    fn url_for_accepts_relative_and_api_paths() {
        let api = client(Arc::new(FakeTransport::new()), Arc::new(InstantSleep::new()));
        assert_eq!(api.url_for("races/dwarf"), "https://srd.test/api/races/dwarf");
        assert_eq!(
            api.url_for("/api/classes/wizard/levels"),
            "https://srd.test/api/classes/wizard/levels"
        );
        assert_eq!(api.url_for("/spells"), "https://srd.test/api/spells");
    }

    #[tokio::test]
    async fn always_rate_limited_fails_after_exactly_five_attempts() {
        let url = "https://srd.test/api/races/dwarf";
        let transport = Arc::new(FakeTransport::new().with_status(url, 429));
        let sleep = Arc::new(InstantSleep::new());
        let api = client(transport.clone(), sleep.clone());

        let result = api.fetch_by_index::<RaceDto>(ResourceType::Races, "dwarf").await;

        assert_eq!(
            result,
            Err(ApiError::RateLimited {
                url: url.to_string(),
                attempts: 5
            })
        );
        assert_eq!(transport.call_count(url), 5);
        assert_eq!(sleep.sleeps(), vec![1000; 4]);
    }

    #[tokio::test]
    async fn rate_limit_then_success_returns_value() {
        let url = "https://srd.test/api/races/dwarf";
        let transport = Arc::new(FakeTransport::new());
        transport.push(url, Ok(HttpResponse::new(429, "")));
        transport.push(url, Ok(HttpResponse::new(429, "")));
        transport.push(url, Ok(HttpResponse::new(200, fixtures::dwarf().to_string())));
        let sleep = Arc::new(InstantSleep::new());
        let api = client(transport.clone(), sleep.clone());

        let race = api
            .fetch_by_index::<RaceDto>(ResourceType::Races, "dwarf")
            .await
            .expect("fetch")
            .expect("present");

        assert_eq!(race.name, "Dwarf");
        assert_eq!(transport.call_count(url), 3);
        assert_eq!(sleep.sleeps().len(), 2);
    }

    #[tokio::test]
    async fn second_fetch_of_same_url_is_served_from_cache() {
        let url = "https://srd.test/api/races/dwarf";
        let transport = Arc::new(FakeTransport::new().with_json(url, fixtures::dwarf()));
        let api = client(transport.clone(), Arc::new(InstantSleep::new()));

        let first = api
            .fetch_by_index::<RaceDto>(ResourceType::Races, "dwarf")
            .await
            .expect("first");
        let second = api
            .fetch_by_index::<RaceDto>(ResourceType::Races, "dwarf")
            .await
            .expect("second");

        assert_eq!(first, second);
        assert_eq!(transport.call_count(url), 1);
    }

    #[tokio::test]
    async fn not_found_is_absent_and_not_retried() {
        let transport = Arc::new(FakeTransport::new());
        let api = client(transport.clone(), Arc::new(InstantSleep::new()));

        let result = api
            .fetch_by_index::<RaceDto>(ResourceType::Races, "tortle")
            .await;

        assert_eq!(result, Ok(None));
        assert_eq!(transport.total_calls(), 1);
    }

    #[tokio::test]
    async fn server_error_is_not_retried() {
        let url = "https://srd.test/api/spells/fireball";
        let transport = Arc::new(FakeTransport::new().with_status(url, 500));
        let sleep = Arc::new(InstantSleep::new());
        let api = client(transport.clone(), sleep.clone());

        let result = api
            .fetch_by_endpoint::<Value>("spells/fireball")
            .await;

        assert!(matches!(result, Err(ApiError::Status { status: 500, .. })));
        assert_eq!(transport.call_count(url), 1);
        assert!(sleep.sleeps().is_empty());
    }

    #[tokio::test]
    async fn transport_and_parse_failures_are_errors_not_absent() {
        let broken = "https://srd.test/api/races/elf";
        let garbled = "https://srd.test/api/races/gnome";
        let transport = Arc::new(
            FakeTransport::new()
                .with_error(broken, TransportError::Request("connection reset".into())),
        );
        transport.push(garbled, Ok(HttpResponse::new(200, "<html>")));
        let api = client(transport.clone(), Arc::new(InstantSleep::new()));

        let broken_result = api.fetch_by_index::<RaceDto>(ResourceType::Races, "elf").await;
        assert!(matches!(broken_result, Err(ApiError::Transport { .. })));

        let garbled_result = api
            .fetch_by_index::<RaceDto>(ResourceType::Races, "gnome")
            .await;
        assert!(matches!(garbled_result, Err(ApiError::Parse { .. })));
    }

    #[tokio::test]
    async fn wrong_shape_is_a_parse_error() {
        let url = "https://srd.test/api/races/dwarf";
        let transport = Arc::new(FakeTransport::new().with_json(url, serde_json::json!([1, 2])));
        let api = client(transport, Arc::new(InstantSleep::new()));

        let result = api.fetch_by_index::<RaceDto>(ResourceType::Races, "dwarf").await;
        assert!(matches!(result, Err(ApiError::Parse { .. })));
    }

    #[tokio::test]
    async fn fetch_all_of_unknown_catalog_is_empty() {
        let transport = Arc::new(FakeTransport::new().with_json(
            "https://srd.test/api/races",
            fixtures::catalog("races", &[("dwarf", "Dwarf"), ("elf", "Elf")]),
        ));
        let api = client(transport, Arc::new(InstantSleep::new()));

        let races = api.fetch_all(ResourceType::Races).await.expect("races");
        assert_eq!(races.results.len(), 2);

        let feats = api.fetch_all(ResourceType::Feats).await.expect("feats");
        assert!(feats.results.is_empty());
    }
}
