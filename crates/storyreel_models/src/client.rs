//! Shared HTTP plumbing for the generation services.

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use storyreel_core::ServicesConfig;
use storyreel_error::{
    ConfigError, GeneratorError, GeneratorErrorKind, RetryableError, StoryreelResult,
};
use tokio_retry2::strategy::{ExponentialBackoff, jitter};
use tokio_retry2::{Retry, RetryError};
use tracing::{debug, info, instrument, warn};

type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

// Error bodies are cut to this many characters in error messages.
const MAX_ERROR_BODY: usize = 200;

/// A JSON-over-HTTP client for one generation service.
///
/// Every request waits for the shared rate limiter, carries the bearer token
/// when one is configured, and is retried with exponential backoff while the
/// failure is retryable (network errors, 408, 429, 5xx). The backoff follows
/// the first failure's [`RetryableError::retry_strategy_params`], with any
/// configured values taking precedence.
#[derive(Clone, derive_getters::Getters)]
pub struct ServiceClient {
    #[getter(skip)]
    http: reqwest::Client,
    /// Service base URL
    base_url: String,
    #[getter(skip)]
    api_key: Option<String>,
    #[getter(skip)]
    limiter: Arc<DirectRateLimiter>,
    /// Retry attempts after the first failure, overriding the per-error default
    max_retries: Option<usize>,
    /// First retry delay, overriding the per-error default
    initial_backoff_ms: Option<u64>,
    /// Upper bound on one retry delay, overriding the per-error default
    max_delay_secs: Option<u64>,
}

impl std::fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.api_key.is_some())
            .field("max_retries", &self.max_retries)
            .finish_non_exhaustive()
    }
}

impl ServiceClient {
    /// Create a client for the service at `base_url`.
    ///
    /// The bearer token is read from the environment variable named by
    /// `services.api_key_env()`; requests are sent unauthenticated when it is
    /// unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the rate limit is zero.
    #[instrument(skip(services), fields(base_url = %base_url.as_ref()))]
    pub fn new(base_url: impl AsRef<str>, services: &ServicesConfig) -> StoryreelResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(*services.timeout_secs()))
            .build()
            .map_err(|e| GeneratorError::new(GeneratorErrorKind::ClientCreation(e.to_string())))?;

        let api_key = services
            .api_key_env()
            .as_deref()
            .and_then(|var| match std::env::var(var) {
                Ok(key) if !key.trim().is_empty() => Some(key),
                _ => {
                    debug!(var, "No API key set, sending unauthenticated requests");
                    None
                }
            });

        let rpm = NonZeroU32::new(*services.requests_per_minute()).ok_or_else(|| {
            ConfigError::new("services.requests_per_minute must be at least 1")
        })?;
        let limiter = Arc::new(RateLimiter::direct(Quota::per_minute(rpm)));

        Ok(Self {
            http,
            base_url: base_url.as_ref().to_string(),
            api_key,
            limiter,
            max_retries: *services.max_retries(),
            initial_backoff_ms: *services.initial_backoff_ms(),
            max_delay_secs: *services.max_delay_secs(),
        })
    }

    /// Whether requests carry a bearer token.
    pub fn is_authenticated(&self) -> bool {
        self.api_key.is_some()
    }

    /// Retry parameters for a failure: `(initial_backoff_ms, max_retries, max_delay_secs)`.
    ///
    /// Starts from the error's own strategy and applies the configured overrides.
    pub fn retry_params(&self, err: &impl RetryableError) -> (u64, usize, u64) {
        let (initial_ms, retries, max_delay_secs) = err.retry_strategy_params();
        (
            self.initial_backoff_ms.unwrap_or(initial_ms),
            self.max_retries.unwrap_or(retries),
            self.max_delay_secs.unwrap_or(max_delay_secs),
        )
    }

    /// POST `body` as JSON to `path` and decode the JSON answer.
    ///
    /// # Errors
    ///
    /// Returns the last [`GeneratorError`] once retries are exhausted, or the
    /// first non-retryable one.
    #[instrument(skip(self, body), fields(base_url = %self.base_url))]
    pub async fn post<B, T>(&self, path: &str, body: &B) -> StoryreelResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let url = join_url(&self.base_url, path);
        let url = url.as_str();

        // The first failure picks the retry strategy.
        let err = match self.send::<B, T>(url, body).await {
            Ok(value) => return Ok(value),
            Err(e) => e,
        };
        if !err.is_retryable() {
            warn!(error = %err, url, "Permanent request error, failing immediately");
            return Err(err.into());
        }

        let (initial_ms, max_retries, max_delay_secs) = self.retry_params(&err);
        info!(
            error = %err,
            url,
            initial_backoff_ms = initial_ms,
            max_retries,
            max_delay_secs,
            "Request failed, will retry with configured strategy"
        );

        let mut strategy = ExponentialBackoff::from_millis(initial_ms)
            .factor(2)
            .max_delay(Duration::from_secs(max_delay_secs))
            .map(jitter)
            .take(max_retries);

        // Retry::spawn attempts immediately, so the first delay is slept here.
        let Some(first_delay) = strategy.next() else {
            return Err(err.into());
        };
        tokio::time::sleep(first_delay).await;

        let value = Retry::spawn(strategy, move || async move {
            match self.send(url, body).await {
                Ok(value) => Ok(value),
                Err(e) if e.is_retryable() => {
                    warn!(error = %e, url, "Request failed, will retry");
                    Err(RetryError::Transient {
                        err: e,
                        retry_after: None,
                    })
                }
                Err(e) => {
                    warn!(error = %e, url, "Permanent request error, failing immediately");
                    Err(RetryError::Permanent(e))
                }
            }
        })
        .await?;

        Ok(value)
    }

    async fn send<B, T>(&self, url: &str, body: &B) -> Result<T, GeneratorError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        self.limiter.until_ready().await;

        let mut request = self.http.post(url).json(body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| transport_error(url, &e))?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), &text));
        }

        let text = response.text().await.map_err(|e| transport_error(url, &e))?;
        debug!(url, response_len = text.len(), "Received response");

        serde_json::from_str(&text).map_err(|e| {
            GeneratorError::new(GeneratorErrorKind::InvalidResponse(format!(
                "{}: {}",
                url, e
            )))
        })
    }
}

/// Join a base URL and a path with exactly one slash between them.
///
/// # Examples
///
/// ```
/// use storyreel_models::join_url;
///
/// assert_eq!(join_url("http://localhost:8080/", "/storyboard"), "http://localhost:8080/storyboard");
/// assert_eq!(join_url("http://localhost:8080/api", "story/extend"), "http://localhost:8080/api/story/extend");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Classify a non-success HTTP answer.
///
/// The message is the trimmed response body, or the status reason when the
/// body is empty.
pub fn status_error(status_code: u16, body: &str) -> GeneratorError {
    let body = body.trim();
    let message = if body.is_empty() {
        reqwest::StatusCode::from_u16(status_code)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown status")
            .to_string()
    } else {
        body.chars().take(MAX_ERROR_BODY).collect()
    };
    GeneratorError::new(GeneratorErrorKind::HttpStatus {
        status_code,
        message,
    })
}

/// Classify a request that failed before a status was received.
pub fn transport_error(url: &str, e: &reqwest::Error) -> GeneratorError {
    let kind = if e.is_builder() {
        GeneratorErrorKind::ClientCreation(format!("Invalid request to {}: {}", url, e))
    } else if e.is_decode() {
        GeneratorErrorKind::InvalidResponse(format!("{}: {}", url, e))
    } else {
        GeneratorErrorKind::Transport {
            endpoint: url.to_string(),
            message: e.to_string(),
        }
    };
    GeneratorError::new(kind)
}
