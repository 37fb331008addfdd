//! Retry logic with exponential backoff for transient failures
//!
//! This module retries backend calls that fail because the service could not
//! be reached or answered 503. Every other failure is returned to the caller
//! on the first attempt.

use crate::logger;
use crate::utils::errors::BackendError;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

/// Configuration for retry behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Total number of attempts, including the first one
    pub max_attempts: u32,
    /// Delay before the second attempt; doubles for each later attempt
    pub base_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: crate::constants::DEFAULT_MAX_ATTEMPTS,
            base_delay: Duration::from_millis(crate::constants::DEFAULT_BASE_DELAY_MS),
        }
    }
}

impl RetryConfig {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// Create a configuration with a single attempt (fail fast)
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            base_delay: Duration::ZERO,
        }
    }

    /// Delay to wait after the failed attempt with index `attempt` (0-based)
    ///
    /// `base_delay * 2^attempt`, saturating at `Duration::MAX`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        2u32.checked_pow(attempt)
            .and_then(|factor| self.base_delay.checked_mul(factor))
            .unwrap_or(Duration::MAX)
    }

    /// Upper bound on time spent sleeping when every attempt fails transiently
    pub fn worst_case_wait(&self) -> Duration {
        (0..self.max_attempts.saturating_sub(1))
            .map(|attempt| self.delay_for(attempt))
            .fold(Duration::ZERO, |total, d| total.saturating_add(d))
    }
}

/// Errors that know whether another attempt could succeed
pub trait Retryable {
    fn is_retryable(&self) -> bool;
}

impl Retryable for BackendError {
    fn is_retryable(&self) -> bool {
        self.is_transient()
    }
}

/// Retry an async operation with exponential backoff
///
/// # Arguments
///
/// * `config` - Retry configuration
/// * `operation` - Async closure that returns Result<T, E>
/// * `is_retryable` - Function to determine if an error is worth retrying
///
/// Attempts run with indices `0..max_attempts`. A non-retryable error is
/// returned at once. A retryable error sleeps `base_delay * 2^attempt` if
/// another attempt remains, otherwise it is returned as the last failure.
/// A `max_attempts` of zero still runs the operation once.
///
/// # Example
///
/// ```ignore
/// use supabase_gate::utils::retry::{retry_with_backoff, RetryConfig};
///
/// let session = retry_with_backoff(
///     RetryConfig::default(),
///     || client.get_session(),
///     |err| err.is_transient(),
/// ).await?;
/// ```
pub async fn retry_with_backoff<T, E, F, Fut, P>(
    config: RetryConfig,
    mut operation: F,
    is_retryable: P,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    P: Fn(&E) -> bool,
    E: std::fmt::Display,
{
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(err) => {
                if !is_retryable(&err) || attempt + 1 >= max_attempts {
                    return Err(err);
                }

                let delay = config.delay_for(attempt);
                logger::log_debug(&format!(
                    "[retry] Attempt {}/{} failed: {}. Retrying in {:?}...",
                    attempt + 1,
                    max_attempts,
                    err,
                    delay
                ));

                sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

/// Retry using the error type's own classification
pub async fn retry<T, E, F, Fut>(config: RetryConfig, operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Retryable + std::fmt::Display,
{
    retry_with_backoff(config, operation, |err: &E| err.is_retryable()).await
}
