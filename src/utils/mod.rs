//! # Utilities Module
//!
//! Cross-cutting concerns shared by the configuration gate and the accessors.
//!
//! ## Modules
//!
//! - [`errors`]: Typed error hierarchy using `thiserror`
//! - [`retry`]: Exponential backoff retry logic for transient backend failures
//!
//! ## Design Notes
//!
//! Retry decisions are made on [`BackendErrorKind`], not on error text. Only
//! `Connect` and `Unavailable` failures are retried; authentication and query
//! failures fail immediately.

pub mod errors;
pub mod retry;

pub use errors::{BackendError, BackendErrorKind, ConfigError, InitError};
pub use retry::{retry, retry_with_backoff, RetryConfig, Retryable};
