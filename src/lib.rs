//! supabase-gate - session and role accessors for a hosted backend
//!
//! Validates connection settings at startup, retries transient backend
//! failures with exponential backoff, and derives the signed-in user's role
//! from their profile row.

pub mod config;
pub mod constants;
pub mod core;
pub mod logger;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use config::{BackendConfig, ClientOptions};
pub use crate::core::{AuthResponse, BackendClient, QueryResponse, RowQuery, SessionGate};
pub use models::{AnonKey, ProfileRow, Session, User};
pub use utils::{
    retry, retry_with_backoff, BackendError, BackendErrorKind, ConfigError, InitError,
    RetryConfig, Retryable,
};
