//! Error types for supabase-gate
//!
//! All error types use thiserror for clean error handling.
//! SECURITY: Error messages MUST NOT contain the access key.

/// Errors from the startup configuration gate
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing {0}. Set it to your project's settings before starting the application.")]
    MissingVar(&'static str),

    #[error("Invalid {var} format ({source}). Set it to the full project URL, e.g. https://<project>.supabase.co")]
    InvalidUrl {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },
}

/// Broad category of a backend failure
///
/// Retry decisions are made on the kind, never on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendErrorKind {
    /// Transport could not reach the service
    Connect,
    /// Service answered 503
    Unavailable,
    /// Any other non-success HTTP status
    Status(u16),
    /// Session or token rejected
    Auth,
    /// Query rejected by the database layer
    Query,
    /// Payload could not be decoded
    Decode,
    Other,
}

/// Failure reported by the external backend client
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct BackendError {
    pub kind: BackendErrorKind,
    pub message: String,
}

impl BackendError {
    pub fn new(kind: BackendErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn connect(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Connect, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Unavailable, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Decode, message)
    }

    /// Build an error from a status code, mapping 503 to `Unavailable`
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let kind = match status {
            503 => BackendErrorKind::Unavailable,
            401 | 403 => BackendErrorKind::Auth,
            other => BackendErrorKind::Status(other),
        };
        Self::new(kind, message)
    }

    /// Classify a text-only failure from an adapter that has no structured status
    ///
    /// Recognized transient markers:
    /// - "connect error" (transport failure)
    /// - "503" (service unavailable)
    ///
    /// Markers match exactly (case-sensitive). Anything else is `Other` and
    /// will not be retried.
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();

        let kind = if message.contains("connect error") {
            BackendErrorKind::Connect
        } else if message.contains("503") {
            BackendErrorKind::Unavailable
        } else {
            BackendErrorKind::Other
        };

        Self { kind, message }
    }

    /// Whether the failure is worth another attempt
    pub fn is_transient(&self) -> bool {
        matches!(
            self.kind,
            BackendErrorKind::Connect | BackendErrorKind::Unavailable
        )
    }
}

/// Errors from one-shot startup (config load + client construction)
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Client construction failed: {0}")]
    Client(#[from] BackendError),
}
