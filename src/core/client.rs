//! Backend client abstraction
//!
//! The hosted SDK owns sessions, token refresh, querying and transport. This
//! trait names the two calls the accessors need so the SDK (or a mock) can be
//! plugged in behind it.

use crate::models::Session;
use crate::utils::BackendError;
use serde::de::DeserializeOwned;

/// Result of a session lookup
///
/// Mirrors the `{ session, error }` shape the SDK returns: a call can succeed
/// at the transport level and still carry an error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthResponse {
    pub session: Option<Session>,
    pub error: Option<BackendError>,
}

impl AuthResponse {
    pub fn session(session: Session) -> Self {
        Self {
            session: Some(session),
            error: None,
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn error(error: BackendError) -> Self {
        Self {
            session: None,
            error: Some(error),
        }
    }

    /// Collapse into a plain result, escalating the error field
    pub fn into_result(self) -> Result<Option<Session>, BackendError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.session),
        }
    }
}

/// Result of a single-row query, `{ data, error }`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryResponse {
    pub data: Option<serde_json::Value>,
    pub error: Option<BackendError>,
}

impl QueryResponse {
    pub fn row(data: serde_json::Value) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn error(error: BackendError) -> Self {
        Self {
            data: None,
            error: Some(error),
        }
    }

    /// Escalate the error field and decode the row, if any
    ///
    /// A JSON `null` row is treated the same as no row.
    pub fn into_row<T: DeserializeOwned>(self) -> Result<Option<T>, BackendError> {
        if let Some(err) = self.error {
            return Err(err);
        }

        match self.data {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| BackendError::decode(format!("Failed to decode row: {}", e))),
        }
    }
}

/// Single-row lookup: `table(name).select(cols).eq_filter(col, value)[.maybe_single()]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowQuery {
    pub table: String,
    pub columns: Vec<String>,
    pub filters: Vec<(String, String)>,
    /// Zero matching rows is an empty result rather than an error
    pub allow_empty: bool,
}

impl RowQuery {
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            filters: Vec::new(),
            allow_empty: false,
        }
    }

    /// Add comma-separated columns to the projection
    pub fn select(mut self, columns: &str) -> Self {
        self.columns.extend(
            columns
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
        );
        self
    }

    /// Keep only rows where `column` equals `value`
    pub fn eq_filter(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((column.into(), value.into()));
        self
    }

    pub fn maybe_single(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    /// Projection as the SDK spells it (`*` when no column was selected)
    pub fn projection(&self) -> String {
        if self.columns.is_empty() {
            "*".to_string()
        } else {
            self.columns.join(",")
        }
    }

    pub fn filter_value(&self, column: &str) -> Option<&str> {
        self.filters
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v.as_str())
    }
}

/// Backend client trait for abstraction over the SDK and test doubles
#[async_trait::async_trait]
pub trait BackendClient: Send + Sync {
    /// Fetch the current session
    ///
    /// `Err` means the call itself failed (and may be retried); an error
    /// reported by the service arrives in [`AuthResponse::error`].
    async fn get_session(&self) -> Result<AuthResponse, BackendError>;

    /// Run a single-row query
    async fn select_single(&self, query: &RowQuery) -> Result<QueryResponse, BackendError>;
}
