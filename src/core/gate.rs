//! Session and role accessors
//!
//! Every backend call goes through the retry helper. Failures stop here: they
//! are written to the diagnostic channel and turned into `None`/`false`.

use super::client::{BackendClient, RowQuery};
use crate::config::BackendConfig;
use crate::constants::{ADMIN_ROLE, PROFILES_TABLE, PROFILE_ID_COLUMN, PROFILE_ROLE_COLUMN};
use crate::logger;
use crate::models::{ProfileRow, User};
use crate::utils::{retry, BackendError, InitError, RetryConfig};

/// Retry-wrapped accessors over a backend client
pub struct SessionGate<C> {
    client: C,
    retry: RetryConfig,
}

impl<C: BackendClient> SessionGate<C> {
    /// Wrap a client with the default retry policy (3 attempts, 1s base delay)
    pub fn new(client: C) -> Self {
        Self::with_retry(client, RetryConfig::default())
    }

    pub fn with_retry(client: C, retry: RetryConfig) -> Self {
        Self { client, retry }
    }

    /// Build the client from validated settings
    ///
    /// `factory` receives the URL, key and [`ClientOptions`](crate::config::ClientOptions)
    /// and returns the SDK handle.
    pub fn connect<F>(config: &BackendConfig, factory: F) -> Result<Self, InitError>
    where
        F: FnOnce(&BackendConfig) -> Result<C, BackendError>,
    {
        let client = factory(config)?;
        logger::log_info(&format!("Backend client configured for {}", config.url));
        Ok(Self::new(client))
    }

    /// Load settings from the environment and build the client
    ///
    /// Call once at startup; an error here should stop the application.
    pub fn from_env<F>(factory: F) -> Result<Self, InitError>
    where
        F: FnOnce(&BackendConfig) -> Result<C, BackendError>,
    {
        let config = BackendConfig::from_env()?;
        Self::connect(&config, factory)
    }

    /// The underlying client, for calls this crate does not wrap
    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /// Signed-in user, or `None` when signed out or on any failure
    pub async fn current_user(&self) -> Option<User> {
        match self.fetch_user().await {
            Ok(user) => user,
            Err(err) => {
                logger::log_error(&format!("Error getting current user: {}", err));
                None
            }
        }
    }

    /// Role from the user's profile row, or `None` when there is no user,
    /// no row, no role, or any failure
    pub async fn user_role(&self) -> Option<String> {
        let user = self.current_user().await?;

        match self.fetch_role(&user).await {
            Ok(role) => role,
            Err(err) => {
                logger::log_error(&format!("Error fetching user role: {}", err));
                None
            }
        }
    }

    /// True only for the exact role `"admin"`
    pub async fn is_admin(&self) -> bool {
        self.user_role().await.as_deref() == Some(ADMIN_ROLE)
    }

    async fn fetch_user(&self) -> Result<Option<User>, BackendError> {
        let response = retry(self.retry.clone(), || self.client.get_session()).await?;
        let session = response.into_result()?;
        Ok(session.map(|s| s.user))
    }

    async fn fetch_role(&self, user: &User) -> Result<Option<String>, BackendError> {
        let query = RowQuery::table(PROFILES_TABLE)
            .select(PROFILE_ROLE_COLUMN)
            .eq_filter(PROFILE_ID_COLUMN, user.id.as_str())
            .maybe_single();

        let response = retry(self.retry.clone(), || self.client.select_single(&query)).await?;
        let row: Option<ProfileRow> = response.into_row()?;
        Ok(row.and_then(|r| r.role))
    }
}
