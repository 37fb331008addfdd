//! # Application-Wide Constants
//!
//! Variable names, table names and tunables used across supabase-gate.
//!
//! ## Usage
//!
//! ```rust
//! use supabase_gate::constants::*;
//!
//! assert_eq!(ADMIN_ROLE, "admin");
//! ```

// ============================================================================
// Configuration
// ============================================================================

/// Environment variable holding the project base URL
pub const ENV_URL: &str = "SUPABASE_URL";

/// Environment variable holding the anonymous access key
pub const ENV_ANON_KEY: &str = "SUPABASE_ANON_KEY";

// ============================================================================
// Retry Defaults
// ============================================================================

/// Total attempts for a backend call, including the first
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Delay before the second attempt (milliseconds)
///
/// Doubles for each later attempt: 1s, 2s, ...
pub const DEFAULT_BASE_DELAY_MS: u64 = 1000;

// ============================================================================
// Profiles
// ============================================================================

/// Table holding one profile row per user, keyed by user id
pub const PROFILES_TABLE: &str = "profiles";

/// Key column of [`PROFILES_TABLE`]
pub const PROFILE_ID_COLUMN: &str = "id";

/// Role column of [`PROFILES_TABLE`]
pub const PROFILE_ROLE_COLUMN: &str = "role";

/// The only role value granting admin rights (case-sensitive)
pub const ADMIN_ROLE: &str = "admin";

// ============================================================================
// Diagnostics
// ============================================================================

/// Set to `1` to print debug-level diagnostics (retry attempts)
pub const ENV_LOG_VERBOSE: &str = "SUPABASE_GATE_LOG_VERBOSE";

/// Path of an optional diagnostics file
pub const ENV_LOG_FILE: &str = "SUPABASE_GATE_LOG_FILE";

/// Log file size that triggers rotation to `<file>.bak`
pub const MAX_LOG_BYTES: u64 = 10 * 1024 * 1024;
