//! Core accessors over the backend client
//!
//! CRITICAL: This module MUST NOT depend on a concrete SDK; clients plug in
//! through [`BackendClient`].

pub mod client;
pub mod gate;

// Scripted client for tests only
#[cfg(test)]
pub mod mock_client;

pub use client::{AuthResponse, BackendClient, QueryResponse, RowQuery};
pub use gate::SessionGate;
