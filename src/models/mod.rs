//! # Domain Models
//!
//! Read-only views over the session, user and profile state owned by the
//! backend, plus the [`AnonKey`] secret wrapper.
//!
//! ## Security Design
//!
//! [`AnonKey`] is zeroed on drop and is never exposed in `Debug` or `Display`,
//! so configuration structs holding it can be logged safely.

pub mod key;
pub mod session;

pub use key::AnonKey;
pub use session::{ProfileRow, Session, User};
