//! Authentication middleware extractors.
//!
//! - [`auth::AuthSession`] -- Extracts the authenticated session from the
//!   session cookie.

pub mod auth;
