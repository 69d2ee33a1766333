//! Session wire constants shared by the server and API clients.

/// Name of the browser cookie carrying the opaque session token.
///
/// The identity provider issues the token; the server stores only its
/// SHA-256 hash.
pub const SESSION_COOKIE: &str = "leadhq_session";
