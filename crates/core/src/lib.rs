//! Domain rules for the lead tracking platform.
//!
//! Zero internal dependencies: status enumerations, validation functions,
//! and pagination arithmetic shared by the API, repository, and client
//! layers.

pub mod campaigns;
pub mod error;
pub mod leads;
pub mod pagination;
pub mod sessions;
pub mod types;
