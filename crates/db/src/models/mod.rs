//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` wire DTO for create/update request bodies
//! - A plain repository-input struct holding validated, resolved values

pub mod campaign;
pub mod lead;
pub mod session;
