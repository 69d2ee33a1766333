//! Request handlers for the CRM resources.
//!
//! Each submodule provides async handler functions (create, list, update,
//! delete) for a single resource. Handlers normalize and validate input,
//! delegate to the corresponding repository in `leadhq_db`, and map errors
//! via [`AppError`](crate::error::AppError).

pub mod campaigns;
pub mod leads;

use crate::error::AppError;

/// Require a wire field to be present and non-blank, returning the
/// trimmed value.
///
/// Produces the `"{field} is required"` message shared by all create
/// handlers.
pub(crate) fn required_trimmed(
    value: Option<&str>,
    field: &str,
) -> Result<String, AppError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(AppError::BadRequest(format!("{field} is required"))),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn required_trimmed_accepts_padded_values() {
        assert_eq!(
            required_trimmed(Some("  Alice  "), "Name").unwrap(),
            "Alice"
        );
    }

    #[test]
    fn required_trimmed_rejects_missing_and_blank() {
        for value in [None, Some(""), Some("   ")] {
            let err = required_trimmed(value, "Name").unwrap_err();
            assert_matches!(err, AppError::BadRequest(message) if message == "Name is required");
        }
    }
}
