//! Lead status enumeration and field validation.

use std::sync::LazyLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Statuses
// ---------------------------------------------------------------------------

/// Lead lifecycle status: not yet contacted.
pub const LEAD_STATUS_PENDING: &str = "pending";
/// Outreach sent, no reply yet.
pub const LEAD_STATUS_CONTACTED: &str = "contacted";
/// The lead replied.
pub const LEAD_STATUS_RESPONDED: &str = "responded";
/// The lead became a customer.
pub const LEAD_STATUS_CONVERTED: &str = "converted";

/// All valid lead statuses.
pub const VALID_LEAD_STATUSES: &[&str] = &[
    LEAD_STATUS_PENDING,
    LEAD_STATUS_CONTACTED,
    LEAD_STATUS_RESPONDED,
    LEAD_STATUS_CONVERTED,
];

/// Status assigned when a create request supplies none.
pub const DEFAULT_LEAD_STATUS: &str = LEAD_STATUS_PENDING;

// ---------------------------------------------------------------------------
// Field constraints
// ---------------------------------------------------------------------------

/// Maximum length of the VARCHAR(255) lead columns (name, email, company,
/// source).
pub const MAX_LEAD_FIELD_LENGTH: usize = 255;

/// Email shape check: one `@`, no whitespace, a dot in the domain part.
/// Deliverability is the mail server's problem, not ours.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that the status is one of the allowed values.
pub fn validate_status(status: &str) -> Result<(), String> {
    if VALID_LEAD_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_LEAD_STATUSES.join(", ")
        ))
    }
}

/// Validate an already-normalized email address against [`EMAIL_PATTERN`].
pub fn validate_email(email: &str) -> Result<(), String> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err("Invalid email format".to_string())
    }
}

/// Canonical storage form of an email: trimmed and lowercased, so the
/// case-insensitive uniqueness rule compares like with like.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Validate a VARCHAR(255) field against [`MAX_LEAD_FIELD_LENGTH`].
pub fn validate_field_length(field: &'static str, value: &str) -> Result<(), String> {
    if value.len() > MAX_LEAD_FIELD_LENGTH {
        Err(format!(
            "{field} exceeds maximum length of {MAX_LEAD_FIELD_LENGTH} characters"
        ))
    } else {
        Ok(())
    }
}
