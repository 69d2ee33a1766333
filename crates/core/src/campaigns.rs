//! Campaign status enumeration, name rules, and the response-rate formula.

// ---------------------------------------------------------------------------
// Statuses
// ---------------------------------------------------------------------------

/// Campaign lifecycle status: being drafted, not yet live.
pub const CAMPAIGN_STATUS_DRAFT: &str = "draft";
/// Actively sending outreach.
pub const CAMPAIGN_STATUS_ACTIVE: &str = "active";
/// Temporarily stopped.
pub const CAMPAIGN_STATUS_PAUSED: &str = "paused";
/// Finished.
pub const CAMPAIGN_STATUS_COMPLETED: &str = "completed";

/// All valid campaign statuses.
pub const VALID_CAMPAIGN_STATUSES: &[&str] = &[
    CAMPAIGN_STATUS_DRAFT,
    CAMPAIGN_STATUS_ACTIVE,
    CAMPAIGN_STATUS_PAUSED,
    CAMPAIGN_STATUS_COMPLETED,
];

/// Status assigned when a create request supplies none.
pub const DEFAULT_CAMPAIGN_STATUS: &str = CAMPAIGN_STATUS_DRAFT;

// ---------------------------------------------------------------------------
// Name constraints
// ---------------------------------------------------------------------------

/// Minimum trimmed length of a campaign name.
pub const MIN_CAMPAIGN_NAME_LENGTH: usize = 3;

/// Maximum length of a campaign name (VARCHAR(255)).
pub const MAX_CAMPAIGN_NAME_LENGTH: usize = 255;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that the status is one of the allowed values.
pub fn validate_status(status: &str) -> Result<(), String> {
    if VALID_CAMPAIGN_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_CAMPAIGN_STATUSES.join(", ")
        ))
    }
}

/// Validate an already-trimmed campaign name against both length bounds.
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.len() < MIN_CAMPAIGN_NAME_LENGTH {
        return Err(format!(
            "Campaign name must be at least {MIN_CAMPAIGN_NAME_LENGTH} characters"
        ));
    }
    if name.len() > MAX_CAMPAIGN_NAME_LENGTH {
        return Err(format!(
            "Campaign name exceeds maximum length of {MAX_CAMPAIGN_NAME_LENGTH} characters"
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Response rate
// ---------------------------------------------------------------------------

/// Percentage of successful leads, rounded to 2 decimal places.
/// Zero totals yield 0.0 rather than a division error.
pub fn response_rate(total_leads: i32, successful_leads: i32) -> f64 {
    if total_leads <= 0 {
        return 0.0;
    }
    let rate = f64::from(successful_leads) * 100.0 / f64::from(total_leads);
    (rate * 100.0).round() / 100.0
}
