//! Campaign model and DTOs.

use leadhq_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `campaigns` table.
///
/// `response_rate` is the denormalized percentage of successful leads,
/// recomputed by the repository whenever either counter changes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Campaign {
    pub id: DbId,
    pub name: String,
    pub status: String,
    pub total_leads: i32,
    pub successful_leads: i32,
    pub response_rate: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Wire DTO for `POST /campaigns`.
#[derive(Debug, Deserialize)]
pub struct CreateCampaign {
    pub name: Option<String>,
    pub status: Option<String>,
}

/// Wire DTO for `PUT /campaigns`: target id plus the fields to change.
#[derive(Debug, Deserialize)]
pub struct UpdateCampaign {
    pub id: Option<DbId>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub total_leads: Option<i32>,
    pub successful_leads: Option<i32>,
}

/// Repository input for an insert: validated values with defaults
/// already resolved by the handler.
pub struct NewCampaign {
    pub name: String,
    pub status: String,
}

/// Repository input for a partial update. `None` fields keep their
/// stored values.
#[derive(Default)]
pub struct CampaignPatch {
    pub name: Option<String>,
    pub status: Option<String>,
    pub total_leads: Option<i32>,
    pub successful_leads: Option<i32>,
}

/// One-row aggregate across all campaigns (`GET /campaigns/stats`).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CampaignStats {
    pub total_campaigns: i64,
    pub active_campaigns: i64,
    pub total_leads: i64,
    pub avg_response_rate: f64,
}
