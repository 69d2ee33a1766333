//! Wire-shape mirrors of the server payloads.
//!
//! These structs deserialize exactly what the API returns; the server's
//! own model types are not shared across the HTTP boundary.

use std::cmp::Ordering;

use leadhq_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One lead row.
///
/// `campaign_name` is present on list responses (joined in server-side)
/// and absent on mutation responses, hence the default.
#[derive(Debug, Clone, Deserialize)]
pub struct LeadRecord {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub campaign_id: Option<DbId>,
    pub status: String,
    pub source: Option<String>,
    pub last_contacted: Option<Timestamp>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default)]
    pub campaign_name: Option<String>,
}

/// One campaign row.
#[derive(Debug, Clone, Deserialize)]
pub struct CampaignRecord {
    pub id: DbId,
    pub name: String,
    pub status: String,
    pub total_leads: i32,
    pub successful_leads: i32,
    pub response_rate: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Aggregate returned by `GET /campaigns/stats`.
#[derive(Debug, Clone, Deserialize)]
pub struct CampaignStatsRecord {
    pub total_campaigns: i64,
    pub active_campaigns: i64,
    pub total_leads: i64,
    pub avg_response_rate: f64,
}

// ---------------------------------------------------------------------------
// Drafts (request bodies)
// ---------------------------------------------------------------------------

/// Fields accepted by `POST /leads` and, with `id` set, `PUT /leads`.
///
/// Absent fields are omitted from the JSON body, so an update only
/// touches what the caller filled in.
#[derive(Debug, Default, Serialize)]
pub struct LeadDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_contacted: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Fields accepted by `POST /campaigns` and, with `id` set, `PUT /campaigns`.
#[derive(Debug, Default, Serialize)]
pub struct CampaignDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_leads: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successful_leads: Option<i32>,
}

// ---------------------------------------------------------------------------
// Envelopes
// ---------------------------------------------------------------------------

/// `{"data": ...}` envelope on single-record responses.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// `{"data": [...], "pagination": {...}}` envelope on list responses.
#[derive(Debug, Deserialize)]
pub struct PageEnvelope<T> {
    pub data: Vec<T>,
    pub pagination: PageInfo,
}

/// Pagination block accompanying a page of records.
#[derive(Debug, Clone, Deserialize)]
pub struct PageInfo {
    pub page: i64,
    pub limit: i64,
    #[serde(rename = "hasMore")]
    pub has_more: bool,
    pub total: i64,
}

// ---------------------------------------------------------------------------
// Client-side sorting
// ---------------------------------------------------------------------------

/// Column comparison for client-side table sorting.
pub trait SortableRecord {
    /// Compare two records on the named column. Unknown columns compare
    /// equal, which leaves the existing order untouched.
    fn compare_by(&self, other: &Self, column: &str) -> Ordering;
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn cmp_opt_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp_text(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl SortableRecord for LeadRecord {
    fn compare_by(&self, other: &Self, column: &str) -> Ordering {
        match column {
            "name" => cmp_text(&self.name, &other.name),
            "email" => cmp_text(&self.email, &other.email),
            "company" => cmp_opt_text(self.company.as_deref(), other.company.as_deref()),
            "campaign" => cmp_opt_text(
                self.campaign_name.as_deref(),
                other.campaign_name.as_deref(),
            ),
            "status" => cmp_text(&self.status, &other.status),
            "last_contacted" => self.last_contacted.cmp(&other.last_contacted),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

impl SortableRecord for CampaignRecord {
    fn compare_by(&self, other: &Self, column: &str) -> Ordering {
        match column {
            "name" => cmp_text(&self.name, &other.name),
            "status" => cmp_text(&self.status, &other.status),
            "total_leads" => self.total_leads.cmp(&other.total_leads),
            "successful_leads" => self.successful_leads.cmp(&other.successful_leads),
            "response_rate" => self.response_rate.total_cmp(&other.response_rate),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}
