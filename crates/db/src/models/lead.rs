//! Lead model and DTOs.

use leadhq_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `leads` table.
///
/// `Deserialize` is derived as well so API clients can parse the wire
/// shape back into the same struct.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Lead {
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
}

/// A lead row joined with its campaign's name (list endpoint shape).
///
/// `campaign_name` is `None` when the lead is unassigned or the
/// referenced campaign has been deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LeadWithCampaign {
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
    pub campaign_name: Option<String>,
}

/// Wire DTO for `POST /leads`.
///
/// The required fields are `Option` so the handler can report which one
/// is missing instead of surfacing a deserialization error.
#[derive(Debug, Deserialize)]
pub struct CreateLead {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub campaign_id: Option<DbId>,
    pub status: Option<String>,
    pub source: Option<String>,
    pub last_contacted: Option<Timestamp>,
    pub notes: Option<String>,
}

/// Wire DTO for `PUT /leads`: target id plus the fields to change.
#[derive(Debug, Deserialize)]
pub struct UpdateLead {
    pub id: Option<DbId>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub campaign_id: Option<DbId>,
    pub status: Option<String>,
    pub source: Option<String>,
    pub last_contacted: Option<Timestamp>,
    pub notes: Option<String>,
}

/// Repository input for an insert: validated, normalized values with
/// defaults already resolved by the handler.
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub company: String,
    pub campaign_id: Option<DbId>,
    pub status: String,
    pub source: Option<String>,
    pub last_contacted: Option<Timestamp>,
    pub notes: Option<String>,
}

/// Repository input for a partial update. `None` fields keep their
/// stored values; supplying `null` on the wire is treated as absent, so
/// a patch cannot clear a nullable column.
#[derive(Default)]
pub struct LeadPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub campaign_id: Option<DbId>,
    pub status: Option<String>,
    pub source: Option<String>,
    pub last_contacted: Option<Timestamp>,
    pub notes: Option<String>,
}
