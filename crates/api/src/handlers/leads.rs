//! Handlers for the lead resource.
//!
//! Provides endpoints for listing, creating, updating, and deleting
//! leads. The list endpoint joins in the owning campaign's name.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use leadhq_core::error::CoreError;
use leadhq_core::leads::{
    normalize_email, validate_email, validate_field_length, validate_status, DEFAULT_LEAD_STATUS,
};
use leadhq_core::pagination;
use leadhq_core::types::DbId;
use leadhq_db::models::lead::{CreateLead, LeadPatch, NewLead, UpdateLead};
use leadhq_db::repositories::{CampaignRepo, LeadRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::required_trimmed;
use crate::middleware::auth::AuthSession;
use crate::query::{DeleteParams, ListParams};
use crate::response::{DataResponse, DeleteResponse, Paginated, Pagination};
use crate::state::AppState;

/// GET /leads?page=&limit=&search=&status=
///
/// List leads newest-first with their campaign names joined in. Search
/// matches name, email, or company as a case-insensitive substring.
pub async fn list_leads(
    _auth: AuthSession,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let page = pagination::parse_page(params.page.as_deref());
    let limit = pagination::parse_limit(params.limit.as_deref());

    let (leads, total) = LeadRepo::list(
        &state.pool,
        params.search(),
        params.status(),
        limit,
        pagination::offset(page, limit),
    )
    .await?;

    Ok(Json(Paginated {
        data: leads,
        pagination: Pagination {
            page,
            limit,
            has_more: pagination::has_more(page, limit, total),
            total,
        },
    }))
}

/// POST /leads
///
/// Create a new lead. Name, email, and company are required; the email
/// is lowercased before storage and must be unique.
pub async fn create_lead(
    auth: AuthSession,
    State(state): State<AppState>,
    Json(input): Json<CreateLead>,
) -> AppResult<impl IntoResponse> {
    let name = required_trimmed(input.name.as_deref(), "Name")?;
    let email = required_trimmed(input.email.as_deref(), "Email")?;
    let company = required_trimmed(input.company.as_deref(), "Company")?;

    let email = normalize_email(&email);
    validate_email(&email).map_err(AppError::BadRequest)?;

    validate_field_length("Name", &name).map_err(AppError::BadRequest)?;
    validate_field_length("Email", &email).map_err(AppError::BadRequest)?;
    validate_field_length("Company", &company).map_err(AppError::BadRequest)?;

    let status = match input.status.as_deref() {
        Some(status) => {
            validate_status(status).map_err(AppError::BadRequest)?;
            status.to_string()
        }
        None => DEFAULT_LEAD_STATUS.to_string(),
    };

    if let Some(ref source) = input.source {
        validate_field_length("Source", source).map_err(AppError::BadRequest)?;
    }

    if LeadRepo::email_in_use(&state.pool, &email, None).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "A lead with this email already exists".to_string(),
        )));
    }

    if let Some(campaign_id) = input.campaign_id {
        ensure_campaign_exists(&state, campaign_id).await?;
    }

    let lead = LeadRepo::create(
        &state.pool,
        &NewLead {
            name,
            email,
            company,
            campaign_id: input.campaign_id,
            status,
            source: input.source,
            last_contacted: input.last_contacted,
            notes: input.notes,
        },
    )
    .await?;

    tracing::info!(
        user_id = auth.user_id,
        lead_id = lead.id,
        email = %lead.email,
        "Lead created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: lead })))
}

/// PUT /leads
///
/// Partially update a lead. Only supplied fields change; `null` is
/// treated as absent, so a nullable column cannot be cleared here.
pub async fn update_lead(
    auth: AuthSession,
    State(state): State<AppState>,
    Json(input): Json<UpdateLead>,
) -> AppResult<impl IntoResponse> {
    let id = input
        .id
        .ok_or_else(|| AppError::BadRequest("ID is required".to_string()))?;

    let mut patch = LeadPatch::default();

    if let Some(ref name) = input.name {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest("Name cannot be empty".to_string()));
        }
        validate_field_length("Name", name).map_err(AppError::BadRequest)?;
        patch.name = Some(name.to_string());
    }

    if let Some(ref email) = input.email {
        let email = normalize_email(email);
        validate_email(&email).map_err(AppError::BadRequest)?;
        validate_field_length("Email", &email).map_err(AppError::BadRequest)?;
        if LeadRepo::email_in_use(&state.pool, &email, Some(id)).await? {
            return Err(AppError::Core(CoreError::Conflict(
                "A lead with this email already exists".to_string(),
            )));
        }
        patch.email = Some(email);
    }

    if let Some(ref company) = input.company {
        let company = company.trim();
        if company.is_empty() {
            return Err(AppError::BadRequest("Company cannot be empty".to_string()));
        }
        validate_field_length("Company", company).map_err(AppError::BadRequest)?;
        patch.company = Some(company.to_string());
    }

    if let Some(campaign_id) = input.campaign_id {
        ensure_campaign_exists(&state, campaign_id).await?;
        patch.campaign_id = Some(campaign_id);
    }

    if let Some(ref status) = input.status {
        validate_status(status).map_err(AppError::BadRequest)?;
        patch.status = Some(status.clone());
    }

    if let Some(ref source) = input.source {
        validate_field_length("Source", source).map_err(AppError::BadRequest)?;
        patch.source = Some(source.clone());
    }

    patch.last_contacted = input.last_contacted;
    patch.notes = input.notes;

    let lead = LeadRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Lead", id }))?;

    tracing::info!(user_id = auth.user_id, lead_id = id, "Lead updated");

    Ok(Json(DataResponse { data: lead }))
}

/// DELETE /leads?id=
///
/// Delete a lead. Repeating the call for the same id keeps yielding 404.
pub async fn delete_lead(
    auth: AuthSession,
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> AppResult<impl IntoResponse> {
    let id = params.require_id()?;

    let deleted = LeadRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Lead", id }));
    }

    tracing::info!(user_id = auth.user_id, lead_id = id, "Lead deleted");

    Ok(Json(DeleteResponse { success: true }))
}

/// 400 when a supplied `campaign_id` references no existing campaign.
async fn ensure_campaign_exists(state: &AppState, campaign_id: DbId) -> Result<(), AppError> {
    if CampaignRepo::exists(&state.pool, campaign_id).await? {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "Campaign {campaign_id} does not exist"
        )))
    }
}
