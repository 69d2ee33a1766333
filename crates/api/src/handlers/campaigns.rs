//! Handlers for the campaign resource.
//!
//! Provides endpoints for listing, creating, updating, and deleting
//! campaigns, plus the dashboard stats aggregate.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use leadhq_core::campaigns::{validate_name, validate_status, DEFAULT_CAMPAIGN_STATUS};
use leadhq_core::error::CoreError;
use leadhq_core::pagination;
use leadhq_db::models::campaign::{CampaignPatch, CreateCampaign, NewCampaign, UpdateCampaign};
use leadhq_db::repositories::CampaignRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::required_trimmed;
use crate::middleware::auth::AuthSession;
use crate::query::{DeleteParams, ListParams};
use crate::response::{DataResponse, DeleteResponse, Paginated, Pagination};
use crate::state::AppState;

/// GET /campaigns?page=&limit=&search=&status=
///
/// List campaigns newest-first. Search matches the name as a
/// case-insensitive substring.
pub async fn list_campaigns(
    _auth: AuthSession,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let page = pagination::parse_page(params.page.as_deref());
    let limit = pagination::parse_limit(params.limit.as_deref());

    let (campaigns, total) = CampaignRepo::list(
        &state.pool,
        params.search(),
        params.status(),
        limit,
        pagination::offset(page, limit),
    )
    .await?;

    Ok(Json(Paginated {
        data: campaigns,
        pagination: Pagination {
            page,
            limit,
            has_more: pagination::has_more(page, limit, total),
            total,
        },
    }))
}

/// POST /campaigns
///
/// Create a new campaign. The name is required, at least 3 characters
/// after trimming, and unique case-insensitively.
pub async fn create_campaign(
    auth: AuthSession,
    State(state): State<AppState>,
    Json(input): Json<CreateCampaign>,
) -> AppResult<impl IntoResponse> {
    let name = required_trimmed(input.name.as_deref(), "Name")?;
    validate_name(&name).map_err(AppError::BadRequest)?;

    let status = match input.status.as_deref() {
        Some(status) => {
            validate_status(status).map_err(AppError::BadRequest)?;
            status.to_string()
        }
        None => DEFAULT_CAMPAIGN_STATUS.to_string(),
    };

    if CampaignRepo::name_in_use(&state.pool, &name, None).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "A campaign with this name already exists".to_string(),
        )));
    }

    let campaign = CampaignRepo::create(&state.pool, &NewCampaign { name, status }).await?;

    tracing::info!(
        user_id = auth.user_id,
        campaign_id = campaign.id,
        name = %campaign.name,
        "Campaign created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: campaign })))
}

/// PUT /campaigns
///
/// Partially update a campaign. Counter updates recompute the stored
/// response rate in the same statement.
pub async fn update_campaign(
    auth: AuthSession,
    State(state): State<AppState>,
    Json(input): Json<UpdateCampaign>,
) -> AppResult<impl IntoResponse> {
    let id = input
        .id
        .ok_or_else(|| AppError::BadRequest("ID is required".to_string()))?;

    let mut patch = CampaignPatch::default();

    if let Some(ref name) = input.name {
        let name = name.trim();
        validate_name(name).map_err(AppError::BadRequest)?;
        if CampaignRepo::name_in_use(&state.pool, name, Some(id)).await? {
            return Err(AppError::Core(CoreError::Conflict(
                "A campaign with this name already exists".to_string(),
            )));
        }
        patch.name = Some(name.to_string());
    }

    if let Some(ref status) = input.status {
        validate_status(status).map_err(AppError::BadRequest)?;
        patch.status = Some(status.clone());
    }

    if let Some(total_leads) = input.total_leads {
        if total_leads < 0 {
            return Err(AppError::BadRequest(
                "total_leads cannot be negative".to_string(),
            ));
        }
        patch.total_leads = Some(total_leads);
    }

    if let Some(successful_leads) = input.successful_leads {
        if successful_leads < 0 {
            return Err(AppError::BadRequest(
                "successful_leads cannot be negative".to_string(),
            ));
        }
        patch.successful_leads = Some(successful_leads);
    }

    let campaign = CampaignRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Campaign",
                id,
            })
        })?;

    tracing::info!(user_id = auth.user_id, campaign_id = id, "Campaign updated");

    Ok(Json(DataResponse { data: campaign }))
}

/// DELETE /campaigns?id=
///
/// Delete a campaign unconditionally. Leads pointing at it keep their
/// `campaign_id` and list with a null `campaign_name` afterwards.
pub async fn delete_campaign(
    auth: AuthSession,
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> AppResult<impl IntoResponse> {
    let id = params.require_id()?;

    let deleted = CampaignRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Campaign",
            id,
        }));
    }

    tracing::info!(user_id = auth.user_id, campaign_id = id, "Campaign deleted");

    Ok(Json(DeleteResponse { success: true }))
}

/// GET /campaigns/stats
///
/// One-row aggregate for the dashboard cards. Zeros on an empty store.
pub async fn campaign_stats(
    _auth: AuthSession,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let stats = CampaignRepo::stats(&state.pool).await?;
    Ok(Json(DataResponse { data: stats }))
}
