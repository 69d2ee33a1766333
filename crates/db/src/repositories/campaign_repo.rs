//! Repository for the `campaigns` table.

use leadhq_core::campaigns::CAMPAIGN_STATUS_ACTIVE;
use leadhq_core::types::DbId;
use sqlx::PgPool;

use crate::models::campaign::{Campaign, CampaignPatch, CampaignStats, NewCampaign};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, status, total_leads, successful_leads, response_rate, created_at, updated_at";

/// Provides CRUD operations for campaigns.
pub struct CampaignRepo;

impl CampaignRepo {
    /// List campaigns newest-first with optional search/status filters.
    ///
    /// `search` matches the name as a case-insensitive substring.
    /// Returns the page rows plus the total row count under the same
    /// filters, for the pagination envelope.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        status: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Campaign>, i64), sqlx::Error> {
        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if search.is_some() {
            conditions.push(format!("name ILIKE ${bind_idx}"));
            bind_idx += 1;
        }
        if status.is_some() {
            conditions.push(format!("status = ${bind_idx}"));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let rows_query = format!(
            "SELECT {COLUMNS} FROM campaigns \
             {where_clause} \
             ORDER BY created_at DESC, id DESC \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            next_idx = bind_idx + 1,
        );
        let count_query = format!("SELECT COUNT(*) FROM campaigns {where_clause}");

        let pattern = search.map(|s| format!("%{s}%"));

        let mut rows = sqlx::query_as::<_, Campaign>(&rows_query);
        let mut count = sqlx::query_scalar::<_, i64>(&count_query);

        // Bind dynamic parameters in order.
        if let Some(ref pattern) = pattern {
            rows = rows.bind(pattern.clone());
            count = count.bind(pattern.clone());
        }
        if let Some(status) = status {
            rows = rows.bind(status.to_string());
            count = count.bind(status.to_string());
        }

        let data = rows.bind(limit).bind(offset).fetch_all(pool).await?;
        let total = count.fetch_one(pool).await?;
        Ok((data, total))
    }

    /// Find a campaign by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campaigns WHERE id = $1");
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a campaign with this ID exists (referential check for
    /// lead writes; there is no foreign key on `leads.campaign_id`).
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM campaigns WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Whether `name` is already taken case-insensitively, optionally
    /// excluding one campaign.
    pub async fn name_in_use(
        pool: &PgPool,
        name: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                SELECT 1 FROM campaigns
                WHERE LOWER(name) = LOWER($1)
                  AND ($2::BIGINT IS NULL OR id <> $2)
            )",
        )
        .bind(name)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    /// Insert a new campaign, returning the created row. Counters and
    /// response_rate start at zero via column defaults.
    pub async fn create(pool: &PgPool, input: &NewCampaign) -> Result<Campaign, sqlx::Error> {
        let query = format!(
            "INSERT INTO campaigns (name, status)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(&input.name)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Apply a patch, returning the updated row or `None` if the id is
    /// unknown.
    ///
    /// `response_rate` is recomputed in the same statement from the
    /// effective counter values, so it can never disagree with counters
    /// written through this path. Lead mutations do not touch it.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        patch: &CampaignPatch,
    ) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!(
            "UPDATE campaigns SET
                name = COALESCE($2, name),
                status = COALESCE($3, status),
                total_leads = COALESCE($4, total_leads),
                successful_leads = COALESCE($5, successful_leads),
                response_rate = CASE
                    WHEN COALESCE($4, total_leads) <= 0 THEN 0
                    ELSE ROUND(COALESCE($5, successful_leads)::numeric * 100
                               / COALESCE($4, total_leads), 2)::float8
                END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .bind(&patch.name)
            .bind(&patch.status)
            .bind(patch.total_leads)
            .bind(patch.successful_leads)
            .fetch_optional(pool)
            .await
    }

    /// Delete a campaign by ID. Returns `true` if a row was deleted.
    ///
    /// Deliberately unconditional: dependent leads are left in place
    /// with a dangling `campaign_id`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM campaigns WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// One-row aggregate across all campaigns for the dashboard cards.
    /// An empty table yields zeros.
    pub async fn stats(pool: &PgPool) -> Result<CampaignStats, sqlx::Error> {
        sqlx::query_as::<_, CampaignStats>(
            "SELECT COUNT(*) AS total_campaigns,
                    COUNT(*) FILTER (WHERE status = $1) AS active_campaigns,
                    COALESCE(SUM(total_leads), 0)::BIGINT AS total_leads,
                    COALESCE(ROUND(AVG(response_rate)::numeric, 2), 0)::float8 AS avg_response_rate
             FROM campaigns",
        )
        .bind(CAMPAIGN_STATUS_ACTIVE)
        .fetch_one(pool)
        .await
    }
}
