//! Repository for the `leads` table.

use leadhq_core::types::DbId;
use sqlx::PgPool;

use crate::models::lead::{Lead, LeadPatch, LeadWithCampaign, NewLead};

/// Column list shared across single-row queries.
const COLUMNS: &str = "id, name, email, company, campaign_id, status, source, \
                       last_contacted, notes, created_at, updated_at";

/// Column list for list queries, joined with the owning campaign's name.
const JOINED_COLUMNS: &str = "l.id, l.name, l.email, l.company, l.campaign_id, l.status, \
                              l.source, l.last_contacted, l.notes, l.created_at, l.updated_at, \
                              c.name AS campaign_name";

/// Provides CRUD operations for leads.
pub struct LeadRepo;

impl LeadRepo {
    /// List leads newest-first with optional search/status filters.
    ///
    /// `search` matches name, email, or company as a case-insensitive
    /// substring. Returns the page rows plus the total row count under
    /// the same filters, for the pagination envelope.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        status: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<LeadWithCampaign>, i64), sqlx::Error> {
        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if search.is_some() {
            conditions.push(format!(
                "(l.name ILIKE ${bind_idx} OR l.email ILIKE ${bind_idx} OR l.company ILIKE ${bind_idx})"
            ));
            bind_idx += 1;
        }
        if status.is_some() {
            conditions.push(format!("l.status = ${bind_idx}"));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let rows_query = format!(
            "SELECT {JOINED_COLUMNS} \
             FROM leads l \
             LEFT JOIN campaigns c ON c.id = l.campaign_id \
             {where_clause} \
             ORDER BY l.created_at DESC, l.id DESC \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            next_idx = bind_idx + 1,
        );
        // The count query only touches lead columns, so the join is skipped.
        let count_query = format!("SELECT COUNT(*) FROM leads l {where_clause}");

        let pattern = search.map(|s| format!("%{s}%"));

        let mut rows = sqlx::query_as::<_, LeadWithCampaign>(&rows_query);
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

    /// Find a lead by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM leads WHERE id = $1");
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether `email` is already taken, optionally excluding one lead.
    ///
    /// Compares on `LOWER(email)` to match the unique index.
    pub async fn email_in_use(
        pool: &PgPool,
        email: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                SELECT 1 FROM leads
                WHERE LOWER(email) = LOWER($1)
                  AND ($2::BIGINT IS NULL OR id <> $2)
            )",
        )
        .bind(email)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    /// Insert a new lead, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewLead) -> Result<Lead, sqlx::Error> {
        let query = format!(
            "INSERT INTO leads (name, email, company, campaign_id, status, source, last_contacted, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.company)
            .bind(input.campaign_id)
            .bind(&input.status)
            .bind(&input.source)
            .bind(input.last_contacted)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Apply a patch, returning the updated row or `None` if the id is
    /// unknown. Absent patch fields keep their stored values.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        patch: &LeadPatch,
    ) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!(
            "UPDATE leads SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                company = COALESCE($4, company),
                campaign_id = COALESCE($5, campaign_id),
                status = COALESCE($6, status),
                source = COALESCE($7, source),
                last_contacted = COALESCE($8, last_contacted),
                notes = COALESCE($9, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .bind(&patch.name)
            .bind(&patch.email)
            .bind(&patch.company)
            .bind(patch.campaign_id)
            .bind(&patch.status)
            .bind(&patch.source)
            .bind(patch.last_contacted)
            .bind(&patch.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a lead by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM leads WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
