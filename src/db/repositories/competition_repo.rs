//! Competition repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Competition, CompetitionStatus},
};

/// Repository for competition database operations
pub struct CompetitionRepository;

impl CompetitionRepository {
    /// Create a new competition in draft state
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        title: &str,
        description: Option<&str>,
        organizer_id: &Uuid,
        entry_fee_cents: i64,
        currency: &str,
        max_entries: Option<i32>,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> AppResult<Competition> {
        let competition = sqlx::query_as::<_, Competition>(
            r#"
            INSERT INTO competitions
                (title, description, organizer_id, entry_fee_cents, currency, max_entries, starts_at, ends_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(organizer_id)
        .bind(entry_fee_cents)
        .bind(currency)
        .bind(max_entries)
        .bind(starts_at)
        .bind(ends_at)
        .fetch_one(pool)
        .await?;

        Ok(competition)
    }

    /// Find competition by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Competition>> {
        let competition =
            sqlx::query_as::<_, Competition>(r#"SELECT * FROM competitions WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(competition)
    }

    /// List competitions visible to the viewer, with pagination.
    ///
    /// Drafts only show up for their organizer and for admins; the
    /// visibility predicate lives in the WHERE clause so counts and
    /// pages stay consistent.
    #[allow(clippy::too_many_arguments)]
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        status: Option<CompetitionStatus>,
        organizer_id: Option<&Uuid>,
        search: Option<&str>,
        viewer_id: Option<&Uuid>,
        viewer_is_admin: bool,
    ) -> AppResult<(Vec<Competition>, i64)> {
        let search_pattern = search.map(|s| format!("%{}%", s));

        let competitions = sqlx::query_as::<_, Competition>(
            r#"
            SELECT * FROM competitions
            WHERE
                ($1::competition_status IS NULL OR status = $1)
                AND ($2::uuid IS NULL OR organizer_id = $2)
                AND ($3::text IS NULL OR title ILIKE $3)
                AND (status <> 'draft' OR $4 OR organizer_id = $5)
            ORDER BY starts_at DESC
            OFFSET $6 LIMIT $7
            "#,
        )
        .bind(status)
        .bind(organizer_id)
        .bind(search_pattern.as_deref())
        .bind(viewer_is_admin)
        .bind(viewer_id)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM competitions
            WHERE
                ($1::competition_status IS NULL OR status = $1)
                AND ($2::uuid IS NULL OR organizer_id = $2)
                AND ($3::text IS NULL OR title ILIKE $3)
                AND (status <> 'draft' OR $4 OR organizer_id = $5)
            "#,
        )
        .bind(status)
        .bind(organizer_id)
        .bind(search_pattern.as_deref())
        .bind(viewer_is_admin)
        .bind(viewer_id)
        .fetch_one(pool)
        .await?;

        Ok((competitions, count))
    }

    /// Update competition fields (draft editing)
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        title: Option<&str>,
        description: Option<&str>,
        entry_fee_cents: Option<i64>,
        max_entries: Option<i32>,
        starts_at: Option<DateTime<Utc>>,
        ends_at: Option<DateTime<Utc>>,
    ) -> AppResult<Competition> {
        let competition = sqlx::query_as::<_, Competition>(
            r#"
            UPDATE competitions
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                entry_fee_cents = COALESCE($4, entry_fee_cents),
                max_entries = COALESCE($5, max_entries),
                starts_at = COALESCE($6, starts_at),
                ends_at = COALESCE($7, ends_at),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(entry_fee_cents)
        .bind(max_entries)
        .bind(starts_at)
        .bind(ends_at)
        .fetch_one(pool)
        .await?;

        Ok(competition)
    }

    /// Move a competition to a new lifecycle status
    pub async fn update_status(
        pool: &PgPool,
        id: &Uuid,
        status: CompetitionStatus,
    ) -> AppResult<Competition> {
        let competition = sqlx::query_as::<_, Competition>(
            r#"
            UPDATE competitions
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_one(pool)
        .await?;

        Ok(competition)
    }

    /// Delete a draft competition
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM competitions WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Count accepted entries for a competition.
    ///
    /// Withdrawn and rejected submissions do not occupy a slot.
    pub async fn count_active_entries(pool: &PgPool, competition_id: &Uuid) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM submissions
            WHERE competition_id = $1 AND status IN ('pending', 'approved')
            "#,
        )
        .bind(competition_id)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }
}
