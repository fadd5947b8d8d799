//! Submission repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Submission, SubmissionStatus},
};

/// Repository for submission database operations
pub struct SubmissionRepository;

impl SubmissionRepository {
    /// Create a new submission
    pub async fn create(
        pool: &PgPool,
        competition_id: &Uuid,
        user_id: &Uuid,
        title: &str,
        content: &str,
    ) -> AppResult<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (competition_id, user_id, title, content)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(competition_id)
        .bind(user_id)
        .bind(title)
        .bind(content)
        .fetch_one(pool)
        .await?;

        Ok(submission)
    }

    /// Find submission by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Submission>> {
        let submission =
            sqlx::query_as::<_, Submission>(r#"SELECT * FROM submissions WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(submission)
    }

    /// Find a user's live (non-withdrawn) submission in a competition
    pub async fn find_by_competition_and_user(
        pool: &PgPool,
        competition_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<Option<Submission>> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            SELECT * FROM submissions
            WHERE competition_id = $1 AND user_id = $2 AND status <> 'withdrawn'
            "#,
        )
        .bind(competition_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(submission)
    }

    /// List submissions with pagination.
    ///
    /// Non-staff viewers only see approved entries plus their own; the
    /// same predicate drives both the page and the count.
    #[allow(clippy::too_many_arguments)]
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        competition_id: Option<&Uuid>,
        user_id: Option<&Uuid>,
        status: Option<SubmissionStatus>,
        viewer_id: Option<&Uuid>,
        viewer_is_staff: bool,
    ) -> AppResult<(Vec<Submission>, i64)> {
        let submissions = sqlx::query_as::<_, Submission>(
            r#"
            SELECT * FROM submissions
            WHERE
                ($1::uuid IS NULL OR competition_id = $1)
                AND ($2::uuid IS NULL OR user_id = $2)
                AND ($3::submission_status IS NULL OR status = $3)
                AND (status = 'approved' OR $4 OR user_id = $5)
            ORDER BY created_at DESC
            OFFSET $6 LIMIT $7
            "#,
        )
        .bind(competition_id)
        .bind(user_id)
        .bind(status)
        .bind(viewer_is_staff)
        .bind(viewer_id)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM submissions
            WHERE
                ($1::uuid IS NULL OR competition_id = $1)
                AND ($2::uuid IS NULL OR user_id = $2)
                AND ($3::submission_status IS NULL OR status = $3)
                AND (status = 'approved' OR $4 OR user_id = $5)
            "#,
        )
        .bind(competition_id)
        .bind(user_id)
        .bind(status)
        .bind(viewer_is_staff)
        .bind(viewer_id)
        .fetch_one(pool)
        .await?;

        Ok((submissions, count))
    }

    /// Record a review decision.
    ///
    /// The status guard in the WHERE clause makes concurrent reviews
    /// race-safe; the second reviewer gets RowNotFound.
    pub async fn review(
        pool: &PgPool,
        id: &Uuid,
        status: SubmissionStatus,
        reject_reason: Option<&str>,
        reviewed_by: &Uuid,
    ) -> AppResult<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            UPDATE submissions
            SET
                status = $2,
                reject_reason = $3,
                reviewed_by = $4,
                reviewed_at = NOW(),
                updated_at = NOW()
            WHERE id = $1 AND status = 'pending'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(reject_reason)
        .bind(reviewed_by)
        .fetch_one(pool)
        .await?;

        Ok(submission)
    }

    /// Withdraw a pending submission
    pub async fn withdraw(pool: &PgPool, id: &Uuid) -> AppResult<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            UPDATE submissions
            SET status = 'withdrawn', updated_at = NOW()
            WHERE id = $1 AND status = 'pending'
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_one(pool)
        .await?;

        Ok(submission)
    }
}
