//! Payment repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Payment, PaymentStatus},
};

/// Repository for payment database operations
pub struct PaymentRepository;

impl PaymentRepository {
    /// Create a pending payment for an entry fee
    pub async fn create(
        pool: &PgPool,
        user_id: &Uuid,
        competition_id: &Uuid,
        amount_cents: i64,
        currency: &str,
        receipt_reference: &str,
    ) -> AppResult<Payment> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (user_id, competition_id, amount_cents, currency, receipt_reference)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(competition_id)
        .bind(amount_cents)
        .bind(currency)
        .bind(receipt_reference)
        .fetch_one(pool)
        .await?;

        Ok(payment)
    }

    /// Find payment by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Payment>> {
        let payment = sqlx::query_as::<_, Payment>(r#"SELECT * FROM payments WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(payment)
    }

    /// Find payment by receipt reference (webhook lookups)
    pub async fn find_by_receipt_reference(
        pool: &PgPool,
        receipt_reference: &str,
    ) -> AppResult<Option<Payment>> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"SELECT * FROM payments WHERE receipt_reference = $1"#,
        )
        .bind(receipt_reference)
        .fetch_optional(pool)
        .await?;

        Ok(payment)
    }

    /// Find a user's settled payment for a competition
    pub async fn find_settled(
        pool: &PgPool,
        user_id: &Uuid,
        competition_id: &Uuid,
    ) -> AppResult<Option<Payment>> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            SELECT * FROM payments
            WHERE user_id = $1 AND competition_id = $2 AND status = 'success'
            "#,
        )
        .bind(user_id)
        .bind(competition_id)
        .fetch_optional(pool)
        .await?;

        Ok(payment)
    }

    /// Find a user's open (pending) payment for a competition
    pub async fn find_pending(
        pool: &PgPool,
        user_id: &Uuid,
        competition_id: &Uuid,
    ) -> AppResult<Option<Payment>> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            SELECT * FROM payments
            WHERE user_id = $1 AND competition_id = $2 AND status = 'pending'
            "#,
        )
        .bind(user_id)
        .bind(competition_id)
        .fetch_optional(pool)
        .await?;

        Ok(payment)
    }

    /// List payments with pagination
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        user_id: Option<&Uuid>,
        competition_id: Option<&Uuid>,
        status: Option<PaymentStatus>,
    ) -> AppResult<(Vec<Payment>, i64)> {
        let payments = sqlx::query_as::<_, Payment>(
            r#"
            SELECT * FROM payments
            WHERE
                ($1::uuid IS NULL OR user_id = $1)
                AND ($2::uuid IS NULL OR competition_id = $2)
                AND ($3::payment_status IS NULL OR status = $3)
            ORDER BY created_at DESC
            OFFSET $4 LIMIT $5
            "#,
        )
        .bind(user_id)
        .bind(competition_id)
        .bind(status)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM payments
            WHERE
                ($1::uuid IS NULL OR user_id = $1)
                AND ($2::uuid IS NULL OR competition_id = $2)
                AND ($3::payment_status IS NULL OR status = $3)
            "#,
        )
        .bind(user_id)
        .bind(competition_id)
        .bind(status)
        .fetch_one(pool)
        .await?;

        Ok((payments, count))
    }

    /// Move a payment to a new lifecycle status.
    ///
    /// The expected current status is part of the WHERE clause so
    /// replayed webhooks and concurrent refunds cannot double-apply.
    pub async fn update_status(
        pool: &PgPool,
        id: &Uuid,
        from: PaymentStatus,
        to: PaymentStatus,
    ) -> AppResult<Option<Payment>> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            UPDATE payments
            SET status = $3, updated_at = NOW()
            WHERE id = $1 AND status = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(from)
        .bind(to)
        .fetch_optional(pool)
        .await?;

        Ok(payment)
    }
}
