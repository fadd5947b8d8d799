//! Payment service

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    db::repositories::{CompetitionRepository, PaymentRepository},
    error::{AppError, AppResult},
    middleware::AuthenticatedUser,
    models::{Payment, PaymentStatus},
    utils::crypto,
};

/// Payment service for business logic
pub struct PaymentService;

impl PaymentService {
    /// Start an entry-fee payment for a competition.
    ///
    /// Returns the existing pending payment if one is already open so a
    /// retried checkout does not create duplicate charges.
    pub async fn initiate(
        pool: &PgPool,
        caller: &AuthenticatedUser,
        competition_id: &Uuid,
    ) -> AppResult<Payment> {
        let competition = CompetitionRepository::find_by_id(pool, competition_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        if !competition.accepts_submissions() {
            return Err(AppError::Conflict(
                "Competition is not accepting entries".to_string(),
            ));
        }

        if competition.is_free() {
            return Err(AppError::Conflict(
                "Competition has no entry fee".to_string(),
            ));
        }

        if PaymentRepository::find_settled(pool, &caller.id, competition_id)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists(
                "Entry fee has already been paid".to_string(),
            ));
        }

        if let Some(pending) =
            PaymentRepository::find_pending(pool, &caller.id, competition_id).await?
        {
            return Ok(pending);
        }

        let receipt_reference = crypto::generate_receipt_reference();

        let payment = PaymentRepository::create(
            pool,
            &caller.id,
            competition_id,
            competition.entry_fee_cents,
            &competition.currency,
            &receipt_reference,
        )
        .await?;

        info!(
            payment_id = %payment.id,
            competition_id = %competition_id,
            amount_cents = payment.amount_cents,
            "Payment initiated"
        );

        Ok(payment)
    }

    /// Apply a provider webhook event to the referenced payment.
    ///
    /// Replays of an already-applied event return the payment unchanged;
    /// an event that contradicts a terminal status is a conflict.
    pub async fn apply_webhook_event(
        pool: &PgPool,
        receipt_reference: &str,
        event_status: PaymentStatus,
    ) -> AppResult<Payment> {
        if !matches!(event_status, PaymentStatus::Success | PaymentStatus::Failed) {
            return Err(AppError::InvalidInput(
                "Webhook events must report success or failed".to_string(),
            ));
        }

        let payment = PaymentRepository::find_by_receipt_reference(pool, receipt_reference)
            .await?
            .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;

        if payment.status == event_status {
            return Ok(payment);
        }

        if !payment.status.can_transition_to(event_status) {
            return Err(AppError::Conflict(format!(
                "Payment is already {}",
                payment.status
            )));
        }

        let updated =
            PaymentRepository::update_status(pool, &payment.id, payment.status, event_status)
                .await?
                // A concurrent webhook won the race; the row is no longer pending
                .ok_or_else(|| {
                    AppError::Conflict("Payment was updated concurrently".to_string())
                })?;

        info!(
            payment_id = %updated.id,
            status = %updated.status,
            "Payment status updated from webhook"
        );

        Ok(updated)
    }

    /// Refund a settled payment (admin only)
    pub async fn refund(
        pool: &PgPool,
        caller: &AuthenticatedUser,
        payment_id: &Uuid,
    ) -> AppResult<Payment> {
        caller.require_admin()?;

        let payment = PaymentRepository::find_by_id(pool, payment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;

        if !payment.is_refundable() {
            return Err(AppError::InvalidTransition(format!(
                "{} -> refunded",
                payment.status
            )));
        }

        let refunded = PaymentRepository::update_status(
            pool,
            payment_id,
            PaymentStatus::Success,
            PaymentStatus::Refunded,
        )
        .await?
        .ok_or_else(|| AppError::Conflict("Payment was updated concurrently".to_string()))?;

        info!(payment_id = %refunded.id, "Payment refunded");

        Ok(refunded)
    }

    /// Get a payment (owner or admin)
    pub async fn get_payment(
        pool: &PgPool,
        caller: &AuthenticatedUser,
        id: &Uuid,
    ) -> AppResult<Payment> {
        let payment = PaymentRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;

        if payment.user_id != caller.id && !caller.is_admin() {
            return Err(AppError::NotFound("Payment not found".to_string()));
        }

        Ok(payment)
    }

    /// List payments.
    ///
    /// Non-admins only see their own regardless of the filters they
    /// pass.
    pub async fn list_payments(
        pool: &PgPool,
        caller: &AuthenticatedUser,
        offset: i64,
        limit: i64,
        user_id: Option<&Uuid>,
        competition_id: Option<&Uuid>,
        status: Option<PaymentStatus>,
    ) -> AppResult<(Vec<Payment>, i64)> {
        let user_filter = if caller.is_admin() {
            user_id
        } else {
            Some(&caller.id)
        };

        PaymentRepository::list(pool, offset, limit, user_filter, competition_id, status).await
    }
}
