//! Payment response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Payment, PaymentStatus};

/// Payment detail
#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub competition_id: Uuid,
    pub amount_cents: i64,
    pub currency: String,
    pub status: PaymentStatus,
    pub receipt_reference: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.id,
            user_id: payment.user_id,
            competition_id: payment.competition_id,
            amount_cents: payment.amount_cents,
            currency: payment.currency,
            status: payment.status,
            receipt_reference: payment.receipt_reference,
            created_at: payment.created_at,
            updated_at: payment.updated_at,
        }
    }
}
