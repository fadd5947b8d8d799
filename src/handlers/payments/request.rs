//! Payment request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::pagination::PaginationQuery;

/// Initiate payment request
#[derive(Debug, Deserialize, Validate)]
pub struct InitiatePaymentRequest {
    pub competition_id: Uuid,
}

/// Provider webhook payload
#[derive(Debug, Deserialize, Validate)]
pub struct WebhookRequest {
    #[validate(length(min = 1))]
    pub receipt_reference: String,

    /// Provider outcome, either "success" or "failed"
    pub status: String,
}

/// List payments query parameters
#[derive(Debug, Deserialize)]
pub struct ListPaymentsQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub user_id: Option<Uuid>,
    pub competition_id: Option<Uuid>,
    pub status: Option<String>,
}

impl ListPaymentsQuery {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery {
            page: self.page,
            page_size: self.page_size,
        }
    }
}
