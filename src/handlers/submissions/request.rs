//! Submission request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::constants::{
    MAX_REASON_LENGTH, MAX_SUBMISSION_CONTENT_LENGTH, MAX_SUBMISSION_TITLE_LENGTH,
};
use crate::pagination::PaginationQuery;

/// Create submission request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSubmissionRequest {
    pub competition_id: Uuid,

    #[validate(length(min = 1, max = MAX_SUBMISSION_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(min = 1, max = MAX_SUBMISSION_CONTENT_LENGTH))]
    pub content: String,
}

/// Reject submission request
#[derive(Debug, Deserialize, Validate)]
pub struct RejectSubmissionRequest {
    /// Optional reviewer-facing reason surfaced to the entrant
    #[validate(length(max = MAX_REASON_LENGTH))]
    pub reason: Option<String>,
}

/// List submissions query parameters
#[derive(Debug, Deserialize)]
pub struct ListSubmissionsQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub competition_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub status: Option<String>,
}

impl ListSubmissionsQuery {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery {
            page: self.page,
            page_size: self.page_size,
        }
    }
}
