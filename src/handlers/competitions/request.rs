//! Competition request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::constants::{MAX_COMPETITION_DESCRIPTION_LENGTH, MAX_COMPETITION_TITLE_LENGTH};
use crate::pagination::PaginationQuery;

/// Create competition request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCompetitionRequest {
    #[validate(length(min = 1, max = MAX_COMPETITION_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(max = MAX_COMPETITION_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    /// Entry fee in minor currency units; 0 or absent = free entry
    pub entry_fee_cents: Option<i64>,

    /// Settlement currency; falls back to the configured default
    pub currency: Option<String>,

    /// Maximum number of accepted entries (absent = unlimited)
    pub max_entries: Option<i32>,

    /// Submission window start
    pub starts_at: DateTime<Utc>,

    /// Submission window end
    pub ends_at: DateTime<Utc>,
}

/// Update competition request (drafts only)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCompetitionRequest {
    #[validate(length(min = 1, max = MAX_COMPETITION_TITLE_LENGTH))]
    pub title: Option<String>,

    #[validate(length(max = MAX_COMPETITION_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    pub entry_fee_cents: Option<i64>,
    pub max_entries: Option<i32>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
}

/// List competitions query parameters
#[derive(Debug, Deserialize)]
pub struct ListCompetitionsQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub status: Option<String>,
    pub organizer_id: Option<Uuid>,
    pub search: Option<String>,
}

impl ListCompetitionsQuery {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery {
            page: self.page,
            page_size: self.page_size,
        }
    }
}
