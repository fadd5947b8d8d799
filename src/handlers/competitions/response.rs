//! Competition response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Competition, CompetitionStatus};

/// Competition detail
#[derive(Debug, Serialize)]
pub struct CompetitionResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub organizer_id: Uuid,
    pub status: CompetitionStatus,
    pub entry_fee_cents: i64,
    pub currency: String,
    pub max_entries: Option<i32>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Competition> for CompetitionResponse {
    fn from(competition: Competition) -> Self {
        Self {
            id: competition.id,
            title: competition.title,
            description: competition.description,
            organizer_id: competition.organizer_id,
            status: competition.status,
            entry_fee_cents: competition.entry_fee_cents,
            currency: competition.currency,
            max_entries: competition.max_entries,
            starts_at: competition.starts_at,
            ends_at: competition.ends_at,
            created_at: competition.created_at,
            updated_at: competition.updated_at,
        }
    }
}
