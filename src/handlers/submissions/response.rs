//! Submission response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Submission, SubmissionStatus};

/// Submission detail
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub id: Uuid,
    pub competition_id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub status: SubmissionStatus,
    pub reject_reason: Option<String>,
    pub reviewed_by: Option<Uuid>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Submission> for SubmissionResponse {
    fn from(submission: Submission) -> Self {
        Self {
            id: submission.id,
            competition_id: submission.competition_id,
            user_id: submission.user_id,
            title: submission.title,
            content: submission.content,
            status: submission.status,
            reject_reason: submission.reject_reason,
            reviewed_by: submission.reviewed_by,
            reviewed_at: submission.reviewed_at,
            created_at: submission.created_at,
            updated_at: submission.updated_at,
        }
    }
}
