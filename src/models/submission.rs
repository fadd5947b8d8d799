//! Submission model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Submission database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub competition_id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub status: SubmissionStatus,
    /// Reviewer-supplied reason; only present on rejected submissions
    pub reject_reason: Option<String>,
    pub reviewed_by: Option<Uuid>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Submission {
    /// Check if the submission is still awaiting review
    pub fn is_pending(&self) -> bool {
        self.status == SubmissionStatus::Pending
    }

    /// Check if the owner may still withdraw this submission.
    ///
    /// Only pending submissions can be withdrawn; once reviewed the
    /// decision stands.
    pub fn can_be_withdrawn(&self) -> bool {
        self.is_pending()
    }

    /// Check if a viewer may see this submission.
    ///
    /// Owners and staff see everything; other participants only see
    /// approved entries.
    pub fn is_visible_to(&self, viewer_id: Option<Uuid>, is_staff: bool) -> bool {
        self.status == SubmissionStatus::Approved
            || is_staff
            || viewer_id == Some(self.user_id)
    }
}

/// Submission review status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "submission_status", rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
    Withdrawn,
}

impl SubmissionStatus {
    /// Parse a status token, returning `None` for anything outside the set
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            "withdrawn" => Some(Self::Withdrawn),
            _ => None,
        }
    }

    /// Check whether a review decision may move the submission to `next`.
    ///
    /// Pending is the only state with outgoing edges; every review
    /// outcome is final.
    pub fn can_transition_to(&self, next: SubmissionStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Approved)
                | (Self::Pending, Self::Rejected)
                | (Self::Pending, Self::Withdrawn)
        )
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Approved => write!(f, "approved"),
            Self::Rejected => write!(f, "rejected"),
            Self::Withdrawn => write!(f, "withdrawn"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_submission(status: SubmissionStatus) -> Submission {
        let now = Utc::now();
        Submission {
            id: Uuid::new_v4(),
            competition_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "Golden hour over the harbor".to_string(),
            content: "https://cdn.example.com/entries/harbor.jpg".to_string(),
            status,
            reject_reason: None,
            reviewed_by: None,
            reviewed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_status_membership() {
        assert_eq!(SubmissionStatus::from_str("pending"), Some(SubmissionStatus::Pending));
        assert_eq!(SubmissionStatus::from_str("approved"), Some(SubmissionStatus::Approved));
        assert_eq!(SubmissionStatus::from_str("rejected"), Some(SubmissionStatus::Rejected));
        assert_eq!(
            SubmissionStatus::from_str("withdrawn"),
            Some(SubmissionStatus::Withdrawn)
        );
        assert_eq!(SubmissionStatus::from_str("accepted"), None);
    }

    #[test]
    fn test_review_decisions_are_final() {
        use SubmissionStatus::*;

        assert!(Pending.can_transition_to(Approved));
        assert!(Pending.can_transition_to(Rejected));
        assert!(Pending.can_transition_to(Withdrawn));

        assert!(!Approved.can_transition_to(Rejected));
        assert!(!Rejected.can_transition_to(Approved));
        assert!(!Withdrawn.can_transition_to(Pending));
        assert!(!Approved.can_transition_to(Pending));
    }

    #[test]
    fn test_withdrawal_only_while_pending() {
        assert!(sample_submission(SubmissionStatus::Pending).can_be_withdrawn());
        assert!(!sample_submission(SubmissionStatus::Approved).can_be_withdrawn());
        assert!(!sample_submission(SubmissionStatus::Rejected).can_be_withdrawn());
        assert!(!sample_submission(SubmissionStatus::Withdrawn).can_be_withdrawn());
    }

    #[test]
    fn test_visibility() {
        let pending = sample_submission(SubmissionStatus::Pending);

        assert!(!pending.is_visible_to(None, false));
        assert!(!pending.is_visible_to(Some(Uuid::new_v4()), false));
        assert!(pending.is_visible_to(Some(pending.user_id), false));
        assert!(pending.is_visible_to(None, true));

        let approved = sample_submission(SubmissionStatus::Approved);
        assert!(approved.is_visible_to(None, false));
    }
}
