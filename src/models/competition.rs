//! Competition model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Competition database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Competition {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub organizer_id: Uuid,
    pub status: CompetitionStatus,
    /// Entry fee in minor currency units; 0 = free entry
    pub entry_fee_cents: i64,
    pub currency: String,
    /// Maximum number of accepted entries (None = unlimited)
    pub max_entries: Option<i32>,
    /// Submission window start
    pub starts_at: DateTime<Utc>,
    /// Submission window end
    pub ends_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Competition {
    /// Check if entry is free of charge
    pub fn is_free(&self) -> bool {
        self.entry_fee_cents == 0
    }

    /// Check if the competition currently accepts new submissions
    pub fn accepts_submissions(&self) -> bool {
        let now = Utc::now();
        self.status == CompetitionStatus::Open && now >= self.starts_at && now < self.ends_at
    }

    /// Check if a viewer may see this competition.
    ///
    /// Drafts are only visible to their organizer and to admins.
    pub fn is_visible_to(&self, viewer_id: Option<Uuid>, is_admin: bool) -> bool {
        self.status != CompetitionStatus::Draft
            || is_admin
            || viewer_id == Some(self.organizer_id)
    }
}

/// Competition lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "competition_status", rename_all = "lowercase")]
pub enum CompetitionStatus {
    Draft,
    Open,
    Closed,
    Completed,
}

impl CompetitionStatus {
    /// Parse a status token, returning `None` for anything outside the set
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(Self::Draft),
            "open" => Some(Self::Open),
            "closed" => Some(Self::Closed),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Check whether the lifecycle allows moving to `next`.
    ///
    /// The lifecycle is strictly linear: draft -> open -> closed -> completed.
    pub fn can_transition_to(&self, next: CompetitionStatus) -> bool {
        matches!(
            (self, next),
            (Self::Draft, Self::Open)
                | (Self::Open, Self::Closed)
                | (Self::Closed, Self::Completed)
        )
    }
}

impl std::fmt::Display for CompetitionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_competition(status: CompetitionStatus) -> Competition {
        let now = Utc::now();
        Competition {
            id: Uuid::new_v4(),
            title: "Autumn photo contest".to_string(),
            description: None,
            organizer_id: Uuid::new_v4(),
            status,
            entry_fee_cents: 1500,
            currency: "USD".to_string(),
            max_entries: Some(100),
            starts_at: now - chrono::Duration::hours(1),
            ends_at: now + chrono::Duration::hours(1),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_status_membership() {
        assert_eq!(CompetitionStatus::from_str("draft"), Some(CompetitionStatus::Draft));
        assert_eq!(CompetitionStatus::from_str("open"), Some(CompetitionStatus::Open));
        assert_eq!(CompetitionStatus::from_str("closed"), Some(CompetitionStatus::Closed));
        assert_eq!(
            CompetitionStatus::from_str("completed"),
            Some(CompetitionStatus::Completed)
        );
        assert_eq!(CompetitionStatus::from_str("archived"), None);
        assert_eq!(CompetitionStatus::from_str(""), None);
    }

    #[test]
    fn test_status_serializes_as_lowercase_token() {
        assert_eq!(
            serde_json::to_string(&CompetitionStatus::Draft).unwrap(),
            "\"draft\""
        );
        let parsed: CompetitionStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(parsed, CompetitionStatus::Completed);
        assert!(serde_json::from_str::<CompetitionStatus>("\"finished\"").is_err());
    }

    #[test]
    fn test_linear_lifecycle() {
        use CompetitionStatus::*;

        assert!(Draft.can_transition_to(Open));
        assert!(Open.can_transition_to(Closed));
        assert!(Closed.can_transition_to(Completed));

        // No skipping, no going back
        assert!(!Draft.can_transition_to(Closed));
        assert!(!Draft.can_transition_to(Completed));
        assert!(!Open.can_transition_to(Draft));
        assert!(!Open.can_transition_to(Completed));
        assert!(!Completed.can_transition_to(Draft));
        assert!(!Closed.can_transition_to(Open));
    }

    #[test]
    fn test_accepts_submissions_only_while_open_in_window() {
        let open = sample_competition(CompetitionStatus::Open);
        assert!(open.accepts_submissions());

        let draft = sample_competition(CompetitionStatus::Draft);
        assert!(!draft.accepts_submissions());

        let mut expired = sample_competition(CompetitionStatus::Open);
        expired.ends_at = Utc::now() - chrono::Duration::minutes(5);
        assert!(!expired.accepts_submissions());

        let mut upcoming = sample_competition(CompetitionStatus::Open);
        upcoming.starts_at = Utc::now() + chrono::Duration::hours(2);
        assert!(!upcoming.accepts_submissions());
    }

    #[test]
    fn test_draft_visibility() {
        let draft = sample_competition(CompetitionStatus::Draft);

        assert!(!draft.is_visible_to(None, false));
        assert!(!draft.is_visible_to(Some(Uuid::new_v4()), false));
        assert!(draft.is_visible_to(Some(draft.organizer_id), false));
        assert!(draft.is_visible_to(None, true));

        let open = sample_competition(CompetitionStatus::Open);
        assert!(open.is_visible_to(None, false));
    }

    #[test]
    fn test_is_free() {
        let mut competition = sample_competition(CompetitionStatus::Open);
        assert!(!competition.is_free());
        competition.entry_fee_cents = 0;
        assert!(competition.is_free());
    }
}
