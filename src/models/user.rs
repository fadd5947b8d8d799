//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// User database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub display_name: Option<String>,
    pub role: String,
    pub status: UserStatus,
    pub suspension_reason: Option<String>,
    pub suspended_until: Option<DateTime<Utc>>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if the account is currently suspended
    pub fn is_currently_suspended(&self) -> bool {
        if self.status != UserStatus::Suspended {
            return false;
        }

        // A timed suspension lapses once the deadline passes
        if let Some(until) = self.suspended_until {
            if until < Utc::now() {
                return false;
            }
        }

        true
    }

    /// Check if the account has been soft-deleted
    pub fn is_deleted(&self) -> bool {
        self.status == UserStatus::Deleted
    }
}

/// User account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_status", rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Suspended,
    Deleted,
}

impl UserStatus {
    /// Parse a status token, returning `None` for anything outside the set
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "suspended" => Some(Self::Suspended),
            "deleted" => Some(Self::Deleted),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Suspended => write!(f, "suspended"),
            Self::Deleted => write!(f, "deleted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::roles;

    fn sample_user(status: UserStatus) -> User {
        User {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hash".to_string(),
            display_name: None,
            role: roles::PARTICIPANT.to_string(),
            status,
            suspension_reason: None,
            suspended_until: None,
            last_login_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_status_membership() {
        assert_eq!(UserStatus::from_str("active"), Some(UserStatus::Active));
        assert_eq!(UserStatus::from_str("suspended"), Some(UserStatus::Suspended));
        assert_eq!(UserStatus::from_str("deleted"), Some(UserStatus::Deleted));
        assert_eq!(UserStatus::from_str("banned"), None);
        assert_eq!(UserStatus::from_str("Active"), None);
    }

    #[test]
    fn test_status_serializes_as_lowercase_token() {
        assert_eq!(
            serde_json::to_string(&UserStatus::Suspended).unwrap(),
            "\"suspended\""
        );
        assert_eq!(UserStatus::Deleted.to_string(), "deleted");
    }

    #[test]
    fn test_indefinite_suspension() {
        let user = sample_user(UserStatus::Suspended);
        assert!(user.is_currently_suspended());
    }

    #[test]
    fn test_expired_suspension_lapses() {
        let mut user = sample_user(UserStatus::Suspended);
        user.suspended_until = Some(Utc::now() - chrono::Duration::hours(1));
        assert!(!user.is_currently_suspended());
    }

    #[test]
    fn test_active_user_is_not_suspended() {
        let user = sample_user(UserStatus::Active);
        assert!(!user.is_currently_suspended());
        assert!(!user.is_deleted());
    }

}
