//! Payment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Payment database model
///
/// One row per entry-fee charge. The provider references the charge by
/// `receipt_reference` in webhook callbacks.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Payment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub competition_id: Uuid,
    pub amount_cents: i64,
    pub currency: String,
    pub status: PaymentStatus,
    /// Opaque reference shared with the payment provider
    pub receipt_reference: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Payment {
    /// Check if the payment may still be refunded
    pub fn is_refundable(&self) -> bool {
        self.status.can_transition_to(PaymentStatus::Refunded)
    }
}

/// Payment lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "payment_status", rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Success,
    Failed,
    Refunded,
}

impl PaymentStatus {
    /// Parse a status token, returning `None` for anything outside the set
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "success" => Some(Self::Success),
            "failed" => Some(Self::Failed),
            "refunded" => Some(Self::Refunded),
            _ => None,
        }
    }

    /// Check whether the lifecycle allows moving to `next`.
    ///
    /// A pending charge resolves to success or failure; only successful
    /// charges can be refunded. Failed and refunded are terminal.
    pub fn can_transition_to(&self, next: PaymentStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Success)
                | (Self::Pending, Self::Failed)
                | (Self::Success, Self::Refunded)
        )
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Success => write!(f, "success"),
            Self::Failed => write!(f, "failed"),
            Self::Refunded => write!(f, "refunded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payment(status: PaymentStatus) -> Payment {
        let now = Utc::now();
        Payment {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            competition_id: Uuid::new_v4(),
            amount_cents: 1500,
            currency: "USD".to_string(),
            status,
            receipt_reference: "REF7K2M9QX4PZ".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_status_membership() {
        assert_eq!(PaymentStatus::from_str("pending"), Some(PaymentStatus::Pending));
        assert_eq!(PaymentStatus::from_str("success"), Some(PaymentStatus::Success));
        assert_eq!(PaymentStatus::from_str("failed"), Some(PaymentStatus::Failed));
        assert_eq!(PaymentStatus::from_str("refunded"), Some(PaymentStatus::Refunded));
        assert_eq!(PaymentStatus::from_str("succeeded"), None);
    }

    #[test]
    fn test_lifecycle_edges() {
        use PaymentStatus::*;

        assert!(Pending.can_transition_to(Success));
        assert!(Pending.can_transition_to(Failed));
        assert!(Success.can_transition_to(Refunded));

        // Terminal states have no outgoing edges
        assert!(!Failed.can_transition_to(Success));
        assert!(!Failed.can_transition_to(Refunded));
        assert!(!Refunded.can_transition_to(Success));
        assert!(!Refunded.can_transition_to(Pending));

        // Refunds require a settled charge
        assert!(!Pending.can_transition_to(Refunded));
    }

    #[test]
    fn test_refundability() {
        assert!(sample_payment(PaymentStatus::Success).is_refundable());
        assert!(!sample_payment(PaymentStatus::Pending).is_refundable());
        assert!(!sample_payment(PaymentStatus::Failed).is_refundable());
        assert!(!sample_payment(PaymentStatus::Refunded).is_refundable());
    }

    #[test]
    fn test_status_serializes_as_lowercase_token() {
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Refunded).unwrap(),
            "\"refunded\""
        );
        assert_eq!(PaymentStatus::Success.to_string(), "success");
    }
}
