//! Database models
//!
//! Plain row structs mapped with `sqlx::FromRow` plus the status enums
//! stored as Postgres enum types. Behavior that depends only on a row's
//! own fields lives here; anything that touches other rows belongs in
//! the service layer.

pub mod competition;
pub mod payment;
pub mod submission;
pub mod user;

pub use competition::{Competition, CompetitionStatus};
pub use payment::{Payment, PaymentStatus};
pub use submission::{Submission, SubmissionStatus};
pub use user::{User, UserStatus};
