//! Database repositories
//!
//! Static structs with async methods over `&PgPool`. Repositories own
//! the SQL; permission and lifecycle checks happen in the services.

pub mod competition_repo;
pub mod payment_repo;
pub mod submission_repo;
pub mod user_repo;

pub use competition_repo::CompetitionRepository;
pub use payment_repo::PaymentRepository;
pub use submission_repo::SubmissionRepository;
pub use user_repo::UserRepository;
