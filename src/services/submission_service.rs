//! Submission service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{CompetitionRepository, PaymentRepository, SubmissionRepository},
    error::{AppError, AppResult},
    middleware::AuthenticatedUser,
    models::{Competition, Submission, SubmissionStatus},
    utils::validation,
};

/// Submission service for business logic
pub struct SubmissionService;

impl SubmissionService {
    /// Enter a competition.
    ///
    /// The competition must be open and inside its submission window,
    /// the entry cap must not be reached, paid competitions require a
    /// settled payment, and each user gets one active entry.
    pub async fn create(
        pool: &PgPool,
        caller: &AuthenticatedUser,
        competition_id: &Uuid,
        title: &str,
        content: &str,
    ) -> AppResult<Submission> {
        let competition = CompetitionRepository::find_by_id(pool, competition_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        if !competition.accepts_submissions() {
            return Err(AppError::Conflict(
                "Competition is not accepting submissions".to_string(),
            ));
        }

        // A withdrawn entry frees the slot; anything else blocks re-entry
        if SubmissionRepository::find_by_competition_and_user(pool, competition_id, &caller.id)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists(
                "You already have an entry in this competition".to_string(),
            ));
        }

        if let Some(max_entries) = competition.max_entries {
            let active = CompetitionRepository::count_active_entries(pool, competition_id).await?;
            if active >= max_entries as i64 {
                return Err(AppError::Conflict("Competition is full".to_string()));
            }
        }

        if !competition.is_free() {
            let settled =
                PaymentRepository::find_settled(pool, &caller.id, competition_id).await?;
            if settled.is_none() {
                return Err(AppError::PaymentRequired(
                    "Entry fee has not been paid".to_string(),
                ));
            }
        }

        let title = validation::validate_competition_title(title)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let content = validation::sanitize_string(content);
        if content.is_empty() {
            return Err(AppError::Validation(
                "Submission content cannot be empty".to_string(),
            ));
        }

        SubmissionRepository::create(pool, competition_id, &caller.id, &title, &content).await
    }

    /// Get a submission, applying viewer visibility
    pub async fn get_submission(
        pool: &PgPool,
        id: &Uuid,
        viewer: Option<&AuthenticatedUser>,
    ) -> AppResult<Submission> {
        let submission = SubmissionRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))?;

        let competition = CompetitionRepository::find_by_id(pool, &submission.competition_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        let viewer_id = viewer.map(|v| v.id);
        let is_staff = viewer
            .map(|v| Self::is_staff(v, &competition))
            .unwrap_or(false);

        if !submission.is_visible_to(viewer_id, is_staff) {
            return Err(AppError::NotFound("Submission not found".to_string()));
        }

        Ok(submission)
    }

    /// List submissions visible to the viewer
    #[allow(clippy::too_many_arguments)]
    pub async fn list_submissions(
        pool: &PgPool,
        viewer: Option<&AuthenticatedUser>,
        offset: i64,
        limit: i64,
        competition_id: Option<&Uuid>,
        user_id: Option<&Uuid>,
        status: Option<SubmissionStatus>,
    ) -> AppResult<(Vec<Submission>, i64)> {
        let viewer_id = viewer.map(|v| v.id);

        // Organizer privileges only apply when the listing is scoped to
        // their own competition.
        let is_staff = match (viewer, competition_id) {
            (Some(v), _) if v.is_admin() => true,
            (Some(v), Some(competition_id)) => {
                let competition = CompetitionRepository::find_by_id(pool, competition_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;
                competition.organizer_id == v.id
            }
            _ => false,
        };

        SubmissionRepository::list(
            pool,
            offset,
            limit,
            competition_id,
            user_id,
            status,
            viewer_id.as_ref(),
            is_staff,
        )
        .await
    }

    /// Approve a pending submission
    pub async fn approve(
        pool: &PgPool,
        caller: &AuthenticatedUser,
        id: &Uuid,
    ) -> AppResult<Submission> {
        let (submission, _) = Self::load_for_review(pool, caller, id).await?;

        Self::check_transition(&submission, SubmissionStatus::Approved)?;

        SubmissionRepository::review(pool, id, SubmissionStatus::Approved, None, &caller.id).await
    }

    /// Reject a pending submission with an optional reason
    pub async fn reject(
        pool: &PgPool,
        caller: &AuthenticatedUser,
        id: &Uuid,
        reason: Option<&str>,
    ) -> AppResult<Submission> {
        let (submission, _) = Self::load_for_review(pool, caller, id).await?;

        Self::check_transition(&submission, SubmissionStatus::Rejected)?;

        let reason = validation::validate_reason(reason)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        SubmissionRepository::review(
            pool,
            id,
            SubmissionStatus::Rejected,
            reason.as_deref(),
            &caller.id,
        )
        .await
    }

    /// Withdraw one's own pending submission
    pub async fn withdraw(
        pool: &PgPool,
        caller: &AuthenticatedUser,
        id: &Uuid,
    ) -> AppResult<Submission> {
        let submission = SubmissionRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))?;

        if submission.user_id != caller.id {
            return Err(AppError::Forbidden(
                "Only the owner can withdraw a submission".to_string(),
            ));
        }

        if !submission.can_be_withdrawn() {
            return Err(AppError::InvalidTransition(format!(
                "{} -> withdrawn",
                submission.status
            )));
        }

        SubmissionRepository::withdraw(pool, id).await
    }

    async fn load_for_review(
        pool: &PgPool,
        caller: &AuthenticatedUser,
        id: &Uuid,
    ) -> AppResult<(Submission, Competition)> {
        let submission = SubmissionRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))?;

        let competition = CompetitionRepository::find_by_id(pool, &submission.competition_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        if !Self::is_staff(caller, &competition) {
            return Err(AppError::Forbidden(
                "Only the organizer can review submissions".to_string(),
            ));
        }

        Ok((submission, competition))
    }

    fn check_transition(submission: &Submission, next: SubmissionStatus) -> AppResult<()> {
        if !submission.status.can_transition_to(next) {
            return Err(AppError::InvalidTransition(format!(
                "{} -> {}",
                submission.status, next
            )));
        }
        Ok(())
    }

    fn is_staff(viewer: &AuthenticatedUser, competition: &Competition) -> bool {
        viewer.is_admin() || viewer.id == competition.organizer_id
    }
}
