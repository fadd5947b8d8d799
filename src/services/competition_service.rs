//! Competition service

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::CompetitionRepository,
    error::{AppError, AppResult},
    middleware::AuthenticatedUser,
    models::{Competition, CompetitionStatus},
    utils::{time, validation},
};

/// Competition service for business logic
pub struct CompetitionService;

impl CompetitionService {
    /// Create a new competition in draft state
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        caller: &AuthenticatedUser,
        title: &str,
        description: Option<&str>,
        entry_fee_cents: i64,
        currency: &str,
        max_entries: Option<i32>,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> AppResult<Competition> {
        if !caller.can_manage_competitions() {
            return Err(AppError::Forbidden(
                "Only organizers can create competitions".to_string(),
            ));
        }

        let title = validation::validate_competition_title(title)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        validation::validate_entry_fee(entry_fee_cents)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        validation::validate_currency(currency)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        Self::validate_window(starts_at, ends_at)?;

        if let Some(max_entries) = max_entries {
            if max_entries < 1 {
                return Err(AppError::Validation(
                    "Maximum entries must be at least 1".to_string(),
                ));
            }
        }

        CompetitionRepository::create(
            pool,
            &title,
            description,
            &caller.id,
            entry_fee_cents,
            currency,
            max_entries,
            starts_at,
            ends_at,
        )
        .await
    }

    /// Get a competition, applying draft visibility
    pub async fn get_competition(
        pool: &PgPool,
        id: &Uuid,
        viewer: Option<&AuthenticatedUser>,
    ) -> AppResult<Competition> {
        let competition = CompetitionRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        let viewer_id = viewer.map(|v| v.id);
        let is_admin = viewer.map(|v| v.is_admin()).unwrap_or(false);

        // Hidden drafts 404 rather than 403 so their existence leaks nothing
        if !competition.is_visible_to(viewer_id, is_admin) {
            return Err(AppError::NotFound("Competition not found".to_string()));
        }

        Ok(competition)
    }

    /// List competitions visible to the viewer
    #[allow(clippy::too_many_arguments)]
    pub async fn list_competitions(
        pool: &PgPool,
        viewer: Option<&AuthenticatedUser>,
        offset: i64,
        limit: i64,
        status: Option<CompetitionStatus>,
        organizer_id: Option<&Uuid>,
        search: Option<&str>,
    ) -> AppResult<(Vec<Competition>, i64)> {
        let viewer_id = viewer.map(|v| v.id);
        let is_admin = viewer.map(|v| v.is_admin()).unwrap_or(false);

        CompetitionRepository::list(
            pool,
            offset,
            limit,
            status,
            organizer_id,
            search,
            viewer_id.as_ref(),
            is_admin,
        )
        .await
    }

    /// Update a draft competition
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        caller: &AuthenticatedUser,
        id: &Uuid,
        title: Option<&str>,
        description: Option<&str>,
        entry_fee_cents: Option<i64>,
        max_entries: Option<i32>,
        starts_at: Option<DateTime<Utc>>,
        ends_at: Option<DateTime<Utc>>,
    ) -> AppResult<Competition> {
        let competition = Self::get_competition(pool, id, Some(caller)).await?;
        Self::require_manage(caller, &competition)?;

        // Published terms are a contract with entrants; edits stop at publish
        if competition.status != CompetitionStatus::Draft {
            return Err(AppError::Conflict(
                "Only draft competitions can be edited".to_string(),
            ));
        }

        let title = match title {
            Some(t) => Some(
                validation::validate_competition_title(t)
                    .map_err(|e| AppError::Validation(e.to_string()))?,
            ),
            None => None,
        };

        if let Some(fee) = entry_fee_cents {
            validation::validate_entry_fee(fee)
                .map_err(|e| AppError::Validation(e.to_string()))?;
        }

        let effective_start = starts_at.unwrap_or(competition.starts_at);
        let effective_end = ends_at.unwrap_or(competition.ends_at);
        Self::validate_window(effective_start, effective_end)?;

        CompetitionRepository::update(
            pool,
            id,
            title.as_deref(),
            description,
            entry_fee_cents,
            max_entries,
            starts_at,
            ends_at,
        )
        .await
    }

    /// Publish a draft competition (draft -> open)
    pub async fn publish(
        pool: &PgPool,
        caller: &AuthenticatedUser,
        id: &Uuid,
    ) -> AppResult<Competition> {
        let competition = Self::get_competition(pool, id, Some(caller)).await?;
        Self::require_manage(caller, &competition)?;

        if time::is_past(competition.ends_at) {
            return Err(AppError::Validation(
                "Cannot publish a competition whose submission window has ended".to_string(),
            ));
        }

        Self::transition(pool, &competition, CompetitionStatus::Open).await
    }

    /// Close an open competition (open -> closed)
    pub async fn close(
        pool: &PgPool,
        caller: &AuthenticatedUser,
        id: &Uuid,
    ) -> AppResult<Competition> {
        let competition = Self::get_competition(pool, id, Some(caller)).await?;
        Self::require_manage(caller, &competition)?;

        Self::transition(pool, &competition, CompetitionStatus::Closed).await
    }

    /// Complete a closed competition (closed -> completed)
    pub async fn complete(
        pool: &PgPool,
        caller: &AuthenticatedUser,
        id: &Uuid,
    ) -> AppResult<Competition> {
        let competition = Self::get_competition(pool, id, Some(caller)).await?;
        Self::require_manage(caller, &competition)?;

        Self::transition(pool, &competition, CompetitionStatus::Completed).await
    }

    /// Delete a draft competition
    pub async fn delete(pool: &PgPool, caller: &AuthenticatedUser, id: &Uuid) -> AppResult<()> {
        let competition = Self::get_competition(pool, id, Some(caller)).await?;
        Self::require_manage(caller, &competition)?;

        if competition.status != CompetitionStatus::Draft {
            return Err(AppError::Conflict(
                "Only draft competitions can be deleted".to_string(),
            ));
        }

        CompetitionRepository::delete(pool, id).await
    }

    /// Check that the caller owns or administers the competition
    fn require_manage(caller: &AuthenticatedUser, competition: &Competition) -> AppResult<()> {
        if caller.is_admin() || caller.id == competition.organizer_id {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "Not the organizer of this competition".to_string(),
            ))
        }
    }

    async fn transition(
        pool: &PgPool,
        competition: &Competition,
        next: CompetitionStatus,
    ) -> AppResult<Competition> {
        if !competition.status.can_transition_to(next) {
            return Err(AppError::InvalidTransition(format!(
                "{} -> {}",
                competition.status, next
            )));
        }

        CompetitionRepository::update_status(pool, &competition.id, next).await
    }

    fn validate_window(starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> AppResult<()> {
        if ends_at <= starts_at {
            return Err(AppError::Validation(
                "Submission window must end after it starts".to_string(),
            ));
        }
        Ok(())
    }
}
