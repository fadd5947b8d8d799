//! Competition handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    middleware::auth::{AuthenticatedUser, OptionalAuth},
    models::CompetitionStatus,
    pagination::PaginatedResponse,
    services::CompetitionService,
    state::AppState,
};

use super::{
    request::{CreateCompetitionRequest, ListCompetitionsQuery, UpdateCompetitionRequest},
    response::CompetitionResponse,
};

/// List competitions (public; drafts visible to their organizer and admins)
pub async fn list_competitions(
    State(state): State<AppState>,
    OptionalAuth(viewer): OptionalAuth,
    Query(query): Query<ListCompetitionsQuery>,
) -> AppResult<Json<PaginatedResponse<CompetitionResponse>>> {
    let pagination = query.pagination();
    pagination.validate()?;

    let status = match query.status.as_deref() {
        Some(s) => Some(
            CompetitionStatus::from_str(s)
                .ok_or_else(|| AppError::Validation("Unknown competition status".to_string()))?,
        ),
        None => None,
    };

    let (competitions, total) = CompetitionService::list_competitions(
        state.db(),
        viewer.as_ref(),
        pagination.offset(),
        pagination.limit(),
        status,
        query.organizer_id.as_ref(),
        query.search.as_deref(),
    )
    .await?;

    let items = competitions
        .into_iter()
        .map(CompetitionResponse::from)
        .collect();
    Ok(Json(PaginatedResponse::from_query(
        (items, total),
        &pagination,
    )))
}

/// Create a new competition (organizers and admins)
pub async fn create_competition(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateCompetitionRequest>,
) -> AppResult<(StatusCode, Json<CompetitionResponse>)> {
    payload.validate()?;

    let currency = payload
        .currency
        .unwrap_or_else(|| state.config().payment.currency.clone());

    let competition = CompetitionService::create(
        state.db(),
        &auth_user,
        &payload.title,
        payload.description.as_deref(),
        payload.entry_fee_cents.unwrap_or(0),
        &currency,
        payload.max_entries,
        payload.starts_at,
        payload.ends_at,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(competition.into())))
}

/// Get a specific competition
pub async fn get_competition(
    State(state): State<AppState>,
    OptionalAuth(viewer): OptionalAuth,
    Path(id): Path<Uuid>,
) -> AppResult<Json<CompetitionResponse>> {
    let competition =
        CompetitionService::get_competition(state.db(), &id, viewer.as_ref()).await?;
    Ok(Json(competition.into()))
}

/// Update a draft competition
pub async fn update_competition(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCompetitionRequest>,
) -> AppResult<Json<CompetitionResponse>> {
    payload.validate()?;

    let competition = CompetitionService::update(
        state.db(),
        &auth_user,
        &id,
        payload.title.as_deref(),
        payload.description.as_deref(),
        payload.entry_fee_cents,
        payload.max_entries,
        payload.starts_at,
        payload.ends_at,
    )
    .await?;

    Ok(Json(competition.into()))
}

/// Delete a draft competition
pub async fn delete_competition(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    CompetitionService::delete(state.db(), &auth_user, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Publish a draft competition
pub async fn publish_competition(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<CompetitionResponse>> {
    let competition = CompetitionService::publish(state.db(), &auth_user, &id).await?;
    Ok(Json(competition.into()))
}

/// Close an open competition
pub async fn close_competition(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<CompetitionResponse>> {
    let competition = CompetitionService::close(state.db(), &auth_user, &id).await?;
    Ok(Json(competition.into()))
}

/// Complete a closed competition
pub async fn complete_competition(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<CompetitionResponse>> {
    let competition = CompetitionService::complete(state.db(), &auth_user, &id).await?;
    Ok(Json(competition.into()))
}
