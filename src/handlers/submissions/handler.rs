//! Submission handler implementations

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
    models::SubmissionStatus,
    pagination::PaginatedResponse,
    services::SubmissionService,
    state::AppState,
};

use super::{
    request::{CreateSubmissionRequest, ListSubmissionsQuery, RejectSubmissionRequest},
    response::SubmissionResponse,
};

/// List submissions (public; non-approved entries only for owner/staff)
pub async fn list_submissions(
    State(state): State<AppState>,
    OptionalAuth(viewer): OptionalAuth,
    Query(query): Query<ListSubmissionsQuery>,
) -> AppResult<Json<PaginatedResponse<SubmissionResponse>>> {
    let pagination = query.pagination();
    pagination.validate()?;

    let status = match query.status.as_deref() {
        Some(s) => Some(
            SubmissionStatus::from_str(s)
                .ok_or_else(|| AppError::Validation("Unknown submission status".to_string()))?,
        ),
        None => None,
    };

    let (submissions, total) = SubmissionService::list_submissions(
        state.db(),
        viewer.as_ref(),
        pagination.offset(),
        pagination.limit(),
        query.competition_id.as_ref(),
        query.user_id.as_ref(),
        status,
    )
    .await?;

    let items = submissions
        .into_iter()
        .map(SubmissionResponse::from)
        .collect();
    Ok(Json(PaginatedResponse::from_query(
        (items, total),
        &pagination,
    )))
}

/// Enter a competition
pub async fn create_submission(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateSubmissionRequest>,
) -> AppResult<(StatusCode, Json<SubmissionResponse>)> {
    payload.validate()?;

    let submission = SubmissionService::create(
        state.db(),
        &auth_user,
        &payload.competition_id,
        &payload.title,
        &payload.content,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(submission.into())))
}

/// Get a specific submission
pub async fn get_submission(
    State(state): State<AppState>,
    OptionalAuth(viewer): OptionalAuth,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SubmissionResponse>> {
    let submission = SubmissionService::get_submission(state.db(), &id, viewer.as_ref()).await?;
    Ok(Json(submission.into()))
}

/// Approve a pending submission (organizer or admin)
pub async fn approve_submission(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SubmissionResponse>> {
    let submission = SubmissionService::approve(state.db(), &auth_user, &id).await?;
    Ok(Json(submission.into()))
}

/// Reject a pending submission (organizer or admin)
pub async fn reject_submission(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<RejectSubmissionRequest>,
) -> AppResult<Json<SubmissionResponse>> {
    payload.validate()?;

    let submission =
        SubmissionService::reject(state.db(), &auth_user, &id, payload.reason.as_deref()).await?;

    Ok(Json(submission.into()))
}

/// Withdraw one's own pending submission
pub async fn withdraw_submission(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SubmissionResponse>> {
    let submission = SubmissionService::withdraw(state.db(), &auth_user, &id).await?;
    Ok(Json(submission.into()))
}
