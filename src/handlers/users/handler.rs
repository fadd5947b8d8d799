//! User handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    models::UserStatus,
    pagination::PaginatedResponse,
    services::UserService,
    state::AppState,
};

use super::{
    request::{ListUsersQuery, SuspendUserRequest, UpdateRoleRequest, UpdateUserRequest},
    response::{UserDetailResponse, UserProfileResponse},
};

/// List users (admin only)
pub async fn list_users(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<Json<PaginatedResponse<UserDetailResponse>>> {
    let pagination = query.pagination();
    pagination.validate()?;

    let status = match query.status.as_deref() {
        Some(s) => Some(
            UserStatus::from_str(s)
                .ok_or_else(|| AppError::Validation("Unknown user status".to_string()))?,
        ),
        None => None,
    };

    let (users, total) = UserService::list_users(
        state.db(),
        &auth_user,
        pagination.offset(),
        pagination.limit(),
        query.search.as_deref(),
        query.role.as_deref(),
        status,
    )
    .await?;

    let items = users.into_iter().map(UserDetailResponse::from).collect();
    Ok(Json(PaginatedResponse::from_query(
        (items, total),
        &pagination,
    )))
}

/// Get a user's public profile
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserProfileResponse>> {
    let user = UserService::get_user(state.db(), &id).await?;
    Ok(Json(user.into()))
}

/// Update a user profile (self or admin)
pub async fn update_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> AppResult<Json<UserDetailResponse>> {
    payload.validate()?;

    let user = UserService::update_user(
        state.db(),
        &auth_user,
        &id,
        payload.display_name.as_deref(),
        payload.email.as_deref(),
        payload.current_password.as_deref(),
        payload.new_password.as_deref(),
    )
    .await?;

    Ok(Json(user.into()))
}

/// Change a user's role (admin only)
pub async fn update_role(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRoleRequest>,
) -> AppResult<Json<UserDetailResponse>> {
    let user = UserService::update_role(state.db(), &auth_user, &id, &payload.role).await?;
    Ok(Json(user.into()))
}

/// Suspend a user (admin only)
pub async fn suspend_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<SuspendUserRequest>,
) -> AppResult<Json<UserDetailResponse>> {
    payload.validate()?;

    let user = UserService::suspend_user(
        state.db(),
        &auth_user,
        &id,
        payload.reason.as_deref(),
        payload.until,
    )
    .await?;

    Ok(Json(user.into()))
}

/// Reinstate a suspended user (admin only)
pub async fn reinstate_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserDetailResponse>> {
    let user = UserService::reinstate_user(state.db(), &auth_user, &id).await?;
    Ok(Json(user.into()))
}

/// Soft-delete an account (self or admin)
pub async fn delete_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    UserService::delete_user(state.db(), &auth_user, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
