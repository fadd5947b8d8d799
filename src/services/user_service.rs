//! User service

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    middleware::AuthenticatedUser,
    models::{User, UserStatus},
    services::AuthService,
    utils::{time, validation},
};

/// User service for business logic
pub struct UserService;

impl UserService {
    /// Get user by ID.
    ///
    /// Soft-deleted accounts are gone as far as callers are concerned.
    pub async fn get_user(pool: &PgPool, id: &Uuid) -> AppResult<User> {
        let user = UserRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if user.is_deleted() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(user)
    }

    /// List users with pagination (admin only)
    pub async fn list_users(
        pool: &PgPool,
        caller: &AuthenticatedUser,
        offset: i64,
        limit: i64,
        search: Option<&str>,
        role: Option<&str>,
        status: Option<UserStatus>,
    ) -> AppResult<(Vec<User>, i64)> {
        caller.require_admin()?;

        if let Some(role) = role {
            validation::validate_role(role).map_err(|e| AppError::Validation(e.to_string()))?;
        }

        UserRepository::list(pool, offset, limit, search, role, status).await
    }

    /// Update user profile
    #[allow(clippy::too_many_arguments)]
    pub async fn update_user(
        pool: &PgPool,
        caller: &AuthenticatedUser,
        target_id: &Uuid,
        display_name: Option<&str>,
        email: Option<&str>,
        current_password: Option<&str>,
        new_password: Option<&str>,
    ) -> AppResult<User> {
        if &caller.id != target_id && !caller.is_admin() {
            return Err(AppError::Forbidden(
                "Cannot update other users' profiles".to_string(),
            ));
        }

        let target = Self::get_user(pool, target_id).await?;

        if let Some(email) = email {
            validation::validate_email(email).map_err(|e| AppError::Validation(e.to_string()))?;
        }

        // Changing the password requires proving the current one, admins
        // included.
        let password_hash = if let Some(new_pwd) = new_password {
            validation::validate_password(new_pwd)
                .map_err(|e| AppError::Validation(e.to_string()))?;

            let current_pwd = current_password
                .ok_or_else(|| AppError::Validation("Current password required".to_string()))?;

            if !AuthService::verify_password(current_pwd, &target.password_hash)? {
                return Err(AppError::InvalidCredentials);
            }

            Some(AuthService::hash_password(new_pwd)?)
        } else {
            None
        };

        UserRepository::update(
            pool,
            target_id,
            email,
            display_name,
            password_hash.as_deref(),
        )
        .await
    }

    /// Change a user's role (admin only)
    pub async fn update_role(
        pool: &PgPool,
        caller: &AuthenticatedUser,
        target_id: &Uuid,
        role: &str,
    ) -> AppResult<User> {
        caller.require_admin()?;
        validation::validate_role(role).map_err(|e| AppError::Validation(e.to_string()))?;

        if &caller.id == target_id {
            return Err(AppError::Conflict("Cannot change your own role".to_string()));
        }

        Self::get_user(pool, target_id).await?;
        UserRepository::update_role(pool, target_id, role).await
    }

    /// Suspend a user, optionally until a deadline (admin only)
    pub async fn suspend_user(
        pool: &PgPool,
        caller: &AuthenticatedUser,
        target_id: &Uuid,
        reason: Option<&str>,
        until: Option<DateTime<Utc>>,
    ) -> AppResult<User> {
        caller.require_admin()?;

        if &caller.id == target_id {
            return Err(AppError::Conflict("Cannot suspend your own account".to_string()));
        }

        let target = Self::get_user(pool, target_id).await?;
        if target.status == UserStatus::Suspended {
            return Err(AppError::Conflict("User is already suspended".to_string()));
        }

        let reason = validation::validate_reason(reason)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if let Some(until) = until {
            if !time::is_future(until) {
                return Err(AppError::Validation(
                    "Suspension deadline must be in the future".to_string(),
                ));
            }
        }

        UserRepository::suspend(pool, target_id, reason.as_deref(), until).await
    }

    /// Reinstate a suspended user (admin only)
    pub async fn reinstate_user(
        pool: &PgPool,
        caller: &AuthenticatedUser,
        target_id: &Uuid,
    ) -> AppResult<User> {
        caller.require_admin()?;

        let target = Self::get_user(pool, target_id).await?;
        if target.status != UserStatus::Suspended {
            return Err(AppError::Conflict("User is not suspended".to_string()));
        }

        UserRepository::reinstate(pool, target_id).await
    }

    /// Soft-delete an account (self or admin)
    pub async fn delete_user(
        pool: &PgPool,
        caller: &AuthenticatedUser,
        target_id: &Uuid,
    ) -> AppResult<()> {
        if &caller.id != target_id && !caller.is_admin() {
            return Err(AppError::Forbidden(
                "Cannot delete other users' accounts".to_string(),
            ));
        }

        Self::get_user(pool, target_id).await?;
        UserRepository::soft_delete(pool, target_id).await
    }
}
