//! Authentication middleware

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::{constants::roles, error::AppError, services::AuthService, state::AppState};

/// Authenticated user extracted from JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub username: String,
    pub role: String,
}

impl AuthenticatedUser {
    /// Check if the caller holds the admin role
    pub fn is_admin(&self) -> bool {
        self.role == roles::ADMIN
    }

    /// Check if the caller may create and manage competitions
    pub fn can_manage_competitions(&self) -> bool {
        matches!(self.role.as_str(), roles::ADMIN | roles::ORGANIZER)
    }

    /// Require the admin role, returning Forbidden otherwise
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::Forbidden("Admin access required".to_string()))
        }
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Optional authenticated user wrapper (never fails)
pub struct OptionalAuth(pub Option<AuthenticatedUser>);

impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuth(parts.extensions.get::<AuthenticatedUser>().cloned()))
    }
}

/// Extract the bearer token from the Authorization header
fn bearer_token(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Authentication middleware
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    let Some(token) = bearer_token(&request) else {
        debug!(path = %path, "Auth failed: missing or malformed Authorization header");
        return Err(AppError::Unauthorized);
    };

    let claims = AuthService::verify_token(token, &state.config().jwt.secret).map_err(|e| {
        debug!(path = %path, error = ?e, "Auth failed: token verification failed");
        e
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
        debug!(path = %path, sub = %claims.sub, "Auth failed: invalid user ID in token");
        AppError::InvalidToken
    })?;

    let user = AuthenticatedUser {
        id: user_id,
        username: claims.username,
        role: claims.role,
    };

    debug!(path = %path, user_id = %user.id, role = %user.role, "User authenticated");

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Optional authentication middleware (doesn't fail if no token)
pub async fn optional_auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    if let Some(token) = bearer_token(&request) {
        if let Ok(claims) = AuthService::verify_token(token, &state.config().jwt.secret) {
            if let Ok(user_id) = Uuid::parse_str(&claims.sub) {
                let user = AuthenticatedUser {
                    id: user_id,
                    username: claims.username,
                    role: claims.role,
                };
                request.extensions_mut().insert(user);
            }
        }
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_caller(role: &str) -> AuthenticatedUser {
        AuthenticatedUser {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn test_role_predicates() {
        assert!(sample_caller(roles::ADMIN).is_admin());
        assert!(!sample_caller(roles::ORGANIZER).is_admin());

        assert!(sample_caller(roles::ADMIN).can_manage_competitions());
        assert!(sample_caller(roles::ORGANIZER).can_manage_competitions());
        assert!(!sample_caller(roles::PARTICIPANT).can_manage_competitions());
    }

    #[test]
    fn test_require_admin() {
        assert!(sample_caller(roles::ADMIN).require_admin().is_ok());
        assert!(matches!(
            sample_caller(roles::PARTICIPANT).require_admin(),
            Err(AppError::Forbidden(_))
        ));
    }

    fn parts_with_user(user: Option<AuthenticatedUser>) -> Parts {
        let mut request = Request::builder().body(Body::empty()).unwrap();
        if let Some(user) = user {
            request.extensions_mut().insert(user);
        }
        request.into_parts().0
    }

    #[tokio::test]
    async fn test_extractor_returns_attached_user() {
        let caller = sample_caller(roles::PARTICIPANT);
        let mut parts = parts_with_user(Some(caller.clone()));

        let extracted = AuthenticatedUser::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(extracted.id, caller.id);
        assert_eq!(extracted.username, "alice");
    }

    #[tokio::test]
    async fn test_extractor_rejects_when_no_user_attached() {
        let mut parts = parts_with_user(None);

        let result = AuthenticatedUser::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_optional_extractor_never_fails() {
        let mut parts = parts_with_user(None);
        let OptionalAuth(missing) = OptionalAuth::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert!(missing.is_none());

        let caller = sample_caller(roles::ORGANIZER);
        let mut parts = parts_with_user(Some(caller.clone()));
        let OptionalAuth(present) = OptionalAuth::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(present.unwrap().id, caller.id);
    }
}
