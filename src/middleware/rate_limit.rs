//! Rate limiting middleware
//!
//! Fixed-window counters in Redis, keyed by client IP and a coarse
//! path bucket. Auth and payment endpoints get tighter limits than
//! general browsing.

use axum::{
    body::Body,
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use redis::AsyncCommands;
use std::net::SocketAddr;
use tracing::warn;

use crate::{constants::rate_limits, error::AppError, state::AppState};

/// Rate limit middleware
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let ip = addr.ip().to_string();
    let path = request.uri().path();

    let (limit, window) = get_rate_limit(path);
    let key = format!("rate_limit:{}:{}", ip, path_bucket(path));
    let mut redis = state.redis();

    // Redis being down degrades to letting traffic through rather than
    // rejecting everything.
    let count: i64 = redis.incr(&key, 1).await.unwrap_or(0);

    if count == 1 {
        let _: () = redis.expire(&key, window).await.unwrap_or(());
    }

    if count > limit {
        warn!(ip = %ip, bucket = %path_bucket(path), count = count, "Rate limit exceeded");
        return Err(AppError::TooManyRequests);
    }

    Ok(next.run(request).await)
}

/// Get rate limit for a path
fn get_rate_limit(path: &str) -> (i64, i64) {
    if path.starts_with("/api/v1/auth") {
        (rate_limits::AUTH_MAX_REQUESTS, rate_limits::AUTH_WINDOW_SECS)
    } else if path.starts_with("/api/v1/submissions") {
        (
            rate_limits::SUBMISSION_MAX_REQUESTS,
            rate_limits::SUBMISSION_WINDOW_SECS,
        )
    } else if path.starts_with("/api/v1/payments") {
        (
            rate_limits::PAYMENT_MAX_REQUESTS,
            rate_limits::PAYMENT_WINDOW_SECS,
        )
    } else {
        (
            rate_limits::GENERAL_MAX_REQUESTS,
            rate_limits::GENERAL_WINDOW_SECS,
        )
    }
}

/// Get bucket for path (for grouping similar endpoints)
fn path_bucket(path: &str) -> &str {
    if path.starts_with("/api/v1/auth") {
        "auth"
    } else if path.starts_with("/api/v1/submissions") {
        "submissions"
    } else if path.starts_with("/api/v1/payments") {
        "payments"
    } else if path.starts_with("/api/v1/competitions") {
        "competitions"
    } else if path.starts_with("/api/v1/users") {
        "users"
    } else {
        "general"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_buckets() {
        assert_eq!(path_bucket("/api/v1/auth/login"), "auth");
        assert_eq!(path_bucket("/api/v1/submissions"), "submissions");
        assert_eq!(path_bucket("/api/v1/payments/webhook"), "payments");
        assert_eq!(path_bucket("/api/v1/competitions/abc"), "competitions");
        assert_eq!(path_bucket("/health"), "general");
    }

    #[test]
    fn test_sensitive_paths_get_tighter_limits() {
        let (auth_limit, _) = get_rate_limit("/api/v1/auth/login");
        let (payment_limit, _) = get_rate_limit("/api/v1/payments");
        let (general_limit, _) = get_rate_limit("/api/v1/competitions");

        assert!(auth_limit < general_limit);
        assert!(payment_limit < general_limit);
    }
}
