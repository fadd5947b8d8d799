//! HTTP request handlers organized by domain

pub mod auth;
pub mod competitions;
pub mod health;
pub mod payments;
pub mod submissions;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/auth", auth::routes(state.clone()))
        .nest("/users", users::routes(state.clone()))
        .nest("/competitions", competitions::routes(state.clone()))
        .nest("/submissions", submissions::routes(state.clone()))
        .nest("/payments", payments::routes(state))
}
