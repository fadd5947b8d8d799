//! User management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// User routes (all require authentication)
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_users))
        .route("/{id}", get(handler::get_user))
        .route("/{id}", put(handler::update_user))
        .route("/{id}", delete(handler::delete_user))
        .route("/{id}/role", put(handler::update_role))
        .route("/{id}/suspend", post(handler::suspend_user))
        .route("/{id}/reinstate", post(handler::reinstate_user))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
