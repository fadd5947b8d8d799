//! User request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::constants::{
    MAX_DISPLAY_NAME_LENGTH, MAX_PASSWORD_LENGTH, MAX_REASON_LENGTH, MIN_PASSWORD_LENGTH,
};
use crate::pagination::PaginationQuery;

/// Update user profile request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(max = MAX_DISPLAY_NAME_LENGTH))]
    pub display_name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    pub current_password: Option<String>,

    #[validate(length(min = MIN_PASSWORD_LENGTH, max = MAX_PASSWORD_LENGTH))]
    pub new_password: Option<String>,
}

/// Change user role request (admin)
#[derive(Debug, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: String,
}

/// Suspend user request (admin)
#[derive(Debug, Deserialize, Validate)]
pub struct SuspendUserRequest {
    #[validate(length(max = MAX_REASON_LENGTH))]
    pub reason: Option<String>,

    /// Absent means the suspension is indefinite
    pub until: Option<DateTime<Utc>>,
}

/// List users query parameters (admin)
#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub search: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
}

impl ListUsersQuery {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery {
            page: self.page,
            page_size: self.page_size,
        }
    }
}
