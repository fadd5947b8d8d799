//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Hard cap on request handling time in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Default refresh token expiry in days
pub const DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Username minimum length
pub const MIN_USERNAME_LENGTH: u64 = 3;

/// Username maximum length
pub const MAX_USERNAME_LENGTH: u64 = 32;

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const ORGANIZER: &str = "organizer";
    pub const PARTICIPANT: &str = "participant";

    /// All user roles
    pub const ALL: &[&str] = &[ADMIN, ORGANIZER, PARTICIPANT];
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page number for paginated results
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: u32 = 100;

// =============================================================================
// PAYMENTS
// =============================================================================

/// Default settlement currency (ISO 4217)
pub const DEFAULT_PAYMENT_CURRENCY: &str = "USD";

/// Length of the random part of a receipt reference
pub const RECEIPT_REFERENCE_LENGTH: usize = 12;

/// Header carrying the payment provider webhook secret
pub const WEBHOOK_SECRET_HEADER: &str = "x-webhook-secret";

// =============================================================================
// RATE LIMITING
// =============================================================================

/// Rate limiting configuration
pub mod rate_limits {
    /// Auth endpoint - max requests
    pub const AUTH_MAX_REQUESTS: i64 = 5;
    /// Auth endpoint - window in seconds
    pub const AUTH_WINDOW_SECS: i64 = 60;

    /// Submission endpoint - max requests
    pub const SUBMISSION_MAX_REQUESTS: i64 = 10;
    /// Submission endpoint - window in seconds
    pub const SUBMISSION_WINDOW_SECS: i64 = 60;

    /// Payment endpoint - max requests
    pub const PAYMENT_MAX_REQUESTS: i64 = 10;
    /// Payment endpoint - window in seconds
    pub const PAYMENT_WINDOW_SECS: i64 = 60;

    /// General API - max requests
    pub const GENERAL_MAX_REQUESTS: i64 = 100;
    /// General API - window in seconds
    pub const GENERAL_WINDOW_SECS: i64 = 60;
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum competition title length
pub const MAX_COMPETITION_TITLE_LENGTH: u64 = 256;

/// Maximum competition description length
pub const MAX_COMPETITION_DESCRIPTION_LENGTH: u64 = 65535;

/// Maximum submission title length
pub const MAX_SUBMISSION_TITLE_LENGTH: u64 = 256;

/// Maximum submission content size in bytes (1 MB)
pub const MAX_SUBMISSION_CONTENT_LENGTH: u64 = 1024 * 1024;

/// Maximum length of a free-text reason (rejection, suspension)
pub const MAX_REASON_LENGTH: u64 = 1024;

/// Maximum display name length
pub const MAX_DISPLAY_NAME_LENGTH: u64 = 100;

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";
