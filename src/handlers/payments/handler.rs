//! Payment handler implementations

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::WEBHOOK_SECRET_HEADER,
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    models::PaymentStatus,
    pagination::PaginatedResponse,
    services::PaymentService,
    state::AppState,
    utils::crypto,
};

use super::{
    request::{InitiatePaymentRequest, ListPaymentsQuery, WebhookRequest},
    response::PaymentResponse,
};

/// Start an entry-fee payment
pub async fn initiate_payment(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<InitiatePaymentRequest>,
) -> AppResult<(StatusCode, Json<PaymentResponse>)> {
    payload.validate()?;

    let payment =
        PaymentService::initiate(state.db(), &auth_user, &payload.competition_id).await?;

    Ok((StatusCode::CREATED, Json(payment.into())))
}

/// Apply a payment provider webhook event.
///
/// Unauthenticated route; the shared secret header stands in for a
/// token. A missing or wrong secret is rejected before the payload is
/// looked at.
pub async fn payment_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<WebhookRequest>,
) -> AppResult<Json<PaymentResponse>> {
    let provided = headers
        .get(WEBHOOK_SECRET_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    if !crypto::secrets_match(provided, &state.config().payment.webhook_secret) {
        return Err(AppError::Unauthorized);
    }

    payload.validate()?;

    let status = PaymentStatus::from_str(&payload.status)
        .ok_or_else(|| AppError::InvalidInput("Unknown payment status".to_string()))?;

    let payment =
        PaymentService::apply_webhook_event(state.db(), &payload.receipt_reference, status)
            .await?;

    Ok(Json(payment.into()))
}

/// List payments (own payments unless admin)
pub async fn list_payments(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ListPaymentsQuery>,
) -> AppResult<Json<PaginatedResponse<PaymentResponse>>> {
    let pagination = query.pagination();
    pagination.validate()?;

    let status = match query.status.as_deref() {
        Some(s) => Some(
            PaymentStatus::from_str(s)
                .ok_or_else(|| AppError::Validation("Unknown payment status".to_string()))?,
        ),
        None => None,
    };

    let (payments, total) = PaymentService::list_payments(
        state.db(),
        &auth_user,
        pagination.offset(),
        pagination.limit(),
        query.user_id.as_ref(),
        query.competition_id.as_ref(),
        status,
    )
    .await?;

    let items = payments.into_iter().map(PaymentResponse::from).collect();
    Ok(Json(PaginatedResponse::from_query(
        (items, total),
        &pagination,
    )))
}

/// Get a specific payment (owner or admin)
pub async fn get_payment(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<PaymentResponse>> {
    let payment = PaymentService::get_payment(state.db(), &auth_user, &id).await?;
    Ok(Json(payment.into()))
}

/// Refund a settled payment (admin only)
pub async fn refund_payment(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<PaymentResponse>> {
    let payment = PaymentService::refund(state.db(), &auth_user, &id).await?;
    Ok(Json(payment.into()))
}
