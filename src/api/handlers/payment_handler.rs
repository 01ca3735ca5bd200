//! Mock payment handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Extension, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{PaymentConfirmation, PaymentSession};
use crate::errors::AppResult;
use crate::types::ApiResponse;

/// Mock payment session request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePaymentRequest {
    /// Order to pay
    pub order_id: i64,
}

/// Payment confirmation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ConfirmPaymentRequest {
    /// Token issued when the session was created
    #[validate(length(min = 1, message = "Token transaksi wajib diisi"))]
    pub transaction_token: String,
    /// Payment method label, free-form
    #[schema(example = "qris")]
    pub payment_method: Option<String>,
}

/// Create payment routes (all require authentication)
pub fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/mock", post(create_mock_payment))
        .route("/mock/confirm", post(confirm_payment))
}

/// Create a mock payment session for an order
#[utoipa::path(
    post,
    path = "/api/payments/mock",
    tag = "Payments",
    request_body = CreatePaymentRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Payment session created", body = PaymentSession),
        (status = 404, description = "Order not found or not owned by caller")
    )
)]
pub async fn create_mock_payment(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<CreatePaymentRequest>,
) -> AppResult<(StatusCode, Json<PaymentSession>)> {
    let session = state
        .services
        .payments
        .create_session(user.id, payload.order_id)
        .await?;

    Ok((StatusCode::CREATED, Json(session)))
}

/// Confirm a mock payment
///
/// Confirming a token that is already paid returns 200 with the existing
/// invoice instead of an error.
#[utoipa::path(
    post,
    path = "/api/payments/mock/confirm",
    tag = "Payments",
    request_body = ConfirmPaymentRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Payment confirmed", body = PaymentConfirmation),
        (status = 404, description = "Payment or order not found")
    )
)]
pub async fn confirm_payment(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<ConfirmPaymentRequest>,
) -> AppResult<Json<ApiResponse<PaymentConfirmation>>> {
    let confirmation = state
        .services
        .payments
        .confirm(user.id, payload.transaction_token, payload.payment_method)
        .await?;

    let response = if confirmation.already_paid {
        ApiResponse::with_message(confirmation, "Pembayaran sudah dikonfirmasi")
    } else {
        ApiResponse::with_message(confirmation, "Pembayaran berhasil dikonfirmasi")
    };

    Ok(Json(response))
}
