//! Order status timeline handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{require_admin, CurrentUser};
use crate::api::AppState;
use crate::domain::StatusLogEntry;
use crate::errors::AppResult;

/// Status push request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PushStatusRequest {
    /// One of the tracking stages
    #[validate(length(min = 1, message = "Status wajib diisi"))]
    #[schema(example = "washing")]
    pub status: String,
    /// Optional note shown on the customer timeline
    #[schema(example = "Cucian sedang diproses")]
    pub note: Option<String>,
}

/// Create status routes (all require authentication)
pub fn status_routes() -> Router<AppState> {
    Router::new()
        .route("/:id", get(get_timeline).post(push_status))
        .route("/:id/complete", post(complete_order))
}

/// Read an order's status timeline
///
/// Customers see their own orders; admins can read any order.
#[utoipa::path(
    get,
    path = "/api/status/{id}",
    tag = "Status",
    params(("id" = i64, Path, description = "Order id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Timeline entries, oldest first", body = [StatusLogEntry]),
        (status = 404, description = "Order not found or not owned by caller")
    )
)]
pub async fn get_timeline(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<StatusLogEntry>>> {
    let timeline = if user.is_admin() {
        state.services.statuses.timeline_any(id).await?
    } else {
        state.services.statuses.timeline(user.id, id).await?
    };

    Ok(Json(timeline))
}

/// Push a tracking stage onto an order's timeline (admin)
#[utoipa::path(
    post,
    path = "/api/status/{id}",
    tag = "Status",
    params(("id" = i64, Path, description = "Order id")),
    request_body = PushStatusRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Stage appended", body = StatusLogEntry),
        (status = 400, description = "Status outside the tracking allow-list"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn push_status(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<PushStatusRequest>,
) -> AppResult<(StatusCode, Json<StatusLogEntry>)> {
    require_admin(&user)?;

    let entry = state
        .services
        .statuses
        .push_status(user.id, id, payload.status, payload.note)
        .await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Mark an order completed (admin), enabling review
#[utoipa::path(
    post,
    path = "/api/status/{id}/complete",
    tag = "Status",
    params(("id" = i64, Path, description = "Order id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Order completed", body = StatusLogEntry),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn complete_order(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<(StatusCode, Json<StatusLogEntry>)> {
    require_admin(&user)?;

    let entry = state.services.statuses.complete_order(user.id, id).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}
