//! Review handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::post,
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::Review;
use crate::errors::AppResult;
use crate::types::Created;

/// Review creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReviewRequest {
    /// Completed order being reviewed
    pub order_id: i64,
    /// Rating from 1 to 5
    #[validate(range(min = 1, max = 5, message = "Rating harus antara 1 sampai 5"))]
    #[schema(example = 5, minimum = 1, maximum = 5)]
    pub rating: i32,
    #[schema(example = "Cucian wangi dan rapi")]
    pub comment: Option<String>,
}

/// Review reply request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ReplyRequest {
    #[validate(length(min = 1, message = "Balasan wajib diisi"))]
    #[schema(example = "Terima kasih atas ulasannya!")]
    pub reply: String,
}

/// Create review routes (all require authentication)
pub fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_review))
        .route("/:id/reply", post(reply_review))
}

/// Review a completed order
#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = "Reviews",
    request_body = CreateReviewRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Review created", body = Review),
        (status = 400, description = "Order not completed, already reviewed, or invalid rating"),
        (status = 404, description = "Order not found or not owned by caller")
    )
)]
pub async fn create_review(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<CreateReviewRequest>,
) -> AppResult<Created<Review>> {
    let review = state
        .services
        .reviews
        .create_review(user.id, payload.order_id, payload.rating, payload.comment)
        .await?;

    Ok(Created(review))
}

/// Reply to a review (outlet partner or admin)
#[utoipa::path(
    post,
    path = "/api/reviews/{id}/reply",
    tag = "Reviews",
    params(("id" = i64, Path, description = "Review id")),
    request_body = ReplyRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Reply saved", body = Review),
        (status = 403, description = "Caller does not manage the reviewed outlet"),
        (status = 404, description = "Review not found")
    )
)]
pub async fn reply_review(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<ReplyRequest>,
) -> AppResult<Json<Review>> {
    let review = state
        .services
        .reviews
        .reply(user.id, user.role.clone(), id, payload.reply)
        .await?;

    Ok(Json(review))
}
