//! Order handlers: checkout, listing, and detail.

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
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{CartLine, Order, OrderDetail, OrderSummary};
use crate::errors::AppResult;
use crate::services::NewOrder;

/// Checkout request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    /// Cart lines; malformed lines are dropped server-side
    #[validate(length(min = 1, message = "Keranjang tidak boleh kosong"))]
    pub items: Vec<CartLine>,
    /// Target outlet, if chosen
    pub outlet_id: Option<i64>,
    /// Pickup address from the user's address book
    pub address_id: Option<i64>,
    /// Requested pickup slot, free-form
    #[schema(example = "2026-09-01 09:00-11:00")]
    pub pickup_slot: Option<String>,
    /// Delivery fee in rupiah, defaults to 0
    pub delivery_fee: Option<i64>,
    /// Tax rate override, defaults to 0.1
    pub tax_rate: Option<f64>,
}

/// Create order routes (all require authentication)
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_order).get(list_orders))
        .route("/:id", get(get_order))
}

/// Create an order from the cart
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Orders",
    request_body = CreateOrderRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Order created", body = OrderSummary),
        (status = 400, description = "Empty cart or no valid items"),
        (status = 401, description = "Authentication required")
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<CreateOrderRequest>,
) -> AppResult<(StatusCode, Json<OrderSummary>)> {
    let summary = state
        .services
        .orders
        .create_order(
            user.id,
            NewOrder {
                lines: payload.items,
                outlet_id: payload.outlet_id,
                address_id: payload.address_id,
                pickup_slot: payload.pickup_slot,
                delivery_fee: payload.delivery_fee,
                tax_rate: payload.tax_rate,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(summary)))
}

/// List the caller's orders
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Orders",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The caller's orders, newest first", body = [Order]),
        (status = 401, description = "Authentication required")
    )
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = state.services.orders.list_orders(user.id).await?;
    Ok(Json(orders))
}

/// Get one of the caller's orders with its lines
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "Orders",
    params(("id" = i64, Path, description = "Order id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Order detail", body = OrderDetail),
        (status = 404, description = "Order not found or not owned by caller")
    )
)]
pub async fn get_order(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<OrderDetail>> {
    let detail = state.services.orders.get_order(user.id, id).await?;
    Ok(Json(detail))
}
