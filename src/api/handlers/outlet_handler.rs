//! Outlet directory and catalog handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post, put},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{ItemKind, Outlet, OutletDetail, OutletItem, Review};
use crate::errors::{AppError, AppResult};
use crate::infra::OutletItemInput;
use crate::types::{Created, NoContent};

/// Catalog item create/update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct OutletItemRequest {
    #[validate(length(min = 1, message = "Nama item wajib diisi"))]
    #[schema(example = "Cuci Kering")]
    pub name: String,
    /// "Layanan" or "Produk"
    #[serde(rename = "type")]
    #[schema(example = "Layanan")]
    pub kind: String,
    /// Price in rupiah
    #[validate(range(min = 0, message = "Harga tidak boleh negatif"))]
    #[schema(example = 6000)]
    pub price: i64,
    #[schema(example = "kg")]
    pub unit: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl OutletItemRequest {
    fn into_input(self) -> AppResult<OutletItemInput> {
        let kind = ItemKind::parse(&self.kind)
            .ok_or_else(|| AppError::validation("Jenis item harus 'Layanan' atau 'Produk'"))?;

        Ok(OutletItemInput {
            name: self.name,
            kind,
            price: self.price,
            unit: self.unit,
            is_active: self.is_active,
        })
    }
}

/// Public outlet routes
pub fn outlet_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_outlets))
        .route("/:id", get(get_outlet))
        .route("/:id/reviews", get(list_outlet_reviews))
}

/// Catalog management routes (require authentication)
pub fn outlet_item_routes() -> Router<AppState> {
    Router::new()
        .route("/:id/items", post(create_item))
        .route("/:id/items/:item_id", put(update_item).delete(delete_item))
}

/// List active outlets
#[utoipa::path(
    get,
    path = "/api/outlets",
    tag = "Outlets",
    responses((status = 200, description = "Active outlets", body = [Outlet]))
)]
pub async fn list_outlets(State(state): State<AppState>) -> AppResult<Json<Vec<Outlet>>> {
    let outlets = state.services.outlets.list_outlets().await?;
    Ok(Json(outlets))
}

/// Get outlet detail with its catalog
///
/// Outlets without their own items show the global catalog;
/// `catalog_source` says which one was used.
#[utoipa::path(
    get,
    path = "/api/outlets/{id}",
    tag = "Outlets",
    params(("id" = i64, Path, description = "Outlet id")),
    responses(
        (status = 200, description = "Outlet with resolved catalog", body = OutletDetail),
        (status = 404, description = "Outlet not found")
    )
)]
pub async fn get_outlet(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<OutletDetail>> {
    let detail = state.services.outlets.outlet_detail(id).await?;
    Ok(Json(detail))
}

/// List an outlet's reviews
#[utoipa::path(
    get,
    path = "/api/outlets/{id}/reviews",
    tag = "Outlets",
    params(("id" = i64, Path, description = "Outlet id")),
    responses((status = 200, description = "Reviews, newest first", body = [Review]))
)]
pub async fn list_outlet_reviews(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<Review>>> {
    let reviews = state.services.reviews.list_for_outlet(id).await?;
    Ok(Json(reviews))
}

/// Add a catalog item (partner or admin)
#[utoipa::path(
    post,
    path = "/api/outlets/{id}/items",
    tag = "Outlets",
    params(("id" = i64, Path, description = "Outlet id")),
    request_body = OutletItemRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Item created", body = OutletItem),
        (status = 403, description = "Caller does not manage this outlet")
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<OutletItemRequest>,
) -> AppResult<Created<OutletItem>> {
    let item = state
        .services
        .outlets
        .create_item(user.id, user.role.clone(), id, payload.into_input()?)
        .await?;

    Ok(Created(item))
}

/// Update a catalog item (partner or admin)
#[utoipa::path(
    put,
    path = "/api/outlets/{id}/items/{item_id}",
    tag = "Outlets",
    params(
        ("id" = i64, Path, description = "Outlet id"),
        ("item_id" = i64, Path, description = "Item id")
    ),
    request_body = OutletItemRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Item updated", body = OutletItem),
        (status = 403, description = "Caller does not manage this outlet"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path((id, item_id)): Path<(i64, i64)>,
    ValidatedJson(payload): ValidatedJson<OutletItemRequest>,
) -> AppResult<Json<OutletItem>> {
    let item = state
        .services
        .outlets
        .update_item(user.id, user.role.clone(), id, item_id, payload.into_input()?)
        .await?;

    Ok(Json(item))
}

/// Delete a catalog item (partner or admin)
#[utoipa::path(
    delete,
    path = "/api/outlets/{id}/items/{item_id}",
    tag = "Outlets",
    params(
        ("id" = i64, Path, description = "Outlet id"),
        ("item_id" = i64, Path, description = "Item id")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 403, description = "Caller does not manage this outlet"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path((id, item_id)): Path<(i64, i64)>,
) -> AppResult<NoContent> {
    state
        .services
        .outlets
        .delete_item(user.id, user.role.clone(), id, item_id)
        .await?;

    Ok(NoContent)
}
