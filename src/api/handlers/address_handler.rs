//! Pickup address handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::Address;
use crate::errors::AppResult;
use crate::infra::AddressInput;
use crate::types::{Created, NoContent};

/// Address create/update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddressRequest {
    /// Short label ("Rumah", "Kantor")
    #[validate(length(min = 1, message = "Label wajib diisi"))]
    #[schema(example = "Rumah")]
    pub label: String,
    #[validate(length(min = 1, message = "Nama penerima wajib diisi"))]
    #[schema(example = "Budi Santoso")]
    pub recipient_name: String,
    #[validate(length(min = 1, message = "Nomor telepon wajib diisi"))]
    #[schema(example = "081234567890")]
    pub phone: String,
    #[validate(length(min = 1, message = "Alamat wajib diisi"))]
    #[schema(example = "Jl. Melati No. 5, Bandung")]
    pub full_address: String,
    /// Courier note
    pub note: Option<String>,
    /// Make this the default pickup address
    #[serde(default)]
    pub is_default: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<AddressRequest> for AddressInput {
    fn from(req: AddressRequest) -> Self {
        Self {
            label: req.label,
            recipient_name: req.recipient_name,
            phone: req.phone,
            full_address: req.full_address,
            note: req.note,
            is_default: req.is_default,
            latitude: req.latitude,
            longitude: req.longitude,
        }
    }
}

/// Create address routes (all require authentication)
pub fn address_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_addresses).post(create_address))
        .route("/:id", axum::routing::put(update_address).delete(delete_address))
}

/// List the caller's addresses, default first
#[utoipa::path(
    get,
    path = "/api/addresses",
    tag = "Addresses",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "The caller's addresses", body = [Address]))
)]
pub async fn list_addresses(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<Address>>> {
    let addresses = state.services.addresses.list(user.id).await?;
    Ok(Json(addresses))
}

/// Create an address
#[utoipa::path(
    post,
    path = "/api/addresses",
    tag = "Addresses",
    request_body = AddressRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Address created", body = Address),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_address(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<AddressRequest>,
) -> AppResult<Created<Address>> {
    let address = state
        .services
        .addresses
        .create(user.id, payload.into())
        .await?;

    Ok(Created(address))
}

/// Update an address
#[utoipa::path(
    put,
    path = "/api/addresses/{id}",
    tag = "Addresses",
    params(("id" = i64, Path, description = "Address id")),
    request_body = AddressRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Address updated", body = Address),
        (status = 404, description = "Address not found or not owned by caller")
    )
)]
pub async fn update_address(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<AddressRequest>,
) -> AppResult<Json<Address>> {
    let address = state
        .services
        .addresses
        .update(user.id, id, payload.into())
        .await?;

    Ok(Json(address))
}

/// Delete an address
#[utoipa::path(
    delete,
    path = "/api/addresses/{id}",
    tag = "Addresses",
    params(("id" = i64, Path, description = "Address id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Address deleted"),
        (status = 404, description = "Address not found or not owned by caller")
    )
)]
pub async fn delete_address(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<NoContent> {
    state.services.addresses.delete(user.id, id).await?;
    Ok(NoContent)
}
