//! Partner application and admin decision handlers.

use axum::{
    extract::{Path, Query, State},
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
use crate::domain::{Order, PartnerProfile, PartnerStatus};
use crate::errors::{AppError, AppResult};
use crate::infra::{OutletInput, PartnerApplication};
use crate::types::Created;

/// Partner application request, including the outlet to be opened
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ApplyRequest {
    #[validate(length(min = 1, message = "Nama usaha wajib diisi"))]
    #[schema(example = "Laundry Melati")]
    pub business_name: String,
    pub bank_name: Option<String>,
    pub bank_account: Option<String>,
    #[validate(length(min = 1, message = "Nama outlet wajib diisi"))]
    #[schema(example = "Laundry Melati Cabang Dago")]
    pub outlet_name: String,
    #[validate(length(min = 1, message = "Alamat outlet wajib diisi"))]
    pub outlet_address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Coverage radius in kilometres
    #[serde(default = "default_radius")]
    pub coverage_radius_km: f64,
    /// Delivery fee per kilometre, in rupiah
    #[serde(default)]
    pub fee_per_km: i64,
    #[serde(default)]
    pub minimum_fee: i64,
    #[schema(example = "08:00-20:00")]
    pub opening_hours: Option<String>,
}

fn default_radius() -> f64 {
    5.0
}

/// Filter for the admin application list
#[derive(Debug, Deserialize)]
pub struct ApplicationFilter {
    pub status: Option<String>,
}

/// Partner self-service routes (require authentication)
pub fn partner_routes() -> Router<AppState> {
    Router::new()
        .route("/apply", post(apply))
        .route("/me", get(my_profile))
}

/// Admin routes (require authentication; admin checked per handler)
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/partners", get(list_applications))
        .route("/partners/:id/approve", post(approve))
        .route("/partners/:id/reject", post(reject))
        .route("/partners/:id/suspend", post(suspend))
        .route("/partners/:id/reactivate", post(reactivate))
        .route("/orders", get(list_all_orders))
}

/// Submit a partner application
#[utoipa::path(
    post,
    path = "/api/partner/apply",
    tag = "Partners",
    request_body = ApplyRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Application submitted", body = PartnerProfile),
        (status = 409, description = "Caller already has an application")
    )
)]
pub async fn apply(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<ApplyRequest>,
) -> AppResult<Created<PartnerProfile>> {
    let application = PartnerApplication {
        business_name: payload.business_name,
        bank_name: payload.bank_name,
        bank_account: payload.bank_account,
    };
    let outlet = OutletInput {
        name: payload.outlet_name,
        address: payload.outlet_address,
        latitude: payload.latitude,
        longitude: payload.longitude,
        coverage_radius_km: payload.coverage_radius_km,
        fee_per_km: payload.fee_per_km,
        minimum_fee: payload.minimum_fee,
        opening_hours: payload.opening_hours,
    };

    let profile = state
        .services
        .partners
        .apply(user.id, application, outlet)
        .await?;

    Ok(Created(profile))
}

/// Get the caller's partner profile
#[utoipa::path(
    get,
    path = "/api/partner/me",
    tag = "Partners",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The caller's partner profile", body = PartnerProfile),
        (status = 404, description = "No application found")
    )
)]
pub async fn my_profile(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<PartnerProfile>> {
    let profile = state.services.partners.my_profile(user.id).await?;
    Ok(Json(profile))
}

/// List partner applications (admin)
#[utoipa::path(
    get,
    path = "/api/admin/partners",
    tag = "Admin",
    params(("status" = Option<String>, Query, description = "Filter by status")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Applications, newest first", body = [PartnerProfile]),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn list_applications(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Query(filter): Query<ApplicationFilter>,
) -> AppResult<Json<Vec<PartnerProfile>>> {
    require_admin(&user)?;

    let status = match filter.status.as_deref() {
        None => None,
        Some(s) => Some(
            PartnerStatus::parse(s)
                .ok_or_else(|| AppError::validation(format!("Status '{}' tidak valid", s)))?,
        ),
    };

    let applications = state.services.partners.list_applications(status).await?;
    Ok(Json(applications))
}

async fn decide(
    state: AppState,
    user: CurrentUser,
    profile_id: i64,
    target: PartnerStatus,
) -> AppResult<Json<PartnerProfile>> {
    require_admin(&user)?;

    let profile = state
        .services
        .partners
        .decide(user.id, profile_id, target)
        .await?;

    Ok(Json(profile))
}

/// Approve a pending application (admin)
#[utoipa::path(
    post,
    path = "/api/admin/partners/{id}/approve",
    tag = "Admin",
    params(("id" = i64, Path, description = "Application id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Application approved", body = PartnerProfile),
        (status = 400, description = "Transition not allowed from current status"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Application not found")
    )
)]
pub async fn approve(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<PartnerProfile>> {
    decide(state, user, id, PartnerStatus::Approved).await
}

/// Reject a pending application (admin)
#[utoipa::path(
    post,
    path = "/api/admin/partners/{id}/reject",
    tag = "Admin",
    params(("id" = i64, Path, description = "Application id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Application rejected", body = PartnerProfile),
        (status = 400, description = "Transition not allowed from current status"),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn reject(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<PartnerProfile>> {
    decide(state, user, id, PartnerStatus::Rejected).await
}

/// Suspend an approved partner (admin)
#[utoipa::path(
    post,
    path = "/api/admin/partners/{id}/suspend",
    tag = "Admin",
    params(("id" = i64, Path, description = "Application id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Partner suspended", body = PartnerProfile),
        (status = 400, description = "Transition not allowed from current status"),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn suspend(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<PartnerProfile>> {
    decide(state, user, id, PartnerStatus::Suspended).await
}

/// Reactivate a suspended partner (admin)
#[utoipa::path(
    post,
    path = "/api/admin/partners/{id}/reactivate",
    tag = "Admin",
    params(("id" = i64, Path, description = "Application id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Partner reactivated", body = PartnerProfile),
        (status = 400, description = "Transition not allowed from current status"),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn reactivate(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<PartnerProfile>> {
    decide(state, user, id, PartnerStatus::Approved).await
}

/// List every order (admin)
#[utoipa::path(
    get,
    path = "/api/admin/orders",
    tag = "Admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All orders, newest first", body = [Order]),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn list_all_orders(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<Order>>> {
    require_admin(&user)?;

    let orders = state.services.orders.list_all_orders().await?;
    Ok(Json(orders))
}
