//! Integration tests for API endpoints.
//!
//! These tests drive the real router with mock services, so routing,
//! authentication middleware, validation, and error mapping are exercised
//! without a database connection.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use cucikilat::api::{create_router, AppState};
use cucikilat::domain::{
    Order, OrderStatus, OrderSummary, PaymentConfirmation, PriceBreakdown, Review, User, UserRole,
};
use cucikilat::errors::AppError;
use cucikilat::infra::Database;
use cucikilat::services::{
    Claims, MockAddressService, MockAuthService, MockOrderService, MockOutletService,
    MockPartnerService, MockPaymentService, MockReviewService, MockStatusService, Services,
};

const USER_TOKEN: &str = "user-token";
const ADMIN_TOKEN: &str = "admin-token";
const USER_ID: i64 = 7;
const ADMIN_ID: i64 = 1;

// =============================================================================
// Test Helpers
// =============================================================================

/// Bundle of service mocks with token verification preconfigured.
struct TestServices {
    auth: MockAuthService,
    orders: MockOrderService,
    payments: MockPaymentService,
    statuses: MockStatusService,
    addresses: MockAddressService,
    outlets: MockOutletService,
    partners: MockPartnerService,
    reviews: MockReviewService,
}

impl TestServices {
    fn new() -> Self {
        let mut auth = MockAuthService::new();
        auth.expect_verify_token().returning(|token| match token {
            USER_TOKEN => Ok(claims(USER_ID, "user")),
            ADMIN_TOKEN => Ok(claims(ADMIN_ID, "admin")),
            _ => Err(AppError::Unauthorized),
        });

        Self {
            auth,
            orders: MockOrderService::new(),
            payments: MockPaymentService::new(),
            statuses: MockStatusService::new(),
            addresses: MockAddressService::new(),
            outlets: MockOutletService::new(),
            partners: MockPartnerService::new(),
            reviews: MockReviewService::new(),
        }
    }

    fn into_router(self) -> axum::Router {
        let services = Services {
            auth: Arc::new(self.auth),
            orders: Arc::new(self.orders),
            payments: Arc::new(self.payments),
            statuses: Arc::new(self.statuses),
            addresses: Arc::new(self.addresses),
            outlets: Arc::new(self.outlets),
            partners: Arc::new(self.partners),
            reviews: Arc::new(self.reviews),
        };

        let database = Arc::new(Database::from_connection(Default::default()));
        create_router(AppState::new(services, database), None)
    }
}

fn claims(sub: i64, role: &str) -> Claims {
    Claims {
        sub,
        email: format!("user{}@example.com", sub),
        role: role.to_string(),
        exp: Utc::now().timestamp() + 3600,
        iat: Utc::now().timestamp(),
    }
}

fn sample_order(id: i64, user_id: i64, status: OrderStatus) -> Order {
    Order {
        id,
        user_id,
        outlet_id: Some(3),
        address_id: None,
        subtotal: 12_000,
        tax_amount: 1_200,
        delivery_fee: 0,
        total: 13_200,
        status,
        payment_status: "pending".to_string(),
        payment_method: None,
        invoice_number: None,
        pickup_slot: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn post_json(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn register_returns_created_user() {
    let mut services = TestServices::new();
    services.auth.expect_register().returning(|email, _, name, phone| {
        Ok(User {
            id: 42,
            email,
            password_hash: "hashed".to_string(),
            name,
            phone,
            role: UserRole::User,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
    });

    let response = services
        .into_router()
        .oneshot(post_json(
            "/api/auth/register",
            None,
            json!({
                "email": "budi@example.com",
                "password": "rahasia-kuat",
                "name": "Budi",
                "phone": "0812345678"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["email"], "budi@example.com");
    assert_eq!(body["role"], "user");
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn register_rejects_invalid_email() {
    let mut services = TestServices::new();
    services.auth.expect_register().times(0);

    let response = services
        .into_router()
        .oneshot(post_json(
            "/api/auth/register",
            None,
            json!({
                "email": "not-an-email",
                "password": "rahasia-kuat",
                "name": "Budi"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn register_rejects_short_password() {
    let mut services = TestServices::new();
    services.auth.expect_register().times(0);

    let response = services
        .into_router()
        .oneshot(post_json(
            "/api/auth/register",
            None,
            json!({
                "email": "budi@example.com",
                "password": "pendek",
                "name": "Budi"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn me_returns_caller_profile() {
    let mut services = TestServices::new();
    services.auth.expect_me().returning(|user_id| {
        Ok(User {
            id: user_id,
            email: "budi@example.com".to_string(),
            password_hash: "hashed".to_string(),
            name: "Budi".to_string(),
            phone: None,
            role: UserRole::User,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
    });

    let response = services
        .into_router()
        .oneshot(get("/api/users/me", Some(USER_TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], USER_ID);
    assert_eq!(body["email"], "budi@example.com");
}

#[tokio::test]
async fn protected_route_without_token_is_401() {
    let response = TestServices::new()
        .into_router()
        .oneshot(get("/api/orders", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn protected_route_with_bad_token_is_401() {
    let response = TestServices::new()
        .into_router()
        .oneshot(get("/api/orders", Some("garbage")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Orders
// =============================================================================

#[tokio::test]
async fn checkout_returns_server_side_pricing() {
    let mut services = TestServices::new();
    services.orders.expect_create_order().returning(|user_id, input| {
        assert_eq!(user_id, USER_ID);
        assert_eq!(input.lines.len(), 1);
        Ok(OrderSummary {
            order_id: 10,
            pricing: PriceBreakdown {
                subtotal: 12_000,
                tax_amount: 1_200,
                delivery_fee: 0,
                total: 13_200,
            },
        })
    });

    let response = services
        .into_router()
        .oneshot(post_json(
            "/api/orders",
            Some(USER_TOKEN),
            json!({
                "items": [{"name": "Cuci Kering", "price": 6000, "qty": 2}]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["order_id"], 10);
    assert_eq!(body["subtotal"], 12_000);
    assert_eq!(body["tax_amount"], 1_200);
    assert_eq!(body["total"], 13_200);
}

#[tokio::test]
async fn checkout_with_empty_cart_is_400() {
    let mut services = TestServices::new();
    services.orders.expect_create_order().times(0);

    let response = services
        .into_router()
        .oneshot(post_json(
            "/api/orders",
            Some(USER_TOKEN),
            json!({ "items": [] }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn foreign_order_detail_is_404_with_message() {
    let mut services = TestServices::new();
    services
        .orders
        .expect_get_order()
        .returning(|_, _| Err(AppError::not_found("Order tidak ditemukan")));

    let response = services
        .into_router()
        .oneshot(get("/api/orders/99", Some(USER_TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "Order tidak ditemukan");
}

#[tokio::test]
async fn list_orders_returns_only_own_orders() {
    let mut services = TestServices::new();
    services.orders.expect_list_orders().returning(|user_id| {
        Ok(vec![sample_order(1, user_id, OrderStatus::Pending)])
    });

    let response = services
        .into_router()
        .oneshot(get("/api/orders", Some(USER_TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["user_id"], USER_ID);
    assert_eq!(body[0]["status"], "pending");
}

// =============================================================================
// Payments
// =============================================================================

#[tokio::test]
async fn payment_confirmation_reports_invoice() {
    let mut services = TestServices::new();
    services.payments.expect_confirm().returning(|_, token, _| {
        assert_eq!(token, "tok-123");
        Ok(PaymentConfirmation {
            order_id: 5,
            invoice_number: "INV-000005".to_string(),
            already_paid: false,
        })
    });

    let response = services
        .into_router()
        .oneshot(post_json(
            "/api/payments/mock/confirm",
            Some(USER_TOKEN),
            json!({ "transaction_token": "tok-123" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["invoice_number"], "INV-000005");
    assert_eq!(body["data"]["already_paid"], false);
    assert_eq!(body["message"], "Pembayaran berhasil dikonfirmasi");
}

#[tokio::test]
async fn repeated_payment_confirmation_is_idempotent() {
    let mut services = TestServices::new();
    services.payments.expect_confirm().returning(|_, _, _| {
        Ok(PaymentConfirmation {
            order_id: 5,
            invoice_number: "INV-000005".to_string(),
            already_paid: true,
        })
    });

    let response = services
        .into_router()
        .oneshot(post_json(
            "/api/payments/mock/confirm",
            Some(USER_TOKEN),
            json!({ "transaction_token": "tok-123" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["already_paid"], true);
    assert_eq!(body["message"], "Pembayaran sudah dikonfirmasi");
}

// =============================================================================
// Status timeline
// =============================================================================

#[tokio::test]
async fn push_status_requires_admin() {
    let mut services = TestServices::new();
    services.statuses.expect_push_status().times(0);

    let response = services
        .into_router()
        .oneshot(post_json(
            "/api/status/5",
            Some(USER_TOKEN),
            json!({ "status": "washing" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn push_status_rejects_unknown_stage() {
    let mut services = TestServices::new();
    services.statuses.expect_push_status().returning(|_, _, status, _| {
        Err(AppError::validation(format!("Status '{}' tidak valid", status)))
    });

    let response = services
        .into_router()
        .oneshot(post_json(
            "/api/status/5",
            Some(ADMIN_TOKEN),
            json!({ "status": "folded" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["message"], "Status 'folded' tidak valid");
}

#[tokio::test]
async fn admin_reads_any_timeline() {
    let mut services = TestServices::new();
    services.statuses.expect_timeline_any().returning(|_| Ok(vec![]));
    services.statuses.expect_timeline().times(0);

    let response = services
        .into_router()
        .oneshot(get("/api/status/5", Some(ADMIN_TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn customer_timeline_is_ownership_checked() {
    let mut services = TestServices::new();
    services.statuses.expect_timeline_any().times(0);
    services.statuses.expect_timeline().returning(|user_id, _| {
        assert_eq!(user_id, USER_ID);
        Err(AppError::not_found("Order tidak ditemukan"))
    });

    let response = services
        .into_router()
        .oneshot(get("/api/status/5", Some(USER_TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Reviews
// =============================================================================

#[tokio::test]
async fn review_requires_completed_order() {
    let mut services = TestServices::new();
    services.reviews.expect_create_review().returning(|_, _, _, _| {
        Err(AppError::validation(
            "Hanya pesanan yang selesai yang dapat di-review",
        ))
    });

    let response = services
        .into_router()
        .oneshot(post_json(
            "/api/reviews",
            Some(USER_TOKEN),
            json!({ "order_id": 5, "rating": 5 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["error"]["message"],
        "Hanya pesanan yang selesai yang dapat di-review"
    );
}

#[tokio::test]
async fn review_rating_out_of_range_is_400() {
    let mut services = TestServices::new();
    services.reviews.expect_create_review().times(0);

    let response = services
        .into_router()
        .oneshot(post_json(
            "/api/reviews",
            Some(USER_TOKEN),
            json!({ "order_id": 5, "rating": 6 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn created_review_is_returned() {
    let mut services = TestServices::new();
    services.reviews.expect_create_review().returning(|user_id, order_id, rating, comment| {
        Ok(Review {
            id: 1,
            order_id,
            outlet_id: 3,
            user_id,
            rating,
            comment,
            reply: None,
            replied_at: None,
            created_at: Utc::now(),
        })
    });

    let response = services
        .into_router()
        .oneshot(post_json(
            "/api/reviews",
            Some(USER_TOKEN),
            json!({ "order_id": 5, "rating": 4, "comment": "Wangi" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["data"]["rating"], 4);
    assert_eq!(body["data"]["comment"], "Wangi");
}

// =============================================================================
// Admin partner workflow
// =============================================================================

#[tokio::test]
async fn partner_list_requires_admin() {
    let mut services = TestServices::new();
    services.partners.expect_list_applications().times(0);

    let response = services
        .into_router()
        .oneshot(get("/api/admin/partners", Some(USER_TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn partner_list_rejects_unknown_status_filter() {
    let mut services = TestServices::new();
    services.partners.expect_list_applications().times(0);

    let response = services
        .into_router()
        .oneshot(get("/api/admin/partners?status=banana", Some(ADMIN_TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn invalid_partner_transition_is_400() {
    use cucikilat::domain::PartnerStatus;

    let mut services = TestServices::new();
    services.partners.expect_decide().returning(|_, _, target| {
        Err(PartnerStatus::Rejected.transition(target).unwrap_err())
    });

    let response = services
        .into_router()
        .oneshot(post_json(
            "/api/admin/partners/3/approve",
            Some(ADMIN_TOKEN),
            json!({}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["error"]["message"],
        "Status kemitraan tidak dapat diubah dari 'rejected' ke 'approved'"
    );
}

// =============================================================================
// Public surface
// =============================================================================

#[tokio::test]
async fn root_returns_service_name() {
    let response = TestServices::new()
        .into_router()
        .oneshot(get("/", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"CuciKilat API");
}

#[tokio::test]
async fn outlet_list_is_public() {
    let mut services = TestServices::new();
    services.outlets.expect_list_outlets().returning(|| Ok(vec![]));

    let response = services
        .into_router()
        .oneshot(get("/api/outlets", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_reports_degraded_without_database() {
    let response = TestServices::new()
        .into_router()
        .oneshot(get("/health", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(response).await;
    assert_eq!(body["status"], "degraded");
}
