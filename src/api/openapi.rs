//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    address_handler, auth_handler, order_handler, outlet_handler, partner_handler,
    payment_handler, review_handler, status_handler,
};
use crate::domain::{
    Address, CartLine, CatalogSource, ItemKind, Order, OrderDetail, OrderItem, OrderStatus,
    OrderSummary, Outlet, OutletDetail, OutletItem, PartnerProfile, PartnerStatus, Payment,
    PaymentConfirmation, PaymentSession, PaymentStatus, PriceBreakdown, RatingAggregate, Review,
    StatusLogEntry, UserResponse, UserRole,
};
use crate::services::TokenResponse;

/// OpenAPI documentation for the CuciKilat API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CuciKilat API",
        version = "0.1.0",
        description = "Backend API for the CuciKilat laundry platform: orders, mock payments, \
                       status tracking, outlets, partner onboarding, and reviews",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication
        auth_handler::register,
        auth_handler::login,
        auth_handler::me,
        // Orders
        order_handler::create_order,
        order_handler::list_orders,
        order_handler::get_order,
        // Payments
        payment_handler::create_mock_payment,
        payment_handler::confirm_payment,
        // Status timeline
        status_handler::get_timeline,
        status_handler::push_status,
        status_handler::complete_order,
        // Addresses
        address_handler::list_addresses,
        address_handler::create_address,
        address_handler::update_address,
        address_handler::delete_address,
        // Outlets and catalog
        outlet_handler::list_outlets,
        outlet_handler::get_outlet,
        outlet_handler::list_outlet_reviews,
        outlet_handler::create_item,
        outlet_handler::update_item,
        outlet_handler::delete_item,
        // Partners
        partner_handler::apply,
        partner_handler::my_profile,
        partner_handler::list_applications,
        partner_handler::approve,
        partner_handler::reject,
        partner_handler::suspend,
        partner_handler::reactivate,
        partner_handler::list_all_orders,
        // Reviews
        review_handler::create_review,
        review_handler::reply_review,
    ),
    components(
        schemas(
            // Domain types
            UserRole,
            UserResponse,
            OrderStatus,
            CartLine,
            PriceBreakdown,
            Order,
            OrderItem,
            OrderDetail,
            OrderSummary,
            StatusLogEntry,
            PaymentStatus,
            Payment,
            PaymentSession,
            PaymentConfirmation,
            Address,
            ItemKind,
            Outlet,
            OutletItem,
            CatalogSource,
            OutletDetail,
            PartnerStatus,
            PartnerProfile,
            Review,
            RatingAggregate,
            // Request/response types
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            TokenResponse,
            order_handler::CreateOrderRequest,
            payment_handler::CreatePaymentRequest,
            payment_handler::ConfirmPaymentRequest,
            status_handler::PushStatusRequest,
            address_handler::AddressRequest,
            outlet_handler::OutletItemRequest,
            partner_handler::ApplyRequest,
            review_handler::CreateReviewRequest,
            review_handler::ReplyRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "User registration and login"),
        (name = "Orders", description = "Checkout and order history"),
        (name = "Payments", description = "Mock payment sessions and confirmation"),
        (name = "Status", description = "Order status timeline"),
        (name = "Addresses", description = "Pickup address book"),
        (name = "Outlets", description = "Outlet directory and catalogs"),
        (name = "Partners", description = "Partner onboarding"),
        (name = "Admin", description = "Administrative operations"),
        (name = "Reviews", description = "Reviews and partner replies")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /api/auth/login"))
                        .build(),
                ),
            );
        }
    }
}
