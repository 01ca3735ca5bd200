//! Service layer - Business logic orchestration
//!
//! Services coordinate domain rules and repositories behind trait objects,
//! so handlers depend only on the traits and tests can substitute mocks.

pub mod address_service;
pub mod auth_service;
pub mod container;
pub mod order_service;
pub mod outlet_service;
pub mod partner_service;
pub mod payment_service;
pub mod review_service;
pub mod status_service;

pub use address_service::{AddressBook, AddressService, MockAddressService};
pub use auth_service::{AuthService, Authenticator, Claims, MockAuthService, TokenResponse};
pub use container::Services;
pub use order_service::{MockOrderService, NewOrder, OrderService, Orders};
pub use outlet_service::{MockOutletService, OutletDirectory, OutletService};
pub use partner_service::{MockPartnerService, PartnerDesk, PartnerService};
pub use payment_service::{MockPayments, MockPaymentService, PaymentService};
pub use review_service::{MockReviewService, ReviewService, Reviews};
pub use status_service::{MockStatusService, StatusService, StatusTimeline};
