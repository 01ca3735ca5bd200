//! Service container wiring concrete services to their traits.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Notifier, Persistence};

use super::address_service::{AddressBook, AddressService};
use super::auth_service::{AuthService, Authenticator};
use super::order_service::{OrderService, Orders};
use super::outlet_service::{OutletDirectory, OutletService};
use super::partner_service::{PartnerDesk, PartnerService};
use super::payment_service::{MockPayments, PaymentService};
use super::review_service::{ReviewService, Reviews};
use super::status_service::{StatusService, StatusTimeline};

/// All application services behind trait objects, shared by the API layer.
#[derive(Clone)]
pub struct Services {
    pub auth: Arc<dyn AuthService>,
    pub orders: Arc<dyn OrderService>,
    pub payments: Arc<dyn PaymentService>,
    pub statuses: Arc<dyn StatusService>,
    pub addresses: Arc<dyn AddressService>,
    pub outlets: Arc<dyn OutletService>,
    pub partners: Arc<dyn PartnerService>,
    pub reviews: Arc<dyn ReviewService>,
}

impl Services {
    /// Wire the full service graph over one shared Unit of Work.
    pub fn build(db: sea_orm::DatabaseConnection, config: Config, notifier: Notifier) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self {
            auth: Arc::new(Authenticator::new(uow.clone(), config)),
            orders: Arc::new(Orders::new(uow.clone())),
            payments: Arc::new(MockPayments::new(uow.clone())),
            statuses: Arc::new(StatusTimeline::new(uow.clone(), notifier)),
            addresses: Arc::new(AddressBook::new(uow.clone())),
            outlets: Arc::new(OutletDirectory::new(uow.clone())),
            partners: Arc::new(PartnerDesk::new(uow.clone())),
            reviews: Arc::new(Reviews::new(uow)),
        }
    }
}
