//! Order service: checkout, order listing, and order detail.
//!
//! All pricing is recomputed server-side from the sanitized cart; amounts
//! submitted by the client are never trusted.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::DEFAULT_TAX_RATE;
use crate::domain::{
    price_order, sanitize_lines, CartLine, Order, OrderDetail, OrderSummary,
};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{OrderRepository, UnitOfWork};

/// Checkout input as accepted from the client.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub lines: Vec<CartLine>,
    pub outlet_id: Option<i64>,
    pub address_id: Option<i64>,
    pub pickup_slot: Option<String>,
    pub delivery_fee: Option<i64>,
    pub tax_rate: Option<f64>,
}

/// Order operations exposed to the API layer.
#[mockall::automock]
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Create an order from a cart. Malformed lines are dropped; an order
    /// with no valid lines is rejected.
    async fn create_order(&self, user_id: i64, input: NewOrder) -> AppResult<OrderSummary>;

    /// List the user's orders, newest first.
    async fn list_orders(&self, user_id: i64) -> AppResult<Vec<Order>>;

    /// Fetch one of the user's orders with its lines.
    async fn get_order(&self, user_id: i64, order_id: i64) -> AppResult<OrderDetail>;

    /// List every order (admin).
    async fn list_all_orders(&self) -> AppResult<Vec<Order>>;
}

/// Concrete implementation of OrderService using Unit of Work.
pub struct Orders<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> Orders<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> OrderService for Orders<U> {
    async fn create_order(&self, user_id: i64, input: NewOrder) -> AppResult<OrderSummary> {
        let lines = sanitize_lines(&input.lines);
        if lines.is_empty() {
            return Err(AppError::validation(
                "Keranjang kosong atau semua item tidak valid",
            ));
        }

        let tax_rate = input.tax_rate.unwrap_or(DEFAULT_TAX_RATE);
        let delivery_fee = input.delivery_fee.unwrap_or(0);
        let pricing = price_order(&lines, tax_rate, delivery_fee);

        let outlet_id = input.outlet_id;
        let address_id = input.address_id;
        let pickup_slot = input.pickup_slot;

        let order = self
            .uow
            .transaction(move |ctx| {
                Box::pin(async move {
                    let order = ctx
                        .orders()
                        .create(user_id, outlet_id, address_id, pickup_slot, pricing)
                        .await?;
                    ctx.orders().insert_lines(order.id, &lines).await?;
                    Ok(order)
                })
            })
            .await?;

        tracing::info!(
            order_id = order.id,
            user_id,
            total = pricing.total,
            "Order created"
        );

        Ok(OrderSummary {
            order_id: order.id,
            pricing,
        })
    }

    async fn list_orders(&self, user_id: i64) -> AppResult<Vec<Order>> {
        OrderRepository::new(self.uow.conn())
            .list_for_user(user_id)
            .await
    }

    async fn get_order(&self, user_id: i64, order_id: i64) -> AppResult<OrderDetail> {
        let repo = OrderRepository::new(self.uow.conn());
        let order = repo
            .find_owned(order_id, user_id)
            .await?
            .ok_or_not_found("Order tidak ditemukan")?;
        let items = repo.items_for(order.id).await?;

        Ok(OrderDetail { order, items })
    }

    async fn list_all_orders(&self) -> AppResult<Vec<Order>> {
        OrderRepository::new(self.uow.conn()).list_all().await
    }
}
