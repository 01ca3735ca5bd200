//! Order repository: orders and their immutable line items.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use super::entities::{order, order_item};
use crate::domain::{Order, OrderItem, OrderLine, OrderStatus, PriceBreakdown};
use crate::errors::{AppError, AppResult};

/// Data access for orders, bound to a connection or transaction.
pub struct OrderRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Insert the order row with status `pending`.
    pub async fn create(
        &self,
        user_id: i64,
        outlet_id: Option<i64>,
        address_id: Option<i64>,
        pickup_slot: Option<String>,
        pricing: PriceBreakdown,
    ) -> AppResult<Order> {
        let now = Utc::now();
        let model = order::ActiveModel {
            user_id: Set(user_id),
            outlet_id: Set(outlet_id),
            address_id: Set(address_id),
            subtotal: Set(pricing.subtotal),
            tax_amount: Set(pricing.tax_amount),
            delivery_fee: Set(pricing.delivery_fee),
            total: Set(pricing.total),
            status: Set(OrderStatus::Pending.as_str().to_string()),
            payment_status: Set("pending".to_string()),
            payment_method: Set(None),
            invoice_number: Set(None),
            pickup_slot: Set(pickup_slot),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(self.conn)
        .await
        .map_err(AppError::from)?;

        Ok(Order::from(model))
    }

    /// Batch-insert the order's lines.
    pub async fn insert_lines(&self, order_id: i64, lines: &[OrderLine]) -> AppResult<()> {
        let models = lines.iter().map(|line| order_item::ActiveModel {
            order_id: Set(order_id),
            item_id: Set(line.item_id),
            name: Set(line.name.clone()),
            kind: Set(line.kind.clone()),
            unit: Set(line.unit.clone()),
            price: Set(line.price),
            quantity: Set(line.quantity),
            ..Default::default()
        });

        order_item::Entity::insert_many(models)
            .exec(self.conn)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Order>> {
        let result = order::Entity::find_by_id(id)
            .one(self.conn)
            .await
            .map_err(AppError::from)?;
        Ok(result.map(Order::from))
    }

    /// Fetch an order only if it belongs to `user_id`.
    pub async fn find_owned(&self, id: i64, user_id: i64) -> AppResult<Option<Order>> {
        let result = order::Entity::find_by_id(id)
            .filter(order::Column::UserId.eq(user_id))
            .one(self.conn)
            .await
            .map_err(AppError::from)?;
        Ok(result.map(Order::from))
    }

    /// Ownership-checked fetch holding a `FOR UPDATE` row lock; serializes
    /// concurrent payment attempts for the same order.
    pub async fn find_owned_for_update(&self, id: i64, user_id: i64) -> AppResult<Option<Order>> {
        let result = order::Entity::find_by_id(id)
            .filter(order::Column::UserId.eq(user_id))
            .lock_exclusive()
            .one(self.conn)
            .await
            .map_err(AppError::from)?;
        Ok(result.map(Order::from))
    }

    /// Locked fetch without the ownership filter (status pushes are staff
    /// operations).
    pub async fn find_for_update(&self, id: i64) -> AppResult<Option<Order>> {
        let result = order::Entity::find_by_id(id)
            .lock_exclusive()
            .one(self.conn)
            .await
            .map_err(AppError::from)?;
        Ok(result.map(Order::from))
    }

    pub async fn list_for_user(&self, user_id: i64) -> AppResult<Vec<Order>> {
        let models = order::Entity::find()
            .filter(order::Column::UserId.eq(user_id))
            .order_by_desc(order::Column::CreatedAt)
            .all(self.conn)
            .await
            .map_err(AppError::from)?;
        Ok(models.into_iter().map(Order::from).collect())
    }

    pub async fn list_all(&self) -> AppResult<Vec<Order>> {
        let models = order::Entity::find()
            .order_by_desc(order::Column::CreatedAt)
            .all(self.conn)
            .await
            .map_err(AppError::from)?;
        Ok(models.into_iter().map(Order::from).collect())
    }

    pub async fn items_for(&self, order_id: i64) -> AppResult<Vec<OrderItem>> {
        let models = order_item::Entity::find()
            .filter(order_item::Column::OrderId.eq(order_id))
            .order_by_asc(order_item::Column::Id)
            .all(self.conn)
            .await
            .map_err(AppError::from)?;
        Ok(models.into_iter().map(OrderItem::from).collect())
    }

    /// Mark the order paid: status, payment fields, and invoice number in one
    /// update.
    pub async fn mark_paid(
        &self,
        id: i64,
        payment_method: Option<String>,
        invoice: String,
    ) -> AppResult<()> {
        let existing = order::Entity::find_by_id(id)
            .one(self.conn)
            .await?
            .ok_or_else(|| AppError::not_found("Order tidak ditemukan"))?;

        let mut active: order::ActiveModel = existing.into();
        active.status = Set(OrderStatus::Paid.as_str().to_string());
        active.payment_status = Set("paid".to_string());
        active.payment_method = Set(payment_method);
        active.invoice_number = Set(Some(invoice));
        active.updated_at = Set(Utc::now());
        active.update(self.conn).await.map_err(AppError::from)?;
        Ok(())
    }

    /// Mirror the latest timeline status onto the order row.
    pub async fn set_status(&self, id: i64, status: OrderStatus) -> AppResult<()> {
        let existing = order::Entity::find_by_id(id)
            .one(self.conn)
            .await?
            .ok_or_else(|| AppError::not_found("Order tidak ditemukan"))?;

        let mut active: order::ActiveModel = existing.into();
        active.status = Set(status.as_str().to_string());
        active.updated_at = Set(Utc::now());
        active.update(self.conn).await.map_err(AppError::from)?;
        Ok(())
    }
}
