//! Mock payment service.
//!
//! Creating a session issues a transaction token and redirect URL without
//! calling any gateway; confirmation flips the payment and order to paid.
//! Both paths lock the rows they mutate, and a second confirmation of the
//! same token is an idempotent no-op.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::MOCK_PAYMENT_REDIRECT_BASE;
use crate::domain::{invoice_number, PaymentConfirmation, PaymentSession, PaymentStatus};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Mock payment operations exposed to the API layer.
#[mockall::automock]
#[async_trait]
pub trait PaymentService: Send + Sync {
    /// Create a mock payment session for one of the user's orders.
    async fn create_session(&self, user_id: i64, order_id: i64) -> AppResult<PaymentSession>;

    /// Confirm a mock payment by its transaction token.
    ///
    /// Marks the payment and order paid and assigns the invoice number.
    /// Confirming an already-paid token returns the existing invoice with
    /// `already_paid` set instead of failing.
    async fn confirm(
        &self,
        user_id: i64,
        transaction_token: String,
        payment_method: Option<String>,
    ) -> AppResult<PaymentConfirmation>;
}

/// Concrete implementation of PaymentService using Unit of Work.
pub struct MockPayments<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> MockPayments<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> PaymentService for MockPayments<U> {
    async fn create_session(&self, user_id: i64, order_id: i64) -> AppResult<PaymentSession> {
        let payment = self
            .uow
            .transaction(move |ctx| {
                Box::pin(async move {
                    // Lock the order so concurrent session requests serialize
                    let order = ctx
                        .orders()
                        .find_owned_for_update(order_id, user_id)
                        .await?
                        .ok_or_not_found("Order tidak ditemukan")?;

                    let token = Uuid::new_v4().simple().to_string();
                    let redirect_url = format!("{}/{}", MOCK_PAYMENT_REDIRECT_BASE, token);

                    ctx.payments()
                        .create(order.id, order.total, token, redirect_url)
                        .await
                })
            })
            .await?;

        tracing::info!(
            order_id = payment.order_id,
            amount = payment.amount,
            "Mock payment session created"
        );

        Ok(PaymentSession {
            order_id: payment.order_id,
            transaction_token: payment.transaction_token,
            redirect_url: payment.redirect_url,
            amount: payment.amount,
        })
    }

    async fn confirm(
        &self,
        user_id: i64,
        transaction_token: String,
        payment_method: Option<String>,
    ) -> AppResult<PaymentConfirmation> {
        let confirmation = self
            .uow
            .transaction(move |ctx| {
                Box::pin(async move {
                    let payment = ctx
                        .payments()
                        .find_by_token_for_update(&transaction_token)
                        .await?
                        .ok_or_not_found("Pembayaran tidak ditemukan")?;

                    let order = ctx
                        .orders()
                        .find_owned_for_update(payment.order_id, user_id)
                        .await?
                        .ok_or_not_found("Order tidak ditemukan")?;

                    let invoice = invoice_number(order.id);

                    if payment.status == PaymentStatus::Paid {
                        return Ok(PaymentConfirmation {
                            order_id: order.id,
                            invoice_number: order.invoice_number.unwrap_or(invoice),
                            already_paid: true,
                        });
                    }

                    ctx.payments()
                        .mark_paid(payment.id, chrono::Utc::now())
                        .await?;
                    ctx.orders()
                        .mark_paid(order.id, payment_method, invoice.clone())
                        .await?;
                    ctx.status_logs()
                        .append(order.id, crate::domain::OrderStatus::Paid, None)
                        .await?;

                    Ok(PaymentConfirmation {
                        order_id: order.id,
                        invoice_number: invoice,
                        already_paid: false,
                    })
                })
            })
            .await?;

        if confirmation.already_paid {
            tracing::info!(
                order_id = confirmation.order_id,
                "Repeated payment confirmation ignored"
            );
        } else {
            tracing::info!(
                order_id = confirmation.order_id,
                invoice = %confirmation.invoice_number,
                "Payment confirmed"
            );
        }

        Ok(confirmation)
    }
}
