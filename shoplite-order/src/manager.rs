use chrono::Utc;
use shoplite_catalog::{Product, ProductRepository};
use shoplite_core::{CoreError, CoreResult};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::models::{Order, OrderWithLines, PaymentDetails};
use crate::passcode;
use crate::pricing::{self, RequestedLine};
use crate::repository::OrderRepository;

/// The result of a successful checkout. `passcode` is the plaintext code;
/// this is the only place it ever exists outside the customer's hands.
#[derive(Debug)]
pub struct CheckoutOutcome {
    pub order: OrderWithLines,
    pub passcode: String,
}

/// Orchestrates the order lifecycle:
/// `[none] --checkout--> pending --confirm--> paid`.
///
/// A failed confirm never changes state; the order stays pending and
/// retriable. There are no further transitions after paid.
pub struct OrderManager {
    products: Arc<dyn ProductRepository>,
    orders: Arc<dyn OrderRepository>,
}

impl OrderManager {
    pub fn new(products: Arc<dyn ProductRepository>, orders: Arc<dyn OrderRepository>) -> Self {
        Self { products, orders }
    }

    /// Create a pending order: resolve the requested products, price them,
    /// issue a one-time passcode and persist order + lines atomically.
    pub async fn checkout(
        &self,
        email: &str,
        address: &str,
        requested: &[RequestedLine],
    ) -> CoreResult<CheckoutOutcome> {
        let ids: Vec<Uuid> = requested.iter().map(|line| line.product_id).collect();
        let products = self
            .products
            .select_products(&ids)
            .await
            .map_err(CoreError::storage)?;
        let catalog: HashMap<Uuid, Product> =
            products.into_iter().map(|p| (p.id, p)).collect();

        let order_id = Uuid::new_v4();
        let priced = pricing::price_order(order_id, requested, &catalog)
            .map_err(|e| CoreError::Validation(e.to_string()))?;

        let issued = passcode::issue()
            .map_err(|e| CoreError::Internal(format!("passcode hashing failed: {e}")))?;

        let order = Order::pending(
            order_id,
            email.to_string(),
            address.to_string(),
            priced.grand_total,
            issued.hash,
        );

        self.orders
            .create_order_with_lines(&order, &priced.lines)
            .await
            .map_err(CoreError::storage)?;

        Ok(CheckoutOutcome {
            order: OrderWithLines {
                order,
                lines: priced.lines,
            },
            passcode: issued.plaintext,
        })
    }

    /// Transition a pending order to paid.
    ///
    /// Check order: passcode hash present, passcode matches, not already
    /// paid, amount equals the grand total. The write itself is guarded on
    /// `paid_at IS NULL`, so a concurrent confirm that loses the race gets
    /// the same already-paid answer instead of a double payment.
    pub async fn confirm(
        &self,
        order_id: Uuid,
        presented_passcode: &str,
        amount: i64,
        bank: &str,
        account_number: &str,
    ) -> CoreResult<Order> {
        let order = self
            .orders
            .get_order_by_id(order_id)
            .await
            .map_err(CoreError::storage)?
            .ok_or_else(|| CoreError::NotFound("order not found".to_string()))?;

        // The hash is written at checkout and never removed from storage;
        // its absence means the row is corrupt, not that the order is paid.
        let Some(hash) = order.passcode_hash.as_deref() else {
            tracing::error!(%order_id, "order has no passcode hash");
            return Err(CoreError::Internal(format!(
                "order {order_id} has no passcode hash"
            )));
        };

        if !passcode::verify(hash, presented_passcode) {
            return Err(CoreError::Authorization("passcode not match".to_string()));
        }

        if order.is_paid() {
            return Err(CoreError::Conflict("order already paid".to_string()));
        }

        if order.grand_total != amount {
            return Err(CoreError::Validation("amount not match".to_string()));
        }

        let paid_at = Utc::now();
        let claimed = self
            .orders
            .mark_paid(order_id, paid_at, bank, account_number)
            .await
            .map_err(CoreError::storage)?;
        if !claimed {
            return Err(CoreError::Conflict("order already paid".to_string()));
        }

        Ok(Order {
            passcode_hash: None,
            payment: Some(PaymentDetails {
                paid_at,
                bank: bank.to_string(),
                account_number: account_number.to_string(),
            }),
            ..order
        })
    }

    pub async fn get_order(&self, order_id: Uuid) -> CoreResult<OrderWithLines> {
        self.orders
            .get_order_with_lines_by_id(order_id)
            .await
            .map_err(CoreError::storage)?
            .ok_or_else(|| CoreError::NotFound("order not found".to_string()))
    }
}
