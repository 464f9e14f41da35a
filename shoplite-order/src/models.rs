use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A customer order.
///
/// The two optional fields encode the order's lifecycle:
/// `passcode_hash` is present only while the order is pending, `payment`
/// only once it is paid. The hash never leaves the process — it is skipped
/// by serde entirely, and the HTTP layer builds its own response types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub email: String,
    pub address: String,
    pub grand_total: i64,
    #[serde(skip)]
    pub passcode_hash: Option<String>,
    #[serde(flatten)]
    pub payment: Option<PaymentDetails>,
}

/// Payment confirmation data, set exactly once when the order transitions
/// to paid. The bank fields are recorded as presented, not verified
/// against any gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub paid_at: DateTime<Utc>,
    #[serde(rename = "paid_bank")]
    pub bank: String,
    #[serde(rename = "paid_account_number")]
    pub account_number: String,
}

impl Order {
    /// A freshly checked-out order: hash present, payment absent.
    pub fn pending(
        id: Uuid,
        email: String,
        address: String,
        grand_total: i64,
        passcode_hash: String,
    ) -> Self {
        Self {
            id,
            email,
            address,
            grand_total,
            passcode_hash: Some(passcode_hash),
            payment: None,
        }
    }

    pub fn is_paid(&self) -> bool {
        self.payment.is_some()
    }
}

/// One line of an order. `price` is the unit price snapshotted at checkout
/// time; later catalog price changes must not affect it. `total` is always
/// `price * quantity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub price: i64,
    pub total: i64,
}

impl OrderLine {
    pub fn new(order_id: Uuid, product_id: Uuid, quantity: i32, price: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id,
            product_id,
            quantity,
            price,
            total: price * quantity as i64,
        }
    }
}

/// An order together with all of its lines. Lines are exclusively owned by
/// the order; an order with no lines carries an empty vec, never an absent
/// one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderWithLines {
    #[serde(flatten)]
    pub order: Order,
    #[serde(rename = "details")]
    pub lines: Vec<OrderLine>,
}
