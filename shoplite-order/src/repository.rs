use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shoplite_core::BoxError;
use uuid::Uuid;

use crate::models::{Order, OrderLine, OrderWithLines};

/// Repository trait for order data access.
///
/// The store stays a dumb persistence boundary: business checks (passcode,
/// amount, paid state) live in the manager. Not-found is expressed as
/// `Option`, distinct from storage failure.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist an order and all of its lines as one atomic unit. Either
    /// every row becomes visible or none does; any write error rolls the
    /// whole transaction back and is propagated unchanged.
    async fn create_order_with_lines(
        &self,
        order: &Order,
        lines: &[OrderLine],
    ) -> Result<(), BoxError>;

    async fn get_order_by_id(&self, id: Uuid) -> Result<Option<Order>, BoxError>;

    /// The line set defaults to empty when the order has no lines.
    async fn get_order_with_lines_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<OrderWithLines>, BoxError>;

    /// Conditionally claim the paid transition: a single-row update guarded
    /// on `paid_at IS NULL`. Returns `false` when the order was already
    /// paid (or does not exist), so concurrent confirms cannot both win.
    async fn mark_paid(
        &self,
        id: Uuid,
        paid_at: DateTime<Utc>,
        bank: &str,
        account_number: &str,
    ) -> Result<bool, BoxError>;
}
