use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A sellable catalog entry. Prices are integer minor currency units.
///
/// Soft deletion is a storage concern: deleted products are excluded from
/// every read path (including the checkout batch lookup), so a `Product`
/// value in memory is always a live one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: i64,
}

impl Product {
    pub fn new(name: String, price: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            price,
        }
    }
}
