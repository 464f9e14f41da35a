use async_trait::async_trait;
use shoplite_core::BoxError;
use uuid::Uuid;

use crate::product::Product;

/// Repository trait for product catalog access.
///
/// All reads exclude soft-deleted rows. `get_product` distinguishes
/// not-found (`None`) from storage failure.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>, BoxError>;

    async fn get_product(&self, id: Uuid) -> Result<Option<Product>, BoxError>;

    /// Batch fetch for checkout. Ids that are unknown or soft-deleted are
    /// simply absent from the result; the caller decides whether that is
    /// an error.
    async fn select_products(&self, ids: &[Uuid]) -> Result<Vec<Product>, BoxError>;

    async fn insert_product(&self, product: &Product) -> Result<(), BoxError>;

    async fn update_product(&self, product: &Product) -> Result<(), BoxError>;

    /// Flags the row as deleted; the row is retained so historical order
    /// lines keep a valid product reference.
    async fn soft_delete_product(&self, id: Uuid) -> Result<(), BoxError>;
}
