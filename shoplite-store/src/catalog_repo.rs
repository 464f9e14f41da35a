use async_trait::async_trait;
use shoplite_catalog::{Product, ProductRepository};
use shoplite_core::BoxError;
use sqlx::PgPool;
use uuid::Uuid;

pub struct StoreProductRepository {
    pool: PgPool,
}

impl StoreProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal struct for type-safe querying
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    price: i64,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            price: row.price,
        }
    }
}

#[async_trait]
impl ProductRepository for StoreProductRepository {
    async fn list_products(&self) -> Result<Vec<Product>, BoxError> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            "SELECT id, name, price FROM products WHERE is_deleted = FALSE ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn get_product(&self, id: Uuid) -> Result<Option<Product>, BoxError> {
        let row: Option<ProductRow> = sqlx::query_as(
            "SELECT id, name, price FROM products WHERE id = $1 AND is_deleted = FALSE",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Product::from))
    }

    async fn select_products(&self, ids: &[Uuid]) -> Result<Vec<Product>, BoxError> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            "SELECT id, name, price FROM products WHERE is_deleted = FALSE AND id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn insert_product(&self, product: &Product) -> Result<(), BoxError> {
        sqlx::query("INSERT INTO products (id, name, price) VALUES ($1, $2, $3)")
            .bind(product.id)
            .bind(&product.name)
            .bind(product.price)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn update_product(&self, product: &Product) -> Result<(), BoxError> {
        sqlx::query("UPDATE products SET name = $1, price = $2 WHERE id = $3")
            .bind(&product.name)
            .bind(product.price)
            .bind(product.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn soft_delete_product(&self, id: Uuid) -> Result<(), BoxError> {
        sqlx::query("UPDATE products SET is_deleted = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
