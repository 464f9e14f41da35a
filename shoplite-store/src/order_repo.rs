use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shoplite_core::BoxError;
use shoplite_order::{Order, OrderLine, OrderRepository, OrderWithLines, PaymentDetails};
use sqlx::PgPool;
use uuid::Uuid;

pub struct StoreOrderRepository {
    pool: PgPool,
}

impl StoreOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal structs for type-safe querying
#[derive(sqlx::FromRow)]
struct OrderRow {
    id: Uuid,
    email: String,
    address: String,
    passcode_hash: Option<String>,
    grand_total: i64,
    paid_at: Option<DateTime<Utc>>,
    paid_bank: Option<String>,
    paid_account_number: Option<String>,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        // The three payment columns are written together by mark_paid; a
        // row with only some of them set does not count as paid.
        let payment = match (row.paid_at, row.paid_bank, row.paid_account_number) {
            (Some(paid_at), Some(bank), Some(account_number)) => Some(PaymentDetails {
                paid_at,
                bank,
                account_number,
            }),
            _ => None,
        };

        Order {
            id: row.id,
            email: row.email,
            address: row.address,
            grand_total: row.grand_total,
            passcode_hash: row.passcode_hash,
            payment,
        }
    }
}

#[derive(sqlx::FromRow)]
struct OrderLineRow {
    id: Uuid,
    order_id: Uuid,
    product_id: Uuid,
    quantity: i32,
    price: i64,
    total: i64,
}

impl From<OrderLineRow> for OrderLine {
    fn from(row: OrderLineRow) -> Self {
        OrderLine {
            id: row.id,
            order_id: row.order_id,
            product_id: row.product_id,
            quantity: row.quantity,
            price: row.price,
            total: row.total,
        }
    }
}

#[async_trait]
impl OrderRepository for StoreOrderRepository {
    async fn create_order_with_lines(
        &self,
        order: &Order,
        lines: &[OrderLine],
    ) -> Result<(), BoxError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO orders (id, email, address, passcode_hash, grand_total) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(order.id)
        .bind(&order.email)
        .bind(&order.address)
        .bind(&order.passcode_hash)
        .bind(order.grand_total)
        .execute(&mut *tx)
        .await?;

        for line in lines {
            sqlx::query(
                "INSERT INTO order_lines (id, order_id, product_id, quantity, price, total) \
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(line.id)
            .bind(line.order_id)
            .bind(line.product_id)
            .bind(line.quantity)
            .bind(line.price)
            .bind(line.total)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    async fn get_order_by_id(&self, id: Uuid) -> Result<Option<Order>, BoxError> {
        let row: Option<OrderRow> = sqlx::query_as(
            "SELECT id, email, address, passcode_hash, grand_total, paid_at, paid_bank, \
             paid_account_number FROM orders WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Order::from))
    }

    async fn get_order_with_lines_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<OrderWithLines>, BoxError> {
        let Some(order) = self.get_order_by_id(id).await? else {
            return Ok(None);
        };

        let rows: Vec<OrderLineRow> = sqlx::query_as(
            "SELECT id, order_id, product_id, quantity, price, total \
             FROM order_lines WHERE order_id = $1",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(OrderWithLines {
            order,
            lines: rows.into_iter().map(OrderLine::from).collect(),
        }))
    }

    async fn mark_paid(
        &self,
        id: Uuid,
        paid_at: DateTime<Utc>,
        bank: &str,
        account_number: &str,
    ) -> Result<bool, BoxError> {
        let result = sqlx::query(
            "UPDATE orders SET paid_at = $1, paid_bank = $2, paid_account_number = $3 \
             WHERE id = $4 AND paid_at IS NULL",
        )
        .bind(paid_at)
        .bind(bank)
        .bind(account_number)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}
