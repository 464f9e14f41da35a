use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shoplite_order::{Order, OrderLine, RequestedLine};
use uuid::Uuid;

use crate::error::{invalid_body, AppError};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/checkout", post(checkout))
        .route("/api/v1/orders/{id}", get(get_order))
        .route("/api/v1/orders/{id}/confirm", post(confirm_order))
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub email: String,
    pub address: String,
    pub products: Vec<CheckoutLine>,
}

#[derive(Debug, Deserialize)]
pub struct CheckoutLine {
    pub id: Uuid,
    pub quantity: i32,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmOrderRequest {
    pub amount: i64,
    pub bank: String,
    pub account_number: String,
    pub passcode: String,
}

/// The wire shape of an order. `passcode` carries the plaintext code in
/// the checkout response and nothing anywhere else; the stored hash is
/// never part of any response.
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: Uuid,
    pub email: String,
    pub address: String,
    pub grand_total: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_bank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_account_number: Option<String>,
}

impl OrderResponse {
    fn from_order(order: Order) -> Self {
        let (paid_at, paid_bank, paid_account_number) = match order.payment {
            Some(payment) => (
                Some(payment.paid_at),
                Some(payment.bank),
                Some(payment.account_number),
            ),
            None => (None, None, None),
        };

        Self {
            id: order.id,
            email: order.email,
            address: order.address,
            grand_total: order.grand_total,
            passcode: None,
            paid_at,
            paid_bank,
            paid_account_number,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OrderWithLinesResponse {
    #[serde(flatten)]
    pub order: OrderResponse,
    pub details: Vec<OrderLine>,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/v1/checkout
/// Create a pending order and hand the one-time passcode to the customer
async fn checkout(
    State(state): State<AppState>,
    body: Result<Json<CheckoutRequest>, JsonRejection>,
) -> Result<Json<OrderWithLinesResponse>, AppError> {
    let Json(req) = body.map_err(invalid_body)?;

    let requested: Vec<RequestedLine> = req
        .products
        .iter()
        .map(|line| RequestedLine {
            product_id: line.id,
            quantity: line.quantity,
        })
        .collect();

    let outcome = state
        .orders
        .checkout(&req.email, &req.address, &requested)
        .await?;

    let mut order = OrderResponse::from_order(outcome.order.order);
    order.passcode = Some(outcome.passcode);

    Ok(Json(OrderWithLinesResponse {
        order,
        details: outcome.order.lines,
    }))
}

/// POST /api/v1/orders/{id}/confirm
/// Present the passcode plus payment details to mark the order paid
async fn confirm_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Result<Json<ConfirmOrderRequest>, JsonRejection>,
) -> Result<Json<OrderResponse>, AppError> {
    let Json(req) = body.map_err(invalid_body)?;
    if req.bank.is_empty() || req.account_number.is_empty() || req.passcode.is_empty() {
        return Err(AppError::Validation("invalid request".to_string()));
    }

    let order = state
        .orders
        .confirm(id, &req.passcode, req.amount, &req.bank, &req.account_number)
        .await?;

    Ok(Json(OrderResponse::from_order(order)))
}

/// GET /api/v1/orders/{id}
async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<OrderWithLinesResponse>, AppError> {
    let fetched = state.orders.get_order(id).await?;

    Ok(Json(OrderWithLinesResponse {
        order: OrderResponse::from_order(fetched.order),
        details: fetched.lines,
    }))
}
