use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use shoplite_catalog::Product;
use uuid::Uuid;

use crate::error::{invalid_body, AppError};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/products", get(list_products))
        .route("/api/v1/products/{id}", get(get_product))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/products", post(create_product))
        .route(
            "/admin/products/{id}",
            put(update_product).delete(delete_product),
        )
}

// ============================================================================
// Request Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<i64>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/products
/// List all live products
async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    let products = state
        .products
        .list_products()
        .await
        .map_err(AppError::storage)?;
    Ok(Json(products))
}

/// GET /api/v1/products/{id}
async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Product>, AppError> {
    let product = state
        .products
        .get_product(id)
        .await
        .map_err(AppError::storage)?
        .ok_or_else(|| AppError::NotFound("product not found".to_string()))?;
    Ok(Json(product))
}

/// POST /admin/products
/// Create a product; the server assigns the id
async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let Json(req) = body.map_err(invalid_body)?;
    if req.price < 0 {
        return Err(AppError::Validation("price must not be negative".to_string()));
    }

    let product = Product::new(req.name, req.price);
    state
        .products
        .insert_product(&product)
        .await
        .map_err(AppError::storage)?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /admin/products/{id}
/// Partial update; omitted fields keep their stored value
async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> Result<Json<Product>, AppError> {
    let Json(req) = body.map_err(invalid_body)?;

    let mut product = state
        .products
        .get_product(id)
        .await
        .map_err(AppError::storage)?
        .ok_or_else(|| AppError::NotFound("product not found".to_string()))?;

    if let Some(name) = req.name {
        product.name = name;
    }
    if let Some(price) = req.price {
        if price < 0 {
            return Err(AppError::Validation("price must not be negative".to_string()));
        }
        product.price = price;
    }

    state
        .products
        .update_product(&product)
        .await
        .map_err(AppError::storage)?;

    Ok(Json(product))
}

/// DELETE /admin/products/{id}
/// Soft delete; the row is kept for historical order lines
async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .products
        .soft_delete_product(id)
        .await
        .map_err(AppError::storage)?;
    Ok(StatusCode::NO_CONTENT)
}
