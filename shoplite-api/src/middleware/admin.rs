use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use subtle::ConstantTimeEq;

use crate::error::AppError;
use crate::state::AppState;

/// Gate for the /admin routes: the Authorization header must match the
/// configured admin secret. The comparison is constant time, and an empty
/// configured secret rejects every request.
pub async fn admin_only(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let presented = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if presented.is_empty() || state.admin.secret.is_empty() {
        return Err(AppError::Authorization("unauthorized".to_string()));
    }

    if !bool::from(presented.as_bytes().ct_eq(state.admin.secret.as_bytes())) {
        return Err(AppError::Authorization("unauthorized".to_string()));
    }

    Ok(next.run(req).await)
}
