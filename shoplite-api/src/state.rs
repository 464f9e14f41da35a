use shoplite_catalog::ProductRepository;
use shoplite_order::OrderManager;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AdminConfig {
    pub secret: String,
}

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductRepository>,
    pub orders: Arc<OrderManager>,
    pub admin: AdminConfig,
    pub request_timeout: Duration,
}
