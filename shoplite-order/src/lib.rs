pub mod manager;
pub mod models;
pub mod passcode;
pub mod pricing;
pub mod repository;

pub use manager::{CheckoutOutcome, OrderManager};
pub use models::{Order, OrderLine, OrderWithLines, PaymentDetails};
pub use pricing::RequestedLine;
pub use repository::OrderRepository;
