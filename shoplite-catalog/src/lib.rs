pub mod product;
pub mod repository;

pub use product::Product;
pub use repository::ProductRepository;
