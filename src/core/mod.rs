pub mod cart_store;
pub mod repository;

pub use crate::domain::model::{Cart, LineItem, Product, ProductId, Stock, UpdateProductAmount};
pub use crate::domain::notice::{Notice, NoticeKind, NoticeLevel};
pub use crate::domain::ports::{ConfigProvider, Notifier, ProductCatalog, StockOracle, Storage};
pub use crate::utils::error::Result;
