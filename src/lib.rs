pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CartCommand, CliConfig};
pub use config::TomlConfig;

pub use adapters::{
    http::ApiClient,
    notify::{ChannelNotifier, RecordingNotifier, TracingNotifier},
    storage::{LocalStorage, MemoryStorage},
};
pub use crate::core::{
    cart_store::{CartStore, Outcome},
    repository::{CartRepository, DEFAULT_CART_KEY},
};
pub use domain::model::{Cart, LineItem, Product, ProductId, Stock, UpdateProductAmount};
pub use domain::notice::{Notice, NoticeKind, NoticeLevel};
pub use domain::ports::{ConfigProvider, Notifier, ProductCatalog, StockOracle, Storage};
pub use utils::error::{CartError, Result};
