use crate::domain::model::ProductId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned {status} for {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Product {product_id}: requested {requested}, only {available} in stock")]
    OutOfStock {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },

    #[error("Product {product_id}: quantity {amount} is not allowed")]
    InvalidQuantity { product_id: ProductId, amount: i64 },

    #[error("Product {product_id} is not in the cart")]
    NotFound { product_id: ProductId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Rejected against availability or quantity rules.
    Stock,
    /// Catalog or stock lookup failed.
    Lookup,
    Storage,
    Config,
}

impl CartError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CartError::OutOfStock { .. }
            | CartError::InvalidQuantity { .. }
            | CartError::NotFound { .. } => ErrorCategory::Stock,
            CartError::ApiError(_) | CartError::UnexpectedStatus { .. } => ErrorCategory::Lookup,
            CartError::IoError(_) | CartError::SerializationError(_) => ErrorCategory::Storage,
            CartError::ConfigError { .. }
            | CartError::InvalidConfigValueError { .. }
            | CartError::MissingConfigError { .. }
            | CartError::ConfigValidationError { .. } => ErrorCategory::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, CartError>;
