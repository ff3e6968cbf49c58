use crate::domain::model::ProductId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    ProductAdded,
    OutOfStock,
    InvalidQuantity,
    NotFound,
    AddFailed,
    RemoveFailed,
    UpdateFailed,
}

impl NoticeKind {
    pub fn level(self) -> NoticeLevel {
        match self {
            NoticeKind::ProductAdded => NoticeLevel::Success,
            _ => NoticeLevel::Error,
        }
    }

    /// Text shown to the shopper. `InvalidQuantity` shares the out-of-stock wording
    /// and `NotFound` shares the remove-failure wording.
    pub fn message(self) -> &'static str {
        match self {
            NoticeKind::ProductAdded => "Product added successfully",
            NoticeKind::OutOfStock | NoticeKind::InvalidQuantity => {
                "Requested quantity is out of stock"
            }
            NoticeKind::AddFailed => "Failed to add product",
            NoticeKind::NotFound | NoticeKind::RemoveFailed => "Failed to remove product",
            NoticeKind::UpdateFailed => "Failed to change product quantity",
        }
    }

    pub fn is_stock_rejection(self) -> bool {
        matches!(self, NoticeKind::OutOfStock | NoticeKind::InvalidQuantity)
    }
}

/// A user-facing message emitted by the cart store instead of an error return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub level: NoticeLevel,
    pub message: String,
    pub product_id: ProductId,
    /// Internal error text, when the notice stems from one.
    pub detail: Option<String>,
    pub at: DateTime<Utc>,
}

impl Notice {
    pub fn new(kind: NoticeKind, product_id: ProductId) -> Self {
        Self {
            kind,
            level: kind.level(),
            message: kind.message().to_string(),
            product_id,
            detail: None,
            at: Utc::now(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}
