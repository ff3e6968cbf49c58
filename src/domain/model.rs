use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub type ProductId = u64;

/// Catalog attributes of a product, as returned by `GET products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(flatten)]
    pub product: Product,
    pub amount: u32,
}

impl LineItem {
    pub fn new(product: Product) -> Self {
        Self { product, amount: 1 }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }
}

/// Available quantity for a product, as returned by `GET stock/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    #[serde(default)]
    pub id: ProductId,
    pub amount: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
}

/// Ordered cart contents. Serialized as a plain JSON array of line items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart(Vec<LineItem>);

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn find(&self, product_id: ProductId) -> Option<&LineItem> {
        self.0.iter().find(|item| item.id() == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.find(product_id).is_some()
    }

    pub fn with_appended(&self, item: LineItem) -> Self {
        let mut items = self.0.clone();
        items.push(item);
        Self(items)
    }

    /// Sets the amount of the matching item. Unknown ids leave the items as they are.
    pub fn with_amount(&self, product_id: ProductId, amount: u32) -> Self {
        Self(
            self.0
                .iter()
                .map(|item| {
                    if item.id() == product_id {
                        LineItem {
                            amount,
                            ..item.clone()
                        }
                    } else {
                        item.clone()
                    }
                })
                .collect(),
        )
    }

    pub fn without(&self, product_id: ProductId) -> Self {
        Self(
            self.0
                .iter()
                .filter(|item| item.id() != product_id)
                .cloned()
                .collect(),
        )
    }

    /// Drops zero-amount entries and repeated ids, keeping the first occurrence.
    pub fn normalized(self) -> Self {
        let mut seen = HashSet::new();
        Self(
            self.0
                .into_iter()
                .filter(|item| item.amount >= 1 && seen.insert(item.id()))
                .collect(),
        )
    }
}

impl From<Vec<LineItem>> for Cart {
    fn from(items: Vec<LineItem>) -> Self {
        Self(items)
    }
}
