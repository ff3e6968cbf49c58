use crate::core::{Cart, Storage};
use crate::utils::error::Result;

pub const DEFAULT_CART_KEY: &str = "@RocketShoes:cart";

/// Persists the whole cart under a single namespaced storage key.
pub struct CartRepository<S: Storage> {
    storage: S,
    key: String,
}

impl<S: Storage> CartRepository<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn with_default_key(storage: S) -> Self {
        Self::new(storage, DEFAULT_CART_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the stored cart. Missing or unreadable data yields an empty cart.
    pub async fn load(&self) -> Cart {
        let raw = match self.storage.get_item(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("No stored cart under {}", self.key);
                return Cart::new();
            }
            Err(e) => {
                tracing::warn!("Failed to read stored cart {}: {}", self.key, e);
                return Cart::new();
            }
        };

        match serde_json::from_str::<Cart>(&raw) {
            Ok(cart) => {
                let cart = cart.normalized();
                tracing::debug!("Hydrated cart with {} items", cart.len());
                cart
            }
            Err(e) => {
                tracing::warn!("Discarding unparsable cart under {}: {}", self.key, e);
                Cart::new()
            }
        }
    }

    /// Overwrites the slot with the full serialized cart.
    pub async fn save(&self, cart: &Cart) -> Result<()> {
        let payload = serde_json::to_string(cart)?;
        self.storage.set_item(&self.key, &payload).await?;
        tracing::debug!("Persisted cart ({} items, {} bytes)", cart.len(), payload.len());
        Ok(())
    }
}
