use crate::core::repository::CartRepository;
use crate::core::{
    Cart, LineItem, Notice, NoticeKind, Notifier, ProductCatalog, ProductId, StockOracle, Storage,
    UpdateProductAmount,
};
use crate::utils::error::{CartError, Result};
use std::sync::Arc;
use tokio::sync::{watch, Mutex};

/// What a cart operation did. Failures are reported through the notifier, never returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Committed,
    Rejected(NoticeKind),
    /// Cart unchanged and nothing reported.
    Skipped,
}

enum Step {
    Commit(Cart),
    Skip,
}

pub struct CartStore<S: Storage> {
    repository: CartRepository<S>,
    catalog: Arc<dyn ProductCatalog>,
    stock: Arc<dyn StockOracle>,
    notifier: Arc<dyn Notifier>,
    state: watch::Sender<Cart>,
    // Held across lookups and commit so every mutation sees the latest cart.
    write_lock: Mutex<()>,
}

impl<S: Storage> CartStore<S> {
    /// Opens the store, hydrating the cart from the repository.
    pub async fn open(
        repository: CartRepository<S>,
        catalog: Arc<dyn ProductCatalog>,
        stock: Arc<dyn StockOracle>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let cart = repository.load().await;
        tracing::info!(
            "Cart store opened with {} items from {}",
            cart.len(),
            repository.key()
        );
        let (state, _) = watch::channel(cart);

        Self {
            repository,
            catalog,
            stock,
            notifier,
            state,
            write_lock: Mutex::new(()),
        }
    }

    pub fn cart(&self) -> Cart {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.state.subscribe()
    }

    pub async fn add_product(&self, product_id: ProductId) -> Outcome {
        let _guard = self.write_lock.lock().await;
        let current = self.cart();

        let step = self.try_add_product(&current, product_id).await;
        let is_new = !current.contains(product_id);
        let outcome = self.finish(step, product_id, NoticeKind::AddFailed).await;

        if outcome == Outcome::Committed && is_new {
            self.notifier.notify(Notice::new(NoticeKind::ProductAdded, product_id));
        }
        outcome
    }

    pub async fn remove_product(&self, product_id: ProductId) -> Outcome {
        let _guard = self.write_lock.lock().await;
        let current = self.cart();

        let step = if current.contains(product_id) {
            Ok(Step::Commit(current.without(product_id)))
        } else {
            Err(CartError::NotFound { product_id })
        };
        self.finish(step, product_id, NoticeKind::RemoveFailed).await
    }

    pub async fn update_product_amount(&self, request: UpdateProductAmount) -> Outcome {
        let _guard = self.write_lock.lock().await;
        let current = self.cart();

        let step = self.try_update_product_amount(&current, request).await;
        self.finish(step, request.product_id, NoticeKind::UpdateFailed).await
    }

    async fn try_add_product(&self, current: &Cart, product_id: ProductId) -> Result<Step> {
        if let Some(existing) = current.find(product_id) {
            let stock = self.stock.stock(product_id).await?;
            let requested = i64::from(existing.amount) + 1;
            if stock.amount < requested {
                return Err(CartError::OutOfStock {
                    product_id,
                    requested,
                    available: stock.amount,
                });
            }
            let next = existing
                .amount
                .checked_add(1)
                .ok_or(CartError::OutOfStock {
                    product_id,
                    requested,
                    available: stock.amount,
                })?;
            return Ok(Step::Commit(current.with_amount(product_id, next)));
        }

        let product = self.catalog.product(product_id).await?;
        let stock = self.stock.stock(product_id).await?;
        if stock.amount > 0 {
            Ok(Step::Commit(current.with_appended(LineItem::new(product))))
        } else {
            tracing::debug!("Product {} has no stock, nothing added", product_id);
            Ok(Step::Skip)
        }
    }

    async fn try_update_product_amount(
        &self,
        current: &Cart,
        request: UpdateProductAmount,
    ) -> Result<Step> {
        let UpdateProductAmount { product_id, amount } = request;
        if amount < 1 {
            return Err(CartError::InvalidQuantity { product_id, amount });
        }

        let stock = self.stock.stock(product_id).await?;
        if amount > stock.amount {
            return Err(CartError::OutOfStock {
                product_id,
                requested: amount,
                available: stock.amount,
            });
        }

        let amount = u32::try_from(amount).map_err(|_| CartError::InvalidQuantity {
            product_id,
            amount,
        })?;
        Ok(Step::Commit(current.with_amount(product_id, amount)))
    }

    /// Commits a computed cart or reports why nothing changed.
    async fn finish(
        &self,
        step: Result<Step>,
        product_id: ProductId,
        failure: NoticeKind,
    ) -> Outcome {
        let result = match step {
            Ok(Step::Commit(next)) => self.commit(next).await,
            Ok(Step::Skip) => return Outcome::Skipped,
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => Outcome::Committed,
            Err(e) => {
                let kind = match &e {
                    CartError::OutOfStock { .. } => NoticeKind::OutOfStock,
                    CartError::InvalidQuantity { .. } => NoticeKind::InvalidQuantity,
                    CartError::NotFound { .. } => NoticeKind::NotFound,
                    _ => failure,
                };
                tracing::warn!(
                    "Cart operation on product {} rejected (Category: {:?}): {}",
                    product_id,
                    e.category(),
                    e
                );
                self.notifier
                    .notify(Notice::new(kind, product_id).with_detail(e.to_string()));
                Outcome::Rejected(kind)
            }
        }
    }

    async fn commit(&self, next: Cart) -> Result<()> {
        self.repository.save(&next).await?;
        self.state.send_replace(next);
        Ok(())
    }
}
