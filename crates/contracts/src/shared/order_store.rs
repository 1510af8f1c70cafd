//! Reads and writes the order list kept in a [`KeyValueStore`].

use crate::dashboards::d410_order_insights::Order;
use crate::shared::storage::KeyValueStore;
use thiserror::Error;

pub const DEFAULT_ORDERS_KEY: &str = "orders";

#[derive(Debug, Error)]
pub enum OrderStoreError {
    #[error("stored orders under '{key}' are malformed: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode orders: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Order list persisted as a JSON array under a single key
pub struct OrderStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> OrderStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Saved list verbatim; empty when nothing was saved yet
    pub fn load(&self) -> Result<Vec<Order>, OrderStoreError> {
        let Some(raw) = self.store.get(&self.key) else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|source| OrderStoreError::Malformed {
            key: self.key.clone(),
            source,
        })
    }

    /// Like [`load`](Self::load), but a broken list is logged and replaced by an empty one
    pub fn load_or_default(&self) -> Vec<Order> {
        match self.load() {
            Ok(orders) => {
                log::debug!("loaded {} orders from '{}'", orders.len(), self.key);
                orders
            }
            Err(e) => {
                log::warn!("{}", e);
                Vec::new()
            }
        }
    }

    pub fn save(&self, orders: &[Order]) -> Result<(), OrderStoreError> {
        let raw = serde_json::to_string(orders)?;
        self.store.set(&self.key, &raw);
        Ok(())
    }

    pub fn clear(&self) {
        self.store.remove(&self.key);
    }
}
