//! Application State

use std::sync::Arc;

use crate::core::Config;
use crate::delivery::{QuoteCalculator, ZoneResolver};
use crate::discount::DiscountEngine;
use crate::store::{CheckoutStore, MemoryStore};

/// Application state shared by every request handler.
///
/// Holds the injected entity store and the checkout engines built over it.
/// Cloning is cheap: everything inside is an `Arc` (or built from them).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Config,
    /// Entity store (zones, coupons, promotions)
    pub store: Arc<dyn CheckoutStore>,
    /// Delivery quoting engine
    pub quotes: QuoteCalculator,
    /// Coupon/promotion validation engine
    pub discounts: DiscountEngine,
}

impl AppState {
    /// Build the state over any store implementation
    pub fn new<S>(config: Config, store: Arc<S>) -> Self
    where
        S: CheckoutStore + 'static,
    {
        let resolver = ZoneResolver::new(store.clone());
        let quotes = QuoteCalculator::new(resolver);
        let discounts = DiscountEngine::new(store.clone());

        Self {
            config,
            store,
            quotes,
            discounts,
        }
    }

    /// State backed by the bundled in-memory store
    pub fn in_memory(config: Config) -> Self {
        Self::new(config, Arc::new(MemoryStore::new()))
    }
}
