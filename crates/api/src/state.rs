use std::sync::Arc;

use wallet_core::store::memory::{MemoryAssetStore, MemoryCustomerStore};
use wallet_core::store::{AssetStore, CustomerStore};

use crate::config::ServerConfig;

/// Handler state: the two stores behind trait objects, plus configuration.
///
/// Cloning copies three `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub assets: Arc<dyn AssetStore>,
    pub customers: Arc<dyn CustomerStore>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(
        assets: Arc<dyn AssetStore>,
        customers: Arc<dyn CustomerStore>,
        config: ServerConfig,
    ) -> Self {
        Self {
            assets,
            customers,
            config: Arc::new(config),
        }
    }

    /// State over fresh, empty in-memory stores.
    pub fn in_memory(config: ServerConfig) -> Self {
        Self::new(
            Arc::new(MemoryAssetStore::new()),
            Arc::new(MemoryCustomerStore::new()),
            config,
        )
    }
}
