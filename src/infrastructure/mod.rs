//! Account store adapters and the factory that picks one from configuration.

pub mod in_memory;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;

use crate::config::{AppConfig, DataStoreType};
use crate::domain::ports::AccountStoreBox;
use crate::error::Result;
use in_memory::InMemoryAccountStore;

/// Builds the account store selected by [`AppConfig::data_store_type`].
pub struct DataStoreFactory {
    config: AppConfig,
}

impl DataStoreFactory {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn data_store(&self) -> Result<AccountStoreBox> {
        match self.config.data_store_type {
            DataStoreType::Primary => {
                tracing::debug!("using in-memory account store");
                Ok(Box::new(InMemoryAccountStore::new()))
            }
            DataStoreType::Backup => self.backup_store(),
        }
    }

    #[cfg(feature = "storage-rocksdb")]
    fn backup_store(&self) -> Result<AccountStoreBox> {
        let path = &self.config.backup_db_path;
        if path.as_os_str().is_empty() {
            return Err(crate::error::PaymentError::ConfigError(
                "backup database path must not be empty".to_string(),
            ));
        }
        tracing::debug!(path = %path.display(), "opening RocksDB account store");
        Ok(Box::new(self::rocksdb::RocksDBStore::open(path)?))
    }

    #[cfg(not(feature = "storage-rocksdb"))]
    fn backup_store(&self) -> Result<AccountStoreBox> {
        tracing::warn!(
            "Backup data store requested, but 'storage-rocksdb' feature is not enabled. \
             Falling back to in-memory storage."
        );
        Ok(Box::new(InMemoryAccountStore::new()))
    }
}
