use crate::domain::account::Account;
use crate::domain::ports::AccountStore;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family for storing account records.
pub const CF_ACCOUNTS: &str = "accounts";

/// A persistent account store backed by RocksDB.
///
/// Accounts are keyed by the UTF-8 bytes of their account number and stored
/// as JSON. `Clone` shares the underlying `Arc<DB>`.
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
}

impl RocksDBStore {
    /// Opens or creates a RocksDB instance at `path`, creating the accounts
    /// column family if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_accounts = ColumnFamilyDescriptor::new(CF_ACCOUNTS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_accounts])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn accounts_cf(&self) -> Result<&rocksdb::ColumnFamily> {
        self.db
            .cf_handle(CF_ACCOUNTS)
            .ok_or_else(|| PaymentError::storage("Accounts column family not found"))
    }
}

#[async_trait]
impl AccountStore for RocksDBStore {
    async fn get(&self, account_number: &str) -> Result<Option<Account>> {
        let cf = self.accounts_cf()?;

        match self.db.get_cf(cf, account_number.as_bytes())? {
            Some(bytes) => {
                let account = serde_json::from_slice(&bytes).map_err(PaymentError::storage)?;
                Ok(Some(account))
            }
            None => Ok(None),
        }
    }

    async fn update(&self, account: Account) -> Result<()> {
        let cf = self.accounts_cf()?;

        let value = serde_json::to_vec(&account).map_err(PaymentError::storage)?;
        self.db
            .put_cf(cf, account.account_number.as_bytes(), value)?;

        Ok(())
    }

    async fn all_accounts(&self) -> Result<Vec<Account>> {
        let cf = self.accounts_cf()?;

        let mut accounts = Vec::new();
        for item in self.db.iterator_cf(cf, rocksdb::IteratorMode::Start) {
            let (_key, value) = item?;
            let account: Account =
                serde_json::from_slice(&value).map_err(PaymentError::storage)?;
            accounts.push(account);
        }

        Ok(accounts)
    }
}
