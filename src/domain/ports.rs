use super::account::Account;
use crate::error::Result;
use async_trait::async_trait;

/// Keyed store of account records consumed by the payment service.
///
/// A lookup miss is `Ok(None)`, never an error. `Err` is reserved for
/// storage faults so they can be told apart from business rejections.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn get(&self, account_number: &str) -> Result<Option<Account>>;
    /// Upsert keyed by `account.account_number`.
    async fn update(&self, account: Account) -> Result<()>;
    async fn all_accounts(&self) -> Result<Vec<Account>>;
}

pub type AccountStoreBox = Box<dyn AccountStore>;
pub type AccountStoreFactory = Box<dyn Fn() -> AccountStoreBox + Send + Sync>;
