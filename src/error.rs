use crate::domain::payment::PaymentScheme;
use thiserror::Error;

/// Errors surfaced by the payment core and its adapters.
///
/// A rejected payment is *not* an error: it is an `Ok` result with
/// `success == false`. Everything here reaches the caller undisguised.
#[derive(Error, Debug)]
pub enum PaymentError {
    /// The rule registry has no entry for a scheme of the closed enum.
    /// This is a configuration defect, never a per-request condition.
    #[error("Payment scheme {0} is not supported")]
    UnsupportedScheme(PaymentScheme),
    /// Debiting the account would leave a balance outside the `Decimal` range.
    #[error("Balance overflow on account {0}")]
    BalanceOverflow(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Storage error: {0}")]
    StorageError(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PaymentError {
    pub fn storage<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::StorageError(err.into())
    }
}

#[cfg(feature = "storage-rocksdb")]
impl From<rocksdb::Error> for PaymentError {
    fn from(err: rocksdb::Error) -> Self {
        Self::StorageError(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, PaymentError>;
