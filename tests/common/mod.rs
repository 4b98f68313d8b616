#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use scheme_payments::domain::account::{
    Account, AccountStatus, AllowedPaymentSchemes, Amount, Balance,
};
use scheme_payments::domain::payment::{MakePaymentRequest, PaymentScheme};
use scheme_payments::domain::ports::AccountStore;
use scheme_payments::error::{PaymentError, Result};
use scheme_payments::infrastructure::in_memory::InMemoryAccountStore;
use std::sync::{Arc, Mutex};

/// In-memory store that records every `update` call it receives.
#[derive(Clone, Default)]
pub struct RecordingStore {
    inner: InMemoryAccountStore,
    updates: Arc<Mutex<Vec<Account>>>,
}

impl RecordingStore {
    pub fn with_accounts<I: IntoIterator<Item = Account>>(accounts: I) -> Self {
        Self {
            inner: InMemoryAccountStore::with_accounts(accounts),
            updates: Arc::default(),
        }
    }

    pub fn updates(&self) -> Vec<Account> {
        self.updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl AccountStore for RecordingStore {
    async fn get(&self, account_number: &str) -> Result<Option<Account>> {
        self.inner.get(account_number).await
    }

    async fn update(&self, account: Account) -> Result<()> {
        self.updates.lock().unwrap().push(account.clone());
        self.inner.update(account).await
    }

    async fn all_accounts(&self) -> Result<Vec<Account>> {
        self.inner.all_accounts().await
    }
}

/// Store whose reads succeed but whose writes always fail.
#[derive(Clone)]
pub struct ReadOnlyStore {
    inner: InMemoryAccountStore,
}

impl ReadOnlyStore {
    pub fn with_accounts<I: IntoIterator<Item = Account>>(accounts: I) -> Self {
        Self {
            inner: InMemoryAccountStore::with_accounts(accounts),
        }
    }
}

#[async_trait]
impl AccountStore for ReadOnlyStore {
    async fn get(&self, account_number: &str) -> Result<Option<Account>> {
        self.inner.get(account_number).await
    }

    async fn update(&self, _account: Account) -> Result<()> {
        Err(PaymentError::storage("store is read-only"))
    }

    async fn all_accounts(&self) -> Result<Vec<Account>> {
        self.inner.all_accounts().await
    }
}

pub fn account(
    number: &str,
    balance: Decimal,
    schemes: AllowedPaymentSchemes,
    status: AccountStatus,
) -> Account {
    Account {
        account_number: number.to_string(),
        balance: Balance::new(balance),
        allowed_payment_schemes: schemes,
        status,
    }
}

pub fn request(debtor: &str, scheme: PaymentScheme, amount: Decimal) -> MakePaymentRequest {
    MakePaymentRequest {
        creditor_account_number: "CREDITOR".to_string(),
        debtor_account_number: debtor.to_string(),
        amount: Amount::new(amount).unwrap(),
        payment_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        payment_scheme: scheme,
    }
}
