use crate::domain::account::Account;
use crate::error::{PaymentError, Result};
use std::io::Read;

/// Reads seed accounts from a CSV source.
///
/// Expected header: `account_number, balance, allowed_payment_schemes, status`,
/// where `allowed_payment_schemes` is a `|`-separated list such as
/// `FasterPayments|Chaps`.
pub struct AccountReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> AccountReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    pub fn accounts(self) -> impl Iterator<Item = Result<Account>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}
