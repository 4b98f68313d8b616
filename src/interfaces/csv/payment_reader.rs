use crate::domain::account::Amount;
use crate::domain::payment::{MakePaymentRequest, PaymentScheme};
use crate::error::{PaymentError, Result};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct PaymentRow {
    debtor_account_number: String,
    creditor_account_number: String,
    amount: Decimal,
    payment_scheme: PaymentScheme,
    payment_date: Option<NaiveDate>,
}

impl PaymentRow {
    fn into_request(self, today: NaiveDate) -> Result<MakePaymentRequest> {
        Ok(MakePaymentRequest {
            creditor_account_number: self.creditor_account_number,
            debtor_account_number: self.debtor_account_number,
            amount: Amount::new(self.amount)?,
            payment_date: self.payment_date.unwrap_or(today),
            payment_scheme: self.payment_scheme,
        })
    }
}

/// Reads payment requests from a CSV source.
///
/// Expected header: `debtor_account_number, creditor_account_number, amount,
/// payment_scheme[, payment_date]`. Rows without a date are stamped with
/// today's date (UTC).
pub struct PaymentRequestReader<R: Read> {
    reader: csv::Reader<R>,
    today: NaiveDate,
}

impl<R: Read> PaymentRequestReader<R> {
    pub fn new(source: R) -> Self {
        Self::with_default_date(source, Utc::now().date_naive())
    }

    pub fn with_default_date(source: R, today: NaiveDate) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader, today }
    }

    /// Lazily reads and validates requests. Each malformed row yields its own
    /// `Err` without ending the stream.
    pub fn requests(self) -> impl Iterator<Item = Result<MakePaymentRequest>> {
        let today = self.today;
        self.reader
            .into_deserialize::<PaymentRow>()
            .map(move |row| row.map_err(PaymentError::from)?.into_request(today))
    }
}
