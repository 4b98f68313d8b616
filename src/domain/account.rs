use super::payment::PaymentScheme;
use crate::error::PaymentError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

/// Represents an account balance.
///
/// This is a wrapper around `rust_decimal::Decimal`. A balance may become
/// negative through schemes that do not check funds (Bacs, Chaps).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Balance(pub Decimal);

/// Represents a strictly positive monetary amount for a payment.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, PaymentError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(PaymentError::ValidationError(format!(
                "Amount must be positive, got {value}"
            )))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = PaymentError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl From<Amount> for Balance {
    fn from(amount: Amount) -> Self {
        Self(amount.0)
    }
}

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns `None` if the result falls outside the `Decimal` range.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
pub enum AccountStatus {
    #[default]
    Live,
    Disabled,
    InboundPaymentsOnly,
}

/// The set of schemes an account may be debited through, one bit per scheme.
///
/// Text form is a `|`-separated list of scheme names, e.g. `FasterPayments|Bacs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AllowedPaymentSchemes(u8);

impl AllowedPaymentSchemes {
    pub const FASTER_PAYMENTS: Self = Self(1 << 0);
    pub const BACS: Self = Self(1 << 1);
    pub const CHAPS: Self = Self(1 << 2);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        Self(Self::FASTER_PAYMENTS.0 | Self::BACS.0 | Self::CHAPS.0)
    }

    pub fn contains(&self, scheme: PaymentScheme) -> bool {
        let flag = Self::from(scheme);
        self.0 & flag.0 == flag.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn schemes(&self) -> impl Iterator<Item = PaymentScheme> + '_ {
        PaymentScheme::ALL
            .into_iter()
            .filter(move |scheme| self.contains(*scheme))
    }
}

impl From<PaymentScheme> for AllowedPaymentSchemes {
    fn from(scheme: PaymentScheme) -> Self {
        match scheme {
            PaymentScheme::FasterPayments => Self::FASTER_PAYMENTS,
            PaymentScheme::Bacs => Self::BACS,
            PaymentScheme::Chaps => Self::CHAPS,
        }
    }
}

impl FromIterator<PaymentScheme> for AllowedPaymentSchemes {
    fn from_iter<I: IntoIterator<Item = PaymentScheme>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |acc, scheme| acc | Self::from(scheme))
    }
}

impl BitOr for AllowedPaymentSchemes {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for AllowedPaymentSchemes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.schemes().map(|scheme| scheme.as_str()).collect();
        f.write_str(&names.join("|"))
    }
}

impl FromStr for AllowedPaymentSchemes {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split('|')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<PaymentScheme>())
            .collect::<Result<AllowedPaymentSchemes, _>>()
            .map_err(PaymentError::ValidationError)
    }
}

impl TryFrom<String> for AllowedPaymentSchemes {
    type Error = PaymentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AllowedPaymentSchemes> for String {
    fn from(schemes: AllowedPaymentSchemes) -> Self {
        schemes.to_string()
    }
}

/// An account record as held by the account store.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Account {
    pub account_number: String,
    pub balance: Balance,
    pub allowed_payment_schemes: AllowedPaymentSchemes,
    pub status: AccountStatus,
}

impl Account {
    pub fn new(account_number: impl Into<String>) -> Self {
        Self {
            account_number: account_number.into(),
            balance: Balance::ZERO,
            allowed_payment_schemes: AllowedPaymentSchemes::empty(),
            status: AccountStatus::Live,
        }
    }

    /// Subtracts `amount` from the balance without any eligibility check.
    /// Callers gate this behind a payment rule.
    ///
    /// Leaves the balance untouched and fails with
    /// `PaymentError::BalanceOverflow` if the result is not representable.
    pub fn debit(&mut self, amount: Amount) -> Result<(), PaymentError> {
        self.balance = self
            .balance
            .checked_sub(Balance::from(amount))
            .ok_or_else(|| PaymentError::BalanceOverflow(self.account_number.clone()))?;
        Ok(())
    }
}
