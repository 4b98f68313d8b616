use super::account::Amount;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The payment rails an account can be debited through.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
pub enum PaymentScheme {
    FasterPayments,
    Bacs,
    Chaps,
}

impl PaymentScheme {
    pub const ALL: [PaymentScheme; 3] = [Self::FasterPayments, Self::Bacs, Self::Chaps];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FasterPayments => "FasterPayments",
            Self::Bacs => "Bacs",
            Self::Chaps => "Chaps",
        }
    }
}

impl fmt::Display for PaymentScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.as_str() == s)
            .ok_or_else(|| format!("unknown payment scheme '{s}'"))
    }
}

/// A single debit instruction against the debtor's account.
///
/// Created per call and never persisted. Only the debtor, the scheme and the
/// amount take part in rule evaluation.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct MakePaymentRequest {
    pub creditor_account_number: String,
    pub debtor_account_number: String,
    pub amount: Amount,
    pub payment_date: NaiveDate,
    pub payment_scheme: PaymentScheme,
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
pub struct MakePaymentResult {
    pub success: bool,
}

impl MakePaymentResult {
    pub fn succeeded() -> Self {
        Self { success: true }
    }

    pub fn failed() -> Self {
        Self { success: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_parse_is_case_sensitive() {
        assert_eq!(
            "FasterPayments".parse::<PaymentScheme>(),
            Ok(PaymentScheme::FasterPayments)
        );
        assert_eq!("Chaps".parse::<PaymentScheme>(), Ok(PaymentScheme::Chaps));
        assert!("chaps".parse::<PaymentScheme>().is_err());
        assert!("Swift".parse::<PaymentScheme>().is_err());
    }

    #[test]
    fn test_scheme_serialization() {
        let json = serde_json::to_string(&PaymentScheme::Bacs).unwrap();
        assert_eq!(json, "\"Bacs\"");
    }
}
