use super::PaymentRule;
use crate::domain::account::Account;
use crate::domain::payment::{MakePaymentRequest, PaymentScheme};

/// Bacs is batched: only the scheme flag is checked. Neither balance nor
/// status gates a Bacs debit.
#[derive(Debug, Default, Clone, Copy)]
pub struct BacsPaymentRule;

impl PaymentRule for BacsPaymentRule {
    fn scheme(&self) -> PaymentScheme {
        PaymentScheme::Bacs
    }

    fn can_process(&self, account: Option<&Account>, _request: &MakePaymentRequest) -> bool {
        account.is_some_and(|account| account.allowed_payment_schemes.contains(PaymentScheme::Bacs))
    }
}
