use super::PaymentRule;
use crate::domain::account::{Account, AccountStatus};
use crate::domain::payment::{MakePaymentRequest, PaymentScheme};

/// CHAPS requires a live account. Settlement is guaranteed by the scheme,
/// so the balance is not checked.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChapsPaymentRule;

impl PaymentRule for ChapsPaymentRule {
    fn scheme(&self) -> PaymentScheme {
        PaymentScheme::Chaps
    }

    fn can_process(&self, account: Option<&Account>, _request: &MakePaymentRequest) -> bool {
        match account {
            None => false,
            Some(account) if !account.allowed_payment_schemes.contains(PaymentScheme::Chaps) => {
                false
            }
            Some(account) => account.status == AccountStatus::Live,
        }
    }
}
