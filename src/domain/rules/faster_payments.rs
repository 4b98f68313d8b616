use super::{PaymentRule, has_sufficient_balance};
use crate::domain::account::Account;
use crate::domain::payment::{MakePaymentRequest, PaymentScheme};

/// Faster Payments settle in real time, so the debtor must hold the full
/// amount at the moment of the request.
#[derive(Debug, Default, Clone, Copy)]
pub struct FasterPaymentsRule;

impl PaymentRule for FasterPaymentsRule {
    fn scheme(&self) -> PaymentScheme {
        PaymentScheme::FasterPayments
    }

    fn can_process(&self, account: Option<&Account>, request: &MakePaymentRequest) -> bool {
        let Some(account) = account else {
            return false;
        };

        account
            .allowed_payment_schemes
            .contains(PaymentScheme::FasterPayments)
            && has_sufficient_balance(account, request.amount)
    }
}
