use crate::domain::account::Account;
use crate::domain::payment::{MakePaymentRequest, MakePaymentResult};
use crate::domain::ports::AccountStoreBox;
use crate::domain::rules::{PaymentRuleFactory, RuleSelector};
use crate::error::Result;
use tracing::info;

/// Validates and executes debit requests against the account store.
///
/// Calls against the same account are a read-modify-write with no locking;
/// callers that need serialisation must provide it at the store boundary.
pub struct PaymentService<R: RuleSelector = PaymentRuleFactory> {
    account_store: AccountStoreBox,
    rules: R,
}

impl PaymentService {
    /// Creates a service using the standard scheme rules.
    pub fn new(account_store: AccountStoreBox) -> Self {
        Self::with_rules(account_store, PaymentRuleFactory::new())
    }
}

impl<R: RuleSelector> PaymentService<R> {
    pub fn with_rules(account_store: AccountStoreBox, rules: R) -> Self {
        Self {
            account_store,
            rules,
        }
    }

    /// Debits the debtor account if the scheme rule allows it.
    ///
    /// A rejection is `Ok` with `success == false` and leaves the store
    /// untouched. On approval the balance is reduced by the request amount
    /// and written back with exactly one `update` call.
    ///
    /// # Errors
    ///
    /// * `PaymentError::UnsupportedScheme` if no rule is registered for the
    ///   request's scheme.
    /// * `PaymentError::BalanceOverflow` if the debit leaves the `Decimal`
    ///   range. Nothing is written in that case.
    /// * `PaymentError::StorageError` if the store fails on read or write.
    #[tracing::instrument(
        name = "make_payment",
        skip_all,
        fields(
            debtor = %request.debtor_account_number,
            scheme = %request.payment_scheme,
            amount = %request.amount.value(),
        )
    )]
    pub async fn make_payment(&self, request: &MakePaymentRequest) -> Result<MakePaymentResult> {
        let account = self
            .account_store
            .get(&request.debtor_account_number)
            .await?;

        let rule = self.rules.rule_for(request.payment_scheme)?;
        let approved = rule.can_process(account.as_ref(), request);

        match account {
            Some(mut account) if approved => {
                account.debit(request.amount)?;
                info!(balance = %account.balance, "payment approved");
                self.account_store.update(account).await?;
                Ok(MakePaymentResult::succeeded())
            }
            Some(_) => {
                info!("payment rejected by scheme rule");
                Ok(MakePaymentResult::failed())
            }
            None => {
                info!("payment rejected, debtor account not found");
                Ok(MakePaymentResult::failed())
            }
        }
    }

    /// Consumes the service and returns the final state of all accounts.
    pub async fn into_results(self) -> Result<Vec<Account>> {
        self.account_store.all_accounts().await
    }
}
