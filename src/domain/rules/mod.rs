//! Scheme eligibility rules and the registry that selects them.
//!
//! Each rule is a stateless predicate over an (optional) account and a
//! request. Rules never mutate their inputs, so a single instance is shared
//! across every call.

mod bacs;
mod chaps;
mod faster_payments;

pub use bacs::BacsPaymentRule;
pub use chaps::ChapsPaymentRule;
pub use faster_payments::FasterPaymentsRule;

use super::account::{Account, Amount, Balance};
use super::payment::{MakePaymentRequest, PaymentScheme};
use crate::error::{PaymentError, Result};
use std::collections::HashMap;

pub trait PaymentRule: Send + Sync {
    /// The scheme this rule is registered under.
    fn scheme(&self) -> PaymentScheme;

    /// Returns `true` when `account` may be debited for `request`.
    /// A missing account is always rejected.
    fn can_process(&self, account: Option<&Account>, request: &MakePaymentRequest) -> bool;
}

fn has_sufficient_balance(account: &Account, amount: Amount) -> bool {
    account.balance >= Balance::from(amount)
}

/// Resolves the rule for a scheme.
pub trait RuleSelector: Send + Sync {
    fn rule_for(&self, scheme: PaymentScheme) -> Result<&dyn PaymentRule>;
}

/// Registry mapping each scheme to its rule.
pub struct PaymentRuleFactory {
    rules: HashMap<PaymentScheme, Box<dyn PaymentRule>>,
}

impl PaymentRuleFactory {
    /// Registers the standard rule for every scheme.
    pub fn new() -> Self {
        Self::with_rules(PaymentScheme::ALL.into_iter().map(standard_rule))
    }

    /// Builds a registry from an explicit rule list. A later rule for the
    /// same scheme replaces an earlier one.
    pub fn with_rules<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn PaymentRule>>,
    {
        let rules = rules
            .into_iter()
            .map(|rule| (rule.scheme(), rule))
            .collect();
        Self { rules }
    }

    pub fn supports(&self, scheme: PaymentScheme) -> bool {
        self.rules.contains_key(&scheme)
    }
}

fn standard_rule(scheme: PaymentScheme) -> Box<dyn PaymentRule> {
    match scheme {
        PaymentScheme::FasterPayments => Box::new(FasterPaymentsRule),
        PaymentScheme::Bacs => Box::new(BacsPaymentRule),
        PaymentScheme::Chaps => Box::new(ChapsPaymentRule),
    }
}

impl Default for PaymentRuleFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleSelector for PaymentRuleFactory {
    fn rule_for(&self, scheme: PaymentScheme) -> Result<&dyn PaymentRule> {
        match self.rules.get(&scheme) {
            Some(rule) => Ok(rule.as_ref()),
            None => {
                // The scheme enum is closed, so a miss means the registry drifted.
                tracing::error!(%scheme, "no payment rule registered for scheme");
                Err(PaymentError::UnsupportedScheme(scheme))
            }
        }
    }
}
