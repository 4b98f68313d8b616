//! Domain layer: account and payment types, the scheme rules, and the
//! storage port the application layer depends on.

pub mod account;
pub mod payment;
pub mod ports;
pub mod rules;
