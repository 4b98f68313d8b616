//! Application layer: orchestrates account lookup, rule selection and the
//! conditional debit.
//!
//! `PaymentService` is the entry point. It owns its account store handle, so
//! separate instances never share hidden state.

pub mod payment_service;
