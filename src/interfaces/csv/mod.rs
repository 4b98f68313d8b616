//! CSV adapters translating files into domain types and back.

pub mod account_reader;
pub mod account_writer;
pub mod payment_reader;
