//! Per-resource operations
//!
//! Each module adds the calls for one resource to [`crate::BankService`].
//! They all follow the same shape: build a [`crate::Request`], exchange it,
//! and decode the named payload under the operation's expected status.

mod accounts;
mod balances;
mod bank_accounts;
mod banks;
mod items;
mod query;
mod tags;
mod transactions;

pub use transactions::DateRange;
