//! Core types for the bank service client
//!
//! This crate provides the value types exchanged with the remote bank
//! service (Bank, Account, BankAccount, Transaction, Item, Tag and
//! AccountBalance) together with the structural equality used to verify
//! nested aggregates.
//!
//! Values are transient: they are decoded fresh from every response and the
//! server owns identity, timestamps and the `active` flag.

mod account;
mod account_balance;
mod bank;
mod equality;
mod item;
mod owner;
mod tag;
mod timestamp;
mod transaction;
pub mod wire;

pub use account::{Account, Accounts, BankAccount, BankAccounts};
pub use account_balance::AccountBalance;
pub use bank::{Bank, Banks};
pub use equality::DeepEq;
pub use item::{Item, Items};
pub use owner::Owner;
pub use tag::{Tag, Tags};
pub use timestamp::Timestamp;
pub use transaction::{Transaction, Transactions};

/// Re-exported so callers can name identifiers without a direct `uuid` dependency
pub use uuid::Uuid;
