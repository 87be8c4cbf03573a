use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::owner::flattened;
use crate::wire::{null_as_default, optional_uuid};
use crate::{AccountBalance, Bank, Owner, Timestamp, Transaction};

/// An account held by a user or organisation, optionally at a known bank
///
/// Older deployments spell `number` as `account_number`. Either key decodes
/// into [`Account::number`], and `number` wins when a payload carries both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "AccountRecord")]
pub struct Account {
    pub uuid: Uuid,
    #[serde(flatten, with = "flattened")]
    pub owner: Option<Owner>,
    #[serde(with = "optional_uuid")]
    pub bank_uuid: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<Bank>,
    pub name: String,
    pub alias: String,
    pub number: String,
    pub integration_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<AccountBalance>,
    pub active: bool,
    pub create_date: Timestamp,
    pub update_date: Timestamp,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct AccountRecord {
    #[serde(deserialize_with = "null_as_default")]
    uuid: Uuid,
    #[serde(flatten, with = "flattened")]
    owner: Option<Owner>,
    #[serde(with = "optional_uuid")]
    bank_uuid: Option<Uuid>,
    bank: Option<Bank>,
    #[serde(deserialize_with = "null_as_default")]
    name: String,
    #[serde(deserialize_with = "null_as_default")]
    alias: String,
    #[serde(deserialize_with = "null_as_default")]
    number: String,
    #[serde(deserialize_with = "null_as_default")]
    account_number: String,
    #[serde(deserialize_with = "null_as_default")]
    integration_status: String,
    balance: Option<AccountBalance>,
    active: bool,
    create_date: Timestamp,
    update_date: Timestamp,
}

impl From<AccountRecord> for Account {
    fn from(record: AccountRecord) -> Self {
        let number = if record.number.is_empty() {
            record.account_number
        } else {
            record.number
        };

        Self {
            uuid: record.uuid,
            owner: record.owner,
            bank_uuid: record.bank_uuid,
            bank: record.bank,
            name: record.name,
            alias: record.alias,
            number,
            integration_status: record.integration_status,
            balance: record.balance,
            active: record.active,
            create_date: record.create_date,
            update_date: record.update_date,
        }
    }
}

pub type Accounts = Vec<Account>;

impl Account {
    /// Display name, preferring the user-chosen alias
    pub fn display_name(&self) -> &str {
        if self.alias.is_empty() {
            &self.name
        } else {
            &self.alias
        }
    }
}

/// The legacy account shape served under `/bank-account`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankAccount {
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: Uuid,
    #[serde(flatten, with = "flattened")]
    pub owner: Option<Owner>,
    #[serde(with = "optional_uuid")]
    pub bank_uuid: Option<Uuid>,
    #[serde(deserialize_with = "null_as_default")]
    pub account_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub transactions: Vec<Transaction>,
    pub active: bool,
    pub create_date: Timestamp,
    pub update_date: Timestamp,
}

pub type BankAccounts = Vec<BankAccount>;
