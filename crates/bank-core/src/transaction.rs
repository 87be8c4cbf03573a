use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::wire::null_as_default;
use crate::{Item, Timestamp};

/// A movement of money on an account
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: Uuid,
    /// Identifier assigned by the external source (e.g. an open banking
    /// feed). Empty for transactions entered by hand.
    #[serde(deserialize_with = "null_as_default")]
    pub external_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub account_uuid: Uuid,
    pub date: Timestamp,
    #[serde(deserialize_with = "null_as_default")]
    pub business_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub debit: bool,
    pub credit: bool,
    pub amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<Item>,
    pub active: bool,
    pub create_date: Timestamp,
    pub update_date: Timestamp,
}

pub type Transactions = Vec<Transaction>;

impl Transaction {
    /// Whether the transaction was entered manually rather than imported
    pub fn is_manual(&self) -> bool {
        self.external_id.is_empty()
    }

    /// Sum of item amounts less their discounts
    pub fn items_total(&self) -> f64 {
        self.items.iter().map(|i| i.amount - i.discount).sum()
    }
}
