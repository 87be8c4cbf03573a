//! The `{message, data, errors}` response envelope
//!
//! Every operation declares a named payload type for `data` instead of
//! decoding into an untyped map. `data` may arrive as `{}`, `null` or not at
//! all on error responses, so every payload decodes from any of those.

use crate::error::FieldErrors;
use bank_core::wire::null_as_default;
use bank_core::{
    Account, AccountBalance, Accounts, BankAccount, BankAccounts, Banks, Item, Tag, Tags,
    Transaction, Transactions, Uuid,
};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer, Serialize};

/// The response wrapper used by every bank service endpoint
#[derive(Debug, Default, Deserialize)]
#[serde(default, bound(deserialize = "D: Deserialize<'de> + Default"))]
pub struct Envelope<D> {
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub data: D,
    #[serde(deserialize_with = "null_as_default")]
    pub errors: FieldErrors,
}

/// The `data` member of a successful response
pub trait Payload: DeserializeOwned + Default {
    /// What the operation hands back to its caller
    type Output;

    fn into_output(self) -> Self::Output;
}

/// `data` whose content is irrelevant, as for deletes
#[derive(Debug, Default)]
pub struct Empty;

impl<'de> Deserialize<'de> for Empty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IgnoredAny::deserialize(deserializer).map(|_| Empty)
    }
}

impl Payload for Empty {
    type Output = ();

    fn into_output(self) -> Self::Output {}
}

/// Declare `data` shapes holding a single named member
macro_rules! payload {
    ($($name:ident { $field:ident: $ty:ty })*) => {
        $(
            #[derive(Debug, Default, Deserialize)]
            #[serde(default)]
            pub struct $name {
                #[serde(deserialize_with = "null_as_default")]
                pub $field: $ty,
            }

            impl Payload for $name {
                type Output = $ty;

                fn into_output(self) -> $ty {
                    self.$field
                }
            }
        )*
    };
}

payload! {
    BanksData { banks: Banks }
    AccountsData { accounts: Accounts }
    AccountData { account: Account }
    BankAccountsData { bank_accounts: BankAccounts }
    BankAccountData { bank_account: BankAccount }
    TransactionsData { transactions: Transactions }
    TransactionData { transaction: Transaction }
    ItemData { item: Item }
    TagsData { tags: Tags }
    TagData { tag: Tag }
    AccountBalanceData { account_balance: AccountBalance }
}

/// Body of `POST /transaction/batch`
#[derive(Debug, Serialize)]
pub struct TransactionBatch<'a> {
    pub transactions: &'a [Transaction],
}

/// Body of the item tag association calls
#[derive(Debug, Serialize)]
pub struct ItemTags<'a> {
    pub uuid: Uuid,
    pub tag_uuids: &'a [Uuid],
}
