use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::wire::null_as_default;
use crate::Timestamp;

/// The balance of an account at a reference date
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountBalance {
    #[serde(deserialize_with = "null_as_default")]
    pub account_uuid: Uuid,
    pub date: Timestamp,
    pub balance: f64,
    pub active: bool,
}
