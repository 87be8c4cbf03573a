use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::wire::null_as_default;
use crate::Timestamp;

/// A financial institution accounts can be held at
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bank {
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub branch_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub swift_code: String,
    pub active: bool,
    pub create_date: Timestamp,
    pub update_date: Timestamp,
}

pub type Banks = Vec<Bank>;
