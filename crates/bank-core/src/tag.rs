use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::owner::flattened;
use crate::wire::null_as_default;
use crate::{Owner, Timestamp};

/// A label used to classify items
///
/// Tags without an owner are the system defaults shared by every user and
/// organisation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: Uuid,
    #[serde(flatten, with = "flattened")]
    pub owner: Option<Owner>,
    #[serde(deserialize_with = "null_as_default")]
    pub tag: String,
    pub active: bool,
    pub create_date: Timestamp,
    pub update_date: Timestamp,
}

pub type Tags = Vec<Tag>;

impl Tag {
    /// A new, not yet persisted tag with the given label
    pub fn new(tag: impl Into<String>, owner: Option<Owner>) -> Self {
        Self {
            tag: tag.into(),
            owner,
            active: true,
            ..Self::default()
        }
    }
}
