use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::wire::null_as_default;
use crate::{Tag, Timestamp};

/// A line item within a transaction
///
/// `category` and `prediction_category` are classification outputs written
/// by the service; they do not take part in [`crate::DeepEq`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub transaction_uuid: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sku: String,
    #[serde(deserialize_with = "null_as_default")]
    pub unit: String,
    pub quantity: f64,
    pub amount: f64,
    pub discount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub prediction_category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
    pub active: bool,
    pub create_date: Timestamp,
    pub update_date: Timestamp,
}

pub type Items = Vec<Item>;

impl Item {
    /// Whether a tag with the given identifier is attached
    pub fn has_tag(&self, tag_uuid: Uuid) -> bool {
        self.tags.iter().any(|t| t.uuid == tag_uuid)
    }
}
