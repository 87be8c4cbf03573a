//! Ownership of accounts and tags

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::wire::null_as_default;

/// Who a record belongs to
///
/// On the wire this is a pair of `user_uuid` / `organisation_uuid` fields in
/// which the slot that does not apply carries the nil UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    User(Uuid),
    Organisation(Uuid),
}

impl Owner {
    /// The owner's identifier regardless of kind
    pub fn uuid(&self) -> Uuid {
        match self {
            Owner::User(id) | Owner::Organisation(id) => *id,
        }
    }

    pub fn user(&self) -> Option<Uuid> {
        match self {
            Owner::User(id) => Some(*id),
            Owner::Organisation(_) => None,
        }
    }

    pub fn organisation(&self) -> Option<Uuid> {
        match self {
            Owner::Organisation(id) => Some(*id),
            Owner::User(_) => None,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct OwnerFields {
    #[serde(deserialize_with = "null_as_default")]
    user_uuid: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    organisation_uuid: Uuid,
}

impl From<Option<Owner>> for OwnerFields {
    fn from(owner: Option<Owner>) -> Self {
        Self {
            user_uuid: owner.and_then(|o| o.user()).unwrap_or_else(Uuid::nil),
            organisation_uuid: owner
                .and_then(|o| o.organisation())
                .unwrap_or_else(Uuid::nil),
        }
    }
}

impl From<OwnerFields> for Option<Owner> {
    fn from(fields: OwnerFields) -> Self {
        if !fields.user_uuid.is_nil() {
            Some(Owner::User(fields.user_uuid))
        } else if !fields.organisation_uuid.is_nil() {
            Some(Owner::Organisation(fields.organisation_uuid))
        } else {
            None
        }
    }
}

/// `#[serde(flatten, with = "...")]` adapter for an `Option<Owner>` field
pub(crate) mod flattened {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(owner: &Option<Owner>, serializer: S) -> Result<S::Ok, S::Error> {
        OwnerFields::from(*owner).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Owner>, D::Error> {
        OwnerFields::deserialize(deserializer).map(Into::into)
    }
}
