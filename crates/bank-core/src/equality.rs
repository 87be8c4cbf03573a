//! Structural equality for nested aggregates
//!
//! A [`Transaction`] embeds an ordered sequence of [`Item`]s, each of which
//! embeds an ordered sequence of [`Tag`]s. Equality over those sequences is
//! positional: same length and pairwise-equal elements at every index.
//! There is no reordering step, so two aggregates holding the same children
//! in a different order are not equal.

use crate::{Item, Tag, Transaction};

/// Logical equality between two values of the same type
///
/// Must be reflexive and symmetric. Implemented leaves first: tags compare
/// field by field, items compare their scalar fields and then their tags,
/// transactions compare their scalar fields and then their items.
pub trait DeepEq {
    fn deep_eq(&self, other: &Self) -> bool;
}

impl DeepEq for Tag {
    fn deep_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl DeepEq for Item {
    fn deep_eq(&self, other: &Self) -> bool {
        // category and prediction_category are classifier output, not compared
        self.uuid == other.uuid
            && self.transaction_uuid == other.transaction_uuid
            && self.description == other.description
            && self.amount == other.amount
            && self.discount == other.discount
            && self.sku == other.sku
            && self.unit == other.unit
            && self.quantity == other.quantity
            && self.active == other.active
            && self.create_date == other.create_date
            && self.update_date == other.update_date
            && self.tags.deep_eq(&other.tags)
    }
}

impl DeepEq for Transaction {
    fn deep_eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
            && self.external_id == other.external_id
            && self.account_uuid == other.account_uuid
            && self.date == other.date
            && self.description == other.description
            && self.business_name == other.business_name
            && self.debit == other.debit
            && self.credit == other.credit
            && self.amount == other.amount
            && self.active == other.active
            && self.create_date == other.create_date
            && self.update_date == other.update_date
            && self.items.deep_eq(&other.items)
    }
}

impl<T: DeepEq> DeepEq for [T] {
    fn deep_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.deep_eq(b))
    }
}

impl<T: DeepEq> DeepEq for Vec<T> {
    fn deep_eq(&self, other: &Self) -> bool {
        self.as_slice().deep_eq(other.as_slice())
    }
}

/// An absent value equals only another absent value
impl<T: DeepEq> DeepEq for Option<T> {
    fn deep_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(a), Some(b)) => a.deep_eq(b),
            _ => false,
        }
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.deep_eq(other)
    }
}

impl PartialEq for Transaction {
    fn eq(&self, other: &Self) -> bool {
        self.deep_eq(other)
    }
}
