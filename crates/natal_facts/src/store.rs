//! The read contract between the resolver and whatever holds the facts.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::attr;
use crate::body::Sect;
use crate::error::StoreError;
use crate::relation::Relation;
use crate::sign::SignGender;

/// Facts joined for one (body, sign, house) combination.
///
/// Every attribute is optional; a store may hold a body without keywords or
/// a sign without a gender.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FactRow {
    pub body_keywords_positive: Option<String>,
    pub body_keywords_negative: Option<String>,
    #[serde(default, deserialize_with = "attr::sect")]
    pub body_sect: Option<Sect>,
    pub sign_keywords: Option<String>,
    #[serde(default, deserialize_with = "attr::gender")]
    pub sign_gender: Option<SignGender>,
    pub house_meaning: Option<String>,
    /// Dignity relation from the body to the sign, if any.
    #[serde(default, deserialize_with = "attr::relation")]
    pub dignity_relation: Option<Relation>,
}

/// Read-only source of reference facts.
///
/// Implementations must be safe to share across threads; the resolver holds
/// no mutable state of its own.
pub trait FactStore: Send + Sync {
    /// Join body, sign and house facts.
    ///
    /// Returns `Ok(None)` when any of the three identifiers is unknown to the
    /// store. If the store holds more than one relation for the pair, the
    /// first one found is returned.
    fn lookup(&self, body: &str, sign: &str, house: u8) -> Result<Option<FactRow>, StoreError>;

    /// Dignity relation from `body` to `sign` alone.
    ///
    /// The default goes through [`FactStore::lookup`] with the 1st house, so
    /// stores without house data should override it.
    fn relation(&self, body: &str, sign: &str) -> Result<Option<Relation>, StoreError> {
        Ok(self
            .lookup(body, sign, 1)?
            .and_then(|row| row.dignity_relation))
    }
}

impl<T: FactStore + ?Sized> FactStore for &T {
    fn lookup(&self, body: &str, sign: &str, house: u8) -> Result<Option<FactRow>, StoreError> {
        (**self).lookup(body, sign, house)
    }

    fn relation(&self, body: &str, sign: &str) -> Result<Option<Relation>, StoreError> {
        (**self).relation(body, sign)
    }
}

impl<T: FactStore + ?Sized> FactStore for Box<T> {
    fn lookup(&self, body: &str, sign: &str, house: u8) -> Result<Option<FactRow>, StoreError> {
        (**self).lookup(body, sign, house)
    }

    fn relation(&self, body: &str, sign: &str) -> Result<Option<Relation>, StoreError> {
        (**self).relation(body, sign)
    }
}

impl<T: FactStore + ?Sized> FactStore for Arc<T> {
    fn lookup(&self, body: &str, sign: &str, house: u8) -> Result<Option<FactRow>, StoreError> {
        (**self).lookup(body, sign, house)
    }

    fn relation(&self, body: &str, sign: &str) -> Result<Option<Relation>, StoreError> {
        (**self).relation(body, sign)
    }
}
