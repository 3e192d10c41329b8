//! In-memory fact store built from a [`FactSheet`].

use std::collections::HashMap;

use tracing::{debug, info, trace};

use crate::error::StoreError;
use crate::relation::Relation;
use crate::sheet::{BodyFacts, FactSheet, HouseFacts, RelationFacts, SignFacts};
use crate::store::{FactRow, FactStore};

/// Read-only store holding a whole fact sheet in memory.
///
/// Identifiers are matched exactly. When a sheet lists the same body, sign
/// or house twice, the first entry wins.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFactStore {
    bodies: HashMap<String, BodyFacts>,
    signs: HashMap<String, SignFacts>,
    houses: HashMap<u8, HouseFacts>,
    relations: Vec<RelationFacts>,
}

impl InMemoryFactStore {
    /// Store over the canonical classical dataset.
    pub fn canonical() -> Self {
        Self::from_sheet(FactSheet::canonical())
    }

    pub fn from_sheet(sheet: FactSheet) -> Self {
        let mut store = Self {
            relations: sheet.relations,
            ..Self::default()
        };
        for body in sheet.bodies {
            store.bodies.entry(body.name.clone()).or_insert(body);
        }
        for sign in sheet.signs {
            store.signs.entry(sign.name.clone()).or_insert(sign);
        }
        for house in sheet.houses {
            store.houses.entry(house.number).or_insert(house);
        }
        info!(
            bodies = store.bodies.len(),
            signs = store.signs.len(),
            houses = store.houses.len(),
            relations = store.relations.len(),
            "loaded fact sheet"
        );
        store
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn sign_count(&self) -> usize {
        self.signs.len()
    }

    pub fn house_count(&self) -> usize {
        self.houses.len()
    }

    /// First relation between the pair in load order.
    fn first_relation(&self, body: &str, sign: &str) -> Option<Relation> {
        let mut matches = self
            .relations
            .iter()
            .filter(|r| r.body == body && r.sign == sign)
            .filter_map(|r| r.relation.as_ref());
        let first = matches.next()?;
        let extra = matches.count();
        if extra > 0 {
            debug!(
                body,
                sign,
                chosen = %first,
                ignored = extra,
                "multiple dignity relations, keeping the first"
            );
        }
        Some(first.clone())
    }
}

impl FactStore for InMemoryFactStore {
    fn lookup(&self, body: &str, sign: &str, house: u8) -> Result<Option<FactRow>, StoreError> {
        let (Some(b), Some(s), Some(h)) = (
            self.bodies.get(body),
            self.signs.get(sign),
            self.houses.get(&house),
        ) else {
            trace!(body, sign, house, "combination not in store");
            return Ok(None);
        };

        Ok(Some(FactRow {
            body_keywords_positive: b.keywords_positive.clone(),
            body_keywords_negative: b.keywords_negative.clone(),
            body_sect: b.sect,
            sign_keywords: s.keywords.clone(),
            sign_gender: s.gender,
            house_meaning: h.meaning.clone(),
            dignity_relation: self.first_relation(body, sign),
        }))
    }

    fn relation(&self, body: &str, sign: &str) -> Result<Option<Relation>, StoreError> {
        if !self.bodies.contains_key(body) || !self.signs.contains_key(sign) {
            return Ok(None);
        }
        Ok(self.first_relation(body, sign))
    }
}
