//! Reference facts for classical natal-chart interpretation.
//!
//! This crate provides:
//! - The 7 classical bodies with sect, the 12 signs with gender and rulers,
//!   and the 12 houses
//! - Rulership, exaltation, detriment and fall tables
//! - The [`FactStore`] read contract and an in-memory implementation
//! - JSON fact sheets and store configuration
//!
//! Tables follow the Hellenistic tradition (Ptolemy, Valens).

mod attr;
pub mod body;
pub mod config;
pub mod error;
pub mod house;
pub mod memory;
pub mod relation;
pub mod sheet;
pub mod sign;
pub mod store;

pub use body::{ALL_BODIES, CelestialBody, Sect};
pub use config::{FACTS_PATH_ENV, FactSource, FactStoreConfig};
pub use error::{ConfigError, StoreError};
pub use house::{ALL_HOUSES, House};
pub use memory::InMemoryFactStore;
pub use relation::{
    KNOWN_RELATIONS, Relation, canonical_relation, detriment_signs, domicile_signs,
    exaltation_signs, fall_signs,
};
pub use sheet::{BodyFacts, FactSheet, HouseFacts, RelationFacts, SignFacts};
pub use sign::{ALL_SIGNS, SignGender, ZodiacSign, sign_from_longitude};
pub use store::{FactRow, FactStore};
