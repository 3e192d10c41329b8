//! Serializable fact sheets.
//!
//! A fact sheet is the on-disk form of the reference data: flat arrays of
//! bodies, signs, houses, and relations. Names are free strings so a sheet
//! may carry data this crate has no enum variant for.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::attr;
use crate::body::{ALL_BODIES, Sect};
use crate::error::StoreError;
use crate::house::ALL_HOUSES;
use crate::relation::{KNOWN_RELATIONS, Relation};
use crate::sign::{ALL_SIGNS, SignGender};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyFacts {
    pub name: String,
    pub keywords_positive: Option<String>,
    pub keywords_negative: Option<String>,
    #[serde(default, deserialize_with = "attr::sect")]
    pub sect: Option<Sect>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignFacts {
    pub name: String,
    pub keywords: Option<String>,
    #[serde(default, deserialize_with = "attr::gender")]
    pub gender: Option<SignGender>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseFacts {
    pub number: u8,
    pub meaning: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationFacts {
    pub body: String,
    pub sign: String,
    /// A blank tag loads as `None` and never matches a lookup.
    #[serde(default, deserialize_with = "attr::relation")]
    pub relation: Option<Relation>,
}

/// Complete set of reference facts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FactSheet {
    #[serde(default)]
    pub bodies: Vec<BodyFacts>,
    #[serde(default)]
    pub signs: Vec<SignFacts>,
    #[serde(default)]
    pub houses: Vec<HouseFacts>,
    /// Relations in load order. Lookups return the first match.
    #[serde(default)]
    pub relations: Vec<RelationFacts>,
}

impl FactSheet {
    /// The canonical classical dataset with English keywords.
    pub fn canonical() -> Self {
        let bodies = ALL_BODIES
            .iter()
            .map(|b| BodyFacts {
                name: b.name().to_string(),
                keywords_positive: Some(b.keywords_positive().to_string()),
                keywords_negative: Some(b.keywords_negative().to_string()),
                sect: Some(b.sect()),
            })
            .collect();

        let signs = ALL_SIGNS
            .iter()
            .map(|s| SignFacts {
                name: s.name().to_string(),
                keywords: Some(s.keywords().to_string()),
                gender: Some(s.gender()),
            })
            .collect();

        let houses = ALL_HOUSES
            .iter()
            .map(|h| HouseFacts {
                number: h.number(),
                meaning: Some(h.meaning().to_string()),
            })
            .collect();

        let mut relations = Vec::new();
        for relation in KNOWN_RELATIONS {
            for body in ALL_BODIES {
                for sign in relation.canonical_signs(body) {
                    relations.push(RelationFacts {
                        body: body.name().to_string(),
                        sign: sign.name().to_string(),
                        relation: Some(relation.clone()),
                    });
                }
            }
        }

        Self {
            bodies,
            signs,
            houses,
            relations,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, StoreError> {
        let json = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_counts() {
        let sheet = FactSheet::canonical();
        assert_eq!(sheet.bodies.len(), 7);
        assert_eq!(sheet.signs.len(), 12);
        assert_eq!(sheet.houses.len(), 12);
        // 12 domiciles + 7 exaltations + 12 detriments + 7 falls
        assert_eq!(sheet.relations.len(), 38);
    }

    #[test]
    fn canonical_relations_in_load_order() {
        let sheet = FactSheet::canonical();
        let first_exalt = sheet
            .relations
            .iter()
            .position(|r| r.relation == Some(Relation::ExaltedIn))
            .unwrap();
        assert!(
            sheet.relations[..first_exalt]
                .iter()
                .all(|r| r.relation == Some(Relation::Rules))
        );
        assert_eq!(
            sheet.relations.last().and_then(|r| r.relation.clone()),
            Some(Relation::FallIn)
        );
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let sheet = FactSheet::from_json_str(
            r#"{
                "bodies": [{ "name": "Sun" }],
                "signs": [{ "name": "Leo", "gender": "Masculine" }],
                "houses": [{ "number": 10 }]
            }"#,
        )
        .unwrap();
        assert_eq!(sheet.bodies[0].sect, None);
        assert_eq!(sheet.bodies[0].keywords_positive, None);
        assert_eq!(sheet.signs[0].gender, Some(SignGender::Masculine));
        assert!(sheet.relations.is_empty());
    }

    #[test]
    fn empty_or_unknown_attributes_load_as_none() {
        let sheet = FactSheet::from_json_str(
            r#"{
                "bodies": [{ "name": "Sun", "sect": "" }, { "name": "Moon", "sect": "Solar" }],
                "signs": [{ "name": "Leo", "gender": "" }],
                "relations": [{ "body": "Sun", "sign": "Leo", "relation": "" }]
            }"#,
        )
        .unwrap();
        assert_eq!(sheet.bodies[0].sect, None);
        assert_eq!(sheet.bodies[1].sect, None);
        assert_eq!(sheet.signs[0].gender, None);
        assert_eq!(sheet.relations[0].relation, None);
    }

    #[test]
    fn graph_style_relation_tags_accepted() {
        let sheet = FactSheet::from_json_str(
            r#"{ "relations": [{ "body": "Sun", "sign": "Leo", "relation": "RULES" }] }"#,
        )
        .unwrap();
        assert_eq!(sheet.relations[0].relation, Some(Relation::Rules));
    }

    #[test]
    fn json_round_trip_preserves_canonical() {
        let sheet = FactSheet::canonical();
        let json = sheet.to_json_pretty().unwrap();
        assert_eq!(FactSheet::from_json_str(&json).unwrap(), sheet);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = FactSheet::from_path(Path::new("/nonexistent/facts.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/facts.json"));
    }
}
