//! Lenient deserializers for optional attribute values.
//!
//! Stores fill attributes unevenly. An empty, null or unknown value reads as
//! absent instead of failing the whole sheet.

use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::body::Sect;
use crate::relation::Relation;
use crate::sign::SignGender;

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

pub(crate) fn sect<'de, D>(deserializer: D) -> Result<Option<Sect>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.and_then(|raw| {
        let sect = Sect::from_name(&raw);
        if sect.is_none() {
            debug!(value = %raw, "unknown sect, treating as absent");
        }
        sect
    }))
}

pub(crate) fn gender<'de, D>(deserializer: D) -> Result<Option<SignGender>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.and_then(|raw| {
        let gender = SignGender::from_name(&raw);
        if gender.is_none() {
            debug!(value = %raw, "unknown sign gender, treating as absent");
        }
        gender
    }))
}

pub(crate) fn relation<'de, D>(deserializer: D) -> Result<Option<Relation>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.and_then(|raw| Relation::parse(&raw)))
}
