//! Essential dignity relations between bodies and signs.
//!
//! Rulership (domicile), exaltation, detriment and fall tables from the
//! Hellenistic tradition. Detriment is the sign opposite a domicile and fall
//! the sign opposite an exaltation.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::body::CelestialBody;
use crate::sign::ZodiacSign;

/// Typed edge from a body to a sign.
///
/// `Unrecognized` carries a relation tag the store returned that this crate
/// does not know, verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Relation {
    Rules,
    ExaltedIn,
    DetrimentIn,
    FallIn,
    Unrecognized(String),
}

/// The four known relation kinds in load order.
pub const KNOWN_RELATIONS: [Relation; 4] = [
    Relation::Rules,
    Relation::ExaltedIn,
    Relation::DetrimentIn,
    Relation::FallIn,
];

impl Relation {
    /// Canonical tag.
    pub fn name(&self) -> &str {
        match self {
            Self::Rules => "Rules",
            Self::ExaltedIn => "ExaltedIn",
            Self::DetrimentIn => "DetrimentIn",
            Self::FallIn => "FallIn",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Parse a relation tag. Accepts canonical tags and graph-style
    /// relationship types (`RULES`, `EXALTED_IN`, ...). A blank tag is no
    /// relation at all.
    pub fn parse(tag: &str) -> Option<Self> {
        let relation = match tag.trim() {
            "" => return None,
            "Rules" | "RULES" => Self::Rules,
            "ExaltedIn" | "EXALTED_IN" => Self::ExaltedIn,
            "DetrimentIn" | "DETRIMENT_IN" => Self::DetrimentIn,
            "FallIn" | "FALL_IN" => Self::FallIn,
            other => Self::Unrecognized(other.to_string()),
        };
        Some(relation)
    }

    /// Signs this relation connects the body to in the canonical tables.
    pub fn canonical_signs(&self, body: CelestialBody) -> &'static [ZodiacSign] {
        match self {
            Self::Rules => domicile_signs(body),
            Self::ExaltedIn => exaltation_signs(body),
            Self::DetrimentIn => detriment_signs(body),
            Self::FallIn => fall_signs(body),
            Self::Unrecognized(_) => &[],
        }
    }
}

impl Display for Relation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for Relation {
    type Error = String;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        Self::parse(&tag).ok_or_else(|| "empty relation tag".to_string())
    }
}

impl From<Relation> for String {
    fn from(relation: Relation) -> Self {
        relation.name().to_string()
    }
}

// ---------------------------------------------------------------------------
// Canonical tables
// ---------------------------------------------------------------------------

/// Domicile signs.
///
/// Sun [Leo], Moon [Cancer], Mercury [Gemini, Virgo], Venus [Taurus, Libra],
/// Mars [Aries, Scorpio], Jupiter [Sagittarius, Pisces], Saturn [Capricorn, Aquarius].
pub const fn domicile_signs(body: CelestialBody) -> &'static [ZodiacSign] {
    use ZodiacSign::*;
    match body {
        CelestialBody::Sun => &[Leo],
        CelestialBody::Moon => &[Cancer],
        CelestialBody::Mercury => &[Gemini, Virgo],
        CelestialBody::Venus => &[Taurus, Libra],
        CelestialBody::Mars => &[Aries, Scorpio],
        CelestialBody::Jupiter => &[Sagittarius, Pisces],
        CelestialBody::Saturn => &[Capricorn, Aquarius],
    }
}

/// Exaltation signs, one per body.
pub const fn exaltation_signs(body: CelestialBody) -> &'static [ZodiacSign] {
    use ZodiacSign::*;
    match body {
        CelestialBody::Sun => &[Aries],
        CelestialBody::Moon => &[Taurus],
        CelestialBody::Mercury => &[Virgo],
        CelestialBody::Venus => &[Pisces],
        CelestialBody::Mars => &[Capricorn],
        CelestialBody::Jupiter => &[Cancer],
        CelestialBody::Saturn => &[Libra],
    }
}

/// Detriment signs (opposite the domiciles).
pub const fn detriment_signs(body: CelestialBody) -> &'static [ZodiacSign] {
    use ZodiacSign::*;
    match body {
        CelestialBody::Sun => &[Aquarius],
        CelestialBody::Moon => &[Capricorn],
        CelestialBody::Mercury => &[Sagittarius, Pisces],
        CelestialBody::Venus => &[Aries, Scorpio],
        CelestialBody::Mars => &[Taurus, Libra],
        CelestialBody::Jupiter => &[Gemini, Virgo],
        CelestialBody::Saturn => &[Cancer, Leo],
    }
}

/// Fall signs (opposite the exaltations).
pub const fn fall_signs(body: CelestialBody) -> &'static [ZodiacSign] {
    use ZodiacSign::*;
    match body {
        CelestialBody::Sun => &[Libra],
        CelestialBody::Moon => &[Scorpio],
        CelestialBody::Mercury => &[Pisces],
        CelestialBody::Venus => &[Virgo],
        CelestialBody::Mars => &[Cancer],
        CelestialBody::Jupiter => &[Capricorn],
        CelestialBody::Saturn => &[Aries],
    }
}

/// First canonical relation from `body` to `sign`, in load order
/// (rulership, exaltation, detriment, fall).
///
/// Mercury is both domicile and exalted in Virgo, and both in detriment and
/// fall in Pisces; those pairs resolve to `Rules` and `DetrimentIn`.
pub fn canonical_relation(body: CelestialBody, sign: ZodiacSign) -> Option<Relation> {
    KNOWN_RELATIONS
        .into_iter()
        .find(|r| r.canonical_signs(body).contains(&sign))
}
