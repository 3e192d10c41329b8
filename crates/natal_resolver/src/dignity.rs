//! Essential dignity classification.

use natal_facts::Relation;

use crate::language::Language;

/// Essential dignity of a body in a sign.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Dignity {
    Rulership,
    Exaltation,
    Detriment,
    Fall,
    /// No classical relation between the body and the sign.
    Peregrine,
    /// A relation tag the store returned but this crate does not know.
    Unrecognized(String),
}

/// Classify the dignity relation returned by the store.
///
/// Absence of a relation is the common case and yields [`Dignity::Peregrine`].
/// A blank tag counts as absent.
pub fn classify(relation: Option<&Relation>) -> Dignity {
    match relation {
        None => Dignity::Peregrine,
        Some(Relation::Unrecognized(raw)) if raw.trim().is_empty() => Dignity::Peregrine,
        Some(Relation::Rules) => Dignity::Rulership,
        Some(Relation::ExaltedIn) => Dignity::Exaltation,
        Some(Relation::DetrimentIn) => Dignity::Detriment,
        Some(Relation::FallIn) => Dignity::Fall,
        Some(Relation::Unrecognized(raw)) => Dignity::Unrecognized(raw.clone()),
    }
}

impl Dignity {
    /// Fixed label. Unrecognized relations pass through as their raw tag.
    pub fn label(&self, language: Language) -> &str {
        match (self, language) {
            (Self::Rulership, Language::English) => "Rulership (very strong)",
            (Self::Exaltation, Language::English) => "Exaltation (strong)",
            (Self::Detriment, Language::English) => "Detriment (uncomfortable)",
            (Self::Fall, Language::English) => "Fall (weak)",
            (Self::Peregrine, Language::English) => "Peregrine (neutral)",
            (Self::Rulership, Language::Korean) => "룰러쉽 (매우 강력함)",
            (Self::Exaltation, Language::Korean) => "항진 (강력함)",
            (Self::Detriment, Language::Korean) => "손상 (불편함)",
            (Self::Fall, Language::Korean) => "추락 (약함)",
            (Self::Peregrine, Language::Korean) => "방랑자 (중립)",
            (Self::Unrecognized(raw), _) => raw.as_str(),
        }
    }

    /// Rulership and exaltation strengthen a body.
    pub const fn is_reception(&self) -> bool {
        matches!(self, Self::Rulership | Self::Exaltation)
    }

    /// Detriment and fall weaken a body.
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Detriment | Self::Fall)
    }
}
