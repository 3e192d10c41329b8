//! The resolver: one store lookup per placement, then pure classification
//! and rendering.

use natal_facts::{CelestialBody, FactRow, FactStore, ZodiacSign};
use tracing::debug;

use crate::chart::{NatalChart, Topic};
use crate::dignity::{Dignity, classify};
use crate::error::ResolveError;
use crate::hayz::evaluate_hayz;
use crate::language::Language;
use crate::placement::ChartPlacement;
use crate::reception::ReceptionMeta;
use crate::render;

/// Structured verdict behind a rendered interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub row: FactRow,
    pub dignity: Dignity,
    pub hayz: bool,
}

impl Assessment {
    pub fn from_row(row: FactRow, is_day_chart: bool) -> Self {
        let dignity = classify(row.dignity_relation.as_ref());
        let hayz = evaluate_hayz(row.body_sect, row.sign_gender, is_day_chart);
        Self { row, dignity, hayz }
    }
}

/// Dignity, sect and Hayz resolver over a fact store.
///
/// Holds no mutable state, so a `Resolver` over a `Sync` store can be shared
/// across threads and queried concurrently.
///
/// ```rust,ignore
/// let resolver = Resolver::new(InMemoryFactStore::canonical());
/// let text = resolver.interpret(&ChartPlacement::new("Sun", "Leo", 10, true))?;
/// ```
#[derive(Debug, Clone)]
pub struct Resolver<S> {
    store: S,
    language: Language,
}

impl<S: FactStore> Resolver<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            language: Language::default(),
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn fetch(&self, placement: &ChartPlacement) -> Result<Option<FactRow>, ResolveError> {
        debug!(
            body = %placement.body,
            sign = %placement.sign,
            house = placement.house,
            day = placement.is_day_chart,
            "looking up placement facts"
        );
        let row = self
            .store
            .lookup(&placement.body, &placement.sign, placement.house)?;
        if row.is_none() {
            debug!(
                body = %placement.body,
                sign = %placement.sign,
                house = placement.house,
                "no reference facts for placement"
            );
        }
        Ok(row)
    }

    /// Structured verdict, or `None` when the store has no such combination.
    pub fn assess(&self, placement: &ChartPlacement) -> Result<Option<Assessment>, ResolveError> {
        Ok(self
            .fetch(placement)?
            .map(|row| Assessment::from_row(row, placement.is_day_chart)))
    }

    /// Rendered interpretation. Unknown combinations render the not-found
    /// message; only store failures are errors.
    pub fn interpret(&self, placement: &ChartPlacement) -> Result<String, ResolveError> {
        let row = self.fetch(placement)?;
        Ok(render::render(placement, row.as_ref(), self.language))
    }

    /// Interpret several placements independently. Results are in input order.
    pub fn interpret_batch(
        &self,
        placements: &[ChartPlacement],
    ) -> Vec<Result<String, ResolveError>> {
        placements.iter().map(|p| self.interpret(p)).collect()
    }

    /// Dignity of a body in a sign, without house context.
    pub fn dignity(&self, body: &str, sign: &str) -> Result<Dignity, ResolveError> {
        let relation = self.store.relation(body, sign)?;
        Ok(classify(relation.as_ref()))
    }

    /// Prose context for every placement of a chart.
    ///
    /// Placements the store does not know are skipped. Paragraphs are
    /// separated by a blank line; an empty string means nothing was found.
    pub fn chart_context(
        &self,
        chart: &NatalChart,
        is_day_chart: bool,
    ) -> Result<String, ResolveError> {
        let mut paragraphs = Vec::with_capacity(chart.placements.len());
        for placement in &chart.placements {
            let query = placement.to_query(is_day_chart);
            if let Some(row) = self.fetch(&query)? {
                paragraphs.push(render::render_paragraph(&query, &row, self.language));
            }
        }
        Ok(paragraphs.join("\n\n"))
    }

    /// Reception or rejection of a transiting body by a natal point's sign.
    pub fn reception(
        &self,
        transit_body: CelestialBody,
        natal_sign: ZodiacSign,
    ) -> Result<ReceptionMeta, ResolveError> {
        let relation = self.store.relation(transit_body.name(), natal_sign.name())?;
        Ok(ReceptionMeta::new(relation, self.language))
    }

    /// Context restricted to the bodies that speak to a consultation topic.
    ///
    /// Bodies missing from the chart or from the store are skipped. Lines
    /// are joined with a single space.
    pub fn consultation_context(
        &self,
        topic: Topic,
        chart: &NatalChart,
    ) -> Result<String, ResolveError> {
        let is_day_chart = chart.is_day_chart();
        let mut lines = Vec::new();
        for body in topic.significators(chart.ascendant_deg) {
            let Some(placement) = chart.placement(body) else {
                continue;
            };
            let query = placement.to_query(is_day_chart);
            if let Some(row) = self.fetch(&query)? {
                lines.push(render::render_consultation_line(
                    &query,
                    placement.house,
                    &row,
                    self.language,
                ));
            }
        }
        debug!(topic = topic.name(), lines = lines.len(), "consultation context");
        Ok(lines.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use natal_facts::InMemoryFactStore;

    #[test]
    fn assessment_matches_rendered_text() {
        let resolver = Resolver::new(InMemoryFactStore::canonical());
        let placement = ChartPlacement::new("Saturn", "Libra", 4, true);
        let assessment = resolver.assess(&placement).unwrap().unwrap();
        assert_eq!(assessment.dignity, Dignity::Exaltation);
        assert!(assessment.hayz);
        let text = resolver.interpret(&placement).unwrap();
        assert!(text.contains(assessment.dignity.label(Language::English)));
    }

    #[test]
    fn unknown_placement_assesses_to_none() {
        let resolver = Resolver::new(InMemoryFactStore::canonical());
        let placement = ChartPlacement::new("Chiron", "Aries", 1, true);
        assert_eq!(resolver.assess(&placement).unwrap(), None);
    }

    #[test]
    fn batch_preserves_order() {
        let resolver = Resolver::new(InMemoryFactStore::canonical());
        let out = resolver.interpret_batch(&[
            ChartPlacement::new("Pluto", "Leo", 1, true),
            ChartPlacement::new("Sun", "Leo", 1, true),
        ]);
        assert!(out[0].as_ref().unwrap().contains("not found"));
        assert!(out[1].as_ref().unwrap().contains("Rulership"));
    }

    #[test]
    fn dignity_without_house() {
        let resolver = Resolver::new(InMemoryFactStore::canonical());
        assert_eq!(resolver.dignity("Moon", "Scorpio").unwrap(), Dignity::Fall);
        assert_eq!(resolver.dignity("Moon", "Gemini").unwrap(), Dignity::Peregrine);
        assert_eq!(resolver.dignity("Eris", "Gemini").unwrap(), Dignity::Peregrine);
    }
}
