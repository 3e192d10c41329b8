//! Query input: one body placed in a sign and house.

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// A body placed in a sign and house of a day or night chart.
///
/// Names are free strings so that unrecognized identifiers reach the store
/// and come back as "not found" rather than failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartPlacement {
    pub body: String,
    pub sign: String,
    pub house: u8,
    pub is_day_chart: bool,
}

impl ChartPlacement {
    pub fn new(
        body: impl Into<String>,
        sign: impl Into<String>,
        house: u8,
        is_day_chart: bool,
    ) -> Self {
        Self {
            body: body.into(),
            sign: sign.into(),
            house,
            is_day_chart,
        }
    }

    /// "Day Chart" / "Night Chart".
    pub const fn orientation_label(&self, language: Language) -> &'static str {
        match (self.is_day_chart, language) {
            (true, Language::English) => "Day Chart",
            (false, Language::English) => "Night Chart",
            (true, Language::Korean) => "낮 차트(Day)",
            (false, Language::Korean) => "밤 차트(Night)",
        }
    }
}
