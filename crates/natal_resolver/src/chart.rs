//! Whole-chart inputs: placements, chart orientation and consultation topics.

use serde::{Deserialize, Serialize};

use natal_facts::{CelestialBody, House, ZodiacSign, sign_from_longitude};

use crate::placement::ChartPlacement;

/// One of the seven bodies placed in a sign and house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyPlacement {
    pub body: CelestialBody,
    pub sign: ZodiacSign,
    pub house: House,
}

/// Placements of a cast natal chart.
///
/// Casting itself (ephemeris, house division) happens elsewhere.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NatalChart {
    pub placements: Vec<BodyPlacement>,
    /// Ecliptic longitude of the ascendant in degrees.
    #[serde(default)]
    pub ascendant_deg: f64,
}

impl NatalChart {
    /// First placement of `body`, if the chart has one.
    pub fn placement(&self, body: CelestialBody) -> Option<&BodyPlacement> {
        self.placements.iter().find(|p| p.body == body)
    }

    /// Day or night, judged from the Sun's house.
    pub fn is_day_chart(&self) -> bool {
        is_day_chart_from_sun_house(
            self.placement(CelestialBody::Sun)
                .map(|p| p.house.number()),
        )
    }
}

impl BodyPlacement {
    pub fn to_query(self, is_day_chart: bool) -> ChartPlacement {
        ChartPlacement::new(
            self.body.name(),
            self.sign.name(),
            self.house.number(),
            is_day_chart,
        )
    }
}

/// The Sun above the horizon (houses 7..=12) makes a day chart.
///
/// An unknown Sun house is taken as day.
pub fn is_day_chart_from_sun_house(sun_house: Option<u8>) -> bool {
    match sun_house {
        None => true,
        Some(house) => (7..=12).contains(&house),
    }
}

/// Ruler of the given whole-sign house counted from the ascendant.
pub fn house_ruler(ascendant_deg: f64, house: House) -> CelestialBody {
    let cusp = ascendant_deg + f64::from(house.number() - 1) * 30.0;
    sign_from_longitude(cusp).ruler()
}

/// Question category for a consultation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Topic {
    Love,
    Money,
    Work,
    Exam,
    Move,
    #[default]
    General,
}

impl Topic {
    /// Case-insensitive parse; anything unrecognized is [`Topic::General`].
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_uppercase().as_str() {
            "LOVE" => Self::Love,
            "MONEY" => Self::Money,
            "WORK" => Self::Work,
            "EXAM" => Self::Exam,
            "MOVE" => Self::Move,
            _ => Self::General,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Love => "LOVE",
            Self::Money => "MONEY",
            Self::Work => "WORK",
            Self::Exam => "EXAM",
            Self::Move => "MOVE",
            Self::General => "GENERAL",
        }
    }

    /// Natural significators of the topic.
    pub const fn core_bodies(self) -> &'static [CelestialBody] {
        use CelestialBody::*;
        match self {
            Self::Love => &[Venus, Moon],
            Self::Money => &[Jupiter, Venus],
            Self::Work => &[Saturn, Sun, Mars],
            Self::Exam => &[Mercury],
            Self::Move => &[Moon, Mercury],
            Self::General => &[Sun, Moon],
        }
    }

    /// Houses whose rulers also speak to the topic.
    pub const fn houses(self) -> &'static [u8] {
        match self {
            Self::Love => &[7],
            Self::Money => &[2],
            Self::Work => &[10],
            Self::Exam => &[3, 9],
            Self::Move => &[4],
            Self::General => &[1],
        }
    }

    /// Core bodies followed by house rulers, without repeats.
    pub fn significators(self, ascendant_deg: f64) -> Vec<CelestialBody> {
        let rulers = self
            .houses()
            .iter()
            .filter_map(|&n| House::new(n))
            .map(|h| house_ruler(ascendant_deg, h));

        let mut bodies: Vec<CelestialBody> = Vec::with_capacity(4);
        for body in self.core_bodies().iter().copied().chain(rulers) {
            if !bodies.contains(&body) {
                bodies.push(body);
            }
        }
        bodies
    }
}
