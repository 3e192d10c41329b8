//! Classical celestial bodies and their sect.
//!
//! The seven visible planets of Hellenistic astrology. Each body carries a
//! sect (day or night team) and a pair of interpretive keyword strings.

use serde::{Deserialize, Serialize};

/// The 7 classical bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CelestialBody {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

/// All 7 bodies in Chaldean weekday order starting from the Sun.
pub const ALL_BODIES: [CelestialBody; 7] = [
    CelestialBody::Sun,
    CelestialBody::Moon,
    CelestialBody::Mercury,
    CelestialBody::Venus,
    CelestialBody::Mars,
    CelestialBody::Jupiter,
    CelestialBody::Saturn,
];

/// Sect membership of a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sect {
    Diurnal,
    Nocturnal,
    Neutral,
}

impl Sect {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Diurnal => "Diurnal",
            Self::Nocturnal => "Nocturnal",
            Self::Neutral => "Neutral",
        }
    }

    /// Parse a stored attribute value. Blank or unknown values are absent.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "Diurnal" => Some(Self::Diurnal),
            "Nocturnal" => Some(Self::Nocturnal),
            "Neutral" => Some(Self::Neutral),
            _ => None,
        }
    }
}

impl CelestialBody {
    /// Canonical English name, as used for store lookups.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
        }
    }

    /// Exact-match inverse of [`CelestialBody::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_BODIES.iter().copied().find(|b| b.name() == name)
    }

    /// 0-based index into ALL_BODIES.
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
        }
    }

    /// Sect of the body.
    ///
    /// Day team: Sun, Jupiter, Saturn. Night team: Moon, Venus, Mars.
    /// Mercury joins neither.
    pub const fn sect(self) -> Sect {
        match self {
            Self::Sun | Self::Jupiter | Self::Saturn => Sect::Diurnal,
            Self::Moon | Self::Venus | Self::Mars => Sect::Nocturnal,
            Self::Mercury => Sect::Neutral,
        }
    }

    pub const fn keywords_positive(self) -> &'static str {
        match self {
            Self::Sun => "honor, authority, leadership, self-realization",
            Self::Moon => "emotion, instinct, nurture, public popularity",
            Self::Mercury => "intellect, communication, language, commerce, logic",
            Self::Venus => "love, art, harmony, pleasure, charm",
            Self::Mars => "drive, courage, passion, momentum",
            Self::Jupiter => "growth, luck, philosophy, generosity, success",
            Self::Saturn => "patience, responsibility, discipline, realism, effort",
        }
    }

    pub const fn keywords_negative(self) -> &'static str {
        match self {
            Self::Sun => "arrogance, self-righteousness, bluster, waste",
            Self::Moon => {
                "moodiness, anxiety, indecision, emotional excess, \
                 epidemic illness, recurring illness"
            }
            Self::Mercury => "cunning, deceit, nervousness, instability",
            Self::Venus => "dissipation, laziness, vanity, obsession",
            Self::Mars => "anger, violence, haste, accidents, quarrels",
            Self::Jupiter => "exaggeration, boasting, waste, irresponsibility",
            Self::Saturn => "melancholy, restriction, stinginess, isolation, delay",
        }
    }
}
