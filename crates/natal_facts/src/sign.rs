//! Zodiac signs, sign gender, and domicile rulers.
//!
//! The ecliptic is divided into 12 equal signs of 30 degrees each,
//! starting from Aries at 0 deg. Fire and air signs are masculine,
//! earth and water signs feminine.

use serde::{Deserialize, Serialize};

use crate::body::CelestialBody;

/// The 12 zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in zodiacal order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

/// Gender (polarity) of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignGender {
    Masculine,
    Feminine,
}

impl SignGender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Masculine => "Masculine",
            Self::Feminine => "Feminine",
        }
    }

    /// Parse a stored attribute value. Blank or unknown values are absent.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "Masculine" => Some(Self::Masculine),
            "Feminine" => Some(Self::Feminine),
            _ => None,
        }
    }
}

impl ZodiacSign {
    /// Canonical English name, as used for store lookups.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Exact-match inverse of [`ZodiacSign::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_SIGNS.iter().copied().find(|s| s.name() == name)
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// Fire and air signs (even indices) are masculine.
    pub const fn gender(self) -> SignGender {
        if self.index() % 2 == 0 {
            SignGender::Masculine
        } else {
            SignGender::Feminine
        }
    }

    /// Domicile lord of the sign.
    pub const fn ruler(self) -> CelestialBody {
        match self {
            Self::Aries | Self::Scorpio => CelestialBody::Mars,
            Self::Taurus | Self::Libra => CelestialBody::Venus,
            Self::Gemini | Self::Virgo => CelestialBody::Mercury,
            Self::Cancer => CelestialBody::Moon,
            Self::Leo => CelestialBody::Sun,
            Self::Sagittarius | Self::Pisces => CelestialBody::Jupiter,
            Self::Capricorn | Self::Aquarius => CelestialBody::Saturn,
        }
    }

    pub const fn keywords(self) -> &'static str {
        match self {
            Self::Aries => "challenging, direct, hasty, pioneering",
            Self::Taurus => "stable, sensual, stubborn, possessive",
            Self::Gemini => "curious, versatile, scattered, quick-witted",
            Self::Cancer => "protective, sensitive, exclusive, domestic",
            Self::Leo => "creative, dramatic, self-centered, conspicuous",
            Self::Virgo => "analytical, service-minded, critical, meticulous",
            Self::Libra => "sociable, balanced, indecisive, other-oriented",
            Self::Scorpio => "insightful, tenacious, secretive, strong-willed",
            Self::Sagittarius => "optimistic, free, reckless, idealistic",
            Self::Capricorn => "ambitious, cautious, conservative, achievement-driven",
            Self::Aquarius => "original, rational, rebellious, independent",
            Self::Pisces => "empathetic, artistic, confused, self-sacrificing",
        }
    }
}

/// Sign containing an ecliptic longitude (degrees, any range).
///
/// The longitude is normalized to [0, 360) before division.
pub fn sign_from_longitude(lon_deg: f64) -> ZodiacSign {
    let lon = lon_deg.rem_euclid(360.0);
    let idx = ((lon / 30.0).floor() as usize).min(11);
    ALL_SIGNS[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_indices_sequential() {
        for (i, s) in ALL_SIGNS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn name_round_trip() {
        for s in ALL_SIGNS {
            assert_eq!(ZodiacSign::from_name(s.name()), Some(s));
        }
        assert_eq!(ZodiacSign::from_name("leo"), None);
    }

    #[test]
    fn fire_and_air_are_masculine() {
        for s in [
            ZodiacSign::Aries,
            ZodiacSign::Gemini,
            ZodiacSign::Leo,
            ZodiacSign::Libra,
            ZodiacSign::Sagittarius,
            ZodiacSign::Aquarius,
        ] {
            assert_eq!(s.gender(), SignGender::Masculine, "{}", s.name());
        }
    }

    #[test]
    fn earth_and_water_are_feminine() {
        for s in [
            ZodiacSign::Taurus,
            ZodiacSign::Cancer,
            ZodiacSign::Virgo,
            ZodiacSign::Scorpio,
            ZodiacSign::Capricorn,
            ZodiacSign::Pisces,
        ] {
            assert_eq!(s.gender(), SignGender::Feminine, "{}", s.name());
        }
    }

    #[test]
    fn dual_rulerships() {
        assert_eq!(ZodiacSign::Aries.ruler(), CelestialBody::Mars);
        assert_eq!(ZodiacSign::Scorpio.ruler(), CelestialBody::Mars);
        assert_eq!(ZodiacSign::Taurus.ruler(), CelestialBody::Venus);
        assert_eq!(ZodiacSign::Libra.ruler(), CelestialBody::Venus);
        assert_eq!(ZodiacSign::Capricorn.ruler(), CelestialBody::Saturn);
        assert_eq!(ZodiacSign::Aquarius.ruler(), CelestialBody::Saturn);
    }

    #[test]
    fn luminaries_rule_one_sign() {
        let sun: Vec<_> = ALL_SIGNS
            .iter()
            .filter(|s| s.ruler() == CelestialBody::Sun)
            .collect();
        let moon: Vec<_> = ALL_SIGNS
            .iter()
            .filter(|s| s.ruler() == CelestialBody::Moon)
            .collect();
        assert_eq!(sun, [&ZodiacSign::Leo]);
        assert_eq!(moon, [&ZodiacSign::Cancer]);
    }

    #[test]
    fn longitude_sweep() {
        for (i, s) in ALL_SIGNS.iter().enumerate() {
            let lon = i as f64 * 30.0 + 15.0;
            assert_eq!(sign_from_longitude(lon), *s, "sign at {lon} deg");
        }
    }

    #[test]
    fn longitude_boundaries_and_wrap() {
        assert_eq!(sign_from_longitude(0.0), ZodiacSign::Aries);
        assert_eq!(sign_from_longitude(30.0), ZodiacSign::Taurus);
        assert_eq!(sign_from_longitude(359.999), ZodiacSign::Pisces);
        assert_eq!(sign_from_longitude(360.0), ZodiacSign::Aries);
        assert_eq!(sign_from_longitude(-15.0), ZodiacSign::Pisces);
        assert_eq!(sign_from_longitude(735.0), ZodiacSign::Aries);
    }
}
