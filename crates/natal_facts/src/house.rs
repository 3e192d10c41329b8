//! Houses (topics of life) numbered 1..=12.

use serde::{Deserialize, Serialize};

/// A house number in 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct House(u8);

/// All 12 houses in order.
pub const ALL_HOUSES: [House; 12] = [
    House(1),
    House(2),
    House(3),
    House(4),
    House(5),
    House(6),
    House(7),
    House(8),
    House(9),
    House(10),
    House(11),
    House(12),
];

impl House {
    /// Returns None outside 1..=12.
    pub const fn new(number: u8) -> Option<Self> {
        if number >= 1 && number <= 12 {
            Some(Self(number))
        } else {
            None
        }
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    /// English ordinal label ("1st", "2nd", ... "12th").
    pub const fn ordinal(self) -> &'static str {
        match self.0 {
            1 => "1st",
            2 => "2nd",
            3 => "3rd",
            4 => "4th",
            5 => "5th",
            6 => "6th",
            7 => "7th",
            8 => "8th",
            9 => "9th",
            10 => "10th",
            11 => "11th",
            _ => "12th",
        }
    }

    pub const fn meaning(self) -> &'static str {
        match self.0 {
            1 => "self, appearance, vitality, personality, innate ability",
            2 => "wealth, possessions, economic activity, values, cash flow",
            3 => "siblings, short journeys, basic learning, communication, consulting",
            4 => "home, parents, real estate, roots, old age",
            5 => "children, entertainment, romance, creation, hobbies",
            6 => "illness, labor, duty, pets, service",
            7 => "marriage, spouse, partners, contracts, open enemies",
            8 => "death, inheritance, other people's money, insurance, loans, crisis",
            9 => {
                "religion, philosophy, long journeys, higher education, publishing, \
                 distribution, abroad, trade"
            }
            10 => "career, honor, social achievement, superiors, company",
            11 => "friends, hopes, patrons, group activity, fortune, future plans",
            _ => {
                "isolation, hidden enemies, the unconscious, confinement, hospitals, \
                 emigration, solitary work, abroad"
            }
        }
    }
}

impl TryFrom<u8> for House {
    type Error = String;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number).ok_or_else(|| format!("house number {number} is outside 1..=12"))
    }
}

impl From<House> for u8 {
    fn from(house: House) -> Self {
        house.0
    }
}
