//! Output language for rendered text.

use std::str::FromStr;

/// Language of the fixed templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Korean,
}

/// Unrecognized language code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language '{0}' (expected en or ko)")]
pub struct ParseLanguageError(pub String);

impl Language {
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Korean => "ko",
        }
    }

    /// Substituted for any missing or blank fact field.
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::English => "(none)",
            Self::Korean => "(없음)",
        }
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "ko" | "korean" => Ok(Self::Korean),
            _ => Err(ParseLanguageError(s.to_string())),
        }
    }
}
