use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Self-reported age bracket, collected after the last stage.
///
/// Stored for personalization copy only; it never feeds into scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeGroup {
    Under50,
    From51To70,
    Over70,
}

/// Session-store key for the selected age group.
pub const AGE_GROUP_KEY: &str = "ageGroup";

impl AgeGroup {
    pub const ALL: [AgeGroup; 3] = [AgeGroup::Under50, AgeGroup::From51To70, AgeGroup::Over70];

    /// Stable string form used for persistence.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AgeGroup::Under50 => "under-50",
            AgeGroup::From51To70 => "51-70",
            AgeGroup::Over70 => "70+",
        }
    }

    /// Human-readable button label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AgeGroup::Under50 => "Under 50",
            AgeGroup::From51To70 => "51-70",
            AgeGroup::Over70 => "70+",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown age group: {raw}")]
pub struct UnknownAgeGroupError {
    pub raw: String,
}

impl FromStr for AgeGroup {
    type Err = UnknownAgeGroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "under-50" => Ok(AgeGroup::Under50),
            "51-70" => Ok(AgeGroup::From51To70),
            "70+" => Ok(AgeGroup::Over70),
            _ => Err(UnknownAgeGroupError { raw: s.to_string() }),
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
