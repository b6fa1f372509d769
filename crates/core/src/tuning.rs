use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four knobs that vary across screening revisions.
///
/// The volume exponent controls how late the sound becomes perceptible;
/// the score exponent controls how much waiting costs. They are deliberately
/// independent: a slow volume ramp paired with a faster score falloff keeps
/// "when it becomes audible" decoupled from "how much is lost by waiting".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestTuning {
    volume_exponent: u32,
    score_exponent: u32,
    tier_count: u8,
    test_duration_ms: u64,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TuningError {
    #[error("curve exponent must be at least 1, got {provided}")]
    InvalidExponent { provided: u32 },

    #[error("tier count must be 3 or 5, got {provided}")]
    InvalidTierCount { provided: u8 },

    #[error("test duration must be positive")]
    InvalidDuration,
}

impl TestTuning {
    /// Validate a tuning configuration.
    ///
    /// # Errors
    ///
    /// Returns `TuningError` when an exponent is zero, the tier count is not
    /// a supported table size, or the duration is zero.
    pub fn new(
        volume_exponent: u32,
        score_exponent: u32,
        tier_count: u8,
        test_duration_ms: u64,
    ) -> Result<Self, TuningError> {
        if volume_exponent == 0 {
            return Err(TuningError::InvalidExponent {
                provided: volume_exponent,
            });
        }
        if score_exponent == 0 {
            return Err(TuningError::InvalidExponent {
                provided: score_exponent,
            });
        }
        if !matches!(tier_count, 3 | 5) {
            return Err(TuningError::InvalidTierCount {
                provided: tier_count,
            });
        }
        if test_duration_ms == 0 {
            return Err(TuningError::InvalidDuration);
        }

        Ok(Self {
            volume_exponent,
            score_exponent,
            tier_count,
            test_duration_ms,
        })
    }

    #[must_use]
    pub fn volume_exponent(self) -> u32 {
        self.volume_exponent
    }

    #[must_use]
    pub fn score_exponent(self) -> u32 {
        self.score_exponent
    }

    #[must_use]
    pub fn tier_count(self) -> u8 {
        self.tier_count
    }

    #[must_use]
    pub fn test_duration_ms(self) -> u64 {
        self.test_duration_ms
    }
}

impl Default for TestTuning {
    /// The shipped configuration: cubic volume ramp, quadratic score falloff,
    /// five result tiers, 30 second stages.
    fn default() -> Self {
        Self {
            volume_exponent: 3,
            score_exponent: 2,
            tier_count: 5,
            test_duration_ms: 30_000,
        }
    }
}
