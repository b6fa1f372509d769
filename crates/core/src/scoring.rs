//! Volume/score curves, aggregate scoring, and the result tier tables.

use serde::{Deserialize, Serialize};

use crate::tuning::TestTuning;

//
// ─── CURVES ────────────────────────────────────────────────────────────────────
//

/// Output gain for a given elapsed ratio.
///
/// `ratio^k` keeps early volume near zero so listeners with good hearing do
/// not all hear the sound at once at a "medium" level. Monotone
/// non-decreasing on [0,1], with `volume_at(0) == 0` and `volume_at(1) == 1`.
#[must_use]
pub fn volume_at(elapsed_ratio: f64, exponent: u32) -> f64 {
    let ratio = elapsed_ratio.clamp(0.0, 1.0);
    ratio.powi(exponent as i32).clamp(0.0, 1.0)
}

/// Score for a signal received at the given elapsed ratio.
///
/// `100 − round(100·ratio^s)`, clamped to [0,100]. Monotone non-increasing:
/// 100 at ratio 0, 0 at ratio 1.
#[must_use]
pub fn score_at(elapsed_ratio: f64, exponent: u32) -> u8 {
    let ratio = elapsed_ratio.clamp(0.0, 1.0);
    let penalty = (100.0 * ratio.powi(exponent as i32)).round();
    (100.0 - penalty).clamp(0.0, 100.0) as u8
}

//
// ─── AGGREGATION ───────────────────────────────────────────────────────────────
//

/// Arithmetic mean of the three stage scores, rounded to nearest integer.
///
/// Missing scores count as 0, not as an error.
#[must_use]
pub fn aggregate(scores: [Option<u8>; 3]) -> u8 {
    let sum: u32 = scores
        .iter()
        .map(|score| u32::from(score.unwrap_or(0)))
        .sum();
    ((sum as f64) / 3.0).round() as u8
}

/// Map an aggregate score onto a 1-based tier.
///
/// `ceil(score / bucket_width)` with `bucket_width = 100 / tier_count`,
/// clamped to [1, tier_count] so a score of 0 still lands in the first tier.
#[must_use]
pub fn tier_for(score: u8, tier_count: u8) -> u8 {
    let score = u32::from(score.min(100));
    let tiers = u32::from(tier_count);
    let tier = (score * tiers).div_ceil(100);
    tier.clamp(1, tiers) as u8
}

//
// ─── TIER TABLES ───────────────────────────────────────────────────────────────
//

/// The follow-up suggested alongside a result tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    BookAppointment,
    CloserScreening,
    ReadArticle,
}

impl Recommendation {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Recommendation::BookAppointment => "Book an appointment",
            Recommendation::CloserScreening => "Get a full hearing check",
            Recommendation::ReadArticle => "Learn how to protect your hearing",
        }
    }
}

/// Fixed copy for one result tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TierInfo {
    pub headline: &'static str,
    pub emphasis: &'static str,
    pub action: Recommendation,
}

const FIVE_TIERS: [TierInfo; 5] = [
    TierInfo {
        headline: "Your hearing is quite limited",
        emphasis: "limited",
        action: Recommendation::BookAppointment,
    },
    TierInfo {
        headline: "You have a below-average hearing sensitivity",
        emphasis: "below-average",
        action: Recommendation::BookAppointment,
    },
    TierInfo {
        headline: "You have an average hearing sensitivity",
        emphasis: "average",
        action: Recommendation::CloserScreening,
    },
    TierInfo {
        headline: "You have above-average hearing sensitivity",
        emphasis: "above-average",
        action: Recommendation::ReadArticle,
    },
    TierInfo {
        headline: "You have excellent hearing sensitivity",
        emphasis: "excellent",
        action: Recommendation::ReadArticle,
    },
];

const THREE_TIERS: [TierInfo; 3] = [
    TierInfo {
        headline: "Your hearing is quite limited",
        emphasis: "limited",
        action: Recommendation::BookAppointment,
    },
    TierInfo {
        headline: "You have an average hearing sensitivity",
        emphasis: "average",
        action: Recommendation::CloserScreening,
    },
    TierInfo {
        headline: "You have excellent hearing sensitivity",
        emphasis: "excellent",
        action: Recommendation::ReadArticle,
    },
];

/// Copy for a 1-based tier in the configured table.
///
/// Out-of-range tiers are clamped into the table rather than panicking.
#[must_use]
pub fn tier_info(tier: u8, tuning: TestTuning) -> TierInfo {
    let table: &[TierInfo] = match tuning.tier_count() {
        3 => &THREE_TIERS,
        _ => &FIVE_TIERS,
    };
    let index = usize::from(tier.clamp(1, tuning.tier_count())) - 1;
    table[index]
}
