//! Domain model for the hearing screening flow: the stage catalogue, the
//! per-stage test machine, and the scoring curves, all free of I/O so the
//! whole screening logic can be exercised with a fixed clock.

#![forbid(unsafe_code)]

pub mod error;
pub mod machine;
pub mod model;
pub mod scoring;
pub mod time;
pub mod tuning;

pub use error::Error;
pub use machine::{
    ADVANCE_DELAY_MS, COUNTDOWN_START, CountdownTick, Sample, StageScore, TestMachine, TestPhase,
};
pub use model::{AGE_GROUP_KEY, AgeGroup, Stage, StageConfig};
pub use scoring::{Recommendation, TierInfo, aggregate, score_at, tier_for, tier_info, volume_at};
pub use time::Clock;
pub use tuning::{TestTuning, TuningError};
