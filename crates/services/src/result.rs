use earcheck_core::model::Stage;
use earcheck_core::scoring::{TierInfo, aggregate, tier_for, tier_info};
use earcheck_core::tuning::TestTuning;
use storage::repository::SessionStore;

use crate::error::ResultError;

/// The aggregate outcome shown on the result view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResultSummary {
    pub scores: [Option<u8>; 3],
    pub average: u8,
    pub tier: u8,
    pub tier_count: u8,
    pub info: TierInfo,
}

/// Read-side aggregation over the persisted stage scores.
#[derive(Clone)]
pub struct ResultService {
    store: SessionStore,
    tuning: TestTuning,
}

impl ResultService {
    #[must_use]
    pub fn new(store: SessionStore, tuning: TestTuning) -> Self {
        Self { store, tuning }
    }

    /// Compute the aggregate result. Stages without a persisted score count
    /// as 0, so a partially completed flow still produces a summary.
    ///
    /// # Errors
    ///
    /// Returns `ResultError` if the store cannot be read.
    pub async fn summary(&self) -> Result<ResultSummary, ResultError> {
        let mut scores = [None; 3];
        for stage in Stage::ALL {
            scores[stage.index()] = self.store.stage_score(stage).await?;
        }

        let average = aggregate(scores);
        let tier = tier_for(average, self.tuning.tier_count());

        Ok(ResultSummary {
            scores,
            average,
            tier,
            tier_count: self.tuning.tier_count(),
            info: tier_info(tier, self.tuning),
        })
    }
}
