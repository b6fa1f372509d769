use earcheck_core::machine::{StageScore, TestMachine};
use earcheck_core::model::Stage;
use earcheck_core::time::Clock;
use earcheck_core::tuning::TestTuning;
use storage::repository::SessionStore;
use tracing::{debug, info};

use crate::error::ScreeningError;

/// Orchestrates stage attempts and persists their scores.
///
/// The machine itself lives with whoever drives the timers (the test view);
/// this service seeds new machines with the configured tuning and is the
/// single write path for scores, so every recorded result goes through the
/// same clock and the same store.
#[derive(Clone)]
pub struct ScreeningService {
    clock: Clock,
    store: SessionStore,
    tuning: TestTuning,
}

impl ScreeningService {
    #[must_use]
    pub fn new(clock: Clock, store: SessionStore, tuning: TestTuning) -> Self {
        Self {
            clock,
            store,
            tuning,
        }
    }

    #[must_use]
    pub fn tuning(&self) -> TestTuning {
        self.tuning
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// A fresh machine for one attempt at the given stage.
    #[must_use]
    pub fn new_run(&self, stage: Stage) -> TestMachine {
        debug!(%stage, "starting stage run");
        TestMachine::new(stage, self.tuning)
    }

    /// Record the user's "I hear it" signal and persist the resulting score.
    ///
    /// Returns None when the machine ignored the signal (not in the testing
    /// phase); that is a valid non-event, not an error.
    ///
    /// # Errors
    ///
    /// Returns `ScreeningError` if persisting the score fails.
    pub async fn record_heard(
        &self,
        machine: &mut TestMachine,
    ) -> Result<Option<StageScore>, ScreeningError> {
        let Some(result) = machine.heard(self.clock.now()) else {
            debug!(stage = %machine.stage(), "heard signal ignored outside testing");
            return Ok(None);
        };
        self.persist(result).await?;
        Ok(Some(result))
    }

    /// Record a timed-out attempt: the full duration elapsed without a
    /// signal. Runs the same scoring path, which lands at score 0.
    ///
    /// # Errors
    ///
    /// Returns `ScreeningError` if persisting the score fails.
    pub async fn record_timeout(
        &self,
        machine: &mut TestMachine,
    ) -> Result<Option<StageScore>, ScreeningError> {
        let Some(result) = machine.heard(self.clock.now()) else {
            return Ok(None);
        };
        debug!(stage = %result.stage, "stage timed out without a signal");
        self.persist(result).await?;
        Ok(Some(result))
    }

    async fn persist(&self, result: StageScore) -> Result<(), ScreeningError> {
        self.store
            .set_stage_score(result.stage, result.score)
            .await?;
        info!(stage = %result.stage, score = result.score, "stage score recorded");
        Ok(())
    }
}
