use chrono::{DateTime, Utc};

use earcheck_core::machine::{CountdownTick, Sample, TestMachine, TestPhase};
use earcheck_core::model::{Stage, StageConfig};

/// View-side wrapper around one stage's test machine.
pub struct TestVm {
    machine: TestMachine,
}

impl TestVm {
    #[must_use]
    pub fn new(machine: TestMachine) -> Self {
        Self { machine }
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.machine.stage()
    }

    #[must_use]
    pub fn phase(&self) -> TestPhase {
        self.machine.phase()
    }

    #[must_use]
    pub fn countdown(&self) -> u8 {
        self.machine.countdown()
    }

    #[must_use]
    pub fn config(&self) -> StageConfig {
        self.machine.stage().config()
    }

    /// Stage title split around the emphasised keyword.
    #[must_use]
    pub fn title_parts(&self) -> (&'static str, &'static str, &'static str) {
        let config = self.config();
        match config.title.split_once(config.keyword) {
            Some((before, after)) => (before, config.keyword, after),
            None => (config.title, "", ""),
        }
    }

    pub fn start_countdown(&mut self) -> bool {
        self.machine.start_countdown()
    }

    pub fn tick_countdown(&mut self, now: DateTime<Utc>) -> CountdownTick {
        self.machine.tick_countdown(now)
    }

    #[must_use]
    pub fn sample(&self, now: DateTime<Utc>) -> Option<Sample> {
        self.machine.sample(now)
    }

    pub fn machine_mut(&mut self) -> &mut TestMachine {
        &mut self.machine
    }
}
