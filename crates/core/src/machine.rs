//! The per-stage test state machine.
//!
//! One `TestMachine` owns the whole lifecycle of a single stage attempt:
//! intro → countdown → testing → success. It is pure state plus arithmetic;
//! the UI layer drives it from its countdown ticker and volume sampler and
//! performs the side effects (audio, persistence, navigation) on the values
//! it returns.

use chrono::{DateTime, Utc};

use crate::model::Stage;
use crate::scoring::{score_at, volume_at};
use crate::tuning::TestTuning;

/// Countdown ticks start here and step down once per second.
pub const COUNTDOWN_START: u8 = 3;

/// How long the success confirmation is shown before advancing.
pub const ADVANCE_DELAY_MS: u64 = 2_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestPhase {
    Intro,
    Countdown,
    Testing,
    Success,
}

/// Outcome of a countdown tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownTick {
    /// The machine was not counting down; nothing changed.
    Ignored,
    /// Still counting; the new value to display.
    Counting(u8),
    /// The countdown reached zero and the testing phase began.
    TestingStarted,
}

/// A volume sample taken while testing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Output gain in [0,1] for this instant.
    pub volume: f64,
    /// True once the full test duration has elapsed; the caller should
    /// record a timeout as if the user had signalled.
    pub finished: bool,
}

/// A recorded per-stage result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageScore {
    pub stage: Stage,
    pub score: u8,
}

#[derive(Clone, Debug)]
pub struct TestMachine {
    stage: Stage,
    tuning: TestTuning,
    phase: TestPhase,
    countdown: u8,
    started_at: Option<DateTime<Utc>>,
}

impl TestMachine {
    #[must_use]
    pub fn new(stage: Stage, tuning: TestTuning) -> Self {
        Self {
            stage,
            tuning,
            phase: TestPhase::Intro,
            countdown: COUNTDOWN_START,
            started_at: None,
        }
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn tuning(&self) -> TestTuning {
        self.tuning
    }

    #[must_use]
    pub fn phase(&self) -> TestPhase {
        self.phase
    }

    #[must_use]
    pub fn countdown(&self) -> u8 {
        self.countdown
    }

    /// Leave the intro and begin the countdown.
    ///
    /// Returns false (and changes nothing) outside the intro phase.
    pub fn start_countdown(&mut self) -> bool {
        if self.phase != TestPhase::Intro {
            return false;
        }
        self.phase = TestPhase::Countdown;
        self.countdown = COUNTDOWN_START;
        true
    }

    /// Step the countdown once. On reaching zero the machine enters the
    /// testing phase and records `now` as the start of the attempt.
    pub fn tick_countdown(&mut self, now: DateTime<Utc>) -> CountdownTick {
        if self.phase != TestPhase::Countdown {
            return CountdownTick::Ignored;
        }
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown == 0 {
            self.phase = TestPhase::Testing;
            self.started_at = Some(now);
            return CountdownTick::TestingStarted;
        }
        CountdownTick::Counting(self.countdown)
    }

    /// Elapsed fraction of the test duration, clamped to [0,1].
    ///
    /// None when no attempt start has been recorded.
    #[must_use]
    pub fn elapsed_ratio(&self, now: DateTime<Utc>) -> Option<f64> {
        let started_at = self.started_at?;
        let elapsed_ms = (now - started_at).num_milliseconds().max(0) as f64;
        Some((elapsed_ms / self.tuning.test_duration_ms() as f64).clamp(0.0, 1.0))
    }

    /// Take a volume sample. Only meaningful while testing; any other phase
    /// (including a machine that was reset under a stale sampler) yields None.
    #[must_use]
    pub fn sample(&self, now: DateTime<Utc>) -> Option<Sample> {
        if self.phase != TestPhase::Testing {
            return None;
        }
        let ratio = self.elapsed_ratio(now)?;
        Some(Sample {
            volume: volume_at(ratio, self.tuning.volume_exponent()),
            finished: ratio >= 1.0,
        })
    }

    /// Record the "I hear it" signal.
    ///
    /// Outside the testing phase, or without a recorded start time, the
    /// signal is silently ignored and None is returned. A second call after
    /// a successful one is therefore a no-op.
    pub fn heard(&mut self, now: DateTime<Utc>) -> Option<StageScore> {
        if self.phase != TestPhase::Testing {
            return None;
        }
        let ratio = self.elapsed_ratio(now)?;
        let score = score_at(ratio, self.tuning.score_exponent());
        self.phase = TestPhase::Success;
        Some(StageScore {
            stage: self.stage,
            score,
        })
    }

    /// Reinitialize for the given stage: back to intro, countdown reset,
    /// attempt start cleared. Used when the stage identity changes mid-flow.
    pub fn reset(&mut self, stage: Stage) {
        self.stage = stage;
        self.phase = TestPhase::Intro;
        self.countdown = COUNTDOWN_START;
        self.started_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;
    use chrono::Duration;

    fn testing_machine() -> (TestMachine, DateTime<Utc>) {
        let mut machine = TestMachine::new(Stage::Restaurant, TestTuning::default());
        let t0 = fixed_now();
        assert!(machine.start_countdown());
        assert_eq!(machine.tick_countdown(t0), CountdownTick::Counting(2));
        assert_eq!(machine.tick_countdown(t0), CountdownTick::Counting(1));
        assert_eq!(machine.tick_countdown(t0), CountdownTick::TestingStarted);
        (machine, t0)
    }

    #[test]
    fn countdown_runs_three_ticks_then_starts_testing() {
        let (machine, _) = testing_machine();
        assert_eq!(machine.phase(), TestPhase::Testing);
        assert_eq!(machine.countdown(), 0);
    }

    #[test]
    fn start_countdown_only_from_intro() {
        let (mut machine, _) = testing_machine();
        assert!(!machine.start_countdown());
        assert_eq!(machine.phase(), TestPhase::Testing);
    }

    #[test]
    fn countdown_tick_outside_countdown_is_ignored() {
        let mut machine = TestMachine::new(Stage::Street, TestTuning::default());
        assert_eq!(machine.tick_countdown(fixed_now()), CountdownTick::Ignored);
        assert_eq!(machine.phase(), TestPhase::Intro);
        assert_eq!(machine.countdown(), COUNTDOWN_START);
    }

    #[test]
    fn volume_ramps_with_cubic_curve() {
        let (machine, t0) = testing_machine();
        let at_start = machine.sample(t0).unwrap();
        assert!(at_start.volume < 1e-9);
        assert!(!at_start.finished);

        let halfway = machine.sample(t0 + Duration::milliseconds(15_000)).unwrap();
        assert!((halfway.volume - 0.125).abs() < 1e-9);
        assert!(!halfway.finished);
    }

    #[test]
    fn sample_reports_finished_at_full_duration() {
        let (machine, t0) = testing_machine();
        let end = machine.sample(t0 + Duration::milliseconds(30_000)).unwrap();
        assert!((end.volume - 1.0).abs() < 1e-9);
        assert!(end.finished);
    }

    #[test]
    fn heard_at_half_duration_scores_75() {
        let (mut machine, t0) = testing_machine();
        let result = machine.heard(t0 + Duration::milliseconds(15_000)).unwrap();
        assert_eq!(result.stage, Stage::Restaurant);
        assert_eq!(result.score, 75);
        assert_eq!(machine.phase(), TestPhase::Success);
    }

    #[test]
    fn timeout_scores_zero() {
        let (mut machine, t0) = testing_machine();
        let result = machine.heard(t0 + Duration::milliseconds(30_000)).unwrap();
        assert_eq!(result.score, 0);
    }

    #[test]
    fn heard_is_ignored_outside_testing() {
        let mut machine = TestMachine::new(Stage::Music, TestTuning::default());
        assert_eq!(machine.heard(fixed_now()), None);
        assert_eq!(machine.phase(), TestPhase::Intro);
    }

    #[test]
    fn second_heard_is_a_no_op() {
        let (mut machine, t0) = testing_machine();
        let signal_at = t0 + Duration::milliseconds(10_000);
        assert!(machine.heard(signal_at).is_some());
        assert_eq!(machine.heard(signal_at), None);
        assert_eq!(machine.phase(), TestPhase::Success);
    }

    #[test]
    fn reset_mid_testing_silences_stale_timers() {
        let (mut machine, t0) = testing_machine();
        machine.reset(Stage::Street);

        assert_eq!(machine.stage(), Stage::Street);
        assert_eq!(machine.phase(), TestPhase::Intro);
        assert_eq!(machine.countdown(), COUNTDOWN_START);
        // A sampler or heard handler still running for the old stage
        // observes nothing and mutates nothing.
        assert_eq!(machine.sample(t0 + Duration::milliseconds(20_000)), None);
        assert_eq!(machine.heard(t0 + Duration::milliseconds(20_000)), None);
        assert_eq!(machine.phase(), TestPhase::Intro);
    }

    #[test]
    fn elapsed_before_start_clamps_to_zero() {
        let (machine, t0) = testing_machine();
        let ratio = machine.elapsed_ratio(t0 - Duration::milliseconds(500)).unwrap();
        assert_eq!(ratio, 0.0);
    }
}
