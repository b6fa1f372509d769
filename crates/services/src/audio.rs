use earcheck_core::model::Stage;

/// One-shot feedback sounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundEffect {
    CountdownBeep,
    Click,
}

/// Playback seam for the screening flow.
///
/// Every method is best-effort: the scoring path runs on the wall clock and
/// must not depend on whether sound actually reached the speakers, so
/// implementations swallow backend failures (a missing output device, a
/// missing asset file) instead of surfacing them.
pub trait AudioPlayer: Send + Sync {
    /// Start the looping ambient sound for a stage, from the beginning,
    /// at (near) zero volume.
    fn play_stage_loop(&self, stage: Stage);

    /// Adjust the gain of the current stage loop, 0.0..=1.0.
    fn set_volume(&self, volume: f32);

    /// Fire a one-shot effect.
    fn play_effect(&self, effect: SoundEffect);

    /// Stop and rewind whatever is playing.
    fn stop(&self);
}

/// Silent player used in tests and as a fallback when no audio device
/// exists.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullAudio;

impl AudioPlayer for NullAudio {
    fn play_stage_loop(&self, _stage: Stage) {}

    fn set_volume(&self, _volume: f32) {}

    fn play_effect(&self, _effect: SoundEffect) {}

    fn stop(&self) {}
}
