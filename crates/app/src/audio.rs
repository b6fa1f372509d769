//! Rodio-backed audio playback on a dedicated thread.
//!
//! The output stream is not `Send`, so a worker thread owns it and the
//! player just forwards commands over a channel. Every failure short of
//! thread creation degrades to silence: the screening timers keep running
//! whether or not the sound reached the speakers.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{debug, warn};

use earcheck_core::model::Stage;
use services::audio::{AudioPlayer, SoundEffect};

enum AudioCommand {
    PlayLoop(Stage),
    SetVolume(f32),
    PlayEffect(SoundEffect),
    Stop,
}

/// `AudioPlayer` backed by the default output device.
pub struct RodioPlayer {
    commands: UnboundedSender<AudioCommand>,
}

impl RodioPlayer {
    /// Spawn the audio worker thread. Returns `None` when no output device
    /// is available, in which case the caller should fall back to silence.
    #[must_use]
    pub fn start(sounds_dir: PathBuf) -> Option<Self> {
        let (commands, receiver) = unbounded_channel();
        let (ready_tx, ready_rx) = std::sync::mpsc::channel();

        std::thread::Builder::new()
            .name("audio".into())
            .spawn(move || {
                let Ok((stream, handle)) = OutputStream::try_default() else {
                    warn!("no audio output device, sound disabled");
                    let _ = ready_tx.send(false);
                    return;
                };
                let _ = ready_tx.send(true);
                run_worker(stream, handle, sounds_dir, receiver);
            })
            .ok()?;

        if ready_rx.recv() == Ok(true) {
            Some(Self { commands })
        } else {
            None
        }
    }

    fn send(&self, command: AudioCommand) {
        let _ = self.commands.send(command);
    }
}

impl AudioPlayer for RodioPlayer {
    fn play_stage_loop(&self, stage: Stage) {
        self.send(AudioCommand::PlayLoop(stage));
    }

    fn set_volume(&self, volume: f32) {
        self.send(AudioCommand::SetVolume(volume));
    }

    fn play_effect(&self, effect: SoundEffect) {
        self.send(AudioCommand::PlayEffect(effect));
    }

    fn stop(&self) {
        self.send(AudioCommand::Stop);
    }
}

fn run_worker(
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sounds_dir: PathBuf,
    mut receiver: UnboundedReceiver<AudioCommand>,
) {
    let mut loop_sink: Option<Sink> = None;

    while let Some(command) = receiver.blocking_recv() {
        match command {
            AudioCommand::PlayLoop(stage) => {
                if let Some(old) = loop_sink.take() {
                    old.stop();
                }
                loop_sink = start_loop(&handle, &sounds_dir, stage);
            }
            AudioCommand::SetVolume(volume) => {
                if let Some(sink) = &loop_sink {
                    sink.set_volume(volume.clamp(0.0, 1.0));
                }
            }
            AudioCommand::PlayEffect(effect) => play_effect(&handle, effect),
            AudioCommand::Stop => {
                if let Some(sink) = loop_sink.take() {
                    sink.stop();
                }
            }
        }
    }
}

fn start_loop(handle: &OutputStreamHandle, sounds_dir: &Path, stage: Stage) -> Option<Sink> {
    let path = sounds_dir.join(stage.sound_file());
    let file = match File::open(&path) {
        Ok(file) => file,
        Err(err) => {
            warn!(path = %path.display(), %err, "cannot open stage sound");
            return None;
        }
    };
    let source = match Decoder::new(BufReader::new(file)) {
        Ok(source) => source,
        Err(err) => {
            warn!(path = %path.display(), %err, "cannot decode stage sound");
            return None;
        }
    };
    let Ok(sink) = Sink::try_new(handle) else {
        warn!("cannot open playback sink");
        return None;
    };

    debug!(%stage, "starting stage loop");
    sink.set_volume(0.0);
    sink.append(source.repeat_infinite());
    Some(sink)
}

fn play_effect(handle: &OutputStreamHandle, effect: SoundEffect) {
    // Synthesized on the fly so effects need no asset files.
    let (frequency, millis) = match effect {
        SoundEffect::CountdownBeep => (880.0, 150),
        SoundEffect::Click => (1320.0, 40),
    };
    let source = SineWave::new(frequency)
        .take_duration(Duration::from_millis(millis))
        .amplify(0.3);

    let Ok(sink) = Sink::try_new(handle) else {
        return;
    };
    sink.append(source);
    sink.detach();
}
