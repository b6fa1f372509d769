#![forbid(unsafe_code)]

pub mod audio;
pub mod error;
pub mod profile;
pub mod result;
pub mod screening;

pub use earcheck_core::Clock;

pub use audio::{AudioPlayer, NullAudio, SoundEffect};
pub use error::{ProfileError, ResultError, ScreeningError};
pub use profile::ProfileService;
pub use result::{ResultService, ResultSummary};
pub use screening::ScreeningService;
