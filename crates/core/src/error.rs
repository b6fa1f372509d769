use thiserror::Error;

use crate::model::UnknownStageError;
use crate::tuning::TuningError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Tuning(#[from] TuningError),
    #[error(transparent)]
    UnknownStage(#[from] UnknownStageError),
}
