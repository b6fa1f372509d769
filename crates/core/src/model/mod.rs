mod age;
mod stage;

pub use age::{AGE_GROUP_KEY, AgeGroup, UnknownAgeGroupError};
pub use stage::{Stage, StageConfig, UnknownStageError};
