use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the three ambient-sound detection rounds, in screening order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Restaurant,
    Street,
    Music,
}

/// Static per-stage presentation and sequencing data.
///
/// `keyword` is the fragment of `title` the UI renders emphasised.
/// `next` is `None` for the terminal stage: the flow hands off to
/// age selection from there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageConfig {
    pub title: &'static str,
    pub keyword: &'static str,
    pub description: &'static str,
    pub next: Option<Stage>,
}

const DESCRIPTION: &str =
    "A sound will play and gradually get louder. Press the button as soon as you hear it.";

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Restaurant, Stage::Street, Stage::Music];

    /// Zero-based position in the screening sequence.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Stage::Restaurant => 0,
            Stage::Street => 1,
            Stage::Music => 2,
        }
    }

    /// The stage that follows this one, or `None` for the last stage.
    #[must_use]
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Restaurant => Some(Stage::Street),
            Stage::Street => Some(Stage::Music),
            Stage::Music => None,
        }
    }

    /// Session-store key for this stage's score (`sound1Score`..`sound3Score`).
    #[must_use]
    pub fn score_key(self) -> &'static str {
        match self {
            Stage::Restaurant => "sound1Score",
            Stage::Street => "sound2Score",
            Stage::Music => "sound3Score",
        }
    }

    /// File name of the looping ambient sound for this stage.
    #[must_use]
    pub fn sound_file(self) -> &'static str {
        match self {
            Stage::Restaurant => "restaurant.mp3",
            Stage::Street => "street.mp3",
            Stage::Music => "music.mp3",
        }
    }

    #[must_use]
    pub fn config(self) -> StageConfig {
        match self {
            Stage::Restaurant => StageConfig {
                title: "Hear the restaurant ambiance",
                keyword: "restaurant",
                description: DESCRIPTION,
                next: Some(Stage::Street),
            },
            Stage::Street => StageConfig {
                title: "Hear the street ambiance",
                keyword: "street",
                description: DESCRIPTION,
                next: Some(Stage::Music),
            },
            Stage::Music => StageConfig {
                title: "Hear the musical ambiance",
                keyword: "musical",
                description: DESCRIPTION,
                next: None,
            },
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown stage: {raw}")]
pub struct UnknownStageError {
    pub raw: String,
}

impl FromStr for Stage {
    type Err = UnknownStageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "restaurant" => Ok(Stage::Restaurant),
            "street" => Ok(Stage::Street),
            "music" => Ok(Stage::Music),
            _ => Err(UnknownStageError { raw: s.to_string() }),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Restaurant => "restaurant",
            Stage::Street => "street",
            Stage::Music => "music",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_chain_to_age_selection() {
        assert_eq!(Stage::Restaurant.next(), Some(Stage::Street));
        assert_eq!(Stage::Street.next(), Some(Stage::Music));
        assert_eq!(Stage::Music.next(), None);
    }

    #[test]
    fn score_keys_match_stage_order() {
        assert_eq!(Stage::Restaurant.score_key(), "sound1Score");
        assert_eq!(Stage::Street.score_key(), "sound2Score");
        assert_eq!(Stage::Music.score_key(), "sound3Score");
    }

    #[test]
    fn parse_round_trips_display() {
        for stage in Stage::ALL {
            let parsed: Stage = stage.to_string().parse().unwrap();
            assert_eq!(parsed, stage);
        }
    }

    #[test]
    fn parse_rejects_unknown_stage() {
        assert!("kitchen".parse::<Stage>().is_err());
    }

    #[test]
    fn config_keyword_is_part_of_title() {
        for stage in Stage::ALL {
            let config = stage.config();
            assert!(config.title.contains(config.keyword));
            assert_eq!(config.next, stage.next());
        }
    }
}
