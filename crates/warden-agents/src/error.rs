use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating [`crate::BehaviorTuning`].
///
/// Ticking never produces errors; these only come from setup paths.
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML tuning: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse JSON tuning: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, TuningError>;
