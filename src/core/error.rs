use crate::core::step::StepKind;
use std::path::PathBuf;
use thiserror::Error;

/// Rejections raised while assembling a wizard from its steps.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("a wizard needs at least one step")]
    EmptySteps,

    #[error("step {kind} repeats position {position}")]
    DuplicatePosition { kind: StepKind, position: usize },

    #[error("expected a step at position {expected}, found position {found}")]
    PositionGap { expected: usize, found: usize },

    #[error("step {kind} already belongs to another wizard")]
    AlreadyRegistered { kind: StepKind },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("image.extensions must list at least one extension")]
    NoImageExtensions,
}
