use std::{path::PathBuf, process::ExitStatus};

use thiserror::Error;

/// Failure of an external transform or compile step.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("no {stage} command configured")]
    NotConfigured { stage: &'static str },

    #[error("failed to run '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("'{program}' produced output that is not valid UTF-8")]
    InvalidOutput { program: String },

    #[error("{0}")]
    Other(String),
}

/// Failure to load one transform-marked module.
///
/// Each variant is reported for the single import it concerns; other modules
/// and barrel generation are unaffected.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read SVG '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to transform SVG '{}'", path.display())]
    Transform {
        path: PathBuf,
        #[source]
        source: TransformError,
    },

    #[error("failed to compile component for '{id}'")]
    Compile {
        id: String,
        #[source]
        source: TransformError,
    },
}
