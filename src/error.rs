//! Fatal errors that abort a run before any evaluation starts.
//!
//! Everything that goes wrong while looking at individual files is turned
//! into a fact and then into a Fail verdict; only the structural
//! preconditions below stop the pipeline.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("repository root {0:?} does not exist")]
    RootNotFound(PathBuf),

    #[error("repository root {0:?} is not a directory")]
    RootNotDirectory(PathBuf),

    #[error("reading config {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing config {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid glob pattern {pattern:?}: {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("criterion catalog is inconsistent: {0}")]
    Catalog(String),
}

pub type Result<T> = std::result::Result<T, EvalError>;
