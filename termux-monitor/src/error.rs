use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("no Python interpreter found on PATH (searched for: {})", .searched.join(", "))]
    InterpreterNotFound { searched: Vec<&'static str> },

    #[error("cannot determine the launcher location: {0}")]
    CurrentExe(#[source] io::Error),

    #[error("launcher path {} has no parent directory", .0.display())]
    NoParentDir(PathBuf),

    #[error("failed to launch {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid message catalog: {0}")]
    Catalog(#[from] serde_json::Error),
}
