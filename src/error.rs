use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimelineError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Unexpected data in binding {index}: {reason}")]
    DataShape { index: usize, reason: String },

    #[error("I/O error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("File {} was written but is empty", .0.display())]
    PostWriteIntegrity(PathBuf),
}

impl TimelineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TimelineError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TimelineError>;
