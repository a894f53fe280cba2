//! Session error kinds.

use std::path::PathBuf;

/// Result alias for session operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the session layer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The backend could not acknowledge the mission briefing.
    #[error("failed to initialize the mission: {0}")]
    Initialization(String),

    /// A backend call failed mid-conversation. The rendered text is what
    /// gets recorded as the assistant's reply.
    #[error("Error: {0}")]
    Turn(String),

    /// The session file exists but cannot be parsed.
    #[error("session file {} is corrupt: {reason}", path.display())]
    Corrupt {
        /// Location of the file.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// A mission parameter is out of bounds.
    #[error("invalid mission parameter: {0}")]
    InvalidParameter(String),

    /// A turn was attempted without an active mission.
    #[error("no active mission")]
    Inactive,

    /// Reading, writing or deleting the session file failed.
    #[error("failed to access session file {}: {source}", path.display())]
    Io {
        /// Location of the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The session could not be serialized.
    #[error("failed to encode session: {0}")]
    Encode(#[from] serde_json::Error),
}

impl Error {
    /// Build an [`Error::Io`] for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
