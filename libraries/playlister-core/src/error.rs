/// Core error types for Playlister
use crate::types::SongId;
use thiserror::Error;

/// Result type alias using `PlaylisterError`
pub type Result<T> = std::result::Result<T, PlaylisterError>;

/// Core error type for Playlister
#[derive(Error, Debug)]
pub enum PlaylisterError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A position outside the current playlist
    #[error("Index {index} is out of range for a playlist of {len} songs")]
    IndexOutOfRange { index: usize, len: usize },

    /// The song a command remembered is no longer where it expects it
    #[error("Song {song_id} is no longer at position {index}")]
    StaleIndex { song_id: SongId, index: usize },

    /// Another playlist of the same owner already uses this name
    #[error("A playlist named \"{0}\" already exists")]
    DuplicateName(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Permission denied
    #[error("Permission denied")]
    PermissionDenied,

    /// The remote service could not be reached
    #[error("Network error: {0}")]
    Network(String),

    /// The remote service rejected the request
    #[error("Remote service error: {0}")]
    Remote(String),
}

impl PlaylisterError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a remote service error
    pub fn remote(msg: impl Into<String>) -> Self {
        Self::Remote(msg.into())
    }

    /// Whether the error was raised before any remote call was made.
    ///
    /// Validation failures leave both the song list and the history untouched.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfRange { .. }
                | Self::StaleIndex { .. }
                | Self::DuplicateName(_)
                | Self::InvalidInput(_)
        )
    }
}
