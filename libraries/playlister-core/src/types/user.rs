/// Acting user identity
use serde::{Deserialize, Serialize};

/// The user performing edits
///
/// Stamped as owner on duplicated songs and used to scope playlist-name checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActingUser {
    /// Display name
    pub username: String,

    /// Account email, the owner key used by the store
    pub email: String,
}

impl ActingUser {
    /// Create a new acting user
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }
}
