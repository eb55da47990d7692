/// Song domain type
use super::ids::SongId;
use super::user::ActingUser;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A song record from the catalog
///
/// Field names follow the store's JSON (`_id`, `youTubeId`, `ownerEmail`, ...).
/// Counters are maintained by the store and default to zero when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Unique song identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: SongId,

    /// Song title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Release year
    pub year: i32,

    /// YouTube video id used for playback
    #[serde(rename = "youTubeId", default)]
    pub youtube_id: String,

    /// Username of the owning user
    #[serde(default)]
    pub owner_username: String,

    /// Email of the owning user
    #[serde(default)]
    pub owner_email: String,

    /// Number of playlists referencing this song
    #[serde(default)]
    pub num_playlists: u32,

    /// Number of times the song was played
    #[serde(default)]
    pub num_listens: u32,
}

impl Song {
    /// Create a new unowned song with a fresh ID
    pub fn new(title: impl Into<String>, artist: impl Into<String>, year: i32) -> Self {
        Self {
            id: SongId::generate(),
            title: title.into(),
            artist: artist.into(),
            year,
            youtube_id: String::new(),
            owner_username: String::new(),
            owner_email: String::new(),
            num_playlists: 0,
            num_listens: 0,
        }
    }

    /// Set the owner of the song
    #[must_use]
    pub fn owned_by(mut self, owner: &ActingUser) -> Self {
        self.owner_username.clone_from(&owner.username);
        self.owner_email.clone_from(&owner.email);
        self
    }

    /// Set the YouTube video id
    #[must_use]
    pub fn with_youtube_id(mut self, youtube_id: impl Into<String>) -> Self {
        self.youtube_id = youtube_id.into();
        self
    }

    /// Build an independent copy owned by `owner`
    ///
    /// The copy gets a new identity and zeroed counters; title, artist, year
    /// and video id are carried over.
    pub fn duplicate_for(&self, owner: &ActingUser) -> Self {
        Self {
            id: SongId::generate(),
            title: self.title.clone(),
            artist: self.artist.clone(),
            year: self.year,
            youtube_id: self.youtube_id.clone(),
            owner_username: owner.username.clone(),
            owner_email: owner.email.clone(),
            num_playlists: 0,
            num_listens: 0,
        }
    }

    /// Whether `user` owns this song
    pub fn is_owned_by(&self, user: &ActingUser) -> bool {
        self.owner_email == user.email
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" by {} ({})", self.title, self.artist, self.year)
    }
}
