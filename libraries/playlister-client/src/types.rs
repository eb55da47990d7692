//! Types for store API requests and responses.

use playlister_core::{PlaylistSummary, Song, SongId};
use serde::{Deserialize, Serialize};

/// Configuration for connecting to a Playlister store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the store API (e.g., "http://localhost:4000/store")
    pub url: String,
    /// Session token sent as a bearer credential (if authenticated)
    pub access_token: Option<String>,
}

impl StoreConfig {
    /// Create a new store config with just the URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            access_token: None,
        }
    }

    /// Create a config with an existing session token.
    pub fn with_token(url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            access_token: Some(access_token.into()),
        }
    }
}

// =============================================================================
// Playlist Types
// =============================================================================

/// Request body for the add-song endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddSongRequest<'a> {
    pub song_id: &'a SongId,
    /// -1 appends
    pub index: i64,
}

/// Partial playlist update; absent fields are left untouched by the store.
#[derive(Debug, Default, Serialize)]
pub(crate) struct PlaylistUpdate<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub songs: Option<&'a [SongId]>,
}

/// Envelope for playlist updates.
#[derive(Debug, Serialize)]
pub(crate) struct UpdatePlaylistRequest<'a> {
    pub playlist: PlaylistUpdate<'a>,
}

/// Songs of one playlist, in order.
#[derive(Debug, Deserialize)]
pub(crate) struct PlaylistSongsResponse {
    pub songs: Vec<Song>,
}

/// The `{id, name}` pairs of a user's playlists.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlaylistPairsResponse {
    pub id_name_pairs: Vec<PlaylistSummary>,
}

// =============================================================================
// Song Types
// =============================================================================

/// Request body for copying a song.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CopySongRequest<'a> {
    pub owner_username: &'a str,
    pub owner_email: &'a str,
}

/// A single song record.
#[derive(Debug, Deserialize)]
pub(crate) struct SongResponse {
    pub song: Song,
}

// =============================================================================
// Error Types
// =============================================================================

/// Error body returned by the store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiError {
    pub error_message: Option<String>,
}
