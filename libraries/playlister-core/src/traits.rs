//! Service contract for the remote playlist store

use crate::error::Result;
use crate::types::{ActingUser, PlaylistId, PlaylistSummary, Song, SongId};
use async_trait::async_trait;

/// Remote playlist service
///
/// The authoritative store for songs and playlist contents. The editor only
/// ever talks to the store through this trait, so an HTTP client and the
/// in-memory store are interchangeable.
///
/// Every method is a single remote call; implementations must not retry
/// writes on their own.
#[async_trait]
pub trait PlaylistService: Send + Sync {
    // ========================================================================
    // Playlist contents
    // ========================================================================

    /// Fetch the songs of a playlist in their persisted order
    async fn get_songs_of_playlist(&self, playlist_id: &PlaylistId) -> Result<Vec<Song>>;

    /// Add a song to a playlist
    ///
    /// `index` of `None` appends; an index past the end also appends.
    async fn add_song_to_playlist(
        &self,
        playlist_id: &PlaylistId,
        song_id: &SongId,
        index: Option<usize>,
    ) -> Result<()>;

    /// Remove a song from a playlist
    async fn remove_song_from_playlist(
        &self,
        playlist_id: &PlaylistId,
        song_id: &SongId,
    ) -> Result<()>;

    /// Overwrite the playlist order with the given id sequence
    async fn update_playlist_order(
        &self,
        playlist_id: &PlaylistId,
        song_ids: &[SongId],
    ) -> Result<()>;

    // ========================================================================
    // Catalog
    // ========================================================================

    /// Persist a copy of a song owned by `owner` and return the new record
    async fn copy_song(&self, song_id: &SongId, owner: &ActingUser) -> Result<Song>;

    /// Permanently delete a song record
    async fn delete_song(&self, song_id: &SongId) -> Result<()>;

    // ========================================================================
    // Playlist metadata
    // ========================================================================

    /// Rename a playlist
    async fn rename_playlist(&self, playlist_id: &PlaylistId, name: &str) -> Result<()>;

    /// List the `{id, name}` pairs of every playlist owned by `owner_email`
    async fn list_playlists_owned_by(&self, owner_email: &str) -> Result<Vec<PlaylistSummary>>;
}
