//! In-memory playlist store
//!
//! A local implementation of [`PlaylistService`] with the same observable
//! semantics as the remote store. Used for offline demos and as the backing
//! store in tests.

use crate::error::{PlaylisterError, Result};
use crate::traits::PlaylistService;
use crate::types::{ActingUser, PlaylistId, PlaylistSummary, Song, SongId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

#[derive(Debug, Clone)]
struct StoredPlaylist {
    id: PlaylistId,
    name: String,
    owner_email: String,
    songs: Vec<SongId>,
}

#[derive(Debug, Default)]
struct Store {
    songs: HashMap<SongId, Song>,
    /// Kept in creation order so listings are stable
    playlists: Vec<StoredPlaylist>,
}

impl Store {
    fn playlist_mut(&mut self, id: &PlaylistId) -> Result<&mut StoredPlaylist> {
        self.playlists
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| PlaylisterError::not_found("Playlist", id.as_str()))
    }

    fn playlist(&self, id: &PlaylistId) -> Result<&StoredPlaylist> {
        self.playlists
            .iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| PlaylisterError::not_found("Playlist", id.as_str()))
    }
}

/// In-memory playlist store
#[derive(Debug, Default)]
pub struct InMemoryPlaylistService {
    store: Mutex<Store>,
}

impl InMemoryPlaylistService {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        // No invariant spans a panic point, so a poisoned guard is still consistent
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a song to the catalog, returning its ID
    pub fn insert_song(&self, song: Song) -> SongId {
        let id = song.id.clone();
        self.lock().songs.insert(id.clone(), song);
        id
    }

    /// Create a playlist with the given songs
    pub fn create_playlist(
        &self,
        name: impl Into<String>,
        owner_email: impl Into<String>,
        songs: &[SongId],
    ) -> PlaylistId {
        let id = PlaylistId::generate();
        let mut store = self.lock();
        for song_id in songs {
            if let Some(song) = store.songs.get_mut(song_id) {
                song.num_playlists += 1;
            }
        }
        store.playlists.push(StoredPlaylist {
            id: id.clone(),
            name: name.into(),
            owner_email: owner_email.into(),
            songs: songs.to_vec(),
        });
        id
    }

    /// Number of songs in the catalog
    pub fn song_count(&self) -> usize {
        self.lock().songs.len()
    }

    /// Look up a catalog song
    pub fn song(&self, id: &SongId) -> Option<Song> {
        self.lock().songs.get(id).cloned()
    }

    /// Persisted song order of a playlist
    pub fn playlist_song_ids(&self, id: &PlaylistId) -> Option<Vec<SongId>> {
        self.lock().playlist(id).ok().map(|p| p.songs.clone())
    }

    /// Persisted name of a playlist
    pub fn playlist_name(&self, id: &PlaylistId) -> Option<String> {
        self.lock().playlist(id).ok().map(|p| p.name.clone())
    }
}

#[async_trait]
impl PlaylistService for InMemoryPlaylistService {
    async fn get_songs_of_playlist(&self, playlist_id: &PlaylistId) -> Result<Vec<Song>> {
        let store = self.lock();
        let playlist = store.playlist(playlist_id)?;

        // Dangling references are skipped, matching how the store populates lists
        Ok(playlist
            .songs
            .iter()
            .filter_map(|id| store.songs.get(id).cloned())
            .collect())
    }

    async fn add_song_to_playlist(
        &self,
        playlist_id: &PlaylistId,
        song_id: &SongId,
        index: Option<usize>,
    ) -> Result<()> {
        let mut store = self.lock();
        if !store.songs.contains_key(song_id) {
            return Err(PlaylisterError::not_found("Song", song_id.as_str()));
        }

        let playlist = store.playlist_mut(playlist_id)?;
        match index {
            Some(i) if i < playlist.songs.len() => playlist.songs.insert(i, song_id.clone()),
            _ => playlist.songs.push(song_id.clone()),
        }

        if let Some(song) = store.songs.get_mut(song_id) {
            song.num_playlists += 1;
        }

        debug!(playlist_id = %playlist_id, song_id = %song_id, ?index, "Song added");
        Ok(())
    }

    async fn remove_song_from_playlist(
        &self,
        playlist_id: &PlaylistId,
        song_id: &SongId,
    ) -> Result<()> {
        let mut store = self.lock();
        let playlist = store.playlist_mut(playlist_id)?;
        let position = playlist
            .songs
            .iter()
            .position(|id| id == song_id)
            .ok_or_else(|| PlaylisterError::not_found("Song in playlist", song_id.as_str()))?;
        playlist.songs.remove(position);

        if let Some(song) = store.songs.get_mut(song_id) {
            song.num_playlists = song.num_playlists.saturating_sub(1);
        }

        debug!(playlist_id = %playlist_id, song_id = %song_id, "Song removed");
        Ok(())
    }

    async fn update_playlist_order(
        &self,
        playlist_id: &PlaylistId,
        song_ids: &[SongId],
    ) -> Result<()> {
        let mut store = self.lock();
        let playlist = store.playlist_mut(playlist_id)?;
        playlist.songs = song_ids.to_vec();
        Ok(())
    }

    async fn copy_song(&self, song_id: &SongId, owner: &ActingUser) -> Result<Song> {
        let mut store = self.lock();
        let original = store
            .songs
            .get(song_id)
            .ok_or_else(|| PlaylisterError::not_found("Song", song_id.as_str()))?;

        let copy = original.duplicate_for(owner);
        store.songs.insert(copy.id.clone(), copy.clone());

        debug!(original = %song_id, copy = %copy.id, owner = %owner.email, "Song copied");
        Ok(copy)
    }

    async fn delete_song(&self, song_id: &SongId) -> Result<()> {
        let mut store = self.lock();
        if store.songs.remove(song_id).is_none() {
            return Err(PlaylisterError::not_found("Song", song_id.as_str()));
        }

        for playlist in &mut store.playlists {
            playlist.songs.retain(|id| id != song_id);
        }

        debug!(song_id = %song_id, "Song deleted");
        Ok(())
    }

    async fn rename_playlist(&self, playlist_id: &PlaylistId, name: &str) -> Result<()> {
        let mut store = self.lock();
        store.playlist_mut(playlist_id)?.name = name.to_string();
        Ok(())
    }

    async fn list_playlists_owned_by(&self, owner_email: &str) -> Result<Vec<PlaylistSummary>> {
        let store = self.lock();
        Ok(store
            .playlists
            .iter()
            .filter(|p| p.owner_email == owner_email)
            .map(|p| PlaylistSummary::new(p.id.clone(), p.name.clone()))
            .collect())
    }
}
