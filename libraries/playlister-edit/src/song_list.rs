//! Ordered song list
//!
//! The local view of one playlist. Every mutation is applied locally first and
//! then written to the service; a rejected write reloads the list so it never
//! shows an order the store disagrees with.

use playlister_core::{
    ActingUser, PlaylistId, PlaylistService, PlaylisterError, Result, Song, SongId,
};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// In-memory mirror of a playlist's songs
///
/// Also the capability handed to transactions: it is the only way they reach
/// the remote store.
pub struct SongList {
    service: Arc<dyn PlaylistService>,
    playlist_id: PlaylistId,
    songs: Vec<Song>,
}

impl SongList {
    /// Fetch a playlist and build its local view
    pub async fn open(service: Arc<dyn PlaylistService>, playlist_id: PlaylistId) -> Result<Self> {
        let songs = service.get_songs_of_playlist(&playlist_id).await?;
        debug!(playlist_id = %playlist_id, songs = songs.len(), "Song list opened");

        Ok(Self {
            service,
            playlist_id,
            songs,
        })
    }

    /// Replace local state with the persisted contents of `playlist_id`
    ///
    /// On failure the current state (and playlist) is kept.
    pub async fn load(&mut self, playlist_id: PlaylistId) -> Result<()> {
        let songs = self.service.get_songs_of_playlist(&playlist_id).await?;
        debug!(playlist_id = %playlist_id, songs = songs.len(), "Song list loaded");

        self.playlist_id = playlist_id;
        self.songs = songs;
        Ok(())
    }

    /// Reload the current playlist from the store
    pub async fn reload(&mut self) -> Result<()> {
        let playlist_id = self.playlist_id.clone();
        self.load(playlist_id).await
    }

    /// Move the song at `from` to `to` and persist the new order
    ///
    /// Indices outside the list make this a no-op.
    pub async fn move_at(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.songs.len();
        if from >= len || to >= len {
            debug!(from, to, len, "Move ignored, index out of range");
            return Ok(());
        }
        if from == to {
            return Ok(());
        }

        let song = self.songs.remove(from);
        self.songs.insert(to, song);

        let ids = self.ids();
        let written = self
            .service
            .update_playlist_order(&self.playlist_id, &ids)
            .await;
        self.confirm(written).await
    }

    /// Insert `song` at `index`, or append when `index` is `None` or past the end
    ///
    /// Returns the position the song ended up at.
    pub async fn insert_at(&mut self, song: Song, index: Option<usize>) -> Result<usize> {
        let position = index.filter(|&i| i < self.songs.len());
        let song_id = song.id.clone();

        let inserted_at = match position {
            Some(i) => {
                self.songs.insert(i, song);
                i
            }
            None => {
                self.songs.push(song);
                self.songs.len() - 1
            }
        };

        let written = self
            .service
            .add_song_to_playlist(&self.playlist_id, &song_id, position)
            .await;
        self.confirm(written).await?;
        Ok(inserted_at)
    }

    /// Remove the song at `index` and return it
    ///
    /// The store drops the first occurrence of the song's id. When an earlier
    /// entry shares that id, the local order is written back afterwards so the
    /// store loses the same entry the list did.
    pub async fn remove_at(&mut self, index: usize) -> Result<Song> {
        if index >= self.songs.len() {
            return Err(PlaylisterError::IndexOutOfRange {
                index,
                len: self.songs.len(),
            });
        }

        let song = self.songs.remove(index);
        let repeated = self.songs[..index].iter().any(|s| s.id == song.id);

        let written = self
            .service
            .remove_song_from_playlist(&self.playlist_id, &song.id)
            .await;
        self.confirm(written).await?;

        if repeated {
            debug!(song_id = %song.id, index, "Removed a repeated entry, rewriting order");
            let ids = self.ids();
            let written = self
                .service
                .update_playlist_order(&self.playlist_id, &ids)
                .await;
            self.confirm(written).await?;
        }
        Ok(song)
    }

    /// Ask the store for a copy of `song_id` owned by `owner`
    pub async fn copy_song(&self, song_id: &SongId, owner: &ActingUser) -> Result<Song> {
        self.service.copy_song(song_id, owner).await
    }

    /// Permanently delete a song record
    pub async fn delete_song(&self, song_id: &SongId) -> Result<()> {
        self.service.delete_song(song_id).await
    }

    /// Reload after a rejected write; the write error is what the caller sees
    async fn confirm(&mut self, written: Result<()>) -> Result<()> {
        let Err(err) = written else {
            return Ok(());
        };

        warn!(
            playlist_id = %self.playlist_id,
            error = %err,
            "Remote write rejected, reloading playlist"
        );
        if let Err(reload_err) = self.reload().await {
            warn!(
                playlist_id = %self.playlist_id,
                error = %reload_err,
                "Reload after rejected write failed"
            );
        }
        Err(err)
    }

    /// Current songs, in order
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Number of songs
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Whether the playlist has no songs
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Song at `index`
    pub fn get(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    /// Position of the first song with `song_id`
    pub fn position_of(&self, song_id: &SongId) -> Option<usize> {
        self.songs.iter().position(|s| &s.id == song_id)
    }

    /// Song ids in order
    pub fn ids(&self) -> Vec<SongId> {
        self.songs.iter().map(|s| s.id.clone()).collect()
    }

    /// Playlist this list mirrors
    pub fn playlist_id(&self) -> &PlaylistId {
        &self.playlist_id
    }
}

impl fmt::Debug for SongList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SongList")
            .field("playlist_id", &self.playlist_id)
            .field("songs", &self.songs)
            .finish_non_exhaustive()
    }
}
