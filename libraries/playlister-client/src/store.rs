//! Store API requests.

use crate::error::{ClientError, Result};
use crate::types::{
    AddSongRequest, ApiError, CopySongRequest, PlaylistPairsResponse, PlaylistSongsResponse,
    PlaylistUpdate, SongResponse, UpdatePlaylistRequest,
};
use playlister_core::{ActingUser, PlaylistId, PlaylistSummary, Song, SongId};
use reqwest::{Client, RequestBuilder, Response};
use tracing::debug;

/// Request builder for the store API.
///
/// Borrows the connection settings of a `StoreClient` for the duration of a call.
pub struct StoreApi<'a> {
    http: &'a Client,
    base_url: &'a str,
    access_token: Option<&'a str>,
}

impl<'a> StoreApi<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, access_token: Option<&'a str>) -> Self {
        Self {
            http,
            base_url,
            access_token,
        }
    }

    /// Get the songs of a playlist, in order.
    pub async fn get_songs_of_playlist(&self, playlist_id: &PlaylistId) -> Result<Vec<Song>> {
        let url = format!("{}/playlist/{}/songs", self.base_url, playlist_id);
        debug!(url = %url, "Fetching playlist songs");

        let response = self.send(self.http.get(&url)).await?;
        let body: PlaylistSongsResponse = response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse playlist songs: {}", e))
        })?;

        debug!(playlist_id = %playlist_id, songs = body.songs.len(), "Fetched playlist songs");
        Ok(body.songs)
    }

    /// Add a song to a playlist at `index`, or at the end.
    pub async fn add_song_to_playlist(
        &self,
        playlist_id: &PlaylistId,
        song_id: &SongId,
        index: Option<usize>,
    ) -> Result<()> {
        let url = format!("{}/playlist/{}/add-song", self.base_url, playlist_id);
        let index = index.and_then(|i| i64::try_from(i).ok()).unwrap_or(-1);
        debug!(url = %url, song_id = %song_id, index, "Adding song to playlist");

        self.send(
            self.http
                .put(&url)
                .json(&AddSongRequest { song_id, index }),
        )
        .await?;
        Ok(())
    }

    /// Remove a song from a playlist.
    pub async fn remove_song_from_playlist(
        &self,
        playlist_id: &PlaylistId,
        song_id: &SongId,
    ) -> Result<()> {
        let url = format!("{}/playlist/{}/song/{}", self.base_url, playlist_id, song_id);
        debug!(url = %url, "Removing song from playlist");

        self.send(self.http.delete(&url)).await?;
        Ok(())
    }

    /// Overwrite the song order of a playlist.
    pub async fn update_playlist_order(
        &self,
        playlist_id: &PlaylistId,
        song_ids: &[SongId],
    ) -> Result<()> {
        self.update_playlist(
            playlist_id,
            PlaylistUpdate {
                songs: Some(song_ids),
                ..PlaylistUpdate::default()
            },
        )
        .await
    }

    /// Rename a playlist.
    pub async fn rename_playlist(&self, playlist_id: &PlaylistId, name: &str) -> Result<()> {
        self.update_playlist(
            playlist_id,
            PlaylistUpdate {
                name: Some(name),
                ..PlaylistUpdate::default()
            },
        )
        .await
    }

    async fn update_playlist(
        &self,
        playlist_id: &PlaylistId,
        playlist: PlaylistUpdate<'_>,
    ) -> Result<()> {
        let url = format!("{}/playlist/{}", self.base_url, playlist_id);
        debug!(url = %url, "Updating playlist");

        self.send(self.http.put(&url).json(&UpdatePlaylistRequest { playlist }))
            .await?;
        Ok(())
    }

    /// Create a copy of a song owned by `owner`.
    pub async fn copy_song(&self, song_id: &SongId, owner: &ActingUser) -> Result<Song> {
        let url = format!("{}/song/{}/copy", self.base_url, song_id);
        debug!(url = %url, owner = %owner.email, "Copying song");

        let response = self
            .send(self.http.post(&url).json(&CopySongRequest {
                owner_username: &owner.username,
                owner_email: &owner.email,
            }))
            .await?;

        let body: SongResponse = response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse copied song: {}", e))
        })?;

        debug!(original = %song_id, copy = %body.song.id, "Song copied");
        Ok(body.song)
    }

    /// Permanently delete a song.
    pub async fn delete_song(&self, song_id: &SongId) -> Result<()> {
        let url = format!("{}/song/{}", self.base_url, song_id);
        debug!(url = %url, song_id = %song_id, "Deleting song");

        match self.send(self.http.delete(&url)).await {
            Ok(_) => Ok(()),
            // Already deleted, that's fine
            Err(ClientError::ServerError { status: 404, .. }) => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// List the playlists owned by `owner_email`.
    pub async fn list_playlists_owned_by(&self, owner_email: &str) -> Result<Vec<PlaylistSummary>> {
        let url = format!(
            "{}/playlistpairs?ownerEmail={}",
            self.base_url,
            urlencoding::encode(owner_email)
        );
        debug!(url = %url, "Fetching playlist pairs");

        let response = self.send(self.http.get(&url)).await?;
        let body: PlaylistPairsResponse = response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse playlist pairs: {}", e))
        })?;

        Ok(body.id_name_pairs)
    }

    /// Send a request and turn non-success statuses into errors.
    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let request = match self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ClientError::ServerUnreachable(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status.as_u16() == 401 {
            return Err(ClientError::AuthRequired);
        }

        let error_text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiError>(&error_text)
            .ok()
            .and_then(|e| e.error_message)
            .unwrap_or(error_text);

        Err(ClientError::ServerError {
            status: status.as_u16(),
            message,
        })
    }
}

// URL encoding helper
mod urlencoding {
    pub fn encode(s: &str) -> String {
        url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
    }
}
