//! Main Playlister store client.

use crate::error::{ClientError, Result};
use crate::store::StoreApi;
use crate::types::StoreConfig;
use async_trait::async_trait;
use playlister_core::{ActingUser, PlaylistId, PlaylistService, PlaylistSummary, Song, SongId};
use reqwest::Client;
use std::time::Duration;

/// Client for the Playlister store.
///
/// Every call is bounded by the HTTP timeouts configured here; there is no
/// other cancellation.
///
/// # Example
///
/// ```ignore
/// use playlister_client::{StoreClient, StoreConfig};
///
/// let client = StoreClient::new(StoreConfig::with_token("http://localhost:4000/store", "token"))?;
/// let playlists = client.api().client().list_playlists_owned_by("alice@example.com").await?;
/// ```
pub struct StoreClient {
    http: Client,
    config: StoreConfig,
}

impl StoreClient {
    /// Create a new client with the given configuration.
    pub fn new(config: StoreConfig) -> Result<Self> {
        // Validate URL
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let url = config.url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let normalized_config = StoreConfig {
            url,
            access_token: config.access_token,
        };

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Playlister/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            http,
            config: normalized_config,
        })
    }

    /// Get the store URL.
    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Snapshot the connection settings and hand out a request builder.
    pub fn api(&self) -> ApiHandle {
        ApiHandle {
            http: self.http.clone(),
            url: self.config.url.clone(),
            access_token: self.config.access_token.clone(),
        }
    }
}

/// Owned connection settings for one or more store calls.
///
/// Returned by `StoreClient::api()`; use `.client()` to issue requests.
pub struct ApiHandle {
    http: Client,
    url: String,
    access_token: Option<String>,
}

impl ApiHandle {
    /// Get the request builder.
    pub fn client(&self) -> StoreApi<'_> {
        StoreApi::new(&self.http, &self.url, self.access_token.as_deref())
    }
}

#[async_trait]
impl PlaylistService for StoreClient {
    async fn get_songs_of_playlist(
        &self,
        playlist_id: &PlaylistId,
    ) -> playlister_core::Result<Vec<Song>> {
        let handle = self.api();
        Ok(handle.client().get_songs_of_playlist(playlist_id).await?)
    }

    async fn add_song_to_playlist(
        &self,
        playlist_id: &PlaylistId,
        song_id: &SongId,
        index: Option<usize>,
    ) -> playlister_core::Result<()> {
        let handle = self.api();
        Ok(handle
            .client()
            .add_song_to_playlist(playlist_id, song_id, index)
            .await?)
    }

    async fn remove_song_from_playlist(
        &self,
        playlist_id: &PlaylistId,
        song_id: &SongId,
    ) -> playlister_core::Result<()> {
        let handle = self.api();
        Ok(handle
            .client()
            .remove_song_from_playlist(playlist_id, song_id)
            .await?)
    }

    async fn update_playlist_order(
        &self,
        playlist_id: &PlaylistId,
        song_ids: &[SongId],
    ) -> playlister_core::Result<()> {
        let handle = self.api();
        Ok(handle
            .client()
            .update_playlist_order(playlist_id, song_ids)
            .await?)
    }

    async fn copy_song(
        &self,
        song_id: &SongId,
        owner: &ActingUser,
    ) -> playlister_core::Result<Song> {
        let handle = self.api();
        Ok(handle.client().copy_song(song_id, owner).await?)
    }

    async fn delete_song(&self, song_id: &SongId) -> playlister_core::Result<()> {
        let handle = self.api();
        Ok(handle.client().delete_song(song_id).await?)
    }

    async fn rename_playlist(
        &self,
        playlist_id: &PlaylistId,
        name: &str,
    ) -> playlister_core::Result<()> {
        let handle = self.api();
        Ok(handle.client().rename_playlist(playlist_id, name).await?)
    }

    async fn list_playlists_owned_by(
        &self,
        owner_email: &str,
    ) -> playlister_core::Result<Vec<PlaylistSummary>> {
        let handle = self.api();
        Ok(handle.client().list_playlists_owned_by(owner_email).await?)
    }
}
