//! Playlister Store Client
//!
//! HTTP client library for the Playlister store API.
//!
//! # Features
//!
//! - **Playlist contents**: fetch, add, remove and reorder songs
//! - **Catalog**: copy and delete songs
//! - **Playlist metadata**: rename, list a user's playlists
//!
//! `StoreClient` implements [`playlister_core::PlaylistService`], so it can be
//! handed straight to the editor.
//!
//! # Example
//!
//! ```ignore
//! use playlister_client::{StoreClient, StoreConfig};
//! use playlister_core::{PlaylistId, PlaylistService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = StoreClient::new(StoreConfig::new("http://localhost:4000/store"))?;
//!
//!     let songs = client.get_songs_of_playlist(&PlaylistId::new("64f1")).await?;
//!     println!("Playlist has {} songs", songs.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod store;
mod types;

// Re-export main types
pub use client::{ApiHandle, StoreClient};
pub use error::{ClientError, Result};
pub use store::StoreApi;
pub use types::StoreConfig;
