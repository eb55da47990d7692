//! Playlister Core
//!
//! Transport-agnostic types, traits, and error handling shared by every
//! Playlister crate.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Song`, `PlaylistSummary`, `ActingUser` and their IDs
//! - **Service Contract**: `PlaylistService`, the remote store as seen by the editor
//! - **Error Handling**: Unified `PlaylisterError` and `Result` types
//! - **In-memory Store**: `InMemoryPlaylistService`, a local implementation of the contract
//!
//! # Example
//!
//! ```rust
//! use playlister_core::{ActingUser, InMemoryPlaylistService, Song};
//!
//! let owner = ActingUser::new("alice", "alice@example.com");
//! let store = InMemoryPlaylistService::new();
//!
//! let song = store.insert_song(Song::new("Blue in Green", "Miles Davis", 1959).owned_by(&owner));
//! let playlist = store.create_playlist("Late Night", &owner.email, &[song]);
//!
//! assert_eq!(store.playlist_song_ids(&playlist).map(|ids| ids.len()), Some(1));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod memory;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{PlaylisterError, Result};
pub use memory::InMemoryPlaylistService;
pub use traits::PlaylistService;

pub use types::{ActingUser, PlaylistId, PlaylistSummary, Song, SongId};
