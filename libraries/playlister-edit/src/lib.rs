//! Playlister - Playlist Editing
//!
//! Undoable editing of a playlist held by a remote store.
//!
//! This crate provides:
//! - An ordered song list mirroring one playlist (`SongList`)
//! - Reversible edits: move, remove and duplicate (`Transaction`)
//! - Linear undo/redo history (`TransactionStack`)
//! - A gesture-level controller tying them together (`PlaylistEditor`)
//!
//! # Architecture
//!
//! `playlister-edit` only knows the store through
//! [`playlister_core::PlaylistService`]:
//! - No dependency on HTTP
//! - No dependency on a terminal or UI toolkit
//!
//! Edits are applied to the local list first and then written to the store.
//! When a write is rejected the list reloads from the store and the error is
//! returned; the failed edit never enters the history.
//!
//! # Example
//!
//! ```rust
//! use playlister_core::{ActingUser, InMemoryPlaylistService, Song};
//! use playlister_edit::PlaylistEditor;
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> playlister_core::Result<()> {
//! let alice = ActingUser::new("alice", "alice@example.com");
//! let store = Arc::new(InMemoryPlaylistService::new());
//! let ids: Vec<_> = ["Intro", "Verse", "Outro"]
//!     .iter()
//!     .map(|title| store.insert_song(Song::new(*title, "Band", 2004).owned_by(&alice)))
//!     .collect();
//! let playlist = store.create_playlist("Set List", &alice.email, &ids);
//!
//! let mut editor = PlaylistEditor::open(store, alice, playlist).await?;
//!
//! // Drag "Outro" to the top
//! editor.move_song(2, 0).await?;
//! assert_eq!(editor.songs()[0].title, "Outro");
//!
//! editor.undo().await?;
//! assert_eq!(editor.songs()[0].title, "Intro");
//! assert!(editor.can_redo());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod editor;
pub mod song_list;
pub mod stack;
pub mod transaction;

pub use editor::PlaylistEditor;
pub use song_list::SongList;
pub use stack::{StackState, TransactionStack};
pub use transaction::Transaction;

// Errors come from the core crate
pub use playlister_core::{PlaylisterError, Result};
