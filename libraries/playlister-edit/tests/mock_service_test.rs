//! Failure handling against a mocked store
//!
//! Verifies which remote calls the editor issues (and skips) when the store
//! rejects a write.

use async_trait::async_trait;
use mockall::mock;
use mockall::predicate::eq;
use playlister_core::{
    ActingUser, PlaylistId, PlaylistService, PlaylistSummary, PlaylisterError, Result, Song,
    SongId,
};
use playlister_edit::PlaylistEditor;
use std::sync::Arc;

mock! {
    pub Store {}

    #[async_trait]
    impl PlaylistService for Store {
        async fn get_songs_of_playlist(&self, playlist_id: &PlaylistId) -> Result<Vec<Song>>;
        async fn add_song_to_playlist(
            &self,
            playlist_id: &PlaylistId,
            song_id: &SongId,
            index: Option<usize>,
        ) -> Result<()>;
        async fn remove_song_from_playlist(
            &self,
            playlist_id: &PlaylistId,
            song_id: &SongId,
        ) -> Result<()>;
        async fn update_playlist_order(
            &self,
            playlist_id: &PlaylistId,
            song_ids: &[SongId],
        ) -> Result<()>;
        async fn copy_song(&self, song_id: &SongId, owner: &ActingUser) -> Result<Song>;
        async fn delete_song(&self, song_id: &SongId) -> Result<()>;
        async fn rename_playlist(&self, playlist_id: &PlaylistId, name: &str) -> Result<()>;
        async fn list_playlists_owned_by(&self, owner_email: &str) -> Result<Vec<PlaylistSummary>>;
    }
}

// ===== Helpers =====

fn alice() -> ActingUser {
    ActingUser::new("alice", "alice@example.com")
}

fn songs() -> Vec<Song> {
    vec![
        Song::new("One", "Band", 2001),
        Song::new("Two", "Band", 2002),
        Song::new("Three", "Band", 2003),
    ]
}

fn ids(songs: &[Song]) -> Vec<SongId> {
    songs.iter().map(|s| s.id.clone()).collect()
}

/// A store that always serves `songs` and expects `fetches` reads
fn store_serving(songs: &[Song], fetches: usize) -> MockStore {
    let mut store = MockStore::new();
    let served = songs.to_vec();
    store
        .expect_get_songs_of_playlist()
        .times(fetches)
        .returning(move |_| Ok(served.clone()));
    store
}

async fn open(store: MockStore) -> PlaylistEditor {
    PlaylistEditor::open(Arc::new(store), alice(), PlaylistId::new("p1"))
        .await
        .unwrap()
}

// ===== Tests =====

#[tokio::test]
async fn failed_copy_never_inserts() {
    let songs = songs();
    let mut store = store_serving(&songs, 1);
    store
        .expect_copy_song()
        .times(1)
        .returning(|_, _| Err(PlaylisterError::network("connection reset")));
    store.expect_add_song_to_playlist().never();

    let mut editor = open(store).await;
    let result = editor.duplicate_song(0).await;

    assert!(matches!(result, Err(PlaylisterError::Network(_))));
    assert_eq!(ids(editor.songs()), ids(&songs));
    assert!(editor.history().is_empty());
}

#[tokio::test]
async fn rejected_reorder_reloads_and_is_not_recorded() {
    let songs = songs();
    // Open, then the reload after the rejected write
    let mut store = store_serving(&songs, 2);
    store
        .expect_update_playlist_order()
        .times(1)
        .returning(|_, _| Err(PlaylisterError::remote("write conflict (500)")));

    let mut editor = open(store).await;
    let result = editor.move_song(2, 0).await;

    assert!(matches!(result, Err(PlaylisterError::Remote(_))));
    assert_eq!(ids(editor.songs()), ids(&songs));
    assert!(!editor.can_undo());
}

#[tokio::test]
async fn rejected_remove_snaps_back() {
    let songs = songs();
    let mut store = store_serving(&songs, 2);
    store
        .expect_remove_song_from_playlist()
        .times(1)
        .returning(|_, _| Err(PlaylisterError::PermissionDenied));

    let mut editor = open(store).await;
    let result = editor.remove_song(1).await;

    assert!(matches!(result, Err(PlaylisterError::PermissionDenied)));
    assert_eq!(editor.songs().len(), 3);
    assert!(editor.history().is_empty());
}

#[tokio::test]
async fn write_error_wins_over_failed_reload() {
    let songs = songs();
    let served = songs.clone();
    let mut store = MockStore::new();
    let mut fetches = 0;
    store
        .expect_get_songs_of_playlist()
        .times(2)
        .returning(move |_| {
            fetches += 1;
            if fetches == 1 {
                Ok(served.clone())
            } else {
                Err(PlaylisterError::network("offline"))
            }
        });
    store
        .expect_update_playlist_order()
        .returning(|_, _| Err(PlaylisterError::remote("rejected (500)")));

    let mut editor = open(store).await;
    let result = editor.move_song(0, 1).await;

    assert!(matches!(result, Err(PlaylisterError::Remote(_))));
    assert!(editor.history().is_empty());
}

#[tokio::test]
async fn insert_failure_after_copy_orphans_the_duplicate() {
    let songs = songs();
    let copy = songs[0].duplicate_for(&alice());
    let copy_id = copy.id.clone();

    let mut store = store_serving(&songs, 2);
    store
        .expect_copy_song()
        .with(eq(songs[0].id.clone()), eq(alice()))
        .times(1)
        .returning(move |_, _| Ok(copy.clone()));
    store
        .expect_add_song_to_playlist()
        .withf(move |_, song_id, index| song_id == &copy_id && *index == Some(1))
        .times(1)
        .returning(|_, _, _| Err(PlaylisterError::network("timed out")));
    // The orphan is left for the store to clean up
    store.expect_delete_song().never();

    let mut editor = open(store).await;
    let result = editor.duplicate_song(0).await;

    assert!(result.is_err());
    assert_eq!(ids(editor.songs()), ids(&songs));
    assert!(editor.history().is_empty());
}

#[tokio::test]
async fn failed_undo_keeps_cursor_and_can_be_retried() {
    let songs = songs();
    let copy = songs[0].duplicate_for(&alice());

    let mut store = store_serving(&songs, 1);
    store
        .expect_copy_song()
        .times(1)
        .returning(move |_, _| Ok(copy.clone()));
    store
        .expect_add_song_to_playlist()
        .times(1)
        .returning(|_, _, _| Ok(()));
    store
        .expect_remove_song_from_playlist()
        .times(1)
        .returning(|_, _| Ok(()));
    let mut deletes = 0;
    store.expect_delete_song().times(2).returning(move |_| {
        deletes += 1;
        if deletes == 1 {
            Err(PlaylisterError::network("offline"))
        } else {
            Ok(())
        }
    });

    let mut editor = open(store).await;
    editor.duplicate_song(0).await.unwrap();

    assert!(editor.undo().await.is_err());
    assert!(editor.can_undo());
    assert_eq!(editor.cursor(), 1);

    // Already out of the list, so only the delete is retried
    assert!(editor.undo().await.unwrap());
    assert!(!editor.can_undo());
    assert!(editor.can_redo());
}

#[tokio::test]
async fn rename_checks_names_before_writing() {
    let songs = songs();
    let mut store = store_serving(&songs, 1);
    store
        .expect_list_playlists_owned_by()
        .with(eq("alice@example.com"))
        .times(1)
        .returning(|_| {
            Ok(vec![
                PlaylistSummary::new(PlaylistId::new("p1"), "Mine"),
                PlaylistSummary::new(PlaylistId::new("p2"), "Favourites"),
            ])
        });
    store.expect_rename_playlist().never();

    let mut editor = open(store).await;
    let result = editor.rename("FAVOURITES").await;

    assert!(matches!(result, Err(PlaylisterError::DuplicateName(_))));
}
