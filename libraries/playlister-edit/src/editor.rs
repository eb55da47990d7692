//! Playlist editor
//!
//! Turns user gestures into transactions and drives the stack.

use crate::song_list::SongList;
use crate::stack::{StackState, TransactionStack};
use crate::transaction::Transaction;
use playlister_core::{
    ActingUser, PlaylistId, PlaylistService, PlaylisterError, Result, Song,
};
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// Editing session for one playlist at a time
///
/// Every history-changing method takes `&mut self`, so a gesture cannot start
/// while another one is still awaiting the store.
pub struct PlaylistEditor {
    service: Arc<dyn PlaylistService>,
    user: ActingUser,
    list: SongList,
    stack: TransactionStack,
}

impl PlaylistEditor {
    /// Load `playlist_id` and start with an empty history
    pub async fn open(
        service: Arc<dyn PlaylistService>,
        user: ActingUser,
        playlist_id: PlaylistId,
    ) -> Result<Self> {
        let list = SongList::open(service.clone(), playlist_id).await?;
        info!(
            playlist_id = %list.playlist_id(),
            user = %user.email,
            songs = list.len(),
            "Editing playlist"
        );

        Ok(Self {
            service,
            user,
            list,
            stack: TransactionStack::new(),
        })
    }

    /// Edit another playlist; the history of the current one is dropped
    pub async fn switch_to(&mut self, playlist_id: PlaylistId) -> Result<()> {
        self.list.load(playlist_id).await?;
        self.stack.clear();
        info!(playlist_id = %self.list.playlist_id(), "Switched playlist");
        Ok(())
    }

    /// End the session, discarding history
    pub fn close(self) {
        info!(
            playlist_id = %self.list.playlist_id(),
            transactions = self.stack.len(),
            "Closing editor"
        );
    }

    /// Drag the song at `from` onto `to`
    ///
    /// Dropping a song back onto its own slot does nothing and returns `false`.
    pub async fn move_song(&mut self, from: usize, to: usize) -> Result<bool> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from == to {
            return Ok(false);
        }

        self.process(Transaction::move_song(from, to)).await?;
        Ok(true)
    }

    /// Delete the song at `index`
    pub async fn remove_song(&mut self, index: usize) -> Result<()> {
        let song = self.song_at(index)?;
        self.process(Transaction::remove(song, index)).await
    }

    /// Insert a copy of the song at `index`, owned by the editing user, right after it
    pub async fn duplicate_song(&mut self, index: usize) -> Result<()> {
        let original = self.song_at(index)?;
        let transaction = Transaction::duplicate(original, index + 1, self.user.clone());
        self.process(transaction).await
    }

    /// Undo the last applied edit; `false` if there was none
    pub async fn undo(&mut self) -> Result<bool> {
        let undone = self.stack.undo(&mut self.list).await?;
        if undone {
            info!(cursor = self.stack.cursor(), "Undo");
        }
        Ok(undone)
    }

    /// Redo the last undone edit; `false` if there was none
    pub async fn redo(&mut self) -> Result<bool> {
        let redone = self.stack.redo(&mut self.list).await?;
        if redone {
            info!(cursor = self.stack.cursor(), "Redo");
        }
        Ok(redone)
    }

    /// Rename the playlist
    ///
    /// Not undoable. Rejects an empty name and a name (ignoring case) already
    /// used by another of the user's playlists. Returns `false` when the name
    /// is unchanged.
    pub async fn rename(&mut self, name: &str) -> Result<bool> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlaylisterError::invalid_input("Playlist name cannot be empty"));
        }

        let playlist_id = self.list.playlist_id().clone();
        let owned = self
            .service
            .list_playlists_owned_by(&self.user.email)
            .await?;

        if owned.iter().any(|p| p.id == playlist_id && p.name == name) {
            return Ok(false);
        }
        if owned.iter().any(|p| p.id != playlist_id && p.has_name(name)) {
            return Err(PlaylisterError::DuplicateName(name.to_string()));
        }

        self.service.rename_playlist(&playlist_id, name).await?;
        info!(playlist_id = %playlist_id, name, "Playlist renamed");
        Ok(true)
    }

    /// Resynchronise with the store
    ///
    /// History is kept; transactions check their targets when replayed.
    pub async fn reload(&mut self) -> Result<()> {
        self.list.reload().await
    }

    pub fn can_undo(&self) -> bool {
        self.stack.has_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.stack.has_redo()
    }

    /// Songs in display order
    pub fn songs(&self) -> &[Song] {
        self.list.songs()
    }

    /// Playlist being edited
    pub fn playlist(&self) -> &PlaylistId {
        self.list.playlist_id()
    }

    /// Recorded edits, oldest first
    pub fn history(&self) -> &[Transaction] {
        self.stack.history()
    }

    /// Number of applied edits in `history()`
    pub fn cursor(&self) -> usize {
        self.stack.cursor()
    }

    pub fn state(&self) -> StackState {
        self.stack.state()
    }

    pub fn user(&self) -> &ActingUser {
        &self.user
    }

    async fn process(&mut self, transaction: Transaction) -> Result<()> {
        let label = transaction.to_string();
        self.stack.process(transaction, &mut self.list).await?;
        info!(playlist_id = %self.list.playlist_id(), transaction = %label, "Applied");
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.list.len() {
            return Err(PlaylisterError::IndexOutOfRange {
                index,
                len: self.list.len(),
            });
        }
        Ok(())
    }

    fn song_at(&self, index: usize) -> Result<Song> {
        self.list
            .get(index)
            .cloned()
            .ok_or(PlaylisterError::IndexOutOfRange {
                index,
                len: self.list.len(),
            })
    }
}

impl fmt::Debug for PlaylistEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaylistEditor")
            .field("user", &self.user)
            .field("list", &self.list)
            .field("stack", &self.stack)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playlister_core::{InMemoryPlaylistService, SongId};

    fn alice() -> ActingUser {
        ActingUser::new("alice", "alice@example.com")
    }

    async fn seeded() -> (Arc<InMemoryPlaylistService>, PlaylistEditor, Vec<SongId>) {
        let store = Arc::new(InMemoryPlaylistService::new());
        let ids: Vec<SongId> = ["S1", "S2", "S3"]
            .iter()
            .map(|t| store.insert_song(Song::new(*t, "Band", 1999).owned_by(&alice())))
            .collect();
        let playlist = store.create_playlist("Road Trip", "alice@example.com", &ids);
        let editor = PlaylistEditor::open(store.clone(), alice(), playlist)
            .await
            .unwrap();
        (store, editor, ids)
    }

    fn ids_of(editor: &PlaylistEditor) -> Vec<SongId> {
        editor.songs().iter().map(|s| s.id.clone()).collect()
    }

    #[tokio::test]
    async fn out_of_range_gestures_are_rejected() {
        let (_, mut editor, ids) = seeded().await;

        assert!(matches!(
            editor.move_song(0, 3).await,
            Err(PlaylisterError::IndexOutOfRange { index: 3, len: 3 })
        ));
        assert!(editor.remove_song(9).await.is_err());
        assert!(editor.duplicate_song(3).await.is_err());

        assert_eq!(ids_of(&editor), ids);
        assert!(editor.history().is_empty());
    }

    #[tokio::test]
    async fn same_slot_drop_is_noop() {
        let (_, mut editor, _) = seeded().await;

        assert!(!editor.move_song(1, 1).await.unwrap());
        assert!(!editor.can_undo());
    }

    #[tokio::test]
    async fn duplicate_targets_next_slot() {
        let (store, mut editor, ids) = seeded().await;

        editor.duplicate_song(2).await.unwrap();

        assert_eq!(editor.songs().len(), 4);
        assert_eq!(&ids_of(&editor)[..3], &ids[..]);
        let copy = &editor.songs()[3];
        assert_eq!(copy.title, "S3");
        assert_ne!(copy.id, ids[2]);
        assert_eq!(store.song_count(), 4);
    }

    #[tokio::test]
    async fn switch_to_clears_history() {
        let (store, mut editor, ids) = seeded().await;
        editor.move_song(0, 2).await.unwrap();
        let other = store.create_playlist("Focus", "alice@example.com", &ids[..1]);

        editor.switch_to(other.clone()).await.unwrap();

        assert_eq!(editor.playlist(), &other);
        assert_eq!(ids_of(&editor), vec![ids[0].clone()]);
        assert!(!editor.can_undo());
        assert!(!editor.can_redo());
    }

    #[tokio::test]
    async fn rename_trims_and_commits() {
        let (store, mut editor, _) = seeded().await;

        assert!(editor.rename("  Night Drive ").await.unwrap());
        assert_eq!(
            store.playlist_name(editor.playlist()).as_deref(),
            Some("Night Drive")
        );
        assert!(editor.history().is_empty());
    }

    #[tokio::test]
    async fn rename_to_current_name_is_noop() {
        let (_, mut editor, _) = seeded().await;
        assert!(!editor.rename("Road Trip").await.unwrap());
    }

    #[tokio::test]
    async fn rename_changing_only_case_is_allowed() {
        let (store, mut editor, _) = seeded().await;

        assert!(editor.rename("ROAD TRIP").await.unwrap());
        assert_eq!(
            store.playlist_name(editor.playlist()).as_deref(),
            Some("ROAD TRIP")
        );
    }

    #[tokio::test]
    async fn rename_rejects_empty_name() {
        let (_, mut editor, _) = seeded().await;
        assert!(matches!(
            editor.rename("   ").await,
            Err(PlaylisterError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn reload_keeps_history() {
        let (_, mut editor, _) = seeded().await;
        editor.move_song(0, 1).await.unwrap();

        editor.reload().await.unwrap();

        assert!(editor.can_undo());
        assert_eq!(editor.state(), StackState::UndoOnly);
    }
}
