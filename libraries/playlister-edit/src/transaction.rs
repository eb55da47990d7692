//! Reversible playlist edits

use crate::song_list::SongList;
use playlister_core::{ActingUser, PlaylisterError, Result, Song, SongId};
use std::fmt;
use tracing::{debug, warn};

/// One undoable edit of a playlist
///
/// `do_step` and `undo_step` alternate; the stack never runs the same step
/// twice in a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    /// Relocate the song at `from` to `to`
    Move { from: usize, to: usize },

    /// Remove `song`, which sits at `index`
    Remove { song: Song, index: usize },

    /// Insert a fresh copy of `original`, owned by `owner`, at `target_index`
    Duplicate {
        original: Song,
        target_index: usize,
        owner: ActingUser,
        /// Id of the copy made by the last `do_step`
        created: Option<SongId>,
    },
}

impl Transaction {
    /// Move the song at `from` to `to`
    pub fn move_song(from: usize, to: usize) -> Self {
        Self::Move { from, to }
    }

    /// Remove `song` from `index`
    pub fn remove(song: Song, index: usize) -> Self {
        Self::Remove { song, index }
    }

    /// Duplicate `original` into `target_index` on behalf of `owner`
    pub fn duplicate(original: Song, target_index: usize, owner: ActingUser) -> Self {
        Self::Duplicate {
            original,
            target_index,
            owner,
            created: None,
        }
    }

    /// Apply the edit
    pub async fn do_step(&mut self, list: &mut SongList) -> Result<()> {
        match self {
            Self::Move { from, to } => list.move_at(*from, *to).await,

            Self::Remove { song, index } => {
                if list.get(*index).map(|s| &s.id) != Some(&song.id) {
                    return Err(PlaylisterError::StaleIndex {
                        song_id: song.id.clone(),
                        index: *index,
                    });
                }
                list.remove_at(*index).await?;
                Ok(())
            }

            Self::Duplicate {
                original,
                target_index,
                owner,
                created,
            } => {
                let copy = list.copy_song(&original.id, owner).await?;
                let copy_id = copy.id.clone();

                if let Err(err) = list.insert_at(copy, Some(*target_index)).await {
                    warn!(
                        original = %original.id,
                        orphan = %copy_id,
                        error = %err,
                        "Copied song could not be inserted and is orphaned"
                    );
                    return Err(err);
                }

                debug!(original = %original.id, copy = %copy_id, "Duplicate inserted");
                *created = Some(copy_id);
                Ok(())
            }
        }
    }

    /// Reverse the edit
    pub async fn undo_step(&mut self, list: &mut SongList) -> Result<()> {
        match self {
            Self::Move { from, to } => list.move_at(*to, *from).await,

            // Clamps to append when the list shrank underneath us
            Self::Remove { song, index } => {
                list.insert_at(song.clone(), Some(*index)).await?;
                Ok(())
            }

            Self::Duplicate { created, .. } => {
                let Some(copy_id) = created.clone() else {
                    debug!("Duplicate was never applied, nothing to undo");
                    return Ok(());
                };

                match list.position_of(&copy_id) {
                    Some(position) => {
                        list.remove_at(position).await?;
                    }
                    None => debug!(copy = %copy_id, "Duplicate already gone from playlist"),
                }
                list.delete_song(&copy_id).await?;

                *created = None;
                Ok(())
            }
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move { from, to } => {
                write!(f, "Move song {} to position {}", from + 1, to + 1)
            }
            Self::Remove { song, index } => {
                write!(f, "Remove {} from position {}", song, index + 1)
            }
            Self::Duplicate {
                original,
                target_index,
                ..
            } => write!(f, "Duplicate {} into position {}", original, target_index + 1),
        }
    }
}
