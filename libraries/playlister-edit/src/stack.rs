//! Transaction stack
//!
//! Linear undo/redo history. Transactions before the cursor are applied,
//! transactions after it have been undone and can be redone until a new
//! transaction is processed.

use crate::song_list::SongList;
use crate::transaction::Transaction;
use playlister_core::Result;
use tracing::debug;

/// Where the cursor sits relative to the history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackState {
    /// No history at all
    Empty,
    /// Everything applied, nothing to redo
    UndoOnly,
    /// Everything undone
    RedoOnly,
    /// Both undo and redo are possible
    Mixed,
}

/// Undo/redo history with a cursor
#[derive(Debug, Default)]
pub struct TransactionStack {
    /// Oldest first
    transactions: Vec<Transaction>,

    /// Number of applied transactions
    cursor: usize,
}

impl TransactionStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the redo tail, apply `transaction` and record it
    ///
    /// A transaction whose `do_step` fails is not recorded and the cursor
    /// stays put.
    pub async fn process(&mut self, mut transaction: Transaction, list: &mut SongList) -> Result<()> {
        self.transactions.truncate(self.cursor);

        debug!(transaction = %transaction, cursor = self.cursor, "Processing transaction");
        transaction.do_step(list).await?;

        self.transactions.push(transaction);
        self.cursor += 1;
        Ok(())
    }

    /// Undo the most recent applied transaction
    ///
    /// Returns `false` when there is nothing to undo.
    pub async fn undo(&mut self, list: &mut SongList) -> Result<bool> {
        let Some(index) = self.cursor.checked_sub(1) else {
            return Ok(false);
        };
        let Some(transaction) = self.transactions.get_mut(index) else {
            return Ok(false);
        };

        debug!(transaction = %transaction, cursor = self.cursor, "Undoing transaction");
        transaction.undo_step(list).await?;

        self.cursor = index;
        Ok(true)
    }

    /// Re-apply the next undone transaction
    ///
    /// Returns `false` when there is nothing to redo.
    pub async fn redo(&mut self, list: &mut SongList) -> Result<bool> {
        let Some(transaction) = self.transactions.get_mut(self.cursor) else {
            return Ok(false);
        };

        debug!(transaction = %transaction, cursor = self.cursor, "Redoing transaction");
        transaction.do_step(list).await?;

        self.cursor += 1;
        Ok(true)
    }

    /// Whether a transaction can be undone
    pub fn has_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Whether a transaction can be redone
    pub fn has_redo(&self) -> bool {
        self.cursor < self.transactions.len()
    }

    /// Forget all history
    pub fn clear(&mut self) {
        self.transactions.clear();
        self.cursor = 0;
    }

    /// Number of recorded transactions, applied or not
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether nothing is recorded
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Number of applied transactions
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// All recorded transactions, oldest first
    pub fn history(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn state(&self) -> StackState {
        match (self.has_undo(), self.has_redo()) {
            (false, false) => StackState::Empty,
            (true, false) => StackState::UndoOnly,
            (false, true) => StackState::RedoOnly,
            (true, true) => StackState::Mixed,
        }
    }
}
