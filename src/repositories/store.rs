//! Contact store with an optional JSON snapshot file.
//!
//! All state lives behind one `RwLock`. Reads clone what they need under the
//! read lock, so a caller always sees a consistent snapshot. Writes go through
//! a [`StoreTransaction`], which builds the next state aside and publishes it
//! in a single step.

use super::transaction::StoreTransaction;
use crate::domain::{ContactId, UserId};
use crate::error::{TransferError, TransferResult};
use crate::models::{Contact, User};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Everything the store persists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct StoreState {
    #[serde(default)]
    pub users: BTreeMap<u64, User>,

    #[serde(default)]
    pub contacts: BTreeMap<u64, Contact>,

    /// Last contact ID handed out
    #[serde(default)]
    pub last_contact_id: u64,

    /// Last email/phone entry ID handed out
    #[serde(default)]
    pub last_entry_id: u64,
}

/// Thread-safe contact and user store.
///
/// With a snapshot path every committed change is written to disk before it
/// becomes visible; a failed write leaves both the file and memory untouched.
#[derive(Debug, Default)]
pub struct ContactStore {
    state: RwLock<StoreState>,
    snapshot_path: Option<PathBuf>,
}

impl ContactStore {
    /// Create an empty, memory-only store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a store backed by a JSON snapshot at `path`.
    ///
    /// A missing file starts an empty store; the file is created on the first
    /// commit.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> TransferResult<Self> {
        let path = path.into();

        let state = if path.exists() {
            let bytes = fs::read(&path)?;
            serde_json::from_slice(&bytes).map_err(|e| {
                TransferError::Storage(format!("Corrupt snapshot {}: {}", path.display(), e))
            })?
        } else {
            StoreState::default()
        };

        tracing::debug!(
            path = %path.display(),
            contacts = state.contacts.len(),
            users = state.users.len(),
            "Opened contact store"
        );

        Ok(Self {
            state: RwLock::new(state),
            snapshot_path: Some(path),
        })
    }

    /// Start a unit of work. Nothing is visible until it commits.
    pub fn begin(&self) -> StoreTransaction<'_> {
        StoreTransaction::new(self)
    }

    /// Look up a user.
    pub fn find_user(&self, id: UserId) -> TransferResult<Option<User>> {
        Ok(self.read()?.users.get(&id.get()).cloned())
    }

    /// Insert or replace a user.
    pub fn save_user(&self, user: User) -> TransferResult<User> {
        let mut state = self.write()?;
        let mut next = state.clone();
        next.users.insert(user.id.get(), user.clone());
        self.publish(&mut state, next)?;
        Ok(user)
    }

    /// Look up a contact.
    pub fn find_contact(&self, id: ContactId) -> TransferResult<Option<Contact>> {
        Ok(self.read()?.contacts.get(&id.get()).cloned())
    }

    /// Whether contact `id` exists and belongs to `owner`.
    pub fn contact_exists_for(&self, id: ContactId, owner: UserId) -> TransferResult<bool> {
        Ok(self
            .read()?
            .contacts
            .get(&id.get())
            .is_some_and(|c| c.owner == owner))
    }

    /// All contacts owned by `owner`, in ID order, taken under one read lock.
    pub fn contacts_for(&self, owner: UserId) -> TransferResult<Vec<Contact>> {
        Ok(self
            .read()?
            .contacts
            .values()
            .filter(|c| c.owner == owner)
            .cloned()
            .collect())
    }

    /// Total number of stored contacts.
    pub fn contact_count(&self) -> TransferResult<usize> {
        Ok(self.read()?.contacts.len())
    }

    pub(super) fn read(&self) -> TransferResult<RwLockReadGuard<'_, StoreState>> {
        self.state
            .read()
            .map_err(|_| TransferError::Storage("Store lock poisoned".to_string()))
    }

    pub(super) fn write(&self) -> TransferResult<RwLockWriteGuard<'_, StoreState>> {
        self.state
            .write()
            .map_err(|_| TransferError::Storage("Store lock poisoned".to_string()))
    }

    /// Single commit point: persist `next` (if file-backed), then swap it in.
    pub(super) fn publish(&self, current: &mut StoreState, next: StoreState) -> TransferResult<()> {
        if let Some(path) = &self.snapshot_path {
            write_snapshot(path, &next)?;
        }
        *current = next;
        Ok(())
    }
}

/// Write the snapshot to a sibling temp file and rename it over `path`.
fn write_snapshot(path: &Path, state: &StoreState) -> TransferResult<()> {
    let bytes = serde_json::to_vec_pretty(state)
        .map_err(|e| TransferError::Storage(format!("Failed to encode snapshot: {}", e)))?;

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, path)?;

    tracing::debug!(path = %path.display(), "Wrote store snapshot");
    Ok(())
}
