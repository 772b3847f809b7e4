//! Unit of work over the [`ContactStore`].

use super::store::ContactStore;
use crate::domain::ContactId;
use crate::error::{TransferError, TransferResult};
use crate::models::Contact;
use chrono::Utc;

/// A batch of new contacts staged for one atomic commit.
///
/// Staging touches nothing in the store. [`commit`](Self::commit) assigns IDs
/// and timestamps and publishes every contact at once, or publishes nothing if
/// any contact is rejected. Dropping an uncommitted transaction rolls it back.
///
/// # Example
///
/// ```
/// use circle_contacts::domain::UserId;
/// use circle_contacts::models::{Contact, User};
/// use circle_contacts::repositories::ContactStore;
///
/// let store = ContactStore::new();
/// let owner = UserId::new(1).unwrap();
/// store.save_user(User::new(owner, "ada")).unwrap();
///
/// let mut tx = store.begin();
/// tx.stage(Contact::new(owner, "Ada", "Lovelace"));
/// let saved = tx.commit().unwrap();
/// assert!(saved[0].id.is_some());
/// ```
pub struct StoreTransaction<'a> {
    store: &'a ContactStore,
    staged: Vec<Contact>,
}

impl<'a> StoreTransaction<'a> {
    pub(super) fn new(store: &'a ContactStore) -> Self {
        Self {
            store,
            staged: Vec::new(),
        }
    }

    /// Add a contact to the batch.
    pub fn stage(&mut self, contact: Contact) {
        self.staged.push(contact);
    }

    /// Number of staged contacts.
    pub fn len(&self) -> usize {
        self.staged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    /// Discard the batch.
    pub fn rollback(self) {
        // Drop does the work
    }

    /// Persist the whole batch and return the stored contacts in staging order.
    ///
    /// # Errors
    ///
    /// Returns `TransferError::Storage` if a staged contact already has an ID
    /// or its owner does not exist, or if the snapshot cannot be written. In
    /// every error case the store is left unchanged.
    pub fn commit(mut self) -> TransferResult<Vec<Contact>> {
        let staged = std::mem::take(&mut self.staged);
        if staged.is_empty() {
            return Ok(Vec::new());
        }

        let mut state = self.store.write()?;
        let mut next = state.clone();
        let now = Utc::now();
        let mut persisted = Vec::with_capacity(staged.len());

        for (position, mut contact) in staged.into_iter().enumerate() {
            if contact.id.is_some() {
                return Err(TransferError::Storage(format!(
                    "Contact at position {} is already persisted",
                    position
                )));
            }
            if !next.users.contains_key(&contact.owner.get()) {
                return Err(TransferError::Storage(format!(
                    "Owner {} of contact at position {} does not exist",
                    contact.owner, position
                )));
            }

            next.last_contact_id += 1;
            let id = ContactId::new(next.last_contact_id)?;
            contact.id = Some(id);

            for email in &mut contact.emails {
                next.last_entry_id += 1;
                email.id = Some(next.last_entry_id);
            }
            for phone in &mut contact.phones {
                next.last_entry_id += 1;
                phone.id = Some(next.last_entry_id);
            }

            contact.created_at = Some(now);
            contact.updated_at = Some(now);

            next.contacts.insert(id.get(), contact.clone());
            persisted.push(contact);
        }

        self.store.publish(&mut state, next)?;

        tracing::debug!(count = persisted.len(), "Committed contact batch");
        Ok(persisted)
    }
}

impl Drop for StoreTransaction<'_> {
    fn drop(&mut self) {
        if !self.staged.is_empty() {
            tracing::debug!(count = self.staged.len(), "Rolled back contact batch");
        }
    }
}
