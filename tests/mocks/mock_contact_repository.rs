use async_trait::async_trait;
use chrono::Utc;
use circle_contacts::domain::{ContactId, UserId};
use circle_contacts::error::{TransferError, TransferResult};
use circle_contacts::models::Contact;
use circle_contacts::repositories::ContactRepository;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct MockState {
    contacts: BTreeMap<u64, Contact>,
    next_id: u64,
    next_entry_id: u64,
}

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that tracks
/// method calls for verification. `save_all` is all-or-nothing, and can be
/// made to fail on demand to exercise rollback paths.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactRepository {
    state: Arc<Mutex<MockState>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_on_save: Arc<Mutex<Option<String>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a contact directly, assigning an ID if it has none.
    pub fn add_contact(&self, mut contact: Contact) -> Contact {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = ContactId::new(state.next_id).unwrap();
        contact.id.get_or_insert(id);
        let key = contact.id.unwrap().get();
        state.contacts.insert(key, contact.clone());
        contact
    }

    /// Make every subsequent `save_all` fail with a storage error.
    pub fn fail_on_save(&self, reason: &str) {
        *self.fail_on_save.lock().unwrap() = Some(reason.to_string());
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().contacts.len()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn save_all(&self, contacts: Vec<Contact>) -> TransferResult<Vec<Contact>> {
        self.track_call("save_all");

        if let Some(reason) = self.fail_on_save.lock().unwrap().clone() {
            return Err(TransferError::Storage(reason));
        }

        let mut state = self.state.lock().unwrap();
        let now = Utc::now();
        let mut saved = Vec::with_capacity(contacts.len());

        for mut contact in contacts {
            state.next_id += 1;
            contact.id = Some(ContactId::new(state.next_id).unwrap());
            for email in &mut contact.emails {
                state.next_entry_id += 1;
                email.id = Some(state.next_entry_id);
            }
            for phone in &mut contact.phones {
                state.next_entry_id += 1;
                phone.id = Some(state.next_entry_id);
            }
            contact.created_at = Some(now);
            contact.updated_at = Some(now);
            saved.push(contact);
        }

        for contact in &saved {
            state
                .contacts
                .insert(contact.id.unwrap().get(), contact.clone());
        }
        Ok(saved)
    }

    async fn find_by_id(&self, id: ContactId) -> TransferResult<Option<Contact>> {
        self.track_call("find_by_id");
        Ok(self.state.lock().unwrap().contacts.get(&id.get()).cloned())
    }

    async fn exists_by_id_and_user(&self, id: ContactId, owner: UserId) -> TransferResult<bool> {
        self.track_call("exists_by_id_and_user");
        Ok(self
            .state
            .lock()
            .unwrap()
            .contacts
            .get(&id.get())
            .map(|c| c.owner == owner)
            .unwrap_or(false))
    }

    async fn find_by_user(&self, owner: UserId) -> TransferResult<Vec<Contact>> {
        self.track_call("find_by_user");
        Ok(self
            .state
            .lock()
            .unwrap()
            .contacts
            .values()
            .filter(|c| c.owner == owner)
            .cloned()
            .collect())
    }
}
