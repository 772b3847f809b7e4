use crate::domain::{ContactId, UserId};
use crate::error::{TransferError, TransferResult};
use crate::models::{Contact, User};
use crate::repositories::store::ContactStore;
use crate::repositories::traits::{ContactRepository, UserRepository};
use async_trait::async_trait;
use std::sync::Arc;

/// Run a store operation on the blocking thread pool.
///
/// The store may hit the filesystem on commit, so calls are kept off the
/// async runtime threads.
async fn run_blocking<T, F>(store: &Arc<ContactStore>, op: F) -> TransferResult<T>
where
    T: Send + 'static,
    F: FnOnce(&ContactStore) -> TransferResult<T> + Send + 'static,
{
    let store = Arc::clone(store);
    tokio::task::spawn_blocking(move || op(&store))
        .await
        .map_err(|e| TransferError::Storage(format!("Task join error: {}", e)))?
}

/// Contact repository implementation using the [`ContactStore`].
///
/// `save_all` maps onto one [`StoreTransaction`](crate::repositories::StoreTransaction).
#[derive(Clone)]
pub struct StoreContactRepository {
    store: Arc<ContactStore>,
}

impl StoreContactRepository {
    /// Create a new StoreContactRepository over the given store.
    pub fn new(store: Arc<ContactStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ContactRepository for StoreContactRepository {
    async fn save_all(&self, contacts: Vec<Contact>) -> TransferResult<Vec<Contact>> {
        run_blocking(&self.store, move |store| {
            let mut tx = store.begin();
            for contact in contacts {
                tx.stage(contact);
            }
            tx.commit()
        })
        .await
    }

    async fn find_by_id(&self, id: ContactId) -> TransferResult<Option<Contact>> {
        run_blocking(&self.store, move |store| store.find_contact(id)).await
    }

    async fn exists_by_id_and_user(&self, id: ContactId, owner: UserId) -> TransferResult<bool> {
        run_blocking(&self.store, move |store| store.contact_exists_for(id, owner)).await
    }

    async fn find_by_user(&self, owner: UserId) -> TransferResult<Vec<Contact>> {
        run_blocking(&self.store, move |store| store.contacts_for(owner)).await
    }
}

/// User repository implementation using the [`ContactStore`].
#[derive(Clone)]
pub struct StoreUserRepository {
    store: Arc<ContactStore>,
}

impl StoreUserRepository {
    /// Create a new StoreUserRepository over the given store.
    pub fn new(store: Arc<ContactStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for StoreUserRepository {
    async fn find_by_id(&self, id: UserId) -> TransferResult<Option<User>> {
        run_blocking(&self.store, move |store| store.find_user(id)).await
    }

    async fn save(&self, user: User) -> TransferResult<User> {
        run_blocking(&self.store, move |store| store.save_user(user)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_repositories_share_store() {
        let store = Arc::new(ContactStore::new());
        let users = StoreUserRepository::new(store.clone());
        let contacts = StoreContactRepository::new(store);
        let owner = UserId::new(1).unwrap();

        users.save(User::new(owner, "ada")).await.unwrap();
        let saved = contacts
            .save_all(vec![Contact::new(owner, "Ada", "Lovelace")])
            .await
            .unwrap();
        let id = saved[0].id.unwrap();

        assert!(contacts.exists_by_id_and_user(id, owner).await.unwrap());
        assert_eq!(
            contacts.find_by_id(id).await.unwrap().unwrap().first_name,
            "Ada"
        );
        assert_eq!(contacts.find_by_user(owner).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_all_unknown_owner_fails() {
        let store = Arc::new(ContactStore::new());
        let contacts = StoreContactRepository::new(store.clone());

        let result = contacts
            .save_all(vec![Contact::new(UserId::new(9).unwrap(), "A", "B")])
            .await;
        assert!(result.is_err());
        assert_eq!(store.contact_count().unwrap(), 0);
    }
}
