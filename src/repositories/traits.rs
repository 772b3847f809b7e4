use crate::domain::{ContactId, UserId};
use crate::error::TransferResult;
use crate::models::{Contact, User};
use async_trait::async_trait;

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage and retrieval,
/// enabling different implementations (file-backed store, in-memory, mock).
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Persist a batch of new contacts as one unit of work.
    ///
    /// Either every contact is stored (with IDs and timestamps assigned) and
    /// returned in input order, or none is and an error is returned.
    async fn save_all(&self, contacts: Vec<Contact>) -> TransferResult<Vec<Contact>>;

    /// Retrieve a single contact by ID.
    async fn find_by_id(&self, id: ContactId) -> TransferResult<Option<Contact>>;

    /// Check whether a contact exists and belongs to `owner`.
    async fn exists_by_id_and_user(&self, id: ContactId, owner: UserId) -> TransferResult<bool>;

    /// Consistent snapshot of every contact owned by `owner`, in ID order.
    async fn find_by_user(&self, owner: UserId) -> TransferResult<Vec<Contact>>;
}

/// Repository for resolving contact owners.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Retrieve a user by ID.
    async fn find_by_id(&self, id: UserId) -> TransferResult<Option<User>>;

    /// Insert or replace a user.
    async fn save(&self, user: User) -> TransferResult<User>;
}
