mod store;
mod store_repository;
mod traits;
mod transaction;

pub use store::ContactStore;
pub use store_repository::{StoreContactRepository, StoreUserRepository};
pub use traits::{ContactRepository, UserRepository};
pub use transaction::StoreTransaction;
