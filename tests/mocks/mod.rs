pub mod mock_contact_repository;
pub mod mock_user_repository;

pub use mock_contact_repository::MockContactRepository;
pub use mock_user_repository::MockUserRepository;
