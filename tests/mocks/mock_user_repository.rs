use async_trait::async_trait;
use circle_contacts::domain::UserId;
use circle_contacts::error::TransferResult;
use circle_contacts::models::User;
use circle_contacts::repositories::UserRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock user repository for testing.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockUserRepository {
    users: Arc<Mutex<HashMap<u64, User>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockUserRepository {
    /// Create a new empty MockUserRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding one user with the given ID.
    pub fn with_user(id: u64, username: &str) -> Self {
        let repo = Self::new();
        repo.add_user(User::new(UserId::new(id).unwrap(), username));
        repo
    }

    pub fn add_user(&self, user: User) {
        self.users.lock().unwrap().insert(user.id.get(), user);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: UserId) -> TransferResult<Option<User>> {
        self.track_call("find_by_id");
        Ok(self.users.lock().unwrap().get(&id.get()).cloned())
    }

    async fn save(&self, user: User) -> TransferResult<User> {
        self.track_call("save");
        self.add_user(user.clone());
        Ok(user)
    }
}
