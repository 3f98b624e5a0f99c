#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use user_service::data::user_repository::UserRepository;
use user_service::domain::error::DomainError;
use user_service::domain::user::{NewUser, User, UserChanges};

/// Vec-backed repository with the same observable behaviour as the
/// PostgreSQL one, plus a write counter.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    next_id: AtomicI64,
    writes: AtomicUsize,
}

impl InMemoryUserRepository {
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == user.username) {
            return Err(DomainError::UsernameTaken(user.username));
        }
        if users.iter().any(|u| u.email == user.email) {
            return Err(DomainError::EmailTaken(user.email));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        let created = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            username: user.username,
            email: user.email,
            display_name: user.display_name,
            bio: user.bio,
            created_at: Utc::now(),
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        Ok(self.users.lock().unwrap().iter().any(|u| u.username == username))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.users.lock().unwrap().iter().any(|u| u.email == email))
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn update(&self, id: i64, changes: UserChanges) -> Result<Option<User>, DomainError> {
        let mut users = self.users.lock().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        self.writes.fetch_add(1, Ordering::SeqCst);
        apply_changes(user, changes);
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        let removed = users.len() != before;
        if removed {
            self.writes.fetch_add(1, Ordering::SeqCst);
        }
        Ok(removed)
    }
}

/// Mirrors the repository's `COALESCE` update: `None` keeps the stored value.
pub fn apply_changes(user: &mut User, changes: UserChanges) {
    if let Some(display_name) = changes.display_name {
        user.display_name = display_name;
    }
    if let Some(bio) = changes.bio {
        user.bio = Some(bio);
    }
}

pub fn new_user(username: &str, email: &str) -> NewUser {
    NewUser::new(username.to_string(), email.to_string(), None, None)
}
