use std::sync::Arc;

use tracing::{info, instrument};

use crate::data::user_repository::UserRepository;
use crate::domain::error::DomainError;
use crate::domain::user::{NewUser, User, UserChanges};

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Registers a user after checking that neither the username nor the email
    /// is in use.
    ///
    /// The checks and the insert are separate statements, so two concurrent
    /// registrations of the same name can both pass the check. The loser then
    /// trips the table's unique constraint, which the repository reports as
    /// the same conflict error.
    #[instrument(skip(self, user), fields(username = %user.username))]
    pub async fn create_user(&self, user: NewUser) -> Result<User, DomainError> {
        if self.repo.exists_by_username(&user.username).await? {
            return Err(DomainError::UsernameTaken(user.username));
        }
        if self.repo.exists_by_email(&user.email).await? {
            return Err(DomainError::EmailTaken(user.email));
        }

        let created = self.repo.create(user).await?;
        info!(user_id = created.id, "user registered");
        Ok(created)
    }

    pub async fn get_user(&self, id: i64) -> Result<User, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::UserNotFound(id))
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<User, DomainError> {
        self.repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::UsernameNotFound(username.to_string()))
    }

    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        self.repo.list().await
    }

    #[instrument(skip(self, changes))]
    pub async fn update_user(&self, id: i64, changes: UserChanges) -> Result<User, DomainError> {
        if changes.is_empty() {
            return self.get_user(id).await;
        }

        self.repo
            .update(id, changes)
            .await?
            .ok_or(DomainError::UserNotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::UserNotFound(id));
        }
        Ok(())
    }
}
