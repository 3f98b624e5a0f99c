use crate::domain::error::DomainError;
use crate::domain::user::{NewUser, User, UserChanges};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{error, info};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError>;
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;
    async fn list(&self) -> Result<Vec<User>, DomainError>;
    /// `Ok(None)` when no user has this id.
    async fn update(&self, id: i64, changes: UserChanges) -> Result<Option<User>, DomainError>;
    /// `Ok(false)` when no user has this id.
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const USER_COLUMNS: &str = "id, username, email, display_name, bio, created_at";

fn map_insert_error(err: sqlx::Error, user: &NewUser) -> DomainError {
    let constraint = err
        .as_database_error()
        .and_then(|db| db.constraint())
        .map(str::to_owned);
    match constraint.as_deref() {
        Some("users_username_key") => DomainError::UsernameTaken(user.username.clone()),
        Some("users_email_key") => DomainError::EmailTaken(user.email.clone()),
        _ => {
            error!("failed to create user: {}", err);
            DomainError::from(err)
        }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let created = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (username, email, display_name, bio)
            VALUES ($1, $2, $3, $4)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.display_name)
        .bind(&user.bio)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, &user))?;

        info!(user_id = created.id, username = %created.username, "user created");
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!("failed to find user by id {}: {}", id, e);
                DomainError::from(e)
            })
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to find user by username {}: {}", username, e);
            DomainError::from(e)
        })
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(DomainError::from)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(DomainError::from)
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("db error while listing users: {}", e);
                DomainError::from(e)
            })
    }

    async fn update(&self, id: i64, changes: UserChanges) -> Result<Option<User>, DomainError> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users
            SET
                display_name = COALESCE($1, display_name),
                bio = COALESCE($2, bio)
            WHERE id = $3
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(changes.display_name)
        .bind(changes.bio)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to update user {}: {}", id, e);
            DomainError::from(e)
        })?;

        if user.is_some() {
            info!(user_id = id, "user updated");
        }

        Ok(user)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let deleted = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(DomainError::from)?;

        let removed = deleted.rows_affected() > 0;
        if removed {
            info!(user_id = id, "user deleted");
        }
        Ok(removed)
    }
}
