use crate::domain::error::DomainError;
use crate::domain::post::{NewPost, Post, PostChanges};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::{error, info};

/// Post storage. Performs no author validation of its own.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, post: NewPost) -> Result<Post, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, DomainError>;
    /// Newest first.
    async fn list(&self) -> Result<Vec<Post>, DomainError>;
    /// Newest first.
    async fn list_by_author(&self, user_id: i64) -> Result<Vec<Post>, DomainError>;
    /// Applies a non-empty change set and stamps `updated_at`.
    async fn update(&self, id: i64, changes: PostChanges) -> Result<Option<Post>, DomainError>;
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}

#[derive(Clone)]
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, DomainError> {
        let now = Utc::now();
        let created = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (user_id, content, image_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING id, user_id, content, image_url, created_at, updated_at
            "#,
        )
        .bind(post.user_id)
        .bind(&post.content)
        .bind(&post.image_url)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to create post: {}", e);
            DomainError::from(e)
        })?;

        info!(post_id = created.id, user_id = created.user_id, "post created");
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, DomainError> {
        sqlx::query_as::<_, Post>(
            r#"
            SELECT id, user_id, content, image_url, created_at, updated_at
            FROM posts WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("db error find_by_id {}: {}", id, e);
            DomainError::from(e)
        })
    }

    async fn list(&self) -> Result<Vec<Post>, DomainError> {
        sqlx::query_as::<_, Post>(
            r#"
            SELECT id, user_id, content, image_url, created_at, updated_at
            FROM posts
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("db error while fetching posts: {}", e);
            DomainError::from(e)
        })
    }

    async fn list_by_author(&self, user_id: i64) -> Result<Vec<Post>, DomainError> {
        sqlx::query_as::<_, Post>(
            r#"
            SELECT id, user_id, content, image_url, created_at, updated_at
            FROM posts
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("db error while fetching posts of user {}: {}", user_id, e);
            DomainError::from(e)
        })
    }

    async fn update(&self, id: i64, changes: PostChanges) -> Result<Option<Post>, DomainError> {
        let now = Utc::now();
        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET
                content = COALESCE($1, content),
                image_url = COALESCE($2, image_url),
                updated_at = $3
            WHERE id = $4
            RETURNING id, user_id, content, image_url, created_at, updated_at
            "#,
        )
        .bind(changes.content)
        .bind(changes.image_url)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to update post {}: {}", id, e);
            DomainError::from(e)
        })?;

        if post.is_some() {
            info!(post_id = id, "post updated");
        }

        Ok(post)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let deleted = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(DomainError::from)?;

        let removed = deleted.rows_affected() > 0;
        if removed {
            info!(post_id = id, "post deleted");
        }
        Ok(removed)
    }
}
