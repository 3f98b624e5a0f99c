use std::sync::Arc;

use tracing::{info, instrument, warn};
use user_client::{UserLookup, UserProfile};

use crate::data::post_repository::PostRepository;
use crate::domain::error::DomainError;
use crate::domain::post::{EnrichedPost, NewPost, Post, PostChanges};

/// Post operations, each answered with author display data fetched from the
/// user service.
///
/// Author resolution has two policies. Creating a post and listing one
/// author's posts require the author: absence is `AuthorNotFound` and an
/// unreachable user service is `DependencyUnavailable`. Every other read
/// degrades to a post without author fields instead of failing.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
    users: Arc<dyn UserLookup>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>, users: Arc<dyn UserLookup>) -> Self {
        Self { repo, users }
    }

    async fn require_author(&self, user_id: i64) -> Result<UserProfile, DomainError> {
        match self.users.lookup_user(user_id).await {
            Ok(Some(author)) => Ok(author),
            Ok(None) => Err(DomainError::AuthorNotFound(user_id)),
            Err(err) => Err(DomainError::DependencyUnavailable(err.to_string())),
        }
    }

    async fn author_or_unknown(&self, user_id: i64) -> Option<UserProfile> {
        match self.users.lookup_user(user_id).await {
            Ok(author) => author,
            Err(err) => {
                warn!(user_id, error = %err, "author lookup failed, serving post without author");
                None
            }
        }
    }

    async fn enrich(&self, post: Post) -> EnrichedPost {
        let author = self.author_or_unknown(post.user_id).await;
        EnrichedPost::compose(post, author.as_ref())
    }

    #[instrument(skip(self, post), fields(user_id = post.user_id))]
    pub async fn create_post(&self, post: NewPost) -> Result<EnrichedPost, DomainError> {
        let author = self.require_author(post.user_id).await?;
        let created = self.repo.create(post).await?;
        info!(post_id = created.id, "post published");
        Ok(EnrichedPost::compose(created, Some(&author)))
    }

    pub async fn get_post(&self, id: i64) -> Result<EnrichedPost, DomainError> {
        let post = self.find(id).await?;
        Ok(self.enrich(post).await)
    }

    pub async fn list_posts(&self) -> Result<Vec<EnrichedPost>, DomainError> {
        let posts = self.repo.list().await?;
        let mut enriched = Vec::with_capacity(posts.len());
        for post in posts {
            enriched.push(self.enrich(post).await);
        }
        Ok(enriched)
    }

    pub async fn list_posts_by_author(
        &self,
        user_id: i64,
    ) -> Result<Vec<EnrichedPost>, DomainError> {
        let author = self.require_author(user_id).await?;
        let posts = self.repo.list_by_author(user_id).await?;
        Ok(posts
            .into_iter()
            .map(|post| EnrichedPost::compose(post, Some(&author)))
            .collect())
    }

    #[instrument(skip(self, changes))]
    pub async fn update_post(
        &self,
        id: i64,
        changes: PostChanges,
    ) -> Result<EnrichedPost, DomainError> {
        let post = if changes.is_empty() {
            self.find(id).await?
        } else {
            self.repo
                .update(id, changes)
                .await?
                .ok_or(DomainError::PostNotFound(id))?
        };
        Ok(self.enrich(post).await)
    }

    #[instrument(skip(self))]
    pub async fn delete_post(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::PostNotFound(id));
        }
        Ok(())
    }

    async fn find(&self, id: i64) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PostNotFound(id))
    }
}
