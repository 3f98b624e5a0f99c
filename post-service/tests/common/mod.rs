#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use post_service::data::post_repository::PostRepository;
use post_service::domain::error::DomainError;
use post_service::domain::post::{NewPost, Post, PostChanges};
use user_client::{LookupError, UserLookup, UserProfile};

/// Vec-backed repository ordered like the PostgreSQL one, plus a write
/// counter.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: Mutex<Vec<Post>>,
    next_id: AtomicI64,
    writes: AtomicUsize,
}

impl InMemoryPostRepository {
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    fn newest_first(mut posts: Vec<Post>) -> Vec<Post> {
        posts.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        posts
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, DomainError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let created = Post {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            user_id: post.user_id,
            content: post.content,
            image_url: post.image_url,
            created_at: now,
            updated_at: now,
        };
        self.posts.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, DomainError> {
        Ok(self.posts.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Post>, DomainError> {
        Ok(Self::newest_first(self.posts.lock().unwrap().clone()))
    }

    async fn list_by_author(&self, user_id: i64) -> Result<Vec<Post>, DomainError> {
        let posts = self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        Ok(Self::newest_first(posts))
    }

    async fn update(&self, id: i64, changes: PostChanges) -> Result<Option<Post>, DomainError> {
        let mut posts = self.posts.lock().unwrap();
        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        self.writes.fetch_add(1, Ordering::SeqCst);
        apply_changes(post, changes, Utc::now());
        Ok(Some(post.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        let removed = posts.len() != before;
        if removed {
            self.writes.fetch_add(1, Ordering::SeqCst);
        }
        Ok(removed)
    }
}

/// Mirrors the repository's `COALESCE` update and `updated_at` stamp.
pub fn apply_changes(post: &mut Post, changes: PostChanges, now: DateTime<Utc>) {
    if let Some(content) = changes.content {
        post.content = content;
    }
    if let Some(image_url) = changes.image_url {
        post.image_url = Some(image_url);
    }
    post.updated_at = now;
}

/// Scriptable stand-in for the user service.
#[derive(Default)]
pub struct FakeUserLookup {
    users: Mutex<HashMap<i64, UserProfile>>,
    unreachable: AtomicBool,
    calls: AtomicUsize,
}

impl FakeUserLookup {
    pub fn with_user(self, id: i64, username: &str, display_name: &str) -> Self {
        self.add_user(id, username, display_name);
        self
    }

    pub fn add_user(&self, id: i64, username: &str, display_name: &str) {
        self.users.lock().unwrap().insert(id, profile(id, username, display_name));
    }

    pub fn remove_user(&self, id: i64) {
        self.users.lock().unwrap().remove(&id);
    }

    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserLookup for FakeUserLookup {
    async fn lookup_user(&self, id: i64) -> Result<Option<UserProfile>, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(LookupError::UnexpectedStatus {
                status: 503,
                body: "down".into(),
            });
        }
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }
}

pub fn profile(id: i64, username: &str, display_name: &str) -> UserProfile {
    UserProfile {
        id,
        username: username.to_string(),
        display_name: display_name.to_string(),
        email: None,
        bio: None,
        created_at: None,
    }
}

pub fn new_post(user_id: i64, content: &str) -> NewPost {
    NewPost {
        user_id,
        content: content.to_string(),
        image_url: None,
    }
}
