//! In-memory repositories - used as fallback when no document store is
//! configured. Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use ripple_core::domain::{Post, User};
use ripple_core::error::RepoError;
use ripple_core::ports::{BaseRepository, PostRepository, UserRepository};

/// Post repository backed by a HashMap behind an async RwLock.
#[derive(Default)]
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        self.store.write().await.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.store
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let mut posts: Vec<Post> = self.store.read().await.values().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }
}

/// User repository backed by a HashMap behind an async RwLock.
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        self.store.write().await.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.store
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .store
            .read()
            .await
            .values()
            .find(|user| user.email == email)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_then_find_round_trips_a_post() {
        let repo = InMemoryPostRepository::new();
        let post = Post::new(Uuid::new_v4(), "remember me".to_string(), None, None);
        let id = post.id;

        repo.save(post).await.unwrap();

        let found = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.text, "remember me");
    }

    #[tokio::test]
    async fn delete_removes_the_post() {
        let repo = InMemoryPostRepository::new();
        let post = Post::new(Uuid::new_v4(), "short lived".to_string(), None, None);
        let id = post.id;
        repo.save(post).await.unwrap();

        repo.delete(id).await.unwrap();

        assert!(repo.find_by_id(id).await.unwrap().is_none());
        assert!(matches!(
            repo.delete(id).await.unwrap_err(),
            RepoError::NotFound
        ));
    }

    #[tokio::test]
    async fn find_all_sorts_newest_first() {
        let repo = InMemoryPostRepository::new();
        let author = Uuid::new_v4();

        let mut older = Post::new(author, "older".to_string(), None, None);
        older.created_at -= chrono::Duration::hours(1);
        repo.save(older).await.unwrap();
        repo.save(Post::new(author, "newer".to_string(), None, None))
            .await
            .unwrap();

        let posts = repo.find_all().await.unwrap();
        assert_eq!(posts[0].text, "newer");
        assert_eq!(posts[1].text, "older");
    }

    #[tokio::test]
    async fn find_user_by_email() {
        let repo = InMemoryUserRepository::new();
        let user = User::new(
            "Alice".to_string(),
            "alice@example.com".to_string(),
            "hash".to_string(),
            None,
        );
        repo.save(user).await.unwrap();

        let found = repo.find_by_email("alice@example.com").await.unwrap();
        assert!(found.is_some());
        assert!(
            repo.find_by_email("bob@example.com")
                .await
                .unwrap()
                .is_none()
        );
    }
}
