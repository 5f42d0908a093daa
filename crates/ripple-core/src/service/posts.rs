//! Post lifecycle operations.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::Post;
use crate::error::DomainError;
use crate::ports::PostRepository;
use crate::validation::{validate_comment_text, validate_post_text};

/// Operations on the post aggregate: create, fetch, delete, and the
/// embedded like/comment mutations.
///
/// Every mutation is a read-modify-persist cycle against the repository:
/// fetch the current post, apply the change in memory, write the whole
/// document back. Concurrent writers to the same post race last-write-wins;
/// the store's per-document atomicity is the only safety net.
pub struct PostService {
    posts: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Create a post authored by `author_id`.
    ///
    /// `name` and `avatar_url` are display metadata captured as supplied;
    /// they are never re-synced with the author's profile.
    pub async fn create_post(
        &self,
        author_id: Uuid,
        text: String,
        name: Option<String>,
        avatar_url: Option<String>,
    ) -> Result<Post, DomainError> {
        validate_post_text(&text)?;

        let post = Post::new(author_id, text, name, avatar_url);
        Ok(self.posts.save(post).await?)
    }

    /// Fetch a single post.
    pub async fn get_post(&self, post_id: Uuid) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::PostNotFound { id: post_id })
    }

    /// All posts, newest first. An empty list is a valid result.
    pub async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find_all().await?)
    }

    /// Delete a post. Only the author may delete it; the embedded likes
    /// and comments go with it.
    pub async fn delete_post(&self, post_id: Uuid, requester_id: Uuid) -> Result<(), DomainError> {
        let post = self.get_post(post_id).await?;

        if !post.is_authored_by(requester_id) {
            return Err(DomainError::NotAuthorized);
        }

        Ok(self.posts.delete(post_id).await?)
    }

    /// Record a like from `user_id` and return the updated post.
    pub async fn add_like(&self, post_id: Uuid, user_id: Uuid) -> Result<Post, DomainError> {
        let mut post = self.get_post(post_id).await?;
        post.add_like(user_id)?;
        Ok(self.posts.save(post).await?)
    }

    /// Withdraw the like from `user_id` and return the updated post.
    pub async fn remove_like(&self, post_id: Uuid, user_id: Uuid) -> Result<Post, DomainError> {
        let mut post = self.get_post(post_id).await?;
        post.remove_like(user_id)?;
        Ok(self.posts.save(post).await?)
    }

    /// Add a comment from `user_id` and return the updated post.
    pub async fn add_comment(
        &self,
        post_id: Uuid,
        user_id: Uuid,
        text: String,
        name: Option<String>,
        avatar_url: Option<String>,
    ) -> Result<Post, DomainError> {
        validate_comment_text(&text)?;

        let mut post = self.get_post(post_id).await?;
        post.add_comment(user_id, text, name, avatar_url);
        Ok(self.posts.save(post).await?)
    }

    /// Remove a comment by id and return the updated post.
    ///
    /// Any authenticated user may remove any comment; no ownership check is
    /// performed here, matching `delete_post`'s asymmetric counterpart in
    /// the original product behavior.
    pub async fn remove_comment(&self, post_id: Uuid, comment_id: Uuid) -> Result<Post, DomainError> {
        let mut post = self.get_post(post_id).await?;
        post.remove_comment(comment_id)?;
        Ok(self.posts.save(post).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::error::RepoError;
    use crate::ports::BaseRepository;

    /// HashMap-backed fake standing in for the document store.
    #[derive(Default)]
    struct FakePostRepository {
        store: Mutex<HashMap<Uuid, Post>>,
    }

    #[async_trait]
    impl BaseRepository<Post, Uuid> for FakePostRepository {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
            Ok(self.store.lock().unwrap().get(&id).cloned())
        }

        async fn save(&self, post: Post) -> Result<Post, RepoError> {
            self.store.lock().unwrap().insert(post.id, post.clone());
            Ok(post)
        }

        async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
            self.store
                .lock()
                .unwrap()
                .remove(&id)
                .map(|_| ())
                .ok_or(RepoError::NotFound)
        }
    }

    #[async_trait]
    impl PostRepository for FakePostRepository {
        async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
            let mut posts: Vec<Post> = self.store.lock().unwrap().values().cloned().collect();
            posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(posts)
        }
    }

    fn service() -> PostService {
        PostService::new(Arc::new(FakePostRepository::default()))
    }

    #[tokio::test]
    async fn create_post_persists_the_given_text() {
        let service = service();
        let author = Uuid::new_v4();

        let post = service
            .create_post(author, "Hello world".to_string(), None, None)
            .await
            .unwrap();

        assert_eq!(post.text, "Hello world");
        assert_eq!(post.author_id, author);

        let fetched = service.get_post(post.id).await.unwrap();
        assert_eq!(fetched.text, "Hello world");
    }

    #[tokio::test]
    async fn create_post_rejects_invalid_text() {
        let service = service();
        let author = Uuid::new_v4();

        for text in ["", "a", &"a".repeat(301)] {
            let err = service
                .create_post(author, text.to_string(), None, None)
                .await
                .unwrap_err();
            assert!(matches!(err, DomainError::Validation { field: "text", .. }));
        }
    }

    #[tokio::test]
    async fn get_post_fails_for_unknown_id() {
        let service = service();
        let missing = Uuid::new_v4();

        let err = service.get_post(missing).await.unwrap_err();

        assert!(matches!(err, DomainError::PostNotFound { id } if id == missing));
    }

    #[tokio::test]
    async fn list_posts_returns_newest_first() {
        let repo = Arc::new(FakePostRepository::default());
        let service = PostService::new(repo.clone());
        let author = Uuid::new_v4();

        let mut older = Post::new(author, "older".to_string(), None, None);
        older.created_at -= chrono::Duration::minutes(5);
        repo.save(older).await.unwrap();

        let newer = Post::new(author, "newer".to_string(), None, None);
        repo.save(newer).await.unwrap();

        let posts = service.list_posts().await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].text, "newer");
        assert_eq!(posts[1].text, "older");
    }

    #[tokio::test]
    async fn list_posts_on_empty_store_is_not_an_error() {
        let service = service();
        assert!(service.list_posts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_post_requires_authorship() {
        let service = service();
        let author = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        let post = service
            .create_post(author, "mine to delete".to_string(), None, None)
            .await
            .unwrap();

        let err = service.delete_post(post.id, stranger).await.unwrap_err();
        assert!(matches!(err, DomainError::NotAuthorized));

        // the failed attempt left the post intact
        assert!(service.get_post(post.id).await.is_ok());

        service.delete_post(post.id, author).await.unwrap();
        assert!(matches!(
            service.get_post(post.id).await.unwrap_err(),
            DomainError::PostNotFound { .. }
        ));
    }

    #[tokio::test]
    async fn second_like_from_same_user_fails_and_changes_nothing() {
        let service = service();
        let author = Uuid::new_v4();
        let fan = Uuid::new_v4();

        let post = service
            .create_post(author, "like me".to_string(), None, None)
            .await
            .unwrap();

        let liked = service.add_like(post.id, fan).await.unwrap();
        assert_eq!(liked.likes.len(), 1);

        let err = service.add_like(post.id, fan).await.unwrap_err();
        assert!(matches!(err, DomainError::AlreadyLiked));

        let fetched = service.get_post(post.id).await.unwrap();
        assert_eq!(fetched.likes.len(), 1);
    }

    #[tokio::test]
    async fn unlike_removes_the_like_and_cannot_repeat() {
        let service = service();
        let author = Uuid::new_v4();
        let fan = Uuid::new_v4();

        let post = service
            .create_post(author, "like me".to_string(), None, None)
            .await
            .unwrap();
        service.add_like(post.id, fan).await.unwrap();

        let unliked = service.remove_like(post.id, fan).await.unwrap();
        assert!(!unliked.is_liked_by(fan));

        let err = service.remove_like(post.id, fan).await.unwrap_err();
        assert!(matches!(err, DomainError::NotLiked));
    }

    #[tokio::test]
    async fn add_comment_shows_up_first_on_refetch() {
        let service = service();
        let author = Uuid::new_v4();
        let commenter = Uuid::new_v4();

        let post = service
            .create_post(author, "comment on me".to_string(), None, None)
            .await
            .unwrap();

        service
            .add_comment(post.id, commenter, "first!".to_string(), None, None)
            .await
            .unwrap();
        service
            .add_comment(post.id, commenter, "second!".to_string(), None, None)
            .await
            .unwrap();

        let fetched = service.get_post(post.id).await.unwrap();
        assert_eq!(fetched.comments[0].text, "second!");
        assert_eq!(fetched.comments[1].text, "first!");
    }

    #[tokio::test]
    async fn add_comment_validates_text_before_touching_the_post() {
        let service = service();
        let author = Uuid::new_v4();

        let post = service
            .create_post(author, "comment on me".to_string(), None, None)
            .await
            .unwrap();

        let err = service
            .add_comment(post.id, author, "x".to_string(), None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation { field: "text", .. }));

        let fetched = service.get_post(post.id).await.unwrap();
        assert!(fetched.comments.is_empty());
    }

    #[tokio::test]
    async fn remove_comment_deletes_only_the_addressed_entry() {
        let service = service();
        let author = Uuid::new_v4();

        let post = service
            .create_post(author, "comment on me".to_string(), None, None)
            .await
            .unwrap();

        let with_comments = service
            .add_comment(post.id, author, "stays".to_string(), None, None)
            .await
            .unwrap();
        let with_comments = service
            .add_comment(with_comments.id, author, "goes".to_string(), None, None)
            .await
            .unwrap();
        let target = with_comments.comments[0].id;

        let updated = service.remove_comment(post.id, target).await.unwrap();
        assert_eq!(updated.comments.len(), 1);
        assert_eq!(updated.comments[0].text, "stays");

        let err = service.remove_comment(post.id, target).await.unwrap_err();
        assert!(matches!(err, DomainError::CommentNotFound { .. }));
    }

    #[tokio::test]
    async fn full_post_lifecycle_scenario() {
        let service = service();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let post = service
            .create_post(
                alice,
                "Hello world".to_string(),
                Some("Alice".to_string()),
                None,
            )
            .await
            .unwrap();
        assert!(post.likes.is_empty());
        assert!(post.comments.is_empty());

        let liked = service.add_like(post.id, bob).await.unwrap();
        assert_eq!(liked.likes[0].user_id, bob);

        let err = service.add_like(post.id, bob).await.unwrap_err();
        assert!(matches!(err, DomainError::AlreadyLiked));

        service.delete_post(post.id, alice).await.unwrap();
        assert!(matches!(
            service.get_post(post.id).await.unwrap_err(),
            DomainError::PostNotFound { .. }
        ));
    }
}
