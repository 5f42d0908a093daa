use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// A like on a post. Exists only inside its parent [`Post`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub id: Uuid,
    pub user_id: Uuid,
}

/// A comment on a post. Exists only inside its parent [`Post`].
///
/// `name` and `avatar_url` are display metadata captured when the comment
/// is written; they are not refreshed if the commenter's profile changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Post aggregate - a post together with its embedded likes and comments.
///
/// Likes and comments have no lifecycle of their own; every mutation goes
/// through the methods below, which maintain two invariants: both
/// collections are ordered newest first, and a user appears at most once
/// in `likes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub text: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub likes: Vec<Like>,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with empty like and comment collections.
    pub fn new(
        author_id: Uuid,
        text: String,
        name: Option<String>,
        avatar_url: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id,
            text,
            name,
            avatar_url,
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Whether `user_id` authored this post.
    pub fn is_authored_by(&self, user_id: Uuid) -> bool {
        self.author_id == user_id
    }

    /// Whether `user_id` has already liked this post.
    pub fn is_liked_by(&self, user_id: Uuid) -> bool {
        self.likes.iter().any(|like| like.user_id == user_id)
    }

    /// Record a like from `user_id`, newest first.
    ///
    /// Fails with [`DomainError::AlreadyLiked`] if the user already appears
    /// in the like collection.
    pub fn add_like(&mut self, user_id: Uuid) -> Result<(), DomainError> {
        if self.is_liked_by(user_id) {
            return Err(DomainError::AlreadyLiked);
        }

        self.likes.insert(
            0,
            Like {
                id: Uuid::new_v4(),
                user_id,
            },
        );
        Ok(())
    }

    /// Remove the like from `user_id`.
    ///
    /// Only the first match is removed; duplicates cannot be introduced
    /// through [`Post::add_like`].
    pub fn remove_like(&mut self, user_id: Uuid) -> Result<(), DomainError> {
        let index = self
            .likes
            .iter()
            .position(|like| like.user_id == user_id)
            .ok_or(DomainError::NotLiked)?;

        self.likes.remove(index);
        Ok(())
    }

    /// Add a comment from `user_id`, newest first. The text is expected to
    /// be validated by the caller before it reaches the aggregate.
    pub fn add_comment(
        &mut self,
        user_id: Uuid,
        text: String,
        name: Option<String>,
        avatar_url: Option<String>,
    ) -> &Comment {
        self.comments.insert(
            0,
            Comment {
                id: Uuid::new_v4(),
                user_id,
                text,
                name,
                avatar_url,
                created_at: Utc::now(),
            },
        );
        &self.comments[0]
    }

    /// Remove the comment identified by `comment_id`.
    pub fn remove_comment(&mut self, comment_id: Uuid) -> Result<(), DomainError> {
        let index = self
            .comments
            .iter()
            .position(|comment| comment.id == comment_id)
            .ok_or(DomainError::CommentNotFound { id: comment_id })?;

        self.comments.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post(author_id: Uuid) -> Post {
        Post::new(author_id, "Hello world".to_string(), None, None)
    }

    #[test]
    fn new_post_has_empty_collections() {
        let post = sample_post(Uuid::new_v4());
        assert!(post.likes.is_empty());
        assert!(post.comments.is_empty());
    }

    #[test]
    fn add_like_records_the_user() {
        let mut post = sample_post(Uuid::new_v4());
        let user = Uuid::new_v4();

        post.add_like(user).unwrap();

        assert_eq!(post.likes.len(), 1);
        assert_eq!(post.likes[0].user_id, user);
        assert!(post.is_liked_by(user));
    }

    #[test]
    fn duplicate_like_is_rejected_and_leaves_collection_unchanged() {
        let mut post = sample_post(Uuid::new_v4());
        let user = Uuid::new_v4();
        post.add_like(user).unwrap();

        let err = post.add_like(user).unwrap_err();

        assert!(matches!(err, DomainError::AlreadyLiked));
        assert_eq!(post.likes.len(), 1);
    }

    #[test]
    fn likes_are_ordered_newest_first() {
        let mut post = sample_post(Uuid::new_v4());
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        post.add_like(first).unwrap();
        post.add_like(second).unwrap();

        assert_eq!(post.likes[0].user_id, second);
        assert_eq!(post.likes[1].user_id, first);
    }

    #[test]
    fn remove_like_then_remove_again_fails() {
        let mut post = sample_post(Uuid::new_v4());
        let user = Uuid::new_v4();
        post.add_like(user).unwrap();

        post.remove_like(user).unwrap();
        assert!(!post.is_liked_by(user));

        let err = post.remove_like(user).unwrap_err();
        assert!(matches!(err, DomainError::NotLiked));
    }

    #[test]
    fn comments_are_prepended() {
        let mut post = sample_post(Uuid::new_v4());
        let user = Uuid::new_v4();

        post.add_comment(user, "first".to_string(), None, None);
        post.add_comment(user, "second".to_string(), None, None);

        assert_eq!(post.comments[0].text, "second");
        assert_eq!(post.comments[1].text, "first");
    }

    #[test]
    fn remove_comment_deletes_exactly_the_matching_entry() {
        let mut post = sample_post(Uuid::new_v4());
        let user = Uuid::new_v4();
        post.add_comment(user, "keep me".to_string(), None, None);
        let target = post
            .add_comment(user, "delete me".to_string(), None, None)
            .id;

        post.remove_comment(target).unwrap();

        assert_eq!(post.comments.len(), 1);
        assert_eq!(post.comments[0].text, "keep me");
    }

    #[test]
    fn remove_unknown_comment_fails() {
        let mut post = sample_post(Uuid::new_v4());
        let missing = Uuid::new_v4();

        let err = post.remove_comment(missing).unwrap_err();

        assert!(matches!(err, DomainError::CommentNotFound { id } if id == missing));
    }
}
