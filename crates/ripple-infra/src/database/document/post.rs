//! Post document as stored in the `posts` collection.

use chrono::{DateTime, Utc};
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ripple_core::domain::{Comment, Like, Post};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeDocument {
    pub id: Uuid,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDocument {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

/// One post, embedded likes and comments included. The whole document is
/// read and replaced on every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDocument {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub author_id: Uuid,
    pub text: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub likes: Vec<LikeDocument>,
    pub comments: Vec<CommentDocument>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl From<Like> for LikeDocument {
    fn from(like: Like) -> Self {
        Self {
            id: like.id,
            user_id: like.user_id,
        }
    }
}

impl From<LikeDocument> for Like {
    fn from(doc: LikeDocument) -> Self {
        Self {
            id: doc.id,
            user_id: doc.user_id,
        }
    }
}

impl From<Comment> for CommentDocument {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            user_id: comment.user_id,
            text: comment.text,
            name: comment.name,
            avatar_url: comment.avatar_url,
            created_at: comment.created_at,
        }
    }
}

impl From<CommentDocument> for Comment {
    fn from(doc: CommentDocument) -> Self {
        Self {
            id: doc.id,
            user_id: doc.user_id,
            text: doc.text,
            name: doc.name,
            avatar_url: doc.avatar_url,
            created_at: doc.created_at,
        }
    }
}

impl From<Post> for PostDocument {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            author_id: post.author_id,
            text: post.text,
            name: post.name,
            avatar_url: post.avatar_url,
            likes: post.likes.into_iter().map(Into::into).collect(),
            comments: post.comments.into_iter().map(Into::into).collect(),
            created_at: post.created_at,
        }
    }
}

impl From<PostDocument> for Post {
    fn from(doc: PostDocument) -> Self {
        Self {
            id: doc.id,
            author_id: doc.author_id,
            text: doc.text,
            name: doc.name,
            avatar_url: doc.avatar_url,
            likes: doc.likes.into_iter().map(Into::into).collect(),
            comments: doc.comments.into_iter().map(Into::into).collect(),
            created_at: doc.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_preserves_embedded_collection_order() {
        let mut post = Post::new(Uuid::new_v4(), "round trip".to_string(), None, None);
        post.add_like(Uuid::new_v4()).unwrap();
        post.add_like(Uuid::new_v4()).unwrap();
        post.add_comment(Uuid::new_v4(), "older".to_string(), None, None);
        post.add_comment(Uuid::new_v4(), "newer".to_string(), None, None);

        let expected_likes: Vec<Uuid> = post.likes.iter().map(|l| l.user_id).collect();
        let doc = PostDocument::from(post);
        let back = Post::from(doc);

        let round_tripped: Vec<Uuid> = back.likes.iter().map(|l| l.user_id).collect();
        assert_eq!(round_tripped, expected_likes);
        assert_eq!(back.comments[0].text, "newer");
        assert_eq!(back.comments[1].text, "older");
    }
}
