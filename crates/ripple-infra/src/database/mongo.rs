//! MongoDB-backed repositories.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection, Database};
use uuid::Uuid;

use ripple_core::domain::{Post, User};
use ripple_core::error::RepoError;
use ripple_core::ports::{BaseRepository, PostRepository, UserRepository};

use super::MongoConfig;
use super::document::{PostDocument, UserDocument};

/// Shared handle to the MongoDB database.
pub struct MongoStore {
    pub db: Database,
}

impl MongoStore {
    /// Connect and ping the server so a bad URL fails at startup rather
    /// than on the first request.
    pub async fn init(config: &MongoConfig) -> Result<Self, RepoError> {
        tracing::info!("Connecting to document store...");

        let client = Client::with_uri_str(&config.url)
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;
        let db = client.database(&config.database);

        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        tracing::info!(database = %config.database, "Document store connected");

        Ok(Self { db })
    }
}

/// MongoDB post repository over the `posts` collection.
pub struct MongoPostRepository {
    collection: Collection<PostDocument>,
}

impl MongoPostRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("posts"),
        }
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for MongoPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let document = self
            .collection
            .find_one(doc! { "_id": id.to_string() })
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(document.map(Into::into))
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        let document = PostDocument::from(post);

        self.collection
            .replace_one(doc! { "_id": document.id.to_string() }, &document)
            .upsert(true)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(document.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.to_string() })
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if result.deleted_count == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        let documents: Vec<PostDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(documents.into_iter().map(Into::into).collect())
    }
}

/// MongoDB user repository over the `users` collection.
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("users"),
        }
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for MongoUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let document = self
            .collection
            .find_one(doc! { "_id": id.to_string() })
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(document.map(Into::into))
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        let document = UserDocument::from(user);

        self.collection
            .replace_one(doc! { "_id": document.id.to_string() }, &document)
            .upsert(true)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(document.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.to_string() })
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if result.deleted_count == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let document = self
            .collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(document.map(Into::into))
    }
}
