//! Application state - shared across all handlers.

use std::sync::Arc;

use ripple_core::ports::{PostRepository, UserRepository};
use ripple_core::service::PostService;
use ripple_infra::database::MongoConfig;
use ripple_infra::database::{InMemoryPostRepository, InMemoryUserRepository};

#[cfg(feature = "mongo")]
use ripple_infra::database::{MongoPostRepository, MongoStore, MongoUserRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(mongo: Option<&MongoConfig>) -> Self {
        #[cfg(feature = "mongo")]
        let (post_repo, user_repo): (Arc<dyn PostRepository>, Arc<dyn UserRepository>) = {
            if let Some(config) = mongo {
                match MongoStore::init(config).await {
                    Ok(store) => (
                        Arc::new(MongoPostRepository::new(&store.db)),
                        Arc::new(MongoUserRepository::new(&store.db)),
                    ),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to document store: {}. Using in-memory fallback.",
                            e
                        );
                        (
                            Arc::new(InMemoryPostRepository::new()),
                            Arc::new(InMemoryUserRepository::new()),
                        )
                    }
                }
            } else {
                tracing::warn!(
                    "MONGODB_URL not set. Running without document store (in-memory mode)."
                );
                (
                    Arc::new(InMemoryPostRepository::new()),
                    Arc::new(InMemoryUserRepository::new()),
                )
            }
        };

        #[cfg(not(feature = "mongo"))]
        let (post_repo, user_repo): (Arc<dyn PostRepository>, Arc<dyn UserRepository>) = {
            let _ = mongo;
            tracing::info!("Running without mongo feature - using in-memory repositories");
            (
                Arc::new(InMemoryPostRepository::new()),
                Arc::new(InMemoryUserRepository::new()),
            )
        };

        tracing::info!("Application state initialized");

        Self {
            posts: Arc::new(PostService::new(post_repo)),
            users: user_repo,
        }
    }
}
