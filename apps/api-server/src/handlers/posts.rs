//! Post endpoints - thin mappers over the post service.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use ripple_core::error::DomainError;
use ripple_shared::dto::{DeleteAck, PostInput};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// The public fetch routes report a missing post under a different key
/// than the authenticated mutation routes.
fn not_found_on_fetch(err: DomainError) -> AppError {
    match err {
        DomainError::PostNotFound { .. } => {
            AppError::not_found("nopostfound", "No post found with that id")
        }
        other => other.into(),
    }
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_posts().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{post_id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .get_post(path.into_inner())
        .await
        .map_err(not_found_on_fetch)?;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts - Protected route
pub async fn create_post(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<PostInput>,
) -> AppResult<HttpResponse> {
    let input = body.into_inner();

    let post = state
        .posts
        .create_post(identity.user_id, input.text, input.name, input.avatar)
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{post_id} - Protected route, author only
pub async fn delete_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state
        .posts
        .delete_post(path.into_inner(), identity.user_id)
        .await?;

    Ok(HttpResponse::Ok().json(DeleteAck { success: true }))
}

/// POST /api/posts/like/{post_id} - Protected route
pub async fn like_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .add_like(path.into_inner(), identity.user_id)
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts/unlike/{post_id} - Protected route
pub async fn unlike_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .remove_like(path.into_inner(), identity.user_id)
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts/comment/{post_id} - Protected route
pub async fn add_comment(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<PostInput>,
) -> AppResult<HttpResponse> {
    let input = body.into_inner();

    let post = state
        .posts
        .add_comment(
            path.into_inner(),
            identity.user_id,
            input.text,
            input.name,
            input.avatar,
        )
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/comment/{post_id}/{comment_id} - Protected route
///
/// Any authenticated user may remove any comment; the identity is only
/// required to hold a valid token.
pub async fn remove_comment(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<(Uuid, Uuid)>,
) -> AppResult<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();

    let post = state.posts.remove_comment(post_id, comment_id).await?;

    Ok(HttpResponse::Ok().json(post))
}
