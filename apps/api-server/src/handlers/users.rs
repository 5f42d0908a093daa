//! Identity handlers - registration, login, current user.

use std::sync::Arc;

use actix_web::{HttpResponse, web};

use ripple_core::domain::User;
use ripple_core::ports::{PasswordService, TokenService};
use ripple_shared::dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(user: User) -> UserResponse {
    UserResponse {
        id: user.id.to_string(),
        name: user.name,
        email: user.email,
        avatar: user.avatar_url,
        created_at: user.created_at.to_rfc3339(),
    }
}

/// POST /api/users/register
pub async fn register(
    state: web::Data<AppState>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validate input
    let name_len = req.name.trim().chars().count();
    if !(2..=30).contains(&name_len) {
        return Err(AppError::bad_request(
            "name",
            "Name must be between 2 and 30 characters",
        ));
    }
    if req.email.is_empty() || !req.email.contains('@') {
        return Err(AppError::bad_request("email", "Email is invalid"));
    }
    if req.password.len() < 6 {
        return Err(AppError::bad_request(
            "password",
            "Password must be at least 6 characters",
        ));
    }

    // Check if the email is already taken
    if state.users.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::bad_request("email", "Email already exists"));
    }

    // Hash password
    let password_hash = password_service
        .hash(&req.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    // Create user
    let user = User::new(req.name, req.email, password_hash, req.avatar);
    let saved = state.users.save(user).await?;

    Ok(HttpResponse::Ok().json(to_response(saved)))
}

/// POST /api/users/login
pub async fn login(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Find user by email
    let user = state
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| AppError::not_found("email", "User not found"))?;

    // Verify password
    let valid = password_service
        .verify(&req.password, &user.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if !valid {
        return Err(AppError::bad_request("password", "Password incorrect"));
    }

    // Issue token
    let token = token_service
        .generate_token(user.id, &user.email, &user.name)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: token_service.expiration_seconds() as u64,
    }))
}

/// GET /api/users/current - Protected route
pub async fn current(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let user = state
        .users
        .find_by_id(identity.user_id)
        .await?
        .ok_or_else(|| AppError::not_found("user", "User no longer exists"))?;

    Ok(HttpResponse::Ok().json(to_response(user)))
}
