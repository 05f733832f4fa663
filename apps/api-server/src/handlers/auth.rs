//! Password registration, login and the current author.

use actix_web::{HttpResponse, web};
use serde_json::Value;

use quill_core::validation;
use quill_shared::dto::{CreatedResponse, LoginRequest, TokenResponse};

use super::authors::author_response;
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /authors/register
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let (mut draft, password) = validation::registration(&body)?;
    draft.password_hash = Some(state.passwords.hash(&password)?);

    let author = state.authors.create(draft).await?;
    Ok(HttpResponse::Created().json(CreatedResponse::new(author.id)))
}

/// POST /authors/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let invalid = || AppError::Unauthorized("Invalid credentials".to_string());

    let author = state
        .authors
        .find_by_email(&req.email)
        .await?
        .ok_or_else(invalid)?;

    // Accounts created through Google have no password.
    let hash = author.password_hash.as_deref().ok_or_else(invalid)?;
    if !state.passwords.verify(&req.password, hash)? {
        return Err(invalid());
    }

    let token = state
        .tokens
        .generate_token(&author.id, &author.email, author.role)?;

    tracing::info!(author_id = %author.id, "Author logged in");
    Ok(HttpResponse::Ok().json(TokenResponse {
        access_token: token,
    }))
}

/// GET /authors/me
pub async fn me(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let author = state.authors.get(&identity.author_id).await?;
    Ok(HttpResponse::Ok().json(author_response(author)))
}

/// GET /authors/me/stories
pub async fn stories(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let author = state.authors.get(&identity.author_id).await?;
    let posts = state.authors.stories(&author).await?;
    Ok(HttpResponse::Ok().json(posts))
}
