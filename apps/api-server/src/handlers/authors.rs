//! Author CRUD handlers.

use actix_web::{HttpResponse, web};
use chrono::SecondsFormat;
use serde_json::Value;

use quill_core::domain::{Author, AuthorPatch};
use quill_core::service::mask_email;
use quill_core::validation;
use quill_shared::dto::{AuthorResponse, CreatedResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Public view of an author, without credentials.
pub fn author_response(author: Author) -> AuthorResponse {
    AuthorResponse {
        id: author.id,
        name: author.name,
        surname: author.surname,
        email: author.email,
        avatar: author.avatar,
        role: author.role.as_str().to_string(),
        created_at: author.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        updated_at: author.updated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

/// GET /authors
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let authors: Vec<AuthorResponse> = state
        .authors
        .list()
        .await?
        .into_iter()
        .map(author_response)
        .collect();
    Ok(HttpResponse::Ok().json(authors))
}

/// GET /authors/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let author = state.authors.get(&path).await?;
    Ok(HttpResponse::Ok().json(author_response(author)))
}

/// POST /authors
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let draft = validation::author_draft(&body)?;
    let author = state.authors.create(draft).await?;

    tracing::info!(
        author_id = %author.id,
        created_by = %identity.author_id,
        created_by_email = %mask_email(&identity.email),
        role = identity.role.as_str(),
        "Author added"
    );
    Ok(HttpResponse::Created().json(CreatedResponse::new(author.id)))
}

/// POST /authors/checkEmail
///
/// Public sign-up without a password: creates the author unless the email is taken.
pub async fn check_email(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let draft = validation::author_draft(&body)?;
    tracing::debug!(email = %mask_email(&draft.email), "Checking email availability");

    let author = state.authors.create(draft).await?;
    Ok(HttpResponse::Created().json(CreatedResponse::new(author.id)))
}

/// PUT /authors/{id}
pub async fn update(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<String>,
    body: web::Json<AuthorPatch>,
) -> AppResult<HttpResponse> {
    let author = state.authors.update(&path, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(author_response(author)))
}

/// DELETE /authors/{id}
pub async fn delete(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.authors.delete(&path).await?;
    Ok(HttpResponse::NoContent().finish())
}
