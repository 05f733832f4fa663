//! Comments nested under a blog post.

use actix_web::{HttpResponse, web};
use serde_json::Value;

use quill_core::domain::CommentPatch;
use quill_core::validation;
use quill_shared::dto::CreatedResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /blogPosts/{id}/comments
pub async fn list(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.posts.comments(&path).await?))
}

/// GET /blogPosts/{id}/comments/{comment_id}
pub async fn get(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> AppResult<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    Ok(HttpResponse::Ok().json(state.posts.comment(&post_id, &comment_id).await?))
}

/// POST /blogPosts/{id}/comments
pub async fn create(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let draft = validation::comment_draft(&body)?;
    let comment = state.posts.add_comment(&path, draft).await?;
    Ok(HttpResponse::Created().json(CreatedResponse::new(comment.id)))
}

/// PUT /blogPosts/{id}/comments/{comment_id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    body: web::Json<CommentPatch>,
) -> AppResult<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    let comment = state
        .posts
        .update_comment(&post_id, &comment_id, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(comment))
}

/// DELETE /blogPosts/{id}/comments/{comment_id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> AppResult<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    state.posts.delete_comment(&post_id, &comment_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
