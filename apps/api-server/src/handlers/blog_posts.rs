//! Blog post CRUD handlers.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::Value;

use quill_core::domain::BlogPostPatch;
use quill_core::service::PostFilter;
use quill_core::validation;
use quill_shared::dto::CreatedResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
    pub author: Option<String>,
}

/// GET /blogPosts?category=&author=
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let filter = PostFilter {
        category: query.category,
        author: query.author,
    };
    Ok(HttpResponse::Ok().json(state.posts.list(&filter).await?))
}

/// GET /blogPosts/search/{category}
pub async fn search(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let filter = PostFilter {
        category: Some(path.into_inner()),
        ..Default::default()
    };
    Ok(HttpResponse::Ok().json(state.posts.list(&filter).await?))
}

/// GET /blogPosts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.posts.get(&path).await?))
}

/// POST /blogPosts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let draft = validation::blog_post_draft(&body)?;
    let post = state.posts.create(draft).await?;
    Ok(HttpResponse::Created().json(CreatedResponse::new(post.id)))
}

/// PUT /blogPosts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<BlogPostPatch>,
) -> AppResult<HttpResponse> {
    let post = state.posts.update(&path, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /blogPosts/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.posts.delete(&path).await?;
    Ok(HttpResponse::NoContent().finish())
}
