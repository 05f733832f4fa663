//! PDF and CSV downloads.

use actix_web::http::header::CONTENT_DISPOSITION;
use actix_web::{HttpResponse, web};

use quill_core::service::PostFilter;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /blogPosts/{id}/pdf
pub async fn pdf(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state.posts.get(&id).await?;
    let bytes = state.exports.render(post).await?;

    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header((
            CONTENT_DISPOSITION,
            format!("attachment; filename=blogPost{id}.pdf"),
        ))
        .body(bytes))
}

/// GET /blogPosts/csv
pub async fn csv(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list(&PostFilter::default()).await?;

    let exporter = state.csv.clone();
    let bytes = web::block(move || exporter.export_posts(&posts)).await??;

    Ok(HttpResponse::Ok()
        .content_type("text/csv")
        .insert_header((CONTENT_DISPOSITION, "attachment; filename=blogPosts.csv"))
        .body(bytes))
}
