//! Avatar and cover image uploads.

use std::path::Path;

use actix_multipart::{Field, Multipart};
use actix_web::{HttpResponse, web};
use futures::TryStreamExt;

use quill_core::FieldError;
use quill_core::ports::ImageCategory;
use quill_shared::dto::{AvatarUploadResponse, CoverUploadResponse, UPLOAD_MESSAGE};

use super::authors::author_response;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Largest accepted image.
pub const MAX_IMAGE_BYTES: usize = 1024 * 1024;

/// An image part pulled out of a multipart body.
#[derive(Debug)]
struct Upload {
    bytes: Vec<u8>,
    /// Includes the leading dot, or is empty.
    extension: String,
}

/// POST /authors/{id}/uploadAvatar
pub async fn upload_avatar(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: Multipart,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.authors.get(&id).await?;

    let upload = read_image(payload, "avatar").await?;
    let url = state
        .images
        .upload(
            ImageCategory::Authors,
            &format!("{id}{}", upload.extension),
            upload.bytes,
        )
        .await?;
    let author = state.authors.set_avatar(&id, url.clone()).await?;

    tracing::info!(author_id = %id, url = %url, "Avatar uploaded");
    Ok(HttpResponse::Ok().json(AvatarUploadResponse {
        message: UPLOAD_MESSAGE.to_string(),
        url,
        edited_author: author_response(author),
    }))
}

/// POST /blogPosts/{id}/uploadCover
pub async fn upload_cover(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: Multipart,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.posts.get(&id).await?;

    let upload = read_image(payload, "cover").await?;
    let url = state
        .images
        .upload(
            ImageCategory::Covers,
            &format!("{id}{}", upload.extension),
            upload.bytes,
        )
        .await?;
    let post = state.posts.set_cover(&id, url.clone()).await?;

    tracing::info!(post_id = %id, url = %url, "Cover uploaded");
    Ok(HttpResponse::Ok().json(CoverUploadResponse {
        message: UPLOAD_MESSAGE.to_string(),
        url,
        edited_blog_post: post,
    }))
}

/// Read the image part named `field_name`, skipping every other part.
async fn read_image(mut payload: Multipart, field_name: &str) -> AppResult<Upload> {
    while let Some(mut field) = payload.try_next().await? {
        if field.name() != Some(field_name) {
            while field.try_next().await?.is_some() {}
            continue;
        }

        let is_image = field
            .content_type()
            .is_some_and(|mime| mime.type_().as_str() == "image");
        if !is_image {
            return Err(invalid(field_name, "Only image files are accepted"));
        }

        let extension = extension_of(&field);
        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            if bytes.len() + chunk.len() > MAX_IMAGE_BYTES {
                return Err(invalid(field_name, "Image must not be larger than 1 MiB"));
            }
            bytes.extend_from_slice(&chunk);
        }

        if bytes.is_empty() {
            return Err(invalid(field_name, "Image file is empty"));
        }
        return Ok(Upload { bytes, extension });
    }

    Err(invalid(field_name, "An image file is required"))
}

/// `.ext` from the uploaded file name, falling back to the MIME subtype.
fn extension_of(field: &Field) -> String {
    let from_name = field
        .content_disposition()
        .and_then(|cd| cd.get_filename())
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let from_mime = || {
        field
            .content_type()
            .map(|mime| mime.subtype().as_str().to_ascii_lowercase())
    };

    from_name
        .or_else(from_mime)
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}

fn invalid(field: &str, message: &str) -> AppError {
    AppError::Validation(vec![FieldError::new(field, message)])
}
