//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Body of every `201 Created` answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResponse {
    #[serde(rename = "_id")]
    pub id: String,
}

impl CreatedResponse {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
}

/// An author as exposed over HTTP. Credentials never leave the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub avatar: String,
    pub role: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarUploadResponse<T> {
    pub message: String,
    pub url: String,
    pub edited_author: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverUploadResponse<T> {
    pub message: String,
    pub url: String,
    pub edited_blog_post: T,
}

pub const UPLOAD_MESSAGE: &str = "Image has been uploaded successfully";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}
