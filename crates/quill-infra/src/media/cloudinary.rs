//! Cloudinary unsigned uploads.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use quill_core::ports::{ImageCategory, ImageHost, MediaError};

const API_BASE: &str = "https://api.cloudinary.com/v1_1";
const DELIVERY_BASE: &str = "https://res.cloudinary.com/";

#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub upload_preset: String,
    /// Parent folder; the image category is appended beneath it.
    pub folder: String,
}

pub struct CloudinaryImageHost {
    client: reqwest::Client,
    config: CloudinaryConfig,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

impl CloudinaryImageHost {
    pub fn new(config: CloudinaryConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!("{API_BASE}/{}/image/upload", self.config.cloud_name)
    }

    fn folder(&self, category: ImageCategory) -> String {
        format!("{}/{}", self.config.folder, category.as_str())
    }

    /// Only delivery URLs of the configured cloud are fetched.
    fn serves(&self, url: &str) -> bool {
        url.strip_prefix(DELIVERY_BASE)
            .and_then(|rest| rest.strip_prefix(self.config.cloud_name.as_str()))
            .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// Cloudinary appends the format itself, so the public id drops the extension.
fn public_id(file_name: &str) -> &str {
    file_name
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(file_name)
}

#[async_trait]
impl ImageHost for CloudinaryImageHost {
    async fn upload(
        &self,
        category: ImageCategory,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, MediaError> {
        let form = Form::new()
            .text("upload_preset", self.config.upload_preset.clone())
            .text("folder", self.folder(category))
            .text("public_id", public_id(file_name).to_string())
            .part("file", Part::bytes(bytes).file_name(file_name.to_string()));

        let response = self
            .client
            .post(self.endpoint())
            .multipart(form)
            .send()
            .await
            .map_err(|e| MediaError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MediaError::Upstream(format!("{status}: {body}")));
        }

        let uploaded: UploadResponse = response
            .json()
            .await
            .map_err(|e| MediaError::Upstream(e.to_string()))?;

        tracing::debug!(url = %uploaded.secure_url, "Image uploaded to Cloudinary");
        Ok(uploaded.secure_url)
    }

    async fn fetch(&self, url: &str) -> Result<Option<Vec<u8>>, MediaError> {
        if !self.serves(url) {
            return Ok(None);
        }

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| MediaError::Upstream(e.to_string()))?;

        match response.status() {
            reqwest::StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| MediaError::Upstream(e.to_string()))?;
                Ok(Some(bytes.to_vec()))
            }
            status => Err(MediaError::Upstream(format!("{status} fetching {url}"))),
        }
    }
}
