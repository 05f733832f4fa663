//! Image hosting port.

use async_trait::async_trait;

use super::ImageCategory;

/// Stores an uploaded image and returns the URL it is reachable at.
#[async_trait]
pub trait ImageHost: Send + Sync {
    async fn upload(
        &self,
        category: ImageCategory,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, MediaError>;

    /// Read back an image by the URL `upload` returned. `None` when the URL is
    /// not one this host serves or the image is gone.
    async fn fetch(&self, url: &str) -> Result<Option<Vec<u8>>, MediaError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("Failed to write image: {0}")]
    Io(String),

    #[error("Image host rejected upload: {0}")]
    Upstream(String),
}
