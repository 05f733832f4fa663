//! Uploads written under the public directory and served statically.

use std::path::PathBuf;

use async_trait::async_trait;

use quill_core::ports::{ImageCategory, ImageHost, MediaError};

/// Writes `<public_dir>/img/<category>/<file>` and answers with
/// `<base_url>/img/<category>/<file>`.
pub struct LocalImageHost {
    public_dir: PathBuf,
    base_url: String,
}

impl LocalImageHost {
    pub fn new(public_dir: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            public_dir: public_dir.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn image_dir(&self, category: ImageCategory) -> PathBuf {
        self.public_dir.join("img").join(category.as_str())
    }

    /// Map `<base_url>/img/<category>/<file>` back onto the public directory.
    fn local_path(&self, url: &str) -> Option<PathBuf> {
        let rest = url.strip_prefix(&self.base_url)?.strip_prefix("/img/")?;
        let (category, file_name) = rest.split_once('/')?;
        let safe = |segment: &str| {
            !segment.is_empty() && !segment.starts_with('.') && !segment.contains(['/', '\\'])
        };
        (safe(category) && safe(file_name))
            .then(|| self.public_dir.join("img").join(category).join(file_name))
    }

    /// Write raw bytes, replacing any file with the same name.
    pub async fn save_binary(
        &self,
        category: ImageCategory,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<PathBuf, MediaError> {
        let dir = self.image_dir(category);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| MediaError::Io(format!("{}: {e}", dir.display())))?;

        let path = dir.join(file_name);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| MediaError::Io(format!("{}: {e}", path.display())))?;
        Ok(path)
    }
}

#[async_trait]
impl ImageHost for LocalImageHost {
    async fn upload(
        &self,
        category: ImageCategory,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, MediaError> {
        if file_name.contains(['/', '\\']) || file_name.starts_with('.') {
            return Err(MediaError::Io(format!("Refusing file name {file_name}")));
        }

        let path = self.save_binary(category, file_name, &bytes).await?;
        tracing::debug!(path = %path.display(), size = bytes.len(), "Image stored locally");

        Ok(format!(
            "{}/img/{}/{}",
            self.base_url,
            category.as_str(),
            file_name
        ))
    }

    async fn fetch(&self, url: &str) -> Result<Option<Vec<u8>>, MediaError> {
        let Some(path) = self.local_path(url) else {
            return Ok(None);
        };
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(MediaError::Io(format!("{}: {e}", path.display()))),
        }
    }
}
