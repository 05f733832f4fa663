//! PDF export of a single post.

use std::sync::Arc;

use crate::collection::Collection;
use crate::domain::{Author, BlogPost};
use crate::error::DomainError;
use crate::ports::{ImageHost, PdfRenderer};

/// Gathers what a post's PDF needs (the live author and the cover image) and
/// renders it on the blocking pool.
#[derive(Clone)]
pub struct PdfExportService {
    authors: Collection<Author>,
    images: Arc<dyn ImageHost>,
    pdf: Arc<dyn PdfRenderer>,
}

impl PdfExportService {
    pub fn new(
        authors: Collection<Author>,
        images: Arc<dyn ImageHost>,
        pdf: Arc<dyn PdfRenderer>,
    ) -> Self {
        Self {
            authors,
            images,
            pdf,
        }
    }

    pub async fn render(&self, post: BlogPost) -> Result<Vec<u8>, DomainError> {
        let author = self
            .authors
            .all()
            .await?
            .into_iter()
            .find(|a| a.full_name() == post.author.name);
        let cover = match post.cover.as_deref() {
            Some(url) => self.cover(url).await,
            None => None,
        };

        let pdf = self.pdf.clone();
        tokio::task::spawn_blocking(move || {
            pdf.render_post(&post, author.as_ref(), cover.as_deref())
        })
        .await
        .map_err(|e| DomainError::Render(e.to_string()))?
        .map_err(|e| DomainError::Render(e.to_string()))
    }

    /// A cover that cannot be loaded is left out of the document.
    async fn cover(&self, url: &str) -> Option<Vec<u8>> {
        match self.images.fetch(url).await {
            Ok(Some(bytes)) => Some(bytes),
            Ok(None) => {
                tracing::debug!(url, "Cover image not served by this host");
                None
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "Cover image unavailable");
                None
            }
        }
    }
}
