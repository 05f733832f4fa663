//! Document rendering ports.

use crate::domain::{Author, BlogPost};

/// Renders a single post as a PDF document.
pub trait PdfRenderer: Send + Sync {
    /// `author` is the live author matching the post's snapshot, if any.
    /// `cover` holds the encoded cover image when one could be loaded.
    fn render_post(
        &self,
        post: &BlogPost,
        author: Option<&Author>,
        cover: Option<&[u8]>,
    ) -> Result<Vec<u8>, RenderError>;
}

/// Serializes posts as CSV.
pub trait CsvExporter: Send + Sync {
    fn export_posts(&self, posts: &[BlogPost]) -> Result<Vec<u8>, RenderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("PDF rendering failed: {0}")]
    Pdf(String),

    #[error("CSV serialization failed: {0}")]
    Csv(String),
}
