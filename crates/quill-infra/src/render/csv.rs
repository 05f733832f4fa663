//! CSV export of posts.

use chrono::SecondsFormat;

use quill_core::domain::BlogPost;
use quill_core::ports::{CsvExporter, RenderError};

const HEADER: [&str; 9] = [
    "id",
    "category",
    "title",
    "readTime",
    "author",
    "cover",
    "comments",
    "createdAt",
    "updatedAt",
];

#[derive(Debug, Default)]
pub struct CsvPostExporter;

impl CsvExporter for CsvPostExporter {
    fn export_posts(&self, posts: &[BlogPost]) -> Result<Vec<u8>, RenderError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(HEADER)
            .map_err(|e| RenderError::Csv(e.to_string()))?;

        for post in posts {
            let read_time = post.read_time.to_string();
            let comments = post.comments.len().to_string();
            let created_at = post.created_at.to_rfc3339_opts(SecondsFormat::Millis, true);
            let updated_at = post.updated_at.to_rfc3339_opts(SecondsFormat::Millis, true);

            writer
                .write_record([
                    post.id.as_str(),
                    post.category.as_str(),
                    post.title.as_str(),
                    read_time.as_str(),
                    post.author.name.as_str(),
                    post.cover.as_deref().unwrap_or_default(),
                    comments.as_str(),
                    created_at.as_str(),
                    updated_at.as_str(),
                ])
                .map_err(|e| RenderError::Csv(e.to_string()))?;
        }

        writer
            .into_inner()
            .map_err(|e| RenderError::Csv(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use quill_core::domain::AuthorSnapshot;

    #[test]
    fn writes_header_and_quotes_commas() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let post = BlogPost {
            id: "p1".into(),
            category: "tech".into(),
            title: "Hello, world".into(),
            read_time: 4,
            author: AuthorSnapshot {
                name: "Ada Lovelace".into(),
                avatar: "u".into(),
            },
            content: "<p>x</p>".into(),
            cover: None,
            comments: Vec::new(),
            created_at: at,
            updated_at: at,
        };

        let bytes = CsvPostExporter.export_posts(&[post]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next(),
            Some("id,category,title,readTime,author,cover,comments,createdAt,updatedAt")
        );
        assert_eq!(
            lines.next(),
            Some(
                "p1,tech,\"Hello, world\",4,Ada Lovelace,,0,2024-01-02T03:04:05.000Z,2024-01-02T03:04:05.000Z"
            )
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_export_is_header_only() {
        let bytes = CsvPostExporter.export_posts(&[]).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "id,category,title,readTime,author,cover,comments,createdAt,updatedAt\n"
        );
    }
}
