use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Comment;
use crate::records::Record;

/// Copy of the author's display data taken when the post was written.
/// It is never synchronised with the author record afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSnapshot {
    pub name: String,
    pub avatar: String,
}

/// Blog post entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: String,
    pub category: String,
    pub title: String,
    pub read_time: u32,
    pub author: AuthorSnapshot,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct BlogPostDraft {
    pub category: String,
    pub title: String,
    pub read_time: u32,
    pub author: AuthorSnapshot,
    pub content: String,
    pub cover: Option<String>,
}

/// Fields a post edit may replace. `author` replaces the whole snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostPatch {
    pub category: Option<String>,
    pub title: Option<String>,
    pub read_time: Option<u32>,
    pub author: Option<AuthorSnapshot>,
    pub content: Option<String>,
    pub cover: Option<String>,
}

impl Record for BlogPost {
    type Draft = BlogPostDraft;
    type Patch = BlogPostPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(draft: BlogPostDraft, id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            category: draft.category,
            title: draft.title,
            read_time: draft.read_time,
            author: draft.author,
            content: draft.content,
            cover: draft.cover,
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: BlogPostPatch) {
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(read_time) = patch.read_time {
            self.read_time = read_time;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(cover) = patch.cover {
            self.cover = Some(cover);
        }
    }

    fn set_updated_at(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_without_author_keeps_snapshot() {
        let mut post = BlogPost::from_draft(
            BlogPostDraft {
                category: "tech".into(),
                title: "T".into(),
                read_time: 5,
                author: AuthorSnapshot {
                    name: "A".into(),
                    avatar: "u".into(),
                },
                content: "<p>x</p>".into(),
                cover: None,
            },
            "p1".into(),
            Utc::now(),
        );

        post.apply_patch(BlogPostPatch {
            title: Some("New".into()),
            ..Default::default()
        });

        assert_eq!(post.title, "New");
        assert_eq!(post.author.name, "A");
        assert_eq!(post.read_time, 5);
    }

    #[test]
    fn wire_format_is_camel_case() {
        let json = serde_json::json!({
            "_id": "p1",
            "category": "tech",
            "title": "T",
            "readTime": 5,
            "author": { "name": "A", "avatar": "u" },
            "content": "<p>x</p>",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        });

        let post: BlogPost = serde_json::from_value(json).unwrap();
        assert_eq!(post.read_time, 5);
        assert!(post.comments.is_empty());
        assert!(post.cover.is_none());
    }
}
