use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::records::Record;

/// Comment entity - lives only inside its parent blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CommentDraft {
    pub author: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentPatch {
    pub author: Option<String>,
    pub text: Option<String>,
}

impl Record for Comment {
    type Draft = CommentDraft;
    type Patch = CommentPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(draft: CommentDraft, id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            author: draft.author,
            text: draft.text,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: CommentPatch) {
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(text) = patch.text {
            self.text = text;
        }
    }

    fn set_updated_at(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
