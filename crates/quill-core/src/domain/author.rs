use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::records::Record;

/// Avatar generation service used until a real image is uploaded.
pub const AVATAR_SERVICE_URL: &str = "https://ui-avatars.com/api/";

/// Avatar URL derived from the author's names, e.g.
/// `https://ui-avatars.com/api/?name=Ada+Lovelace`.
pub fn derived_avatar_url(name: &str, surname: &str) -> String {
    format!("{AVATAR_SERVICE_URL}?name={name}+{surname}")
}

pub fn is_derived_avatar(url: &str) -> bool {
    url.starts_with(AVATAR_SERVICE_URL)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Admin => "Admin",
        }
    }
}

/// Author entity - a person who writes blog posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub avatar: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Author {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

/// Validated input for a new author.
#[derive(Debug, Clone)]
pub struct AuthorDraft {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub google_id: Option<String>,
}

impl AuthorDraft {
    pub fn new(name: String, surname: String, email: String) -> Self {
        Self {
            name,
            surname,
            email,
            password_hash: None,
            google_id: None,
        }
    }
}

/// Fields an author edit may replace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPatch {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
}

impl Record for Author {
    type Draft = AuthorDraft;
    type Patch = AuthorPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(draft: AuthorDraft, id: String, now: DateTime<Utc>) -> Self {
        let avatar = derived_avatar_url(&draft.name, &draft.surname);
        Self {
            id,
            name: draft.name,
            surname: draft.surname,
            email: draft.email,
            avatar,
            role: Role::User,
            password_hash: draft.password_hash,
            google_id: draft.google_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: AuthorPatch) {
        let renamed = patch.name.is_some() || patch.surname.is_some();

        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(surname) = patch.surname {
            self.surname = surname;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }

        // An uploaded avatar survives renames; a derived one follows the name.
        match patch.avatar {
            Some(avatar) => self.avatar = avatar,
            None if renamed && is_derived_avatar(&self.avatar) => {
                self.avatar = derived_avatar_url(&self.name, &self.surname);
            }
            None => {}
        }
    }

    fn set_updated_at(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
