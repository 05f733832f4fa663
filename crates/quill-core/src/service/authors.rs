//! Author operations.

use tracing::instrument;

use crate::collection::Collection;
use crate::domain::{Author, AuthorDraft, AuthorPatch, BlogPost};
use crate::error::{DomainError, Missing};
use crate::ports::ExternalIdentity;
use crate::records::{append, find_index, remove, upsert_at};
use crate::validation;

#[derive(Clone)]
pub struct AuthorService {
    authors: Collection<Author>,
    posts: Collection<BlogPost>,
}

impl AuthorService {
    pub fn new(authors: Collection<Author>, posts: Collection<BlogPost>) -> Self {
        Self { authors, posts }
    }

    pub async fn list(&self) -> Result<Vec<Author>, DomainError> {
        self.authors.all().await
    }

    pub async fn get(&self, id: &str) -> Result<Author, DomainError> {
        self.authors
            .all()
            .await?
            .into_iter()
            .find(|a| a.id == id)
            .ok_or_else(|| DomainError::NotFound(Missing::Author(id.to_string())))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Author>, DomainError> {
        let email = email.trim();
        Ok(self.authors.all().await?.into_iter().find(|a| a.email == email))
    }

    /// Create an author after checking no other author uses the same email.
    #[instrument(skip(self, draft), fields(email = %mask_email(&draft.email)))]
    pub async fn create(&self, draft: AuthorDraft) -> Result<Author, DomainError> {
        let author = self
            .authors
            .mutate(move |authors| {
                ensure_email_free(authors, &draft.email, None)?;
                Ok(append(authors, draft))
            })
            .await?;

        tracing::info!(author_id = %author.id, "Author created");
        Ok(author)
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: &str, patch: AuthorPatch) -> Result<Author, DomainError> {
        let patch = validation::author_patch(patch)?;
        let id = id.to_string();

        self.authors
            .mutate(move |authors| {
                let index = find_index(authors, &id)
                    .ok_or_else(|| DomainError::NotFound(Missing::Author(id.clone())))?;
                if let Some(email) = &patch.email {
                    ensure_email_free(authors, email, Some(&id))?;
                }
                Ok(upsert_at(authors, index, patch))
            })
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let id = id.to_string();
        self.authors
            .mutate(move |authors| {
                if find_index(authors, &id).is_none() {
                    return Err(DomainError::NotFound(Missing::Author(id)));
                }
                remove(authors, &id);
                Ok(())
            })
            .await?;

        tracing::info!("Author deleted");
        Ok(())
    }

    /// Replace the avatar with an uploaded image URL.
    pub async fn set_avatar(&self, id: &str, url: String) -> Result<Author, DomainError> {
        self.update(
            id,
            AuthorPatch {
                avatar: Some(url),
                ..Default::default()
            },
        )
        .await
    }

    /// Find the author an OAuth identity belongs to, creating one on first login.
    pub async fn find_or_create_external(
        &self,
        identity: ExternalIdentity,
    ) -> Result<Author, DomainError> {
        if let Some(author) = self.find_by_email(&identity.email).await? {
            return Ok(author);
        }

        let mut draft = AuthorDraft::new(identity.given_name, identity.family_name, identity.email);
        draft.google_id = Some(identity.subject);

        match self.create(draft).await {
            // Lost a race with a concurrent first login for the same email.
            Err(DomainError::DuplicateEmail(email)) => {
                let existing = self.find_by_email(&email).await?;
                existing.ok_or(DomainError::DuplicateEmail(email))
            }
            other => other,
        }
    }

    /// Posts whose author snapshot carries this author's full name.
    pub async fn stories(&self, author: &Author) -> Result<Vec<BlogPost>, DomainError> {
        let full_name = author.full_name();
        Ok(self
            .posts
            .all()
            .await?
            .into_iter()
            .filter(|p| p.author.name == full_name)
            .collect())
    }
}

fn ensure_email_free(
    authors: &[Author],
    email: &str,
    except_id: Option<&str>,
) -> Result<(), DomainError> {
    let taken = authors
        .iter()
        .any(|a| a.email == email && Some(a.id.as_str()) != except_id);
    if taken {
        return Err(DomainError::DuplicateEmail(email.to_string()));
    }
    Ok(())
}

/// Mask an email for logging to avoid PII in logs.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{first}***@{domain}")
        }
        None => "***".to_string(),
    }
}
