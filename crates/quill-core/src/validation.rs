//! Input validation - turns raw request bodies into drafts and checks patches.
//!
//! Every check runs before anything is reported so the caller gets the complete
//! list of rejected fields in one response.

use serde_json::Value;

use crate::domain::{
    AuthorDraft, AuthorPatch, AuthorSnapshot, BlogPostDraft, BlogPostPatch, CommentDraft,
    CommentPatch,
};
use crate::error::{DomainError, FieldError};

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Default)]
struct Checks {
    errors: Vec<FieldError>,
}

impl Checks {
    fn string(&mut self, body: &Value, path: &[&str], message: &str) -> Option<String> {
        let value = path.iter().try_fold(body, |v, key| v.get(key));
        match value.and_then(Value::as_str).map(str::trim) {
            Some(s) if !s.is_empty() => Some(s.to_string()),
            _ => {
                self.errors.push(FieldError::new(path.join("."), message));
                None
            }
        }
    }

    fn optional_string(&mut self, body: &Value, field: &str, message: &str) -> Option<String> {
        match body.get(field) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.trim().to_string()),
            Some(_) => {
                self.errors.push(FieldError::new(field, message));
                None
            }
        }
    }

    fn integer(&mut self, body: &Value, field: &str, message: &str) -> Option<u32> {
        match body
            .get(field)
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
        {
            Some(n) => Some(n),
            None => {
                self.errors.push(FieldError::new(field, message));
                None
            }
        }
    }

    fn email(&mut self, email: Option<&str>, field: &str) {
        if let Some(email) = email {
            if !looks_like_email(email) {
                self.errors.push(FieldError::new(
                    field,
                    "Email must be a valid email address",
                ));
            }
        }
    }

    fn not_blank(&mut self, value: Option<&String>, field: &str, message: &str) {
        if value.is_some_and(|v| v.trim().is_empty()) {
            self.errors.push(FieldError::new(field, message));
        }
    }

    fn finish(self) -> Result<(), DomainError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::ValidationFailed(self.errors))
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    }
}

fn require_object(body: &Value) -> Result<(), DomainError> {
    if body.is_object() {
        Ok(())
    } else {
        Err(DomainError::invalid("body", "Request body must be a JSON object"))
    }
}

pub fn author_draft(body: &Value) -> Result<AuthorDraft, DomainError> {
    require_object(body)?;
    let mut checks = Checks::default();

    let name = checks.string(body, &["name"], "Name is a mandatory field and must be a string/text");
    let surname = checks.string(
        body,
        &["surname"],
        "Surname is a mandatory field and must be a string/text",
    );
    let email = checks.string(
        body,
        &["email"],
        "Email is a mandatory field and must be a string/text",
    );
    checks.email(email.as_deref(), "email");
    checks.finish()?;

    match (name, surname, email) {
        (Some(name), Some(surname), Some(email)) => Ok(AuthorDraft::new(name, surname, email)),
        _ => Err(DomainError::invalid("body", "Incomplete author")),
    }
}

/// Author fields plus a plain-text password.
pub fn registration(body: &Value) -> Result<(AuthorDraft, String), DomainError> {
    require_object(body)?;
    let password = body.get("password").and_then(Value::as_str).unwrap_or_default();

    let draft = author_draft(body);
    let password_error = (password.chars().count() < MIN_PASSWORD_LEN).then(|| {
        FieldError::new(
            "password",
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        )
    });

    match (draft, password_error) {
        (Ok(draft), None) => Ok((draft, password.to_string())),
        (Ok(_), Some(err)) => Err(DomainError::ValidationFailed(vec![err])),
        (Err(DomainError::ValidationFailed(mut errors)), err) => {
            errors.extend(err);
            Err(DomainError::ValidationFailed(errors))
        }
        (Err(other), _) => Err(other),
    }
}

pub fn blog_post_draft(body: &Value) -> Result<BlogPostDraft, DomainError> {
    require_object(body)?;
    let mut checks = Checks::default();

    let category = checks.string(
        body,
        &["category"],
        "Category is a mandatory field and must be a string/text",
    );
    let title = checks.string(body, &["title"], "Title is a mandatory field and must be a string/text");
    let read_time = checks.integer(
        body,
        "readTime",
        "The read time value is a mandatory field and must be an integer",
    );
    let author_name = checks.string(
        body,
        &["author", "name"],
        "Author name is a mandatory field and must be a string/text",
    );
    let author_avatar = checks.string(
        body,
        &["author", "avatar"],
        "Author avatar is a mandatory field and must be a string/text",
    );
    let content = checks.string(
        body,
        &["content"],
        "Content is a mandatory field and must be a string/text",
    );
    let cover = checks.optional_string(body, "cover", "Cover must be a string/text");
    checks.finish()?;

    match (category, title, read_time, author_name, author_avatar, content) {
        (Some(category), Some(title), Some(read_time), Some(name), Some(avatar), Some(content)) => {
            Ok(BlogPostDraft {
                category,
                title,
                read_time,
                author: AuthorSnapshot { name, avatar },
                content,
                cover,
            })
        }
        _ => Err(DomainError::invalid("body", "Incomplete blog post")),
    }
}

pub fn comment_draft(body: &Value) -> Result<CommentDraft, DomainError> {
    require_object(body)?;
    let mut checks = Checks::default();

    let author = checks.string(
        body,
        &["author"],
        "Author is a mandatory field and must be a string/text",
    );
    let text = checks.string(body, &["text"], "Text is a mandatory field and must be a string/text");
    checks.finish()?;

    match (author, text) {
        (Some(author), Some(text)) => Ok(CommentDraft { author, text }),
        _ => Err(DomainError::invalid("body", "Incomplete comment")),
    }
}

/// Trims every supplied field, then checks it. Returns the trimmed patch.
pub fn author_patch(patch: AuthorPatch) -> Result<AuthorPatch, DomainError> {
    let trim = |v: Option<String>| v.map(|s| s.trim().to_string());
    let patch = AuthorPatch {
        name: trim(patch.name),
        surname: trim(patch.surname),
        email: trim(patch.email),
        avatar: trim(patch.avatar),
    };

    let mut checks = Checks::default();
    checks.not_blank(patch.name.as_ref(), "name", "Name must not be empty");
    checks.not_blank(patch.surname.as_ref(), "surname", "Surname must not be empty");
    checks.not_blank(patch.avatar.as_ref(), "avatar", "Avatar must not be empty");
    checks.email(patch.email.as_deref(), "email");
    checks.finish()?;
    Ok(patch)
}

pub fn blog_post_patch(patch: &BlogPostPatch) -> Result<(), DomainError> {
    let mut checks = Checks::default();
    checks.not_blank(patch.category.as_ref(), "category", "Category must not be empty");
    checks.not_blank(patch.title.as_ref(), "title", "Title must not be empty");
    checks.not_blank(patch.content.as_ref(), "content", "Content must not be empty");
    if let Some(author) = &patch.author {
        checks.not_blank(Some(&author.name), "author.name", "Author name must not be empty");
        checks.not_blank(Some(&author.avatar), "author.avatar", "Author avatar must not be empty");
    }
    checks.finish()
}

pub fn comment_patch(patch: &CommentPatch) -> Result<(), DomainError> {
    let mut checks = Checks::default();
    checks.not_blank(patch.author.as_ref(), "author", "Author must not be empty");
    checks.not_blank(patch.text.as_ref(), "text", "Text must not be empty");
    checks.finish()
}
