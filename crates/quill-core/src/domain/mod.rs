//! Domain entities - the records kept in the two collections.

mod author;
mod blog_post;
mod comment;

pub use author::{
    AVATAR_SERVICE_URL, Author, AuthorDraft, AuthorPatch, Role, derived_avatar_url,
    is_derived_avatar,
};
pub use blog_post::{AuthorSnapshot, BlogPost, BlogPostDraft, BlogPostPatch};
pub use comment::{Comment, CommentDraft, CommentPatch};
