//! Blog post and nested comment operations.

use std::sync::Arc;

use tracing::instrument;

use crate::collection::Collection;
use crate::domain::{BlogPost, BlogPostDraft, BlogPostPatch, Comment, CommentDraft, CommentPatch};
use crate::error::{DomainError, Missing};
use crate::events::DomainEvent;
use crate::ports::JobQueue;
use crate::records::{append, find_index, remove, upsert_at};
use crate::validation;

/// Optional listing filters, both exact matches.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub category: Option<String>,
    pub author: Option<String>,
}

impl PostFilter {
    fn matches(&self, post: &BlogPost) -> bool {
        self.category.as_ref().is_none_or(|c| &post.category == c)
            && self.author.as_ref().is_none_or(|a| &post.author.name == a)
    }
}

#[derive(Clone)]
pub struct BlogPostService {
    posts: Collection<BlogPost>,
    outbox: Arc<dyn JobQueue>,
}

impl BlogPostService {
    pub fn new(posts: Collection<BlogPost>, outbox: Arc<dyn JobQueue>) -> Self {
        Self { posts, outbox }
    }

    pub async fn list(&self, filter: &PostFilter) -> Result<Vec<BlogPost>, DomainError> {
        let mut posts = self.posts.all().await?;
        posts.retain(|p| filter.matches(p));
        Ok(posts)
    }

    pub async fn get(&self, id: &str) -> Result<BlogPost, DomainError> {
        self.posts
            .all()
            .await?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::NotFound(Missing::BlogPost(id.to_string())))
    }

    /// Append a post and record a `BlogPostCreated` event.
    ///
    /// The event is best effort: if the outbox refuses it the post stays saved.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn create(&self, draft: BlogPostDraft) -> Result<BlogPost, DomainError> {
        let post = self
            .posts
            .mutate(move |posts| Ok(append(posts, draft)))
            .await?;
        tracing::info!(post_id = %post.id, "Blog post created");

        let event = DomainEvent::BlogPostCreated {
            post_id: post.id.clone(),
        };
        if let Err(e) = self.outbox.enqueue(event.into_job()).await {
            tracing::warn!(post_id = %post.id, error = %e, "Failed to record blog post event");
        }

        Ok(post)
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: &str, patch: BlogPostPatch) -> Result<BlogPost, DomainError> {
        validation::blog_post_patch(&patch)?;
        let id = id.to_string();

        self.posts
            .mutate(move |posts| {
                let index = find_index(posts, &id)
                    .ok_or_else(|| DomainError::NotFound(Missing::BlogPost(id.clone())))?;
                Ok(upsert_at(posts, index, patch))
            })
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let id = id.to_string();
        self.posts
            .mutate(move |posts| {
                if find_index(posts, &id).is_none() {
                    return Err(DomainError::NotFound(Missing::BlogPost(id)));
                }
                remove(posts, &id);
                Ok(())
            })
            .await?;

        tracing::info!("Blog post deleted");
        Ok(())
    }

    pub async fn set_cover(&self, id: &str, url: String) -> Result<BlogPost, DomainError> {
        self.update(
            id,
            BlogPostPatch {
                cover: Some(url),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn comments(&self, post_id: &str) -> Result<Vec<Comment>, DomainError> {
        Ok(self.get(post_id).await?.comments)
    }

    pub async fn comment(&self, post_id: &str, comment_id: &str) -> Result<Comment, DomainError> {
        self.get(post_id)
            .await?
            .comments
            .into_iter()
            .find(|c| c.id == comment_id)
            .ok_or_else(|| missing_comment(post_id, comment_id))
    }

    #[instrument(skip(self, draft))]
    pub async fn add_comment(
        &self,
        post_id: &str,
        draft: CommentDraft,
    ) -> Result<Comment, DomainError> {
        let post_id = post_id.to_string();
        self.posts
            .mutate(move |posts| {
                let post = post_mut(posts, &post_id)?;
                Ok(append(&mut post.comments, draft))
            })
            .await
    }

    #[instrument(skip(self, patch))]
    pub async fn update_comment(
        &self,
        post_id: &str,
        comment_id: &str,
        patch: CommentPatch,
    ) -> Result<Comment, DomainError> {
        validation::comment_patch(&patch)?;
        let (post_id, comment_id) = (post_id.to_string(), comment_id.to_string());

        self.posts
            .mutate(move |posts| {
                let post = post_mut(posts, &post_id)?;
                let index = find_index(&post.comments, &comment_id)
                    .ok_or_else(|| missing_comment(&post_id, &comment_id))?;
                Ok(upsert_at(&mut post.comments, index, patch))
            })
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_comment(&self, post_id: &str, comment_id: &str) -> Result<(), DomainError> {
        let (post_id, comment_id) = (post_id.to_string(), comment_id.to_string());

        self.posts
            .mutate(move |posts| {
                let post = post_mut(posts, &post_id)?;
                if find_index(&post.comments, &comment_id).is_none() {
                    return Err(missing_comment(&post_id, &comment_id));
                }
                remove(&mut post.comments, &comment_id);
                Ok(())
            })
            .await
    }
}

fn post_mut<'a>(posts: &'a mut [BlogPost], id: &str) -> Result<&'a mut BlogPost, DomainError> {
    let index =
        find_index(posts, id).ok_or_else(|| DomainError::NotFound(Missing::BlogPost(id.into())))?;
    Ok(&mut posts[index])
}

fn missing_comment(post_id: &str, comment_id: &str) -> DomainError {
    DomainError::NotFound(Missing::Comment {
        post_id: post_id.to_string(),
        comment_id: comment_id.to_string(),
    })
}
