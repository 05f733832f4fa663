//! Consumer for `BlogPostCreated` events: mails the new post to a fixed recipient.

use std::sync::Arc;

use crate::collection::Collection;
use crate::domain::BlogPost;
use crate::events::DomainEvent;
use crate::ports::{Job, JobResult, MailAttachment, Mailer, OutgoingMail};

use super::PdfExportService;

#[derive(Debug, Clone)]
pub struct NotificationConfig {
    pub recipient: String,
    pub attach_pdf: bool,
}

#[derive(Clone)]
pub struct NotificationService {
    posts: Collection<BlogPost>,
    mailer: Arc<dyn Mailer>,
    exports: PdfExportService,
    config: NotificationConfig,
}

impl NotificationService {
    pub fn new(
        posts: Collection<BlogPost>,
        mailer: Arc<dyn Mailer>,
        exports: PdfExportService,
        config: NotificationConfig,
    ) -> Self {
        Self {
            posts,
            mailer,
            exports,
            config,
        }
    }

    /// Process one outbox job. Jobs are single-attempt, so every failure is final.
    pub async fn handle(&self, job: Job) -> JobResult {
        let event = match DomainEvent::from_job(&job) {
            Ok(event) => event,
            Err(e) => return JobResult::Failed(format!("Unreadable event payload: {e}")),
        };

        match event {
            DomainEvent::BlogPostCreated { post_id } => match self.post_created(&post_id).await {
                Ok(()) => JobResult::Success,
                Err(reason) => {
                    tracing::warn!(post_id = %post_id, reason = %reason, "Post notification failed");
                    JobResult::Failed(reason)
                }
            },
        }
    }

    async fn post_created(&self, post_id: &str) -> Result<(), String> {
        let post = self
            .posts
            .all()
            .await
            .map_err(|e| e.to_string())?
            .into_iter()
            .find(|p| p.id == post_id)
            .ok_or_else(|| format!("Blog post {post_id} no longer exists"))?;

        let post_id = post.id.clone();
        let text = format!("Post created: {}", post.title);
        let html = format!(
            "<strong>Post created</strong><p>{}</p>",
            escape_html(&post.title)
        );

        let attachment = if self.config.attach_pdf {
            let bytes = self
                .exports
                .render(post)
                .await
                .map_err(|e| e.to_string())?;
            Some(MailAttachment {
                file_name: format!("blogPost{post_id}.pdf"),
                content_type: "application/pdf".into(),
                bytes,
            })
        } else {
            None
        };

        self.mailer
            .send(OutgoingMail {
                to: self.config.recipient.clone(),
                subject: "Post created!".into(),
                text,
                html: Some(html),
                attachment,
            })
            .await
            .map_err(|e| e.to_string())?;

        tracing::info!(post_id = %post_id, "Post notification sent");
        Ok(())
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
