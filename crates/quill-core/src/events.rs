//! Domain events recorded by writes and drained by background consumers.

use serde::{Deserialize, Serialize};

use crate::ports::Job;

pub const BLOG_POST_CREATED: &str = "blog_post.created";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DomainEvent {
    #[serde(rename_all = "camelCase")]
    BlogPostCreated { post_id: String },
}

impl DomainEvent {
    pub fn job_type(&self) -> &'static str {
        match self {
            DomainEvent::BlogPostCreated { .. } => BLOG_POST_CREATED,
        }
    }

    /// Wrap the event as a job for the outbox.
    pub fn into_job(self) -> Job {
        let job_type = self.job_type();
        // Serializing a plain enum of strings cannot fail.
        let payload = serde_json::to_value(&self).unwrap_or_default();
        Job::new(job_type, payload)
    }

    pub fn from_job(job: &Job) -> Result<Self, serde_json::Error> {
        serde_json::from_value(job.payload.clone())
    }
}
