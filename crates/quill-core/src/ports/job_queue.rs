//! Job queue port - the outbox domain events are drained from.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

/// A job that can be queued and processed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier.
    pub id: String,
    /// Job type/name for routing to handlers.
    pub job_type: String,
    /// Serialized payload.
    pub payload: serde_json::Value,
    /// When the job was created.
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Job {
    pub fn new(job_type: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            job_type: job_type.into(),
            payload,
            created_at: chrono::Utc::now(),
        }
    }
}

/// Result of job processing. Each job runs exactly once.
#[derive(Debug, PartialEq, Eq)]
pub enum JobResult {
    Success,
    Failed(String),
}

/// Job handler function type.
pub type JobHandler =
    Box<dyn Fn(Job) -> Pin<Box<dyn Future<Output = JobResult> + Send>> + Send + Sync>;

/// Box an async function as a [`JobHandler`].
pub fn job_handler<F, Fut>(f: F) -> JobHandler
where
    F: Fn(Job) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = JobResult> + Send + 'static,
{
    Box::new(move |job| -> Pin<Box<dyn Future<Output = JobResult> + Send>> { Box::pin(f(job)) })
}

/// Job queue trait - abstraction over job queue backends.
#[async_trait]
pub trait JobQueue: Send + Sync {
    /// Enqueue a job for processing.
    async fn enqueue(&self, job: Job) -> Result<(), JobQueueError>;

    /// Start processing jobs with the given handler.
    async fn start_worker(&self, handler: JobHandler) -> Result<(), JobQueueError>;

    /// Get queue statistics.
    async fn stats(&self) -> Result<QueueStats, JobQueueError>;
}

/// Queue statistics.
#[derive(Debug, Clone, Default)]
pub struct QueueStats {
    pub pending: usize,
    pub processing: usize,
    pub completed: usize,
    pub failed: usize,
}

/// Job queue errors.
#[derive(Debug, thiserror::Error)]
pub enum JobQueueError {
    #[error("Failed to enqueue job: {0}")]
    EnqueueError(String),

    #[error("Queue is full")]
    QueueFull,

    #[error("Worker already started")]
    WorkerStarted,
}
