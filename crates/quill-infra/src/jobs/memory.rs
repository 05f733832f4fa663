//! In-process job queue: a bounded channel drained by worker tasks.
//!
//! Jobs live only in memory and are lost on restart. Each job is handled once;
//! a failure is counted and logged, never re-enqueued.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc};

use quill_core::ports::{Job, JobHandler, JobQueue, JobQueueError, JobResult, QueueStats};

#[derive(Debug, Clone)]
pub struct InMemoryJobQueueConfig {
    /// Maximum pending jobs (0 = bounded only by the channel).
    pub max_size: usize,
    /// Number of worker tasks.
    pub workers: usize,
}

impl Default for InMemoryJobQueueConfig {
    fn default() -> Self {
        Self {
            max_size: 1000,
            workers: 2,
        }
    }
}

pub struct InMemoryJobQueue {
    stats: Arc<JobStats>,
    config: InMemoryJobQueueConfig,
    sender: mpsc::Sender<Job>,
    receiver: Arc<Mutex<mpsc::Receiver<Job>>>,
    started: AtomicBool,
}

#[derive(Default)]
struct JobStats {
    pending: AtomicUsize,
    processing: AtomicUsize,
    completed: AtomicUsize,
    failed: AtomicUsize,
}

impl InMemoryJobQueue {
    pub fn new(config: InMemoryJobQueueConfig) -> Self {
        let (tx, rx) = mpsc::channel(config.max_size.max(100));

        Self {
            stats: Arc::new(JobStats::default()),
            config,
            sender: tx,
            receiver: Arc::new(Mutex::new(rx)),
            started: AtomicBool::new(false),
        }
    }
}

impl Default for InMemoryJobQueue {
    fn default() -> Self {
        Self::new(InMemoryJobQueueConfig::default())
    }
}

#[async_trait]
impl JobQueue for InMemoryJobQueue {
    async fn enqueue(&self, job: Job) -> Result<(), JobQueueError> {
        if self.config.max_size > 0
            && self.stats.pending.load(Ordering::Relaxed) >= self.config.max_size
        {
            return Err(JobQueueError::QueueFull);
        }

        let pending = self.stats.pending.fetch_add(1, Ordering::Relaxed) + 1;
        if let Err(e) = self.sender.try_send(job) {
            self.stats.pending.fetch_sub(1, Ordering::Relaxed);
            return Err(match e {
                mpsc::error::TrySendError::Full(_) => JobQueueError::QueueFull,
                mpsc::error::TrySendError::Closed(_) => {
                    JobQueueError::EnqueueError("queue closed".into())
                }
            });
        }

        tracing::debug!(pending, "Job enqueued");
        Ok(())
    }

    async fn start_worker(&self, handler: JobHandler) -> Result<(), JobQueueError> {
        if self.started.swap(true, Ordering::SeqCst) {
            return Err(JobQueueError::WorkerStarted);
        }

        let handler = Arc::new(handler);

        for worker_id in 0..self.config.workers.max(1) {
            let handler = handler.clone();
            let receiver = self.receiver.clone();
            let stats = self.stats.clone();

            tokio::spawn(async move {
                tracing::info!(worker = worker_id, "Job worker started");

                loop {
                    let job = {
                        let mut rx = receiver.lock().await;
                        rx.recv().await
                    };
                    let Some(job) = job else {
                        tracing::info!(worker = worker_id, "Job worker shutting down");
                        break;
                    };

                    stats.pending.fetch_sub(1, Ordering::Relaxed);
                    stats.processing.fetch_add(1, Ordering::Relaxed);
                    tracing::debug!(
                        worker = worker_id,
                        job_id = %job.id,
                        job_type = %job.job_type,
                        "Processing job"
                    );

                    let job_id = job.id.clone();
                    let result = handler(job).await;
                    stats.processing.fetch_sub(1, Ordering::Relaxed);

                    match result {
                        JobResult::Success => {
                            stats.completed.fetch_add(1, Ordering::Relaxed);
                            tracing::debug!(job_id = %job_id, "Job completed");
                        }
                        JobResult::Failed(reason) => {
                            stats.failed.fetch_add(1, Ordering::Relaxed);
                            tracing::error!(job_id = %job_id, reason = %reason, "Job failed");
                        }
                    }
                }
            });
        }

        Ok(())
    }

    async fn stats(&self) -> Result<QueueStats, JobQueueError> {
        Ok(QueueStats {
            pending: self.stats.pending.load(Ordering::Relaxed),
            processing: self.stats.processing.load(Ordering::Relaxed),
            completed: self.stats.completed.load(Ordering::Relaxed),
            failed: self.stats.failed.load(Ordering::Relaxed),
        })
    }
}
