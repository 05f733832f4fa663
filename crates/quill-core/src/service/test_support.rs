//! Fakes shared by the service tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{Author, BlogPost};
use crate::error::StoreError;
use crate::ports::{
    CollectionName, DocumentStore, ImageCategory, ImageHost, Job, JobHandler, JobQueue,
    JobQueueError, MailError, Mailer, MediaError, OutgoingMail, PdfRenderer, QueueStats,
    RenderError, Snapshot,
};

/// Document store keeping every collection in a map. All collections start empty.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<CollectionName, (Vec<Value>, u64)>>,
    saves: AtomicUsize,
}

impl MemoryStore {
    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn load(&self, collection: CollectionName) -> Result<Snapshot, StoreError> {
        let collections = self.collections.lock().unwrap();
        let (records, version) = collections.get(&collection).cloned().unwrap_or_default();
        Ok(Snapshot { records, version })
    }

    async fn save(
        &self,
        collection: CollectionName,
        records: Vec<Value>,
        expected_version: u64,
    ) -> Result<u64, StoreError> {
        let mut collections = self.collections.lock().unwrap();
        let entry = collections.entry(collection).or_default();
        if entry.1 != expected_version {
            return Err(StoreError::VersionConflict(collection.to_string()));
        }
        *entry = (records, expected_version + 1);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(entry.1)
    }
}

/// Job queue that only records what was enqueued.
#[derive(Default)]
pub struct RecordingQueue {
    pub jobs: Mutex<Vec<Job>>,
    pub fail: bool,
}

#[async_trait]
impl JobQueue for RecordingQueue {
    async fn enqueue(&self, job: Job) -> Result<(), JobQueueError> {
        if self.fail {
            return Err(JobQueueError::QueueFull);
        }
        self.jobs.lock().unwrap().push(job);
        Ok(())
    }

    async fn start_worker(&self, _handler: JobHandler) -> Result<(), JobQueueError> {
        Ok(())
    }

    async fn stats(&self) -> Result<QueueStats, JobQueueError> {
        Ok(QueueStats {
            pending: self.jobs.lock().unwrap().len(),
            ..Default::default()
        })
    }
}

#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<OutgoingMail>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(mail);
        Ok(())
    }
}

/// Image host serving a fixed set of URLs. The URL `fail` errors.
#[derive(Default)]
pub struct StubImages {
    images: HashMap<String, Vec<u8>>,
}

impl StubImages {
    pub fn with(url: &str, bytes: Vec<u8>) -> Self {
        Self {
            images: HashMap::from([(url.to_string(), bytes)]),
        }
    }
}

#[async_trait]
impl ImageHost for StubImages {
    async fn upload(
        &self,
        category: ImageCategory,
        file_name: &str,
        _bytes: Vec<u8>,
    ) -> Result<String, MediaError> {
        Ok(format!("http://x/img/{}/{file_name}", category.as_str()))
    }

    async fn fetch(&self, url: &str) -> Result<Option<Vec<u8>>, MediaError> {
        if url == "fail" {
            return Err(MediaError::Upstream("unreachable".into()));
        }
        Ok(self.images.get(url).cloned())
    }
}

/// Renders `title|byline|cover:<len>` so tests can see what reached the renderer.
pub struct StubPdf;

impl PdfRenderer for StubPdf {
    fn render_post(
        &self,
        post: &BlogPost,
        author: Option<&Author>,
        cover: Option<&[u8]>,
    ) -> Result<Vec<u8>, RenderError> {
        let byline = author.map(Author::full_name).unwrap_or_default();
        let cover = cover.map_or("none".to_string(), |c| c.len().to_string());
        Ok(format!("{}|{byline}|cover:{cover}", post.title).into_bytes())
    }
}
