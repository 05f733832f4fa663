//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod job_queue;
mod mail;
mod media;
mod render;
mod store;

pub use auth::{
    AuthError, ExternalIdentity, IdentityProvider, PasswordService, TokenClaims, TokenService,
};
pub use job_queue::{
    Job, JobHandler, JobQueue, JobQueueError, JobResult, QueueStats, job_handler,
};
pub use mail::{MailAttachment, MailError, Mailer, OutgoingMail};
pub use media::{ImageHost, MediaError};
pub use render::{CsvExporter, PdfRenderer, RenderError};
pub use store::{CollectionName, DocumentStore, ImageCategory, Snapshot};
