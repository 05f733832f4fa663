//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`: document
//! stores, image hosts, mailers, renderers, authentication and the job queue.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - Flat files and in-memory backends only
//! - `postgres` - PostgreSQL document store via SeaORM
//! - `auth` - JWT + Argon2 authentication
//! - `smtp` - SMTP mail delivery via lettre
//! - `remote` - Cloudinary uploads and Google OAuth via reqwest

pub mod jobs;
pub mod mail;
pub mod media;
pub mod render;
pub mod storage;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - always available
pub use jobs::{InMemoryJobQueue, InMemoryJobQueueConfig};
pub use mail::LogMailer;
pub use media::LocalImageHost;
pub use render::{CsvPostExporter, PrintPdfRenderer};
pub use storage::{InMemoryStore, JsonFileStore};

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
#[cfg(all(feature = "auth", feature = "remote"))]
pub use auth::{GoogleConfig, GoogleIdentityProvider};

#[cfg(feature = "postgres")]
pub use storage::{DatabaseConfig, PostgresStore, connect};

#[cfg(feature = "smtp")]
pub use mail::{SmtpConfig, SmtpMailer};

#[cfg(feature = "remote")]
pub use media::{CloudinaryConfig, CloudinaryImageHost};
