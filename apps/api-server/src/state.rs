//! Application state - shared across all handlers.

use std::sync::Arc;

use anyhow::Context;

use quill_core::Collection;
use quill_core::domain::{Author, BlogPost};
use quill_core::ports::{
    CollectionName, CsvExporter, DocumentStore, IdentityProvider, ImageHost, JobQueue, Mailer,
    PasswordService, PdfRenderer, TokenService,
};
use quill_core::service::{
    AuthorService, BlogPostService, NotificationConfig, NotificationService, PdfExportService,
};
use quill_infra::{
    Argon2PasswordService, CsvPostExporter, InMemoryJobQueue, InMemoryStore, JsonFileStore,
    JwtConfig, JwtTokenService, LocalImageHost, LogMailer, PrintPdfRenderer,
};

use crate::config::{AppConfig, StorageBackend};

/// Where the browser is sent for redirects.
#[derive(Debug, Clone)]
pub struct Links {
    pub fe_url: String,
    pub docs_url: String,
}

/// Adapters chosen from configuration, before the services are wired up.
pub struct Adapters {
    pub tokens: Arc<dyn TokenService>,
    pub passwords: Arc<dyn PasswordService>,
    pub images: Arc<dyn ImageHost>,
    pub mailer: Arc<dyn Mailer>,
    pub identity: Option<Arc<dyn IdentityProvider>>,
    pub jobs: Arc<dyn JobQueue>,
    pub notify: NotificationConfig,
    pub links: Links,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub authors: AuthorService,
    pub posts: BlogPostService,
    pub notifications: NotificationService,
    pub tokens: Arc<dyn TokenService>,
    pub passwords: Arc<dyn PasswordService>,
    pub images: Arc<dyn ImageHost>,
    pub exports: PdfExportService,
    pub csv: Arc<dyn CsvExporter>,
    /// `None` when Google sign-in is not configured.
    pub identity: Option<Arc<dyn IdentityProvider>>,
    pub jobs: Arc<dyn JobQueue>,
    pub links: Links,
}

impl AppState {
    /// Build the application state from configuration.
    pub async fn build(config: &AppConfig) -> anyhow::Result<Self> {
        let store = open_store(config).await?;

        if config.jwt.secret == JwtConfig::default().secret {
            tracing::warn!("JWT_SECRET not set, using the development secret");
        }

        let adapters = Adapters {
            tokens: Arc::new(JwtTokenService::new(config.jwt.clone())),
            passwords: Arc::new(Argon2PasswordService::new()),
            images: image_host(config),
            mailer: mailer(config)?,
            identity: identity_provider(config)?,
            jobs: Arc::new(InMemoryJobQueue::new(config.job_queue.clone())),
            notify: NotificationConfig {
                recipient: config.notify_email.clone(),
                attach_pdf: config.notify_attach_pdf,
            },
            links: Links {
                fe_url: config.fe_url.clone(),
                docs_url: config.docs_url.clone(),
            },
        };

        tracing::info!(storage = ?config.storage, "Application state initialized");
        Ok(Self::assemble(store, adapters))
    }

    /// Wire services over one store. Every service gets clones of the same two
    /// collections so all writers share one lock per collection.
    pub fn assemble(store: Arc<dyn DocumentStore>, adapters: Adapters) -> Self {
        let authors: Collection<Author> = Collection::new(CollectionName::Authors, store.clone());
        let posts: Collection<BlogPost> = Collection::new(CollectionName::BlogPosts, store);
        let pdf: Arc<dyn PdfRenderer> = Arc::new(PrintPdfRenderer);
        let exports = PdfExportService::new(authors.clone(), adapters.images.clone(), pdf);

        Self {
            authors: AuthorService::new(authors, posts.clone()),
            posts: BlogPostService::new(posts.clone(), adapters.jobs.clone()),
            notifications: NotificationService::new(
                posts,
                adapters.mailer,
                exports.clone(),
                adapters.notify,
            ),
            tokens: adapters.tokens,
            passwords: adapters.passwords,
            images: adapters.images,
            exports,
            csv: Arc::new(CsvPostExporter),
            identity: adapters.identity,
            jobs: adapters.jobs,
            links: adapters.links,
        }
    }

    /// In-memory state for handler tests; uploads land under `public_dir`.
    #[cfg(test)]
    pub fn in_memory(public_dir: &std::path::Path) -> Self {
        Self::assemble(
            Arc::new(InMemoryStore::new()),
            Adapters {
                tokens: Arc::new(JwtTokenService::new(JwtConfig::default())),
                passwords: Arc::new(Argon2PasswordService::new()),
                images: Arc::new(LocalImageHost::new(public_dir, "http://localhost:3001")),
                mailer: Arc::new(LogMailer),
                identity: None,
                jobs: Arc::new(InMemoryJobQueue::default()),
                notify: NotificationConfig {
                    recipient: "editor@quill.local".into(),
                    attach_pdf: false,
                },
                links: Links {
                    fe_url: "http://localhost:3000".into(),
                    docs_url: "https://docs.example.com".into(),
                },
            },
        )
    }
}

async fn open_store(config: &AppConfig) -> anyhow::Result<Arc<dyn DocumentStore>> {
    match config.storage {
        StorageBackend::File => {
            let store = JsonFileStore::open(&config.data_dir)
                .await
                .with_context(|| format!("opening data directory {}", config.data_dir.display()))?;
            tracing::info!(dir = %config.data_dir.display(), "Using JSON file storage");
            Ok(Arc::new(store))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, data is lost on restart");
            Ok(Arc::new(InMemoryStore::new()))
        }
        StorageBackend::Postgres => open_postgres(config).await,
    }
}

#[cfg(feature = "postgres")]
async fn open_postgres(config: &AppConfig) -> anyhow::Result<Arc<dyn DocumentStore>> {
    use quill_infra::{DatabaseConfig, PostgresStore, connect};

    let settings = config
        .database
        .as_ref()
        .context("STORAGE=postgres requires DATABASE_URL")?;
    let db = connect(&DatabaseConfig {
        url: settings.url.clone(),
        max_connections: settings.max_connections,
        min_connections: settings.min_connections,
    })
    .await
    .context("connecting to PostgreSQL")?;

    let store = PostgresStore::new(db);
    store.ensure_collections().await?;
    Ok(Arc::new(store))
}

#[cfg(not(feature = "postgres"))]
async fn open_postgres(_config: &AppConfig) -> anyhow::Result<Arc<dyn DocumentStore>> {
    anyhow::bail!("STORAGE=postgres needs the `postgres` feature")
}

fn image_host(config: &AppConfig) -> Arc<dyn ImageHost> {
    #[cfg(feature = "remote")]
    if let Some(cloudinary) = &config.cloudinary {
        tracing::info!(cloud = %cloudinary.cloud_name, "Uploading images to Cloudinary");
        return Arc::new(quill_infra::CloudinaryImageHost::new(
            quill_infra::CloudinaryConfig {
                cloud_name: cloudinary.cloud_name.clone(),
                upload_preset: cloudinary.upload_preset.clone(),
                folder: cloudinary.folder.clone(),
            },
        ));
    }

    Arc::new(LocalImageHost::new(
        &config.public_dir,
        config.public_base_url.clone(),
    ))
}

fn mailer(config: &AppConfig) -> anyhow::Result<Arc<dyn Mailer>> {
    #[cfg(feature = "smtp")]
    if let Some(smtp) = &config.smtp {
        let mailer = quill_infra::SmtpMailer::new(quill_infra::SmtpConfig {
            host: smtp.host.clone(),
            port: smtp.port,
            from_address: smtp.from_address.clone(),
            user: smtp.user.clone(),
            password: smtp.password.clone(),
        })?;
        return Ok(Arc::new(mailer));
    }

    if config.smtp.is_some() {
        tracing::warn!("SMTP_HOST is set but the `smtp` feature is off, logging mail instead");
    }
    Ok(Arc::new(LogMailer))
}

fn identity_provider(config: &AppConfig) -> anyhow::Result<Option<Arc<dyn IdentityProvider>>> {
    let Some(google) = &config.google else {
        return Ok(None);
    };

    #[cfg(feature = "remote")]
    {
        let provider = quill_infra::GoogleIdentityProvider::new(quill_infra::GoogleConfig {
            client_id: google.client_id.clone(),
            client_secret: google.client_secret.clone(),
            redirect_uri: config.google_redirect_uri(),
        })?;
        Ok(Some(Arc::new(provider)))
    }

    #[cfg(not(feature = "remote"))]
    {
        tracing::warn!(
            client_id = %google.client_id,
            "Google sign-in is configured but the `remote` feature is off"
        );
        Ok(None)
    }
}
