//! Application configuration loaded from environment variables.

use std::path::PathBuf;
use std::str::FromStr;

use quill_infra::{InMemoryJobQueueConfig, JwtConfig};

/// STARTTLS submission port.
const DEFAULT_SMTP_PORT: u16 = 587;

/// Which document store backs the collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    File,
    Memory,
    Postgres,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            "postgres" => Ok(Self::Postgres),
            other => Err(format!("unknown storage backend {other}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

#[derive(Debug, Clone)]
pub struct CloudinarySettings {
    pub cloud_name: String,
    pub upload_preset: String,
    pub folder: String,
}

#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub from_address: String,
    pub user: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GoogleSettings {
    pub client_id: String,
    pub client_secret: String,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageBackend,
    pub data_dir: PathBuf,
    pub public_dir: PathBuf,
    pub public_base_url: String,
    pub database: Option<DatabaseSettings>,
    pub jwt: JwtConfig,
    pub cloudinary: Option<CloudinarySettings>,
    pub smtp: Option<SmtpSettings>,
    pub notify_email: String,
    pub notify_attach_pdf: bool,
    pub google: Option<GoogleSettings>,
    /// Public URL of this server, used for the OAuth redirect.
    pub be_url: String,
    /// Frontend URL the OAuth flow returns to.
    pub fe_url: String,
    pub docs_url: String,
    /// Empty means any origin.
    pub cors_origins: Vec<String>,
    pub job_queue: InMemoryJobQueueConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let flag = |key: &str, default: bool| {
            get(key)
                .map(|v| !matches!(v.to_ascii_lowercase().as_str(), "false" | "0" | "no"))
                .unwrap_or(default)
        };

        let port: u16 = parse(get("PORT")).unwrap_or(3001);
        let be_url = get("BE_URL").unwrap_or_else(|| format!("http://localhost:{port}"));

        let database = get("DATABASE_URL").map(|url| DatabaseSettings {
            url,
            max_connections: parse(get("DB_MAX_CONNECTIONS")).unwrap_or(10),
            min_connections: parse(get("DB_MIN_CONNECTIONS")).unwrap_or(1),
        });

        let storage = match get("STORAGE") {
            Some(value) => value.parse().unwrap_or_else(|e: String| {
                tracing::warn!(error = %e, "Falling back to file storage");
                StorageBackend::File
            }),
            None if database.is_some() => StorageBackend::Postgres,
            None => StorageBackend::File,
        };

        let jwt_defaults = JwtConfig::default();
        let jwt = JwtConfig {
            secret: get("JWT_SECRET").unwrap_or(jwt_defaults.secret),
            expiration_hours: parse(get("JWT_EXPIRATION_HOURS"))
                .unwrap_or(jwt_defaults.expiration_hours),
            issuer: get("JWT_ISSUER").unwrap_or(jwt_defaults.issuer),
        };

        let cloudinary = match (get("CLOUDINARY_CLOUD_NAME"), get("CLOUDINARY_UPLOAD_PRESET")) {
            (Some(cloud_name), Some(upload_preset)) => Some(CloudinarySettings {
                cloud_name,
                upload_preset,
                folder: get("CLOUDINARY_FOLDER").unwrap_or_else(|| "quill".to_string()),
            }),
            _ => None,
        };

        let smtp = get("SMTP_HOST").map(|host| SmtpSettings {
            host,
            port: parse(get("SMTP_PORT")).unwrap_or(DEFAULT_SMTP_PORT),
            from_address: get("SMTP_FROM").unwrap_or_else(|| "noreply@quill.local".to_string()),
            user: get("SMTP_USER"),
            password: get("SMTP_PASSWORD"),
        });

        let google = match (get("GOOGLE_CLIENT_ID"), get("GOOGLE_SECRET")) {
            (Some(client_id), Some(client_secret)) => Some(GoogleSettings {
                client_id,
                client_secret,
            }),
            _ => None,
        };

        let job_defaults = InMemoryJobQueueConfig::default();

        Self {
            host: get("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            storage,
            data_dir: get("DATA_DIR").map(PathBuf::from).unwrap_or_else(|| "data".into()),
            public_dir: get("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| "public".into()),
            public_base_url: get("PUBLIC_BASE_URL").unwrap_or_else(|| be_url.clone()),
            database,
            jwt,
            cloudinary,
            smtp,
            notify_email: get("NOTIFY_EMAIL").unwrap_or_else(|| "editor@quill.local".to_string()),
            notify_attach_pdf: flag("NOTIFY_ATTACH_PDF", true),
            google,
            be_url,
            fe_url: get("FE_URL").unwrap_or_else(|| "http://localhost:3000".to_string()),
            docs_url: get("DOCS_URL")
                .unwrap_or_else(|| "https://documenter.getpostman.com/view/23029748/2s83zpK1DS".to_string()),
            cors_origins: get("CORS_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(str::trim)
                        .filter(|o| !o.is_empty() && *o != "*")
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
            job_queue: InMemoryJobQueueConfig {
                max_size: parse(get("JOB_QUEUE_MAX_SIZE")).unwrap_or(job_defaults.max_size),
                workers: parse(get("JOB_QUEUE_WORKERS")).unwrap_or(job_defaults.workers),
            },
        }
    }

    pub fn google_redirect_uri(&self) -> String {
        format!("{}/authors/googleRedirect", self.be_url.trim_end_matches('/'))
    }
}

fn parse<T: FromStr>(value: Option<String>) -> Option<T> {
    value.and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_file_storage_without_integrations() {
        let config = config(&[]);

        assert_eq!(config.storage, StorageBackend::File);
        assert_eq!(config.port, 3001);
        assert_eq!(config.public_base_url, "http://localhost:3001");
        assert!(config.smtp.is_none());
        assert!(config.google.is_none());
        assert!(config.cloudinary.is_none());
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn database_url_implies_postgres_unless_overridden() {
        assert_eq!(
            config(&[("DATABASE_URL", "postgres://x")]).storage,
            StorageBackend::Postgres
        );
        assert_eq!(
            config(&[("DATABASE_URL", "postgres://x"), ("STORAGE", "memory")]).storage,
            StorageBackend::Memory
        );
    }

    #[test]
    fn reads_integrations() {
        let config = config(&[
            ("SMTP_HOST", "smtp.example.com"),
            ("GOOGLE_CLIENT_ID", "id"),
            ("GOOGLE_SECRET", "secret"),
            ("BE_URL", "https://api.example.com/"),
            ("CORS_ORIGINS", "https://a.example.com, https://b.example.com"),
            ("NOTIFY_ATTACH_PDF", "false"),
        ]);

        assert_eq!(config.smtp.as_ref().unwrap().port, DEFAULT_SMTP_PORT);
        assert_eq!(
            config.google_redirect_uri(),
            "https://api.example.com/authors/googleRedirect"
        );
        assert_eq!(config.cors_origins.len(), 2);
        assert!(!config.notify_attach_pdf);
    }
}
