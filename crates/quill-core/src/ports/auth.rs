//! Authentication ports.

use async_trait::async_trait;

use crate::domain::Role;

/// Claims stored in access tokens.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub author_id: String,
    pub email: String,
    pub role: Role,
    pub exp: i64,
}

/// Token service trait for JWT operations.
pub trait TokenService: Send + Sync {
    /// Generate an access token for an author.
    fn generate_token(&self, author_id: &str, email: &str, role: Role)
    -> Result<String, AuthError>;

    /// Validate and decode a token.
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError>;

    /// Lifetime of issued tokens.
    fn expiration_seconds(&self) -> i64;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Verified identity returned by an OAuth provider.
#[derive(Debug, Clone)]
pub struct ExternalIdentity {
    pub subject: String,
    pub email: String,
    pub given_name: String,
    pub family_name: String,
}

/// OAuth authorization-code provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// URL the browser is sent to; `state` comes back on the redirect.
    fn authorization_url(&self, state: &str) -> String;

    /// Trade the redirect's code for the user's verified identity.
    async fn exchange_code(&self, code: &str) -> Result<ExternalIdentity, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization header")]
    MissingAuth,

    #[error("Hashing error: {0}")]
    HashingError(String),

    #[error("Identity provider error: {0}")]
    Provider(String),
}
