//! JWT access tokens (HS256).

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use quill_core::domain::Role;
use quill_core::ports::{AuthError, TokenClaims, TokenService};

pub const DEFAULT_SECRET: &str = "change-me-in-production";

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            expiration_hours: 24,
            issuer: "quill-api".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String, // author id
    email: String,
    role: Role,
    exp: i64,
    iat: i64,
    iss: String,
}

pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: JwtConfig,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        if config.secret == DEFAULT_SECRET {
            tracing::warn!("Using default JWT secret. Set JWT_SECRET for production use.");
        }

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            config,
        }
    }
}

impl TokenService for JwtTokenService {
    fn generate_token(
        &self,
        author_id: &str,
        email: &str,
        role: Role,
    ) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = now + TimeDelta::hours(self.config.expiration_hours);

        let claims = Claims {
            sub: author_id.to_string(),
            email: email.to_string(),
            role,
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            }
        })?;

        Ok(TokenClaims {
            author_id: data.claims.sub,
            email: data.claims.email,
            role: data.claims.role,
            exp: data.claims.exp,
        })
    }

    fn expiration_seconds(&self) -> i64 {
        self.config.expiration_hours * 3600
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(issuer: &str) -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            secret: "test-secret-key".to_string(),
            expiration_hours: 1,
            issuer: issuer.to_string(),
        })
    }

    #[test]
    fn token_carries_author_and_role() {
        let service = service("quill-test");
        let token = service
            .generate_token("a1", "ada@example.com", Role::Admin)
            .unwrap();

        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.author_id, "a1");
        assert_eq!(claims.email, "ada@example.com");
        assert_eq!(claims.role, Role::Admin);
    }

    #[test]
    fn garbage_is_invalid() {
        let err = service("quill-test").validate_token("invalid-token").unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[test]
    fn other_issuer_is_rejected() {
        let token = service("issuer1")
            .generate_token("a1", "ada@example.com", Role::User)
            .unwrap();

        assert!(service("issuer2").validate_token(&token).is_err());
    }

    #[test]
    fn expired_token_is_reported_as_expired() {
        let service = JwtTokenService::new(JwtConfig {
            secret: "test-secret-key".to_string(),
            expiration_hours: -2,
            issuer: "quill-test".to_string(),
        });
        let token = service
            .generate_token("a1", "ada@example.com", Role::User)
            .unwrap();

        assert!(matches!(
            service.validate_token(&token),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn expiration_in_seconds() {
        let service = JwtTokenService::new(JwtConfig {
            expiration_hours: 24,
            ..Default::default()
        });
        assert_eq!(service.expiration_seconds(), 86400);
    }
}
