//! Google OAuth 2.0 authorization-code flow.

use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;

use quill_core::ports::{AuthError, ExternalIdentity, IdentityProvider};

const AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
    /// Must match the redirect URI registered with Google.
    pub redirect_uri: String,
}

pub struct GoogleIdentityProvider {
    client: reqwest::Client,
    authorize_url: Url,
    config: GoogleConfig,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct UserInfo {
    sub: String,
    email: Option<String>,
    #[serde(default)]
    email_verified: bool,
    given_name: Option<String>,
    family_name: Option<String>,
}

impl GoogleIdentityProvider {
    pub fn new(config: GoogleConfig) -> Result<Self, AuthError> {
        let authorize_url =
            Url::parse(AUTHORIZE_URL).map_err(|e| AuthError::Provider(e.to_string()))?;
        Ok(Self {
            client: reqwest::Client::new(),
            authorize_url,
            config,
        })
    }
}

impl UserInfo {
    fn into_identity(self) -> Result<ExternalIdentity, AuthError> {
        let email = match self.email {
            Some(email) if self.email_verified => email,
            _ => {
                return Err(AuthError::Provider(
                    "Google account has no verified email".into(),
                ));
            }
        };

        Ok(ExternalIdentity {
            subject: self.sub,
            given_name: self.given_name.unwrap_or_else(|| email.clone()),
            family_name: self.family_name.unwrap_or_default(),
            email,
        })
    }
}

#[async_trait]
impl IdentityProvider for GoogleIdentityProvider {
    fn authorization_url(&self, state: &str) -> String {
        let mut url = self.authorize_url.clone();
        url.query_pairs_mut()
            .append_pair("client_id", &self.config.client_id)
            .append_pair("redirect_uri", &self.config.redirect_uri)
            .append_pair("response_type", "code")
            .append_pair("scope", "openid email profile")
            .append_pair("state", state);
        url.into()
    }

    async fn exchange_code(&self, code: &str) -> Result<ExternalIdentity, AuthError> {
        let response = self
            .client
            .post(TOKEN_URL)
            .form(&[
                ("code", code),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("redirect_uri", self.config.redirect_uri.as_str()),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::Provider(format!(
                "Token exchange failed with {}",
                response.status()
            )));
        }
        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;

        let info: UserInfo = self
            .client
            .get(USERINFO_URL)
            .bearer_auth(&token.access_token)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| AuthError::Provider(e.to_string()))?
            .json()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;

        info.into_identity()
    }
}
