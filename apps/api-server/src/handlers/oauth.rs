//! Google sign-in (authorization-code flow).

use std::sync::Arc;

use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::header::LOCATION;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use quill_core::ports::IdentityProvider;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

pub const STATE_COOKIE: &str = "quill_oauth_state";

#[derive(Debug, Deserialize)]
pub struct RedirectQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

fn provider(state: &AppState) -> AppResult<Arc<dyn IdentityProvider>> {
    state
        .identity
        .clone()
        .ok_or_else(|| AppError::NotFound("Google sign-in is not configured".to_string()))
}

fn state_cookie(value: String) -> Cookie<'static> {
    Cookie::build(STATE_COOKIE, value)
        .path("/authors")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::minutes(10))
        .finish()
}

/// GET /authors/googleLogin
pub async fn google_login(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let provider = provider(&state)?;
    let csrf = Uuid::new_v4().simple().to_string();

    Ok(HttpResponse::Found()
        .insert_header((LOCATION, provider.authorization_url(&csrf)))
        .cookie(state_cookie(csrf))
        .finish())
}

/// GET /authors/googleRedirect?code&state
pub async fn google_redirect(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<RedirectQuery>,
) -> AppResult<HttpResponse> {
    let provider = provider(&state)?;
    let query = query.into_inner();

    if let Some(error) = query.error {
        return Err(AppError::Unauthorized(format!("Google sign-in failed: {error}")));
    }

    let expected = req.cookie(STATE_COOKIE).map(|c| c.value().to_string());
    match (expected, query.state) {
        (Some(expected), Some(actual)) if expected == actual => {}
        _ => {
            tracing::warn!("OAuth state mismatch");
            return Err(AppError::Unauthorized("OAuth state mismatch".to_string()));
        }
    }

    let code = query
        .code
        .ok_or_else(|| AppError::BadRequest("Missing authorization code".to_string()))?;
    let identity = provider.exchange_code(&code).await.map_err(|e| {
        tracing::warn!(error = %e, "Google code exchange failed");
        AppError::Unauthorized(e.to_string())
    })?;

    let author = state.authors.find_or_create_external(identity).await?;
    let token = state
        .tokens
        .generate_token(&author.id, &author.email, author.role)?;
    tracing::info!(author_id = %author.id, "Author signed in with Google");

    let mut removal = state_cookie(String::new());
    removal.make_removal();

    Ok(HttpResponse::Found()
        .insert_header((
            LOCATION,
            format!("{}?accessToken={token}", state.links.fe_url),
        ))
        .cookie(removal)
        .finish())
}
