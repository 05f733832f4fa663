//! API documentation redirect.

use actix_web::http::header::LOCATION;
use actix_web::{HttpResponse, web};

use crate::state::AppState;

/// GET /info/docs
pub async fn docs(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, state.links.docs_url.as_str()))
        .finish()
}
