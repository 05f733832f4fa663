use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE, LOCATION, SET_COOKIE};
use actix_web::{App, test, web};
use async_trait::async_trait;
use serde_json::{Value, json};

use quill_core::domain::Role;
use quill_core::ports::{AuthError, ExternalIdentity, IdentityProvider};

use super::configure_routes;
use crate::middleware::error::json_error_handler;
use crate::state::AppState;

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .configure(configure_routes),
        )
        .await
    };
}

fn state() -> (AppState, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    (AppState::in_memory(dir.path()), dir)
}

fn bearer(state: &AppState) -> (actix_web::http::header::HeaderName, String) {
    let token = state
        .tokens
        .generate_token("editor", "editor@example.com", Role::User)
        .unwrap();
    (actix_web::http::header::AUTHORIZATION, format!("Bearer {token}"))
}

fn post_body(title: &str, category: &str) -> Value {
    json!({
        "category": category,
        "title": title,
        "readTime": 5,
        "author": { "name": "Ada Lovelace", "avatar": "https://ui-avatars.com/api/?name=Ada+Lovelace" },
        "content": "<p>Notes on the <b>Analytical Engine</b></p>"
    })
}

fn author_body(email: &str) -> Value {
    json!({ "name": "Ada", "surname": "Lovelace", "email": email })
}

fn multipart(field: &str, file_name: &str, content_type: &str, bytes: &[u8]) -> (String, Vec<u8>) {
    let boundary = "quill-test-boundary";
    let mut body = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={boundary}"), body)
}

#[actix_web::test]
async fn blog_post_lifecycle() {
    let (state, _dir) = state();
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/blogPosts")
        .set_json(post_body("Engines", "history"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(res).await;
    let id = created["_id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/blogPosts/{id}"))
        .to_request();
    let post: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(post["title"], "Engines");
    assert_eq!(post["readTime"], 5);
    assert!(post["createdAt"].is_string());

    let req = test::TestRequest::delete()
        .uri(&format!("/blogPosts/{id}"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/blogPosts/{id}"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn later_update_wins_and_keeps_earlier_fields() {
    let (state, _dir) = state();
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/blogPosts")
        .set_json(post_body("Draft", "history"))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let uri = format!("/blogPosts/{}", created["_id"].as_str().unwrap());

    let first = test::TestRequest::put()
        .uri(&uri)
        .set_json(json!({ "title": "Final" }))
        .to_request();
    let first: Value = test::call_and_read_body_json(&app, first).await;
    let second = test::TestRequest::put()
        .uri(&uri)
        .set_json(json!({ "category": "science" }))
        .to_request();
    let second: Value = test::call_and_read_body_json(&app, second).await;

    assert_eq!(second["title"], "Final");
    assert_eq!(second["category"], "science");
    let updated_at = |post: &Value| {
        chrono::DateTime::parse_from_rfc3339(post["updatedAt"].as_str().unwrap()).unwrap()
    };
    assert!(updated_at(&second) >= updated_at(&first));
}

#[actix_web::test]
async fn lists_filter_by_category_and_author() {
    let (state, _dir) = state();
    let app = app!(state);

    for (title, category) in [("One", "history"), ("Two", "science"), ("Three", "history")] {
        let req = test::TestRequest::post()
            .uri("/blogPosts")
            .set_json(post_body(title, category))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get()
        .uri("/blogPosts?category=history")
        .to_request();
    let posts: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(posts.len(), 2);

    let req = test::TestRequest::get()
        .uri("/blogPosts/search/science")
        .to_request();
    let posts: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["title"], "Two");

    let req = test::TestRequest::get()
        .uri("/blogPosts?author=Nobody")
        .to_request();
    let posts: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert!(posts.is_empty());
}

#[actix_web::test]
async fn invalid_post_lists_every_rejected_field() {
    let (state, _dir) = state();
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/blogPosts")
        .set_json(json!({ "title": "Only a title", "readTime": "five" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(res).await;
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["field"].as_str())
        .collect();
    assert!(fields.contains(&"category"));
    assert!(fields.contains(&"readTime"));
    assert!(fields.contains(&"author.name"));
    assert!(!fields.contains(&"title"));
}

#[actix_web::test]
async fn malformed_json_is_a_validation_error() {
    let (state, _dir) = state();
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/blogPosts")
        .insert_header((CONTENT_TYPE, "application/json"))
        .set_payload("{ not json")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["title"], "Validation Failed");
}

#[actix_web::test]
async fn comments_are_nested_under_posts() {
    let (state, _dir) = state();
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/blogPosts")
        .set_json(post_body("Engines", "history"))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let post_id = created["_id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/blogPosts/{post_id}/comments"))
        .set_json(json!({ "author": "Charles", "text": "Splendid" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let comment: Value = test::read_body_json(res).await;
    let comment_uri = format!(
        "/blogPosts/{post_id}/comments/{}",
        comment["_id"].as_str().unwrap()
    );

    let req = test::TestRequest::put()
        .uri(&comment_uri)
        .set_json(json!({ "text": "Truly splendid" }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["text"], "Truly splendid");
    assert_eq!(updated["author"], "Charles");

    let req = test::TestRequest::get()
        .uri(&format!("/blogPosts/{post_id}/comments"))
        .to_request();
    let comments: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(comments.len(), 1);

    let req = test::TestRequest::delete().uri(&comment_uri).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get().uri(&comment_uri).to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert!(body["detail"].as_str().unwrap().starts_with("Comment with id"));
}

#[actix_web::test]
async fn missing_post_reads_differently_from_missing_comment() {
    let (state, _dir) = state();
    let app = app!(state);

    let req = test::TestRequest::get()
        .uri("/blogPosts/nope/comments/c1")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["detail"], "Blog post with id nope not found");
}

#[actix_web::test]
async fn check_email_rejects_taken_address() {
    let (state, _dir) = state();
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/authors/checkEmail")
        .set_json(author_body("ada@example.com"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/authors/checkEmail")
        .set_json(author_body("ada@example.com"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/authors").to_request();
    let authors: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(authors.len(), 1);
    assert_eq!(
        authors[0]["avatar"],
        "https://ui-avatars.com/api/?name=Ada+Lovelace"
    );
}

#[actix_web::test]
async fn author_writes_require_a_token() {
    let (state, _dir) = state();
    let auth = bearer(&state);
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/authors")
        .set_json(author_body("ada@example.com"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/authors")
        .insert_header(auth.clone())
        .set_json(author_body("ada@example.com"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(res).await;
    let uri = format!("/authors/{}", created["_id"].as_str().unwrap());

    let req = test::TestRequest::delete().uri(&uri).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::put()
        .uri(&uri)
        .insert_header(auth.clone())
        .set_json(json!({ "surname": "King" }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["avatar"], "https://ui-avatars.com/api/?name=Ada+King");

    for _ in 0..2 {
        let req = test::TestRequest::delete()
            .uri("/authors/missing")
            .insert_header(auth.clone())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }
}

#[actix_web::test]
async fn register_login_and_read_own_profile() {
    let (state, _dir) = state();
    let app = app!(state);

    let mut body = author_body("ada@example.com");
    body["password"] = json!("difference-engine");
    let req = test::TestRequest::post()
        .uri("/authors/register")
        .set_json(body)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/authors/login")
        .set_json(json!({ "email": "ada@example.com", "password": "wrong-password" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/authors/login")
        .set_json(json!({ "email": "ada@example.com", "password": "difference-engine" }))
        .to_request();
    let login: Value = test::call_and_read_body_json(&app, req).await;
    let token = login["accessToken"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/blogPosts")
        .set_json(post_body("Mine", "history"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/authors/me")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let me: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(me["email"], "ada@example.com");
    assert!(me.get("passwordHash").is_none());

    let req = test::TestRequest::get()
        .uri("/authors/me/stories")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let stories: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stories.len(), 1);
    assert_eq!(stories[0]["title"], "Mine");
}

#[actix_web::test]
async fn short_password_is_rejected() {
    let (state, _dir) = state();
    let app = app!(state);

    let mut body = author_body("ada@example.com");
    body["password"] = json!("short");
    let req = test::TestRequest::post()
        .uri("/authors/register")
        .set_json(body)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["errors"][0]["field"], "password");
}

#[actix_web::test]
async fn me_is_not_mistaken_for_an_author_id() {
    let (state, _dir) = state();
    let app = app!(state);

    let req = test::TestRequest::get().uri("/authors/me").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn csv_export_is_an_attachment() {
    let (state, _dir) = state();
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/blogPosts")
        .set_json(post_body("Engines", "history"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/blogPosts/csv").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers().get(CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=blogPosts.csv"
    );

    let body = test::read_body(res).await;
    let text = String::from_utf8(body.to_vec()).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("id,category,title,readTime,author,cover,comments,createdAt,updatedAt")
    );
    assert_eq!(lines.count(), 1);
}

#[actix_web::test]
async fn pdf_export_names_the_post() {
    let (state, _dir) = state();
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/blogPosts")
        .set_json(post_body("Engines", "history"))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["_id"].as_str().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/blogPosts/{id}/pdf"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers().get(CONTENT_TYPE).unwrap(), "application/pdf");
    assert_eq!(
        res.headers().get(CONTENT_DISPOSITION).unwrap().to_str().unwrap(),
        format!("attachment; filename=blogPost{id}.pdf")
    );
    assert!(test::read_body(res).await.starts_with(b"%PDF"));

    let req = test::TestRequest::get()
        .uri("/blogPosts/missing/pdf")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

/// A 1x1 RGBA PNG.
const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f,
    0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x44, 0x41, 0x54, 0x78, 0xda, 0x63, 0x64,
    0x60, 0xf8, 0x5f, 0x0f, 0x00, 0x02, 0x87, 0x01, 0x80, 0xeb, 0x47, 0xba, 0x92, 0x00, 0x00,
    0x00, 0x00, 0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

#[actix_web::test]
async fn pdf_export_embeds_uploaded_cover() {
    let (state, _dir) = state();
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/blogPosts")
        .set_json(post_body("Engines", "history"))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["_id"].as_str().unwrap();

    let (content_type, body) = multipart("cover", "cover.png", "image/png", TINY_PNG);
    let req = test::TestRequest::post()
        .uri(&format!("/blogPosts/{id}/uploadCover"))
        .insert_header((CONTENT_TYPE, content_type))
        .set_payload(body)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/blogPosts/{id}/pdf"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let pdf = test::read_body(res).await;
    assert!(pdf.starts_with(b"%PDF"));
    assert!(pdf.windows(b"XObject".len()).any(|w| w == b"XObject"));
}

#[actix_web::test]
async fn avatar_upload_stores_file_and_updates_author() {
    let (state, dir) = state();
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/authors/checkEmail")
        .set_json(author_body("ada@example.com"))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["_id"].as_str().unwrap().to_string();

    let (content_type, body) = multipart("avatar", "portrait.PNG", "image/png", b"\x89PNG fake");
    let req = test::TestRequest::post()
        .uri(&format!("/authors/{id}/uploadAvatar"))
        .insert_header((CONTENT_TYPE, content_type))
        .set_payload(body)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = test::read_body_json(res).await;
    let expected_url = format!("http://localhost:3001/img/authors/{id}.png");
    assert_eq!(body["message"], "Image has been uploaded successfully");
    assert_eq!(body["url"], expected_url);
    assert_eq!(body["editedAuthor"]["avatar"], expected_url);
    assert!(dir.path().join("img/authors").join(format!("{id}.png")).exists());
}

#[actix_web::test]
async fn upload_rejects_non_images_and_unknown_records() {
    let (state, _dir) = state();
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/blogPosts")
        .set_json(post_body("Engines", "history"))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["_id"].as_str().unwrap();

    let (content_type, body) = multipart("cover", "notes.txt", "text/plain", b"hello");
    let req = test::TestRequest::post()
        .uri(&format!("/blogPosts/{id}/uploadCover"))
        .insert_header((CONTENT_TYPE, content_type))
        .set_payload(body)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let (content_type, body) = multipart("cover", "cover.jpg", "image/jpeg", b"jpeg");
    let req = test::TestRequest::post()
        .uri("/blogPosts/missing/uploadCover")
        .insert_header((CONTENT_TYPE, content_type))
        .set_payload(body)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn oversized_cover_is_rejected() {
    let (state, _dir) = state();
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/blogPosts")
        .set_json(post_body("Engines", "history"))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["_id"].as_str().unwrap();

    let big = vec![0u8; super::uploads::MAX_IMAGE_BYTES + 1];
    let (content_type, body) = multipart("cover", "cover.jpg", "image/jpeg", &big);
    let req = test::TestRequest::post()
        .uri(&format!("/blogPosts/{id}/uploadCover"))
        .insert_header((CONTENT_TYPE, content_type))
        .set_payload(body)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

struct FakeGoogle;

#[async_trait]
impl IdentityProvider for FakeGoogle {
    fn authorization_url(&self, state: &str) -> String {
        format!("https://accounts.example.com/auth?state={state}")
    }

    async fn exchange_code(&self, code: &str) -> Result<ExternalIdentity, AuthError> {
        if code != "good-code" {
            return Err(AuthError::Provider("bad code".into()));
        }
        Ok(ExternalIdentity {
            subject: "google-42".into(),
            email: "grace@example.com".into(),
            given_name: "Grace".into(),
            family_name: "Hopper".into(),
        })
    }
}

#[actix_web::test]
async fn google_routes_are_absent_without_configuration() {
    let (state, _dir) = state();
    let app = app!(state);

    let req = test::TestRequest::get().uri("/authors/googleLogin").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn google_sign_in_creates_author_and_returns_token() {
    let (mut state, _dir) = state();
    state.identity = Some(Arc::new(FakeGoogle));
    let app = app!(state);

    let req = test::TestRequest::get().uri("/authors/googleLogin").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    let location = res.headers().get(LOCATION).unwrap().to_str().unwrap();
    let csrf = location.split("state=").nth(1).unwrap().to_string();
    assert!(res.headers().get(SET_COOKIE).is_some());

    let req = test::TestRequest::get()
        .uri(&format!("/authors/googleRedirect?code=good-code&state={csrf}"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri(&format!("/authors/googleRedirect?code=good-code&state={csrf}"))
        .cookie(actix_web::cookie::Cookie::new(super::oauth::STATE_COOKIE, csrf.clone()))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    let location = res.headers().get(LOCATION).unwrap().to_str().unwrap();
    assert!(location.starts_with("http://localhost:3000?accessToken="));

    let req = test::TestRequest::get().uri("/authors").to_request();
    let authors: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0]["email"], "grace@example.com");
    assert!(authors[0].get("googleId").is_none());
}

#[actix_web::test]
async fn docs_redirect_and_health() {
    let (state, _dir) = state();
    let app = app!(state);

    let req = test::TestRequest::get().uri("/info/docs").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(res.headers().get(LOCATION).unwrap(), "https://docs.example.com");

    let req = test::TestRequest::get().uri("/health").to_request();
    let health: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(health["status"], "ok");
}
