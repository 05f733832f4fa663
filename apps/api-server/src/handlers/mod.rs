//! HTTP handlers and route configuration.

mod auth;
mod authors;
mod blog_posts;
mod comments;
mod exports;
mod health;
mod info;
mod oauth;
mod uploads;

#[cfg(test)]
mod tests;

use actix_web::web;

/// Configure all application routes.
///
/// Literal segments are registered before the `{id}` resources they would
/// otherwise be captured by.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .route("/info/docs", web::get().to(info::docs))
        .service(
            web::scope("/authors")
                .service(
                    web::resource("")
                        .route(web::get().to(authors::list))
                        .route(web::post().to(authors::create)),
                )
                .route("/checkEmail", web::post().to(authors::check_email))
                .route("/register", web::post().to(auth::register))
                .route("/login", web::post().to(auth::login))
                .route("/me", web::get().to(auth::me))
                .route("/me/stories", web::get().to(auth::stories))
                .route("/googleLogin", web::get().to(oauth::google_login))
                .route("/googleRedirect", web::get().to(oauth::google_redirect))
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(authors::get))
                        .route(web::put().to(authors::update))
                        .route(web::delete().to(authors::delete)),
                )
                .route("/{id}/uploadAvatar", web::post().to(uploads::upload_avatar)),
        )
        .service(
            web::scope("/blogPosts")
                .service(
                    web::resource("")
                        .route(web::get().to(blog_posts::list))
                        .route(web::post().to(blog_posts::create)),
                )
                .route("/search/{category}", web::get().to(blog_posts::search))
                .route("/csv", web::get().to(exports::csv))
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(blog_posts::get))
                        .route(web::put().to(blog_posts::update))
                        .route(web::delete().to(blog_posts::delete)),
                )
                .route("/{id}/pdf", web::get().to(exports::pdf))
                .route("/{id}/uploadCover", web::post().to(uploads::upload_cover))
                .service(
                    web::resource("/{id}/comments")
                        .route(web::get().to(comments::list))
                        .route(web::post().to(comments::create)),
                )
                .service(
                    web::resource("/{id}/comments/{comment_id}")
                        .route(web::get().to(comments::get))
                        .route(web::put().to(comments::update))
                        .route(web::delete().to(comments::delete)),
                ),
        );
}
