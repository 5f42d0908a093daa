//! HTTP handlers and route configuration.

mod health;
mod posts;
mod users;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Identity routes
            .service(
                web::scope("/users")
                    .route("/register", web::post().to(users::register))
                    .route("/login", web::post().to(users::login))
                    .route("/current", web::get().to(users::current)),
            )
            // Post routes
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list_posts))
                    .route("", web::post().to(posts::create_post))
                    .route("/like/{post_id}", web::post().to(posts::like_post))
                    .route("/unlike/{post_id}", web::post().to(posts::unlike_post))
                    .route("/comment/{post_id}", web::post().to(posts::add_comment))
                    .route(
                        "/comment/{post_id}/{comment_id}",
                        web::delete().to(posts::remove_comment),
                    )
                    .route("/{post_id}", web::get().to(posts::get_post))
                    .route("/{post_id}", web::delete().to(posts::delete_post)),
            ),
    );
}
