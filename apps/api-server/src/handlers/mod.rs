//! HTTP handlers and route configuration.

mod blogs;
mod health;
mod users;

use actix_web::web;

use crate::middleware::error::json_error_handler;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/", web::get().to(health::liveness))
        .route("/health", web::get().to(health::health_check))
        // Users
        .route("/users", web::post().to(users::create_user))
        .route("/user/{name}", web::get().to(users::get_admin_by_name))
        .route("/admin/{email}", web::get().to(users::get_admin_by_email))
        // Blogs - `/blogs/recent` must be registered before `/blogs/{id}`
        .service(
            web::resource("/blogs")
                .route(web::get().to(blogs::list_all))
                .route(web::post().to(blogs::create_blog)),
        )
        .route("/blogs/recent", web::get().to(blogs::list_recent))
        .route("/blogs/{id}", web::get().to(blogs::get_by_id))
        .route("/resources", web::get().to(blogs::list_paged));
}
