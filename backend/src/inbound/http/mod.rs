//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod status;
pub mod users;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register the user and status routes.
///
/// Each path is a single resource matching with and without a trailing
/// slash, so unsupported methods reach the resource's default service and
/// answer 405 instead of 404.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .app_data(validation::query_config())
        .app_data(validation::path_config())
        .service(web::resource(["/status", "/status/"]).route(web::get().to(status::get_status)))
        .service(
            web::resource(["/api/users", "/api/users/"])
                .route(web::get().to(users::list_users))
                .route(web::post().to(users::create_user))
                .default_service(web::to(users::method_not_allowed)),
        )
        .service(
            web::resource(["/api/users/{id}", "/api/users/{id}/"])
                .route(web::get().to(users::get_user))
                .route(web::patch().to(users::update_user))
                .route(web::put().to(users::replace_user))
                .route(web::delete().to(users::delete_user))
                .default_service(web::to(users::method_not_allowed)),
        )
        .service(
            web::resource(["/api/users/{id}/detailed", "/api/users/{id}/detailed/"])
                .route(web::get().to(users::get_user_detailed))
                .default_service(web::to(users::method_not_allowed)),
        );
}
