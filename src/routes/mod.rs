pub mod auth;
pub mod cards;
pub mod health;
pub mod lists;
pub mod projects;
pub mod users;

use actix_web::{web, HttpRequest};

use crate::error::AppError;

/// Registers every `/api` route. Expected to be mounted under `web::scope("/api")`
/// wrapped by `AuthMiddleware`.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(path_config())
        .app_data(json_config())
        .service(
            web::scope("/auth")
                .service(auth::login)
                .service(auth::register),
        )
        .service(
            web::scope("/users")
                .service(users::get_users)
                .service(users::create_user)
                .service(users::get_user)
                .service(users::update_user)
                .service(users::delete_user),
        )
        .service(
            web::scope("/projects")
                .service(projects::get_projects)
                .service(projects::create_project)
                .service(projects::get_project)
                .service(projects::update_project)
                .service(projects::delete_project),
        )
        .service(
            web::scope("/lists")
                .service(lists::create_list)
                .service(lists::get_lists_by_project)
                .service(lists::get_list)
                .service(lists::update_list)
                .service(lists::delete_list),
        )
        .service(
            web::scope("/cards")
                .service(cards::create_card)
                .service(cards::get_cards_by_list)
                .service(cards::get_card)
                .service(cards::update_card)
                .service(cards::delete_card),
        );
}

/// Non-numeric ids in the path are a client error, not a missing route.
fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|_, _: &HttpRequest| AppError::BadRequest("Invalid ID format".into()).into())
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _: &HttpRequest| {
        AppError::BadRequest(format!("Invalid input, cannot parse JSON: {}", err)).into()
    })
}
