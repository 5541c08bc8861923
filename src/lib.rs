#![doc = "The `planboard` library crate."]
#![doc = ""]
#![doc = "Domain models, repositories, transactional usecases, authentication and the"]
#![doc = "HTTP routes of the Planboard project-management backend. The binary (`main.rs`)"]
#![doc = "wires them into an Actix Web server."]

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;
pub mod usecase;

use actix_web::web;
use sqlx::PgPool;

use crate::auth::JwtService;
use crate::usecase::Usecases;

/// Registers the token service and every usecase as application data.
///
/// Used with `App::configure` by the server and by the integration tests, so both
/// see the same state.
pub fn app_state(pool: PgPool, jwt: JwtService) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        let usecases = Usecases::new(pool);
        cfg.app_data(web::Data::new(jwt))
            .app_data(web::Data::new(usecases.users))
            .app_data(web::Data::new(usecases.projects))
            .app_data(web::Data::new(usecases.lists))
            .app_data(web::Data::new(usecases.cards));
    }
}
