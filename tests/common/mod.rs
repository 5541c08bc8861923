#![allow(dead_code)]

use actix_web::{body::MessageBody, dev::ServiceResponse, test};
use dotenv::dotenv;
use serde_json::{json, Value};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::sync::atomic::{AtomicU32, Ordering};

use planboard::auth::{AuthResponse, JwtService};

pub const TEST_SECRET: &str = "integration_test_secret";
pub const PASSWORD: &str = "Password123!";

/// Connects to `DATABASE_URL` and applies the migrations.
///
/// Returns `None` when no database is configured so the database-backed tests
/// can skip instead of failing.
pub async fn test_pool() -> Option<PgPool> {
    dotenv().ok();
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("DATABASE_URL not set, skipping database test");
            return None;
        }
    };

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to test DB");
    planboard::db::migrate(&pool)
        .await
        .expect("Failed to run migrations");
    Some(pool)
}

pub fn jwt() -> JwtService {
    JwtService::new(TEST_SECRET, 3600)
}

/// An email no other test run has used.
pub fn unique_email(prefix: &str) -> String {
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("{}_{}_{}@example.com", prefix, nanos, n)
}

/// Builds the full application the same way `main` does.
#[macro_export]
macro_rules! init_app {
    ($pool:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .configure(planboard::app_state($pool.clone(), common::jwt()))
                .wrap(actix_web::middleware::Logger::default())
                .service(planboard::routes::health::health)
                .service(
                    actix_web::web::scope("/api")
                        .wrap(planboard::auth::AuthMiddleware)
                        .configure(planboard::routes::config),
                ),
        )
        .await
    };
}

/// Registers a fresh user and returns the token issued for it.
pub async fn register(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
    >,
    name: &str,
    email: &str,
) -> AuthResponse {
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(&json!({
            "name": name,
            "email": email,
            "password": PASSWORD
        }))
        .to_request();
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    assert_eq!(
        status,
        actix_web::http::StatusCode::CREATED,
        "Registration failed. Body: {:?}",
        String::from_utf8_lossy(&body)
    );
    serde_json::from_slice(&body).expect("Failed to parse registration response")
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

/// Reads a response body as JSON, tolerating empty bodies.
pub async fn json_body(resp: ServiceResponse<impl MessageBody>) -> Value {
    let body = test::read_body(resp).await;
    if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("Response body is not JSON")
    }
}

pub async fn cleanup_user(pool: &PgPool, email: &str) {
    let _ = sqlx::query("DELETE FROM users WHERE email = $1")
        .bind(email)
        .execute(pool)
        .await;
}
