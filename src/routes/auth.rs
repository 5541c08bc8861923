use crate::{
    auth::{AuthResponse, JwtService, LoginRequest},
    error::AppError,
    models::{CreateUserRequest, UserProfile},
    usecase::UserUsecase,
};
use actix_web::{post, web, HttpResponse, Responder};
use validator::Validate;

/// Register a new user
///
/// Creates a new account and returns an access token for it.
///
/// ## Responses:
/// - `201 Created`: `AuthResponse` with the token and the new user.
/// - `400 Bad Request`: Malformed JSON or the email is already registered.
/// - `422 Unprocessable Entity`: Field validation failed.
#[post("/register")]
pub async fn register(
    users: web::Data<UserUsecase>,
    jwt: web::Data<JwtService>,
    register_data: web::Json<CreateUserRequest>,
) -> Result<impl Responder, AppError> {
    register_data.validate()?;

    let user = users.register(&register_data).await?;
    let token = jwt.generate_token(user.id, &user.email)?;

    Ok(HttpResponse::Created().json(AuthResponse {
        token,
        user: UserProfile::from(&user),
    }))
}

/// Login user
///
/// Authenticates a user and returns an access token.
///
/// ## Responses:
/// - `200 OK`: `AuthResponse` with the token and the user.
/// - `401 Unauthorized`: Unknown email or wrong password.
/// - `422 Unprocessable Entity`: Field validation failed.
#[post("/login")]
pub async fn login(
    users: web::Data<UserUsecase>,
    jwt: web::Data<JwtService>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    login_data.validate()?;

    let user = users.login(&login_data.email, &login_data.password).await?;
    let token = jwt.generate_token(user.id, &user.email)?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        token,
        user: UserProfile::from(&user),
    }))
}
