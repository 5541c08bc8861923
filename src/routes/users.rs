use crate::{
    auth::AuthenticatedUserId,
    error::AppError,
    models::{CreateUserRequest, UpdateUserRequest},
    usecase::UserUsecase,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use validator::Validate;

/// Lists all live users, ordered by id.
///
/// ## Responses:
/// - `200 OK`: JSON array of `User` objects.
/// - `404 Not Found`: There are no live users.
#[get("")]
pub async fn get_users(users: web::Data<UserUsecase>) -> Result<impl Responder, AppError> {
    let all = users.get_all_users().await?;
    Ok(HttpResponse::Ok().json(all))
}

/// Creates a user on behalf of the authenticated user, who is recorded as `created_by`.
///
/// ## Responses:
/// - `201 Created`: The new `User` (without password).
/// - `400 Bad Request`: Malformed JSON or the email is already registered.
/// - `422 Unprocessable Entity`: Field validation failed.
#[post("")]
pub async fn create_user(
    users: web::Data<UserUsecase>,
    user_id: AuthenticatedUserId,
    user_data: web::Json<CreateUserRequest>,
) -> Result<impl Responder, AppError> {
    user_data.validate()?;

    let user = users.create_user(&user_data, user_id.0).await?;

    Ok(HttpResponse::Created().json(user))
}

#[get("/{id}")]
pub async fn get_user(
    users: web::Data<UserUsecase>,
    id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let user = users.get_user_by_id(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// Replaces a live user's name and email.
///
/// ## Responses:
/// - `200 OK`: The updated `User`.
/// - `404 Not Found`: No live user with this id.
/// - `422 Unprocessable Entity`: Field validation failed.
#[put("/{id}")]
pub async fn update_user(
    users: web::Data<UserUsecase>,
    id: web::Path<i64>,
    user_id: AuthenticatedUserId,
    user_data: web::Json<UpdateUserRequest>,
) -> Result<impl Responder, AppError> {
    user_data.validate()?;

    let user = users
        .update_user(id.into_inner(), &user_data, user_id.0)
        .await?;

    Ok(HttpResponse::Ok().json(user))
}

/// Soft-deletes a user.
///
/// ## Responses:
/// - `204 No Content`: The user was deleted.
/// - `404 Not Found`: No live user with this id.
#[delete("/{id}")]
pub async fn delete_user(
    users: web::Data<UserUsecase>,
    id: web::Path<i64>,
    user_id: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    users.delete_user(id.into_inner(), user_id.0).await?;
    Ok(HttpResponse::NoContent().finish())
}
