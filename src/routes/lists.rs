use crate::{
    auth::AuthenticatedUserId,
    error::AppError,
    models::{CreateListRequest, UpdateListRequest},
    usecase::ListUsecase,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use validator::Validate;

/// Creates a list inside a live project.
///
/// ## Responses:
/// - `201 Created`: The new `List`.
/// - `404 Not Found`: The project does not exist or was deleted.
/// - `422 Unprocessable Entity`: Field validation failed.
#[post("")]
pub async fn create_list(
    lists: web::Data<ListUsecase>,
    user_id: AuthenticatedUserId,
    list_data: web::Json<CreateListRequest>,
) -> Result<impl Responder, AppError> {
    list_data.validate()?;

    let list = lists.create_list(&list_data, user_id.0).await?;

    Ok(HttpResponse::Created().json(list))
}

/// Live lists of a project ordered by position; `404` when there are none.
#[get("/project/{project_id}")]
pub async fn get_lists_by_project(
    lists: web::Data<ListUsecase>,
    project_id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let found = lists.get_lists_by_project_id(project_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(found))
}

#[get("/{id}")]
pub async fn get_list(
    lists: web::Data<ListUsecase>,
    id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let list = lists.get_list_by_id(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(list))
}

#[put("/{id}")]
pub async fn update_list(
    lists: web::Data<ListUsecase>,
    id: web::Path<i64>,
    user_id: AuthenticatedUserId,
    list_data: web::Json<UpdateListRequest>,
) -> Result<impl Responder, AppError> {
    list_data.validate()?;

    let list = lists
        .update_list(id.into_inner(), &list_data, user_id.0)
        .await?;

    Ok(HttpResponse::Ok().json(list))
}

#[delete("/{id}")]
pub async fn delete_list(
    lists: web::Data<ListUsecase>,
    id: web::Path<i64>,
    user_id: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    lists.delete_list(id.into_inner(), user_id.0).await?;
    Ok(HttpResponse::NoContent().finish())
}
