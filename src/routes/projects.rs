use crate::{
    auth::AuthenticatedUserId,
    error::AppError,
    models::{CreateProjectRequest, List, Project, UpdateProjectRequest},
    usecase::ProjectUsecase,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body returned by `POST /api/projects`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedProject {
    #[serde(flatten)]
    pub project: Project,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_list: Option<List>,
}

#[get("")]
pub async fn get_projects(projects: web::Data<ProjectUsecase>) -> Result<impl Responder, AppError> {
    let all = projects.get_all_projects().await?;
    Ok(HttpResponse::Ok().json(all))
}

/// Creates a project owned by the authenticated user.
///
/// When the body carries `default_list_name`, the project and a first list
/// (position 1) are created in one transaction and both are returned.
///
/// ## Responses:
/// - `201 Created`: `CreatedProject`.
/// - `422 Unprocessable Entity`: Field validation failed.
#[post("")]
pub async fn create_project(
    projects: web::Data<ProjectUsecase>,
    user_id: AuthenticatedUserId,
    project_data: web::Json<CreateProjectRequest>,
) -> Result<impl Responder, AppError> {
    project_data.validate()?;

    let created = match &project_data.default_list_name {
        Some(list_name) => {
            let (project, list) = projects
                .create_project_with_default_list(&project_data, list_name, user_id.0)
                .await?;
            CreatedProject {
                project,
                default_list: Some(list),
            }
        }
        None => CreatedProject {
            project: projects.create_project(&project_data, user_id.0).await?,
            default_list: None,
        },
    };

    Ok(HttpResponse::Created().json(created))
}

#[get("/{id}")]
pub async fn get_project(
    projects: web::Data<ProjectUsecase>,
    id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let project = projects.get_project_by_id(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(project))
}

#[put("/{id}")]
pub async fn update_project(
    projects: web::Data<ProjectUsecase>,
    id: web::Path<i64>,
    user_id: AuthenticatedUserId,
    project_data: web::Json<UpdateProjectRequest>,
) -> Result<impl Responder, AppError> {
    project_data.validate()?;

    let project = projects
        .update_project(id.into_inner(), &project_data, user_id.0)
        .await?;

    Ok(HttpResponse::Ok().json(project))
}

/// Soft-deletes a project. Its lists and cards are left untouched.
#[delete("/{id}")]
pub async fn delete_project(
    projects: web::Data<ProjectUsecase>,
    id: web::Path<i64>,
    user_id: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    projects.delete_project(id.into_inner(), user_id.0).await?;
    Ok(HttpResponse::NoContent().finish())
}
