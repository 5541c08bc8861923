use sqlx::PgPool;

use crate::db;
use crate::error::AppError;
use crate::models::{CreateProjectRequest, List, Project, UpdateProjectRequest};
use crate::repository::{ListRepository, NewList, NewProject, ProjectRepository};

/// Position given to the list created alongside a project.
const DEFAULT_LIST_POSITION: i32 = 1;

#[derive(Clone)]
pub struct ProjectUsecase {
    pool: PgPool,
    projects: ProjectRepository,
    lists: ListRepository,
}

impl ProjectUsecase {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            projects: ProjectRepository,
            lists: ListRepository,
        }
    }

    pub async fn create_project(
        &self,
        input: &CreateProjectRequest,
        created_by: i64,
    ) -> Result<Project, AppError> {
        let mut tx = db::begin(&self.pool).await?;

        let project = self
            .projects
            .create(&mut *tx, &new_project(input, created_by))
            .await?;

        tx.commit().await?;

        log::info!("Project {} created by {}", project.id, created_by);
        Ok(project)
    }

    /// Creates the project and its first list atomically. If the list insert fails the
    /// project is rolled back with it.
    pub async fn create_project_with_default_list(
        &self,
        input: &CreateProjectRequest,
        default_list_name: &str,
        created_by: i64,
    ) -> Result<(Project, List), AppError> {
        let mut tx = db::begin(&self.pool).await?;

        let project = self
            .projects
            .create(&mut *tx, &new_project(input, created_by))
            .await?;

        let list = self
            .lists
            .create(
                &mut *tx,
                &NewList {
                    project_id: project.id,
                    name: default_list_name,
                    position: DEFAULT_LIST_POSITION,
                    created_by: project.audit.created_by,
                },
            )
            .await?;

        tx.commit().await?;

        log::info!(
            "Project {} created by {} with default list {}",
            project.id,
            created_by,
            list.id
        );
        Ok((project, list))
    }

    pub async fn get_project_by_id(&self, id: i64) -> Result<Project, AppError> {
        let mut tx = db::begin_read_only(&self.pool).await?;
        let project = self.projects.get_by_id(&mut *tx, id).await?;
        Ok(project)
    }

    pub async fn get_all_projects(&self) -> Result<Vec<Project>, AppError> {
        let mut tx = db::begin_read_only(&self.pool).await?;
        let projects = self.projects.get_all(&mut *tx).await?;
        Ok(projects)
    }

    pub async fn update_project(
        &self,
        id: i64,
        input: &UpdateProjectRequest,
        updated_by: i64,
    ) -> Result<Project, AppError> {
        let mut tx = db::begin(&self.pool).await?;

        let project = self
            .projects
            .update(&mut *tx, id, &input.name, &input.description, updated_by)
            .await?;

        tx.commit().await?;

        log::info!("Project {} updated by {}", id, updated_by);
        Ok(project)
    }

    pub async fn delete_project(&self, id: i64, deleted_by: i64) -> Result<(), AppError> {
        let mut tx = db::begin(&self.pool).await?;

        self.projects.delete(&mut *tx, id, deleted_by).await?;

        tx.commit().await?;

        log::info!("Project {} deleted by {}", id, deleted_by);
        Ok(())
    }
}

fn new_project(input: &CreateProjectRequest, created_by: i64) -> NewProject<'_> {
    NewProject {
        name: &input.name,
        description: &input.description,
        created_by,
    }
}
