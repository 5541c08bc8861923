use chrono::Utc;
use sqlx::PgConnection;

use super::{affected, non_empty};
use crate::error::AppError;
use crate::models::{Audit, Project};

const ENTITY: &str = "Project";

#[derive(Debug)]
pub struct NewProject<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub created_by: i64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectRepository;

impl ProjectRepository {
    pub async fn create(
        &self,
        conn: &mut PgConnection,
        project: &NewProject<'_>,
    ) -> Result<Project, AppError> {
        let audit = Audit::new(project.created_by);

        let created = sqlx::query_as::<_, Project>(
            "INSERT INTO projects (name, description, created_at, created_by, updated_at, updated_by)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, name, description, created_at, created_by, updated_at, updated_by, deleted_at",
        )
        .bind(project.name)
        .bind(project.description)
        .bind(audit.created_at)
        .bind(audit.created_by)
        .bind(audit.updated_at)
        .bind(audit.updated_by)
        .fetch_one(conn)
        .await?;

        Ok(created)
    }

    pub async fn get_by_id(&self, conn: &mut PgConnection, id: i64) -> Result<Project, AppError> {
        sqlx::query_as::<_, Project>(
            "SELECT id, name, description, created_at, created_by, updated_at, updated_by, deleted_at
             FROM projects WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(conn)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY))
    }

    pub async fn update(
        &self,
        conn: &mut PgConnection,
        id: i64,
        name: &str,
        description: &str,
        updated_by: i64,
    ) -> Result<Project, AppError> {
        sqlx::query_as::<_, Project>(
            "UPDATE projects SET name = $1, description = $2, updated_at = $3, updated_by = $4
             WHERE id = $5 AND deleted_at IS NULL
             RETURNING id, name, description, created_at, created_by, updated_at, updated_by, deleted_at",
        )
        .bind(name)
        .bind(description)
        .bind(Utc::now())
        .bind(updated_by)
        .bind(id)
        .fetch_optional(conn)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY))
    }

    pub async fn delete(&self, conn: &mut PgConnection, id: i64, deleted_by: i64) -> Result<(), AppError> {
        let now = Utc::now();

        let result = sqlx::query(
            "UPDATE projects SET deleted_at = $1, updated_at = $2, updated_by = $3
             WHERE id = $4 AND deleted_at IS NULL",
        )
        .bind(now)
        .bind(now)
        .bind(deleted_by)
        .bind(id)
        .execute(conn)
        .await?;

        affected(result.rows_affected(), ENTITY)
    }

    pub async fn get_all(&self, conn: &mut PgConnection) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            "SELECT id, name, description, created_at, created_by, updated_at, updated_by, deleted_at
             FROM projects WHERE deleted_at IS NULL ORDER BY id",
        )
        .fetch_all(conn)
        .await?;

        non_empty(projects, ENTITY)
    }
}
