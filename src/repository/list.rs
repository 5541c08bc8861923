use chrono::Utc;
use sqlx::PgConnection;

use super::{affected, non_empty};
use crate::error::AppError;
use crate::models::{Audit, List};

const ENTITY: &str = "List";

#[derive(Debug)]
pub struct NewList<'a> {
    pub project_id: i64,
    pub name: &'a str,
    pub position: i32,
    pub created_by: i64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ListRepository;

impl ListRepository {
    pub async fn create(&self, conn: &mut PgConnection, list: &NewList<'_>) -> Result<List, AppError> {
        let audit = Audit::new(list.created_by);

        let created = sqlx::query_as::<_, List>(
            "INSERT INTO lists (project_id, name, position, created_at, created_by, updated_at, updated_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id, project_id, name, position, created_at, created_by, updated_at, updated_by, deleted_at",
        )
        .bind(list.project_id)
        .bind(list.name)
        .bind(list.position)
        .bind(audit.created_at)
        .bind(audit.created_by)
        .bind(audit.updated_at)
        .bind(audit.updated_by)
        .fetch_one(conn)
        .await?;

        Ok(created)
    }

    pub async fn get_by_id(&self, conn: &mut PgConnection, id: i64) -> Result<List, AppError> {
        sqlx::query_as::<_, List>(
            "SELECT id, project_id, name, position, created_at, created_by, updated_at, updated_by, deleted_at
             FROM lists WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(conn)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY))
    }

    /// Live lists of a project, lowest `position` first.
    pub async fn get_by_project_id(
        &self,
        conn: &mut PgConnection,
        project_id: i64,
    ) -> Result<Vec<List>, AppError> {
        let lists = sqlx::query_as::<_, List>(
            "SELECT id, project_id, name, position, created_at, created_by, updated_at, updated_by, deleted_at
             FROM lists WHERE project_id = $1 AND deleted_at IS NULL
             ORDER BY position ASC, id ASC",
        )
        .bind(project_id)
        .fetch_all(conn)
        .await?;

        non_empty(lists, ENTITY)
    }

    pub async fn update(
        &self,
        conn: &mut PgConnection,
        id: i64,
        name: &str,
        position: i32,
        updated_by: i64,
    ) -> Result<List, AppError> {
        sqlx::query_as::<_, List>(
            "UPDATE lists SET name = $1, position = $2, updated_at = $3, updated_by = $4
             WHERE id = $5 AND deleted_at IS NULL
             RETURNING id, project_id, name, position, created_at, created_by, updated_at, updated_by, deleted_at",
        )
        .bind(name)
        .bind(position)
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
            "UPDATE lists SET deleted_at = $1, updated_at = $2, updated_by = $3
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
}
