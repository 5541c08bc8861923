use chrono::Utc;
use sqlx::PgConnection;

use super::{affected, non_empty};
use crate::error::AppError;
use crate::models::{Audit, Card};

const ENTITY: &str = "Card";

#[derive(Debug)]
pub struct NewCard<'a> {
    pub list_id: i64,
    pub title: &'a str,
    pub content: &'a str,
    pub position: i32,
    pub created_by: i64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CardRepository;

impl CardRepository {
    pub async fn create(&self, conn: &mut PgConnection, card: &NewCard<'_>) -> Result<Card, AppError> {
        let audit = Audit::new(card.created_by);

        let created = sqlx::query_as::<_, Card>(
            "INSERT INTO cards (list_id, title, content, position, created_at, created_by, updated_at, updated_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING id, list_id, title, content, position, created_at, created_by, updated_at, updated_by, deleted_at",
        )
        .bind(card.list_id)
        .bind(card.title)
        .bind(card.content)
        .bind(card.position)
        .bind(audit.created_at)
        .bind(audit.created_by)
        .bind(audit.updated_at)
        .bind(audit.updated_by)
        .fetch_one(conn)
        .await?;

        Ok(created)
    }

    pub async fn get_by_id(&self, conn: &mut PgConnection, id: i64) -> Result<Card, AppError> {
        sqlx::query_as::<_, Card>(
            "SELECT id, list_id, title, content, position, created_at, created_by, updated_at, updated_by, deleted_at
             FROM cards WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(conn)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY))
    }

    /// Live cards of a list, lowest `position` first.
    pub async fn get_by_list_id(&self, conn: &mut PgConnection, list_id: i64) -> Result<Vec<Card>, AppError> {
        let cards = sqlx::query_as::<_, Card>(
            "SELECT id, list_id, title, content, position, created_at, created_by, updated_at, updated_by, deleted_at
             FROM cards WHERE list_id = $1 AND deleted_at IS NULL
             ORDER BY position ASC, id ASC",
        )
        .bind(list_id)
        .fetch_all(conn)
        .await?;

        non_empty(cards, ENTITY)
    }

    pub async fn update(
        &self,
        conn: &mut PgConnection,
        id: i64,
        title: &str,
        content: &str,
        position: i32,
        updated_by: i64,
    ) -> Result<Card, AppError> {
        sqlx::query_as::<_, Card>(
            "UPDATE cards SET title = $1, content = $2, position = $3, updated_at = $4, updated_by = $5
             WHERE id = $6 AND deleted_at IS NULL
             RETURNING id, list_id, title, content, position, created_at, created_by, updated_at, updated_by, deleted_at",
        )
        .bind(title)
        .bind(content)
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
            "UPDATE cards SET deleted_at = $1, updated_at = $2, updated_by = $3
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
