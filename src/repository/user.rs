use chrono::Utc;
use sqlx::PgConnection;

use super::{affected, non_empty};
use crate::error::AppError;
use crate::models::{Audit, User, UserCredentials};

const ENTITY: &str = "User";

/// Column values for a new `users` row.
#[derive(Debug)]
pub struct NewUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub created_by: i64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UserRepository;

impl UserRepository {
    pub async fn create(&self, conn: &mut PgConnection, user: &NewUser<'_>) -> Result<User, AppError> {
        let audit = Audit::new(user.created_by);

        let created = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password, created_at, created_by, updated_at, updated_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id, name, email, created_at, created_by, updated_at, updated_by, deleted_at",
        )
        .bind(user.name)
        .bind(user.email)
        .bind(user.password_hash)
        .bind(audit.created_at)
        .bind(audit.created_by)
        .bind(audit.updated_at)
        .bind(audit.updated_by)
        .fetch_one(conn)
        .await?;

        Ok(created)
    }

    pub async fn get_by_id(&self, conn: &mut PgConnection, id: i64) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "SELECT id, name, email, created_at, created_by, updated_at, updated_by, deleted_at
             FROM users WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(conn)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY))
    }

    /// Looks up a live user by email, including the password hash.
    pub async fn get_by_email(
        &self,
        conn: &mut PgConnection,
        email: &str,
    ) -> Result<UserCredentials, AppError> {
        sqlx::query_as::<_, UserCredentials>(
            "SELECT id, name, email, password, created_at, created_by, updated_at, updated_by, deleted_at
             FROM users WHERE email = $1 AND deleted_at IS NULL",
        )
        .bind(email)
        .fetch_optional(conn)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY))
    }

    pub async fn update(
        &self,
        conn: &mut PgConnection,
        id: i64,
        name: &str,
        email: &str,
        updated_by: i64,
    ) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET name = $1, email = $2, updated_at = $3, updated_by = $4
             WHERE id = $5 AND deleted_at IS NULL
             RETURNING id, name, email, created_at, created_by, updated_at, updated_by, deleted_at",
        )
        .bind(name)
        .bind(email)
        .bind(Utc::now())
        .bind(updated_by)
        .bind(id)
        .fetch_optional(conn)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY))
    }

    /// Soft-deletes a live user.
    pub async fn delete(&self, conn: &mut PgConnection, id: i64, deleted_by: i64) -> Result<(), AppError> {
        let now = Utc::now();

        let result = sqlx::query(
            "UPDATE users SET deleted_at = $1, updated_at = $2, updated_by = $3
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

    pub async fn get_all(&self, conn: &mut PgConnection) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, email, created_at, created_by, updated_at, updated_by, deleted_at
             FROM users WHERE deleted_at IS NULL ORDER BY id",
        )
        .fetch_all(conn)
        .await?;

        non_empty(users, ENTITY)
    }
}
