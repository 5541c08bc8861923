use sqlx::PgPool;

use crate::auth::{hash_password, verify_password};
use crate::db;
use crate::error::AppError;
use crate::models::{CreateUserRequest, UpdateUserRequest, User};
use crate::repository::{NewUser, UserRepository};

/// Audit user recorded for accounts that registered themselves.
pub const SELF_REGISTERED: i64 = 0;

#[derive(Clone)]
pub struct UserUsecase {
    pool: PgPool,
    users: UserRepository,
}

impl UserUsecase {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            users: UserRepository,
        }
    }

    /// Creates an account on behalf of `created_by`.
    pub async fn create_user(&self, input: &CreateUserRequest, created_by: i64) -> Result<User, AppError> {
        let password_hash = hash_password(&input.password)?;

        let mut tx = db::begin(&self.pool).await?;

        self.ensure_email_free(&mut *tx, &input.email, None).await?;
        let user = self
            .users
            .create(
                &mut *tx,
                &NewUser {
                    name: &input.name,
                    email: &input.email,
                    password_hash: &password_hash,
                    created_by,
                },
            )
            .await?;

        tx.commit().await?;

        log::info!("User {} created by {}", user.id, created_by);
        Ok(user)
    }

    /// Self-service sign-up.
    pub async fn register(&self, input: &CreateUserRequest) -> Result<User, AppError> {
        self.create_user(input, SELF_REGISTERED).await
    }

    /// Checks an email / password pair against the stored bcrypt hash.
    ///
    /// Unknown emails and wrong passwords produce the same `Unauthorized` error.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let mut tx = db::begin_read_only(&self.pool).await?;

        let credentials = match self.users.get_by_email(&mut *tx, email).await {
            Ok(credentials) => credentials,
            Err(AppError::NotFound(_)) => {
                return Err(AppError::Unauthorized("Invalid credentials".into()))
            }
            Err(e) => return Err(e),
        };

        if !verify_password(password, &credentials.password)? {
            return Err(AppError::Unauthorized("Invalid credentials".into()));
        }

        log::info!("User {} logged in", credentials.user.id);
        Ok(credentials.user)
    }

    pub async fn get_user_by_id(&self, id: i64) -> Result<User, AppError> {
        let mut tx = db::begin_read_only(&self.pool).await?;
        let user = self.users.get_by_id(&mut *tx, id).await?;
        Ok(user)
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        let mut tx = db::begin_read_only(&self.pool).await?;
        let users = self.users.get_all(&mut *tx).await?;
        Ok(users)
    }

    pub async fn update_user(
        &self,
        id: i64,
        input: &UpdateUserRequest,
        updated_by: i64,
    ) -> Result<User, AppError> {
        let mut tx = db::begin(&self.pool).await?;

        self.ensure_email_free(&mut *tx, &input.email, Some(id)).await?;
        let user = self
            .users
            .update(&mut *tx, id, &input.name, &input.email, updated_by)
            .await?;

        tx.commit().await?;

        log::info!("User {} updated by {}", id, updated_by);
        Ok(user)
    }

    pub async fn delete_user(&self, id: i64, deleted_by: i64) -> Result<(), AppError> {
        let mut tx = db::begin(&self.pool).await?;

        self.users.delete(&mut *tx, id, deleted_by).await?;

        tx.commit().await?;

        log::info!("User {} deleted by {}", id, deleted_by);
        Ok(())
    }

    /// Rejects `email` if a live user other than `owner` already has it.
    async fn ensure_email_free(
        &self,
        conn: &mut sqlx::PgConnection,
        email: &str,
        owner: Option<i64>,
    ) -> Result<(), AppError> {
        match self.users.get_by_email(conn, email).await {
            Ok(existing) if Some(existing.user.id) == owner => Ok(()),
            Ok(_) => Err(AppError::BadRequest("Email already registered".into())),
            Err(AppError::NotFound(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }
}
