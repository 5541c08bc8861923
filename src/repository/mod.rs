//! Data access for the four tables.
//!
//! Every method borrows a `PgConnection`, which in practice is the open transaction
//! owned by a usecase (`&mut *tx`). Repositories never begin, commit or roll back.
//! All reads filter on `deleted_at IS NULL`, and writes only touch live rows.

pub mod card;
pub mod list;
pub mod project;
pub mod user;

pub use card::{CardRepository, NewCard};
pub use list::{ListRepository, NewList};
pub use project::{NewProject, ProjectRepository};
pub use user::{NewUser, UserRepository};

use crate::error::AppError;

/// Turns an empty collection read into `NotFound`, the way single-row reads behave.
pub(crate) fn non_empty<T>(rows: Vec<T>, entity: &str) -> Result<Vec<T>, AppError> {
    if rows.is_empty() {
        Err(AppError::not_found(entity))
    } else {
        Ok(rows)
    }
}

/// Maps an `UPDATE ... WHERE deleted_at IS NULL` that matched nothing to `NotFound`.
pub(crate) fn affected(rows_affected: u64, entity: &str) -> Result<(), AppError> {
    if rows_affected == 0 {
        Err(AppError::not_found(entity))
    } else {
        Ok(())
    }
}
