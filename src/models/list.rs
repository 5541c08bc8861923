use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::Audit;

/// A column of cards inside a project, ordered by `position`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct List {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub position: i32,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub audit: Audit,
}

/// Payload for `POST /api/lists`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateListRequest {
    pub project_id: i64,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub position: i32,
}

/// Payload for `PUT /api/lists/{id}`. A list cannot be moved to another project.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateListRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(range(min = 0))]
    pub position: i32,
}
