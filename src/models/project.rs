use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::Audit;

/// A project, the root of the project → list → card hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub audit: Audit,
}

/// Payload for `POST /api/projects`.
///
/// When `default_list_name` is present the project is created together with a first
/// list of that name in the same transaction.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: String,
    #[validate(length(min = 1, max = 200))]
    pub default_list_name: Option<String>,
}

/// Payload for `PUT /api/projects/{id}`; both fields are replaced.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProjectRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: String,
}
