use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::Audit;

/// A card inside a list, ordered by `position`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Card {
    pub id: i64,
    pub list_id: i64,
    pub title: String,
    pub content: String,
    pub position: i32,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub audit: Audit,
}

/// Payload for `POST /api/cards`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCardRequest {
    pub list_id: i64,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 10000))]
    pub content: String,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub position: i32,
}

/// Payload for `PUT /api/cards/{id}`; title, content and position are replaced.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCardRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 10000))]
    pub content: String,
    #[validate(range(min = 0))]
    pub position: i32,
}
