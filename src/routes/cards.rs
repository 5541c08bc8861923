use crate::{
    auth::AuthenticatedUserId,
    error::AppError,
    models::{CreateCardRequest, UpdateCardRequest},
    usecase::CardUsecase,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use validator::Validate;

/// Creates a card inside a live list.
///
/// ## Responses:
/// - `201 Created`: The new `Card`.
/// - `404 Not Found`: The list does not exist or was deleted.
/// - `422 Unprocessable Entity`: Field validation failed.
#[post("")]
pub async fn create_card(
    cards: web::Data<CardUsecase>,
    user_id: AuthenticatedUserId,
    card_data: web::Json<CreateCardRequest>,
) -> Result<impl Responder, AppError> {
    card_data.validate()?;

    let card = cards.create_card(&card_data, user_id.0).await?;

    Ok(HttpResponse::Created().json(card))
}

#[get("/list/{list_id}")]
pub async fn get_cards_by_list(
    cards: web::Data<CardUsecase>,
    list_id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let found = cards.get_cards_by_list_id(list_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(found))
}

#[get("/{id}")]
pub async fn get_card(
    cards: web::Data<CardUsecase>,
    id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let card = cards.get_card_by_id(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(card))
}

/// Replaces a card's title, content and position.
#[put("/{id}")]
pub async fn update_card(
    cards: web::Data<CardUsecase>,
    id: web::Path<i64>,
    user_id: AuthenticatedUserId,
    card_data: web::Json<UpdateCardRequest>,
) -> Result<impl Responder, AppError> {
    card_data.validate()?;

    let card = cards
        .update_card(id.into_inner(), &card_data, user_id.0)
        .await?;

    Ok(HttpResponse::Ok().json(card))
}

#[delete("/{id}")]
pub async fn delete_card(
    cards: web::Data<CardUsecase>,
    id: web::Path<i64>,
    user_id: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    cards.delete_card(id.into_inner(), user_id.0).await?;
    Ok(HttpResponse::NoContent().finish())
}
