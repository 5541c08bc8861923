use sqlx::PgPool;

use crate::db;
use crate::error::AppError;
use crate::models::{Card, CreateCardRequest, UpdateCardRequest};
use crate::repository::{CardRepository, ListRepository, NewCard};

#[derive(Clone)]
pub struct CardUsecase {
    pool: PgPool,
    cards: CardRepository,
    lists: ListRepository,
}

impl CardUsecase {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            cards: CardRepository,
            lists: ListRepository,
        }
    }

    /// Adds a card to a live list; a missing or deleted list is `NotFound`.
    pub async fn create_card(&self, input: &CreateCardRequest, created_by: i64) -> Result<Card, AppError> {
        let mut tx = db::begin(&self.pool).await?;

        self.lists.get_by_id(&mut *tx, input.list_id).await?;
        let card = self
            .cards
            .create(
                &mut *tx,
                &NewCard {
                    list_id: input.list_id,
                    title: &input.title,
                    content: &input.content,
                    position: input.position,
                    created_by,
                },
            )
            .await?;

        tx.commit().await?;

        log::info!(
            "Card {} created in list {} by {}",
            card.id,
            card.list_id,
            created_by
        );
        Ok(card)
    }

    pub async fn get_cards_by_list_id(&self, list_id: i64) -> Result<Vec<Card>, AppError> {
        let mut tx = db::begin_read_only(&self.pool).await?;
        let cards = self.cards.get_by_list_id(&mut *tx, list_id).await?;
        Ok(cards)
    }

    pub async fn get_card_by_id(&self, id: i64) -> Result<Card, AppError> {
        let mut tx = db::begin_read_only(&self.pool).await?;
        let card = self.cards.get_by_id(&mut *tx, id).await?;
        Ok(card)
    }

    pub async fn update_card(
        &self,
        id: i64,
        input: &UpdateCardRequest,
        updated_by: i64,
    ) -> Result<Card, AppError> {
        let mut tx = db::begin(&self.pool).await?;

        let card = self
            .cards
            .update(
                &mut *tx,
                id,
                &input.title,
                &input.content,
                input.position,
                updated_by,
            )
            .await?;

        tx.commit().await?;

        log::info!("Card {} updated by {}", id, updated_by);
        Ok(card)
    }

    pub async fn delete_card(&self, id: i64, deleted_by: i64) -> Result<(), AppError> {
        let mut tx = db::begin(&self.pool).await?;

        self.cards.delete(&mut *tx, id, deleted_by).await?;

        tx.commit().await?;

        log::info!("Card {} deleted by {}", id, deleted_by);
        Ok(())
    }
}
