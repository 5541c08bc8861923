use sqlx::PgPool;

use crate::db;
use crate::error::AppError;
use crate::models::{CreateListRequest, List, UpdateListRequest};
use crate::repository::{ListRepository, NewList, ProjectRepository};

#[derive(Clone)]
pub struct ListUsecase {
    pool: PgPool,
    lists: ListRepository,
    projects: ProjectRepository,
}

impl ListUsecase {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            lists: ListRepository,
            projects: ProjectRepository,
        }
    }

    /// Adds a list to a live project; a missing or deleted project is `NotFound`.
    pub async fn create_list(&self, input: &CreateListRequest, created_by: i64) -> Result<List, AppError> {
        let mut tx = db::begin(&self.pool).await?;

        self.projects.get_by_id(&mut *tx, input.project_id).await?;
        let list = self
            .lists
            .create(
                &mut *tx,
                &NewList {
                    project_id: input.project_id,
                    name: &input.name,
                    position: input.position,
                    created_by,
                },
            )
            .await?;

        tx.commit().await?;

        log::info!(
            "List {} created in project {} by {}",
            list.id,
            list.project_id,
            created_by
        );
        Ok(list)
    }

    pub async fn get_lists_by_project_id(&self, project_id: i64) -> Result<Vec<List>, AppError> {
        let mut tx = db::begin_read_only(&self.pool).await?;
        let lists = self.lists.get_by_project_id(&mut *tx, project_id).await?;
        Ok(lists)
    }

    pub async fn get_list_by_id(&self, id: i64) -> Result<List, AppError> {
        let mut tx = db::begin_read_only(&self.pool).await?;
        let list = self.lists.get_by_id(&mut *tx, id).await?;
        Ok(list)
    }

    pub async fn update_list(
        &self,
        id: i64,
        input: &UpdateListRequest,
        updated_by: i64,
    ) -> Result<List, AppError> {
        let mut tx = db::begin(&self.pool).await?;

        let list = self
            .lists
            .update(&mut *tx, id, &input.name, input.position, updated_by)
            .await?;

        tx.commit().await?;

        log::info!("List {} updated by {}", id, updated_by);
        Ok(list)
    }

    pub async fn delete_list(&self, id: i64, deleted_by: i64) -> Result<(), AppError> {
        let mut tx = db::begin(&self.pool).await?;

        self.lists.delete(&mut *tx, id, deleted_by).await?;

        tx.commit().await?;

        log::info!("List {} deleted by {}", id, deleted_by);
        Ok(())
    }
}
