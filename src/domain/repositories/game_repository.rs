use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Game;
use crate::shared::errors::AppResult;

/// Read-side port over the game table. The write path lives in the
/// external CRUD service that owns these rows.
#[async_trait]
pub trait GameRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Game>>;

    async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Game>>;

    /// Games in a category, optionally excluding one id. The similar-games
    /// self-exclusion happens here, not downstream.
    async fn find_by_category(
        &self,
        category_id: &Uuid,
        excluding: Option<Uuid>,
    ) -> AppResult<Vec<Game>>;

    async fn list(&self, offset: i64, limit: i64) -> AppResult<Vec<Game>>;

    async fn count(&self) -> AppResult<i64>;
}
