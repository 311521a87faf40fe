use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Review;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Every review in the store, grouped by game. Games with no reviews
    /// have no entry, so rankings derived from this never see them.
    async fn get_reviews_grouped_by_game(&self) -> AppResult<HashMap<Uuid, Vec<Review>>>;

    async fn find_by_game_ids(&self, game_ids: &[Uuid]) -> AppResult<Vec<Review>>;

    async fn find_by_game(
        &self,
        game_id: &Uuid,
        offset: i64,
        limit: i64,
    ) -> AppResult<Vec<Review>>;

    async fn count_by_game(&self, game_id: &Uuid) -> AppResult<i64>;
}
