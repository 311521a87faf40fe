use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::{Game, Review};
use crate::domain::repositories::{GameRepository, ReviewRepository};
use crate::domain::services::rating::aggregate_ratings;
use crate::domain::value_objects::{PageBounds, RankedGame};
use crate::shared::errors::{AppError, AppResult};

/// Read queries for the catalog surface: single-game detail with its
/// current rating, and paginated game/review listings.
pub struct CatalogService {
    game_repo: Arc<dyn GameRepository>,
    review_repo: Arc<dyn ReviewRepository>,
}

impl CatalogService {
    pub fn new(game_repo: Arc<dyn GameRepository>, review_repo: Arc<dyn ReviewRepository>) -> Self {
        Self {
            game_repo,
            review_repo,
        }
    }

    /// One game with its rating recomputed from the current review set.
    /// A game nobody reviewed reads as average 0.0, count 0.
    pub async fn get_game_with_rating(&self, id: &Uuid) -> AppResult<RankedGame> {
        let game = self
            .game_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Game with ID {} not found", id)))?;

        let reviews = self.review_repo.find_by_game_ids(&[game.id]).await?;
        let summary = aggregate_ratings(&reviews);

        Ok(RankedGame {
            game,
            average_rating: summary.average,
            review_count: summary.count,
        })
    }

    /// Paginated catalog listing, newest first. A window past the end of
    /// the table is an empty page, not an error.
    pub async fn list_games(&self, page: i64, limit: i64) -> AppResult<Vec<Game>> {
        let bounds = PageBounds::from_request(page, limit)?;

        let total = self.game_repo.count().await?;
        if bounds.is_out_of_range(total) {
            return Ok(Vec::new());
        }

        self.game_repo.list(bounds.offset, bounds.limit).await
    }

    /// Paginated reviews for one game, newest first.
    pub async fn list_game_reviews(
        &self,
        game_id: &Uuid,
        page: i64,
        limit: i64,
    ) -> AppResult<Vec<Review>> {
        let bounds = PageBounds::from_request(page, limit)?;

        if self.game_repo.find_by_id(game_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Game with ID {} not found",
                game_id
            )));
        }

        let total = self.review_repo.count_by_game(game_id).await?;
        if bounds.is_out_of_range(total) {
            return Ok(Vec::new());
        }

        self.review_repo
            .find_by_game(game_id, bounds.offset, bounds.limit)
            .await
    }
}
