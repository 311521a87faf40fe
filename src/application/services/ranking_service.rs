use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use uuid::Uuid;

use crate::domain::entities::{Category, Game};
use crate::domain::repositories::{CategoryRepository, GameRepository, ReviewRepository};
use crate::domain::services::rating::{
    aggregate_ratings, compare_ranked, group_reviews_by_game, pool_category_reviews,
    rank_review_groups,
};
use crate::domain::value_objects::{RankedCategory, RankedGame, RatingSummary};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use crate::shared::utils::Validator;

/// Entries returned by the top-rated queries when the caller passes no
/// explicit limit.
pub const DEFAULT_RANKING_LIMIT: i64 = 10;

/// Ranking queries over the catalog: top-rated games, top-rated
/// categories, and similar games. Every call recomputes from the current
/// review set; there is no cached ranking state.
pub struct RankingService {
    game_repo: Arc<dyn GameRepository>,
    review_repo: Arc<dyn ReviewRepository>,
    category_repo: Arc<dyn CategoryRepository>,
}

impl RankingService {
    pub fn new(
        game_repo: Arc<dyn GameRepository>,
        review_repo: Arc<dyn ReviewRepository>,
        category_repo: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            game_repo,
            review_repo,
            category_repo,
        }
    }

    /// Top `limit` games by average rating, default 10. Games without
    /// reviews never appear; an empty review table yields an empty list,
    /// not an error.
    pub async fn top_rated_games(&self, limit: Option<i64>) -> AppResult<Vec<RankedGame>> {
        let limit = Self::effective_limit(limit)?;
        let start = Instant::now();

        let groups = self.review_repo.get_reviews_grouped_by_game().await?;
        let ranked = rank_review_groups(&groups, Some(limit));

        let result = self.attach_games(ranked).await?;

        LogContext::ranking_query(
            "top_rated_games",
            result.len(),
            start.elapsed().as_millis() as u64,
        );
        Ok(result)
    }

    /// Top `limit` categories by pooled average rating, default 10. The
    /// average is computed over the union of every review of every game in
    /// the category; categories with no games or no reviews stay in the
    /// ranking at 0.0.
    pub async fn top_rated_categories(
        &self,
        limit: Option<i64>,
    ) -> AppResult<Vec<RankedCategory>> {
        let limit = Self::effective_limit(limit)?;
        let start = Instant::now();

        let categories = self
            .category_repo
            .get_categories_with_games_and_reviews()
            .await?;

        let mut ranked: Vec<(Category, RatingSummary)> = categories
            .into_iter()
            .map(|entry| {
                let summary = aggregate_ratings(pool_category_reviews(&entry.games));
                (entry.category, summary)
            })
            .collect();

        ranked.sort_by(|a, b| compare_ranked(&(a.0.id, a.1), &(b.0.id, b.1)));
        ranked.truncate(limit);

        let result: Vec<RankedCategory> = ranked
            .into_iter()
            .map(|(category, summary)| RankedCategory {
                category,
                average_rating: summary.average,
                review_count: summary.count,
            })
            .collect();

        LogContext::ranking_query(
            "top_rated_categories",
            result.len(),
            start.elapsed().as_millis() as u64,
        );
        Ok(result)
    }

    /// Other games in the target's category, ranked by average rating.
    /// Postcondition: the input id never appears in the result. Neighbours
    /// without reviews are excluded, as in `top_rated_games`.
    pub async fn similar_games(&self, game_id: &Uuid) -> AppResult<Vec<RankedGame>> {
        let game = self
            .game_repo
            .find_by_id(game_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Game with ID {} not found", game_id)))?;

        let neighbours = self
            .game_repo
            .find_by_category(&game.category_id, Some(*game_id))
            .await?;
        if neighbours.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = neighbours.iter().map(|g| g.id).collect();
        let reviews = self.review_repo.find_by_game_ids(&ids).await?;
        let groups = group_reviews_by_game(reviews);
        let ranked = rank_review_groups(&groups, None);

        let mut by_id: HashMap<Uuid, Game> =
            neighbours.into_iter().map(|g| (g.id, g)).collect();

        Ok(ranked
            .into_iter()
            .filter_map(|(id, summary)| {
                by_id.remove(&id).map(|game| RankedGame {
                    game,
                    average_rating: summary.average,
                    review_count: summary.count,
                })
            })
            .collect())
    }

    /// Join ranked (id, summary) pairs back to full game rows, preserving
    /// rank order.
    async fn attach_games(
        &self,
        ranked: Vec<(Uuid, RatingSummary)>,
    ) -> AppResult<Vec<RankedGame>> {
        if ranked.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = ranked.iter().map(|(id, _)| *id).collect();
        let games = self.game_repo.find_by_ids(&ids).await?;
        let mut by_id: HashMap<Uuid, Game> = games.into_iter().map(|g| (g.id, g)).collect();

        Ok(ranked
            .into_iter()
            .filter_map(|(id, summary)| {
                by_id.remove(&id).map(|game| RankedGame {
                    game,
                    average_rating: summary.average,
                    review_count: summary.count,
                })
            })
            .collect())
    }

    fn effective_limit(limit: Option<i64>) -> AppResult<usize> {
        let limit = limit.unwrap_or(DEFAULT_RANKING_LIMIT);
        Validator::validate_ranking_limit(limit)?;
        Ok(limit as usize)
    }
}
