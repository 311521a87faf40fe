use async_trait::async_trait;

use crate::domain::entities::{Category, Game, Review};
use crate::shared::errors::AppResult;

/// One game with its reviews, as nested under a category.
#[derive(Debug, Clone)]
pub struct GameWithReviews {
    pub game: Game,
    pub reviews: Vec<Review>,
}

/// A category with all of its games and each game's reviews. Categories
/// with no games are still present, with an empty `games` list.
#[derive(Debug, Clone)]
pub struct CategoryWithGames {
    pub category: Category,
    pub games: Vec<GameWithReviews>,
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn get_categories_with_games_and_reviews(&self) -> AppResult<Vec<CategoryWithGames>>;
}
