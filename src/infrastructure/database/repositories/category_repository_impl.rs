use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::domain::entities::{Category, Game, Review};
use crate::domain::repositories::{CategoryRepository, CategoryWithGames, GameWithReviews};
use crate::infrastructure::database::connection::Database;
use crate::infrastructure::database::models::{CategoryModel, GameModel, ReviewModel};
use crate::schema::{categories, games, reviews};
use crate::shared::errors::AppResult;

pub struct CategoryRepositoryImpl {
    db: Arc<Database>,
}

impl CategoryRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryImpl {
    async fn get_categories_with_games_and_reviews(&self) -> AppResult<Vec<CategoryWithGames>> {
        let db = Arc::clone(&self.db);

        // Three bounded queries instead of an N+1 walk; the nested shape
        // is assembled in memory.
        let (category_models, game_models, review_models) = task::spawn_blocking(
            move || -> AppResult<(Vec<CategoryModel>, Vec<GameModel>, Vec<ReviewModel>)> {
                let mut conn = db.get_connection()?;

                let category_rows = categories::table
                    .order(categories::name.asc())
                    .load::<CategoryModel>(&mut conn)?;
                let game_rows = games::table.load::<GameModel>(&mut conn)?;
                let review_rows = reviews::table.load::<ReviewModel>(&mut conn)?;

                Ok((category_rows, game_rows, review_rows))
            },
        )
        .await??;

        let mut reviews_by_game: HashMap<Uuid, Vec<Review>> = HashMap::new();
        for model in review_models {
            reviews_by_game
                .entry(model.game_id)
                .or_default()
                .push(model.into());
        }

        let mut games_by_category: HashMap<Uuid, Vec<GameWithReviews>> = HashMap::new();
        for model in game_models {
            let game: Game = model.into();
            let reviews = reviews_by_game.remove(&game.id).unwrap_or_default();
            games_by_category
                .entry(game.category_id)
                .or_default()
                .push(GameWithReviews { game, reviews });
        }

        Ok(category_models
            .into_iter()
            .map(|model| {
                let category: Category = model.into();
                let games = games_by_category.remove(&category.id).unwrap_or_default();
                CategoryWithGames { category, games }
            })
            .collect())
    }
}
