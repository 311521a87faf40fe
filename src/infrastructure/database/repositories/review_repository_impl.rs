use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::domain::entities::Review;
use crate::domain::repositories::ReviewRepository;
use crate::infrastructure::database::connection::Database;
use crate::infrastructure::database::models::ReviewModel;
use crate::schema::reviews;
use crate::shared::errors::AppResult;

pub struct ReviewRepositoryImpl {
    db: Arc<Database>,
}

impl ReviewRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryImpl {
    async fn get_reviews_grouped_by_game(&self) -> AppResult<HashMap<Uuid, Vec<Review>>> {
        let db = Arc::clone(&self.db);

        // One table scan; grouping happens in memory so the ranking code
        // sees the same shape regardless of store ordering.
        let models = task::spawn_blocking(move || -> AppResult<Vec<ReviewModel>> {
            let mut conn = db.get_connection()?;
            let rows = reviews::table
                .order(reviews::game_id.asc())
                .load::<ReviewModel>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        let mut grouped: HashMap<Uuid, Vec<Review>> = HashMap::new();
        for model in models {
            grouped.entry(model.game_id).or_default().push(model.into());
        }
        Ok(grouped)
    }

    async fn find_by_game_ids(&self, game_ids: &[Uuid]) -> AppResult<Vec<Review>> {
        if game_ids.is_empty() {
            return Ok(Vec::new());
        }

        let db = Arc::clone(&self.db);
        let game_ids = game_ids.to_vec();

        let models = task::spawn_blocking(move || -> AppResult<Vec<ReviewModel>> {
            let mut conn = db.get_connection()?;
            let rows = reviews::table
                .filter(reviews::game_id.eq_any(&game_ids))
                .load::<ReviewModel>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(models.into_iter().map(Review::from).collect())
    }

    async fn find_by_game(
        &self,
        game_id: &Uuid,
        offset: i64,
        limit: i64,
    ) -> AppResult<Vec<Review>> {
        let db = Arc::clone(&self.db);
        let game_id = *game_id;

        let models = task::spawn_blocking(move || -> AppResult<Vec<ReviewModel>> {
            let mut conn = db.get_connection()?;
            let rows = reviews::table
                .filter(reviews::game_id.eq(game_id))
                .order((reviews::created_at.desc(), reviews::id.asc()))
                .offset(offset)
                .limit(limit)
                .load::<ReviewModel>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(models.into_iter().map(Review::from).collect())
    }

    async fn count_by_game(&self, game_id: &Uuid) -> AppResult<i64> {
        let db = Arc::clone(&self.db);
        let game_id = *game_id;

        task::spawn_blocking(move || -> AppResult<i64> {
            let mut conn = db.get_connection()?;
            let n = reviews::table
                .filter(reviews::game_id.eq(game_id))
                .count()
                .get_result::<i64>(&mut conn)?;
            Ok(n)
        })
        .await?
    }
}
