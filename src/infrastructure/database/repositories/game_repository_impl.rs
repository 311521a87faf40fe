use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::domain::entities::Game;
use crate::domain::repositories::GameRepository;
use crate::infrastructure::database::connection::Database;
use crate::infrastructure::database::models::GameModel;
use crate::schema::games;
use crate::shared::errors::AppResult;

pub struct GameRepositoryImpl {
    db: Arc<Database>,
}

impl GameRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GameRepository for GameRepositoryImpl {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Game>> {
        let db = Arc::clone(&self.db);
        let id = *id;

        let model = task::spawn_blocking(move || -> AppResult<Option<GameModel>> {
            let mut conn = db.get_connection()?;
            let m = games::table
                .filter(games::id.eq(id))
                .first::<GameModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(Game::from))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Game>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let db = Arc::clone(&self.db);
        let ids = ids.to_vec();

        let models = task::spawn_blocking(move || -> AppResult<Vec<GameModel>> {
            let mut conn = db.get_connection()?;
            let rows = games::table
                .filter(games::id.eq_any(&ids))
                .load::<GameModel>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(models.into_iter().map(Game::from).collect())
    }

    async fn find_by_category(
        &self,
        category_id: &Uuid,
        excluding: Option<Uuid>,
    ) -> AppResult<Vec<Game>> {
        let db = Arc::clone(&self.db);
        let category_id = *category_id;

        let models = task::spawn_blocking(move || -> AppResult<Vec<GameModel>> {
            let mut conn = db.get_connection()?;

            let mut query = games::table
                .filter(games::category_id.eq(category_id))
                .into_boxed();
            if let Some(excluded) = excluding {
                query = query.filter(games::id.ne(excluded));
            }

            let rows = query
                .order(games::created_at.desc())
                .load::<GameModel>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(models.into_iter().map(Game::from).collect())
    }

    async fn list(&self, offset: i64, limit: i64) -> AppResult<Vec<Game>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<GameModel>> {
            let mut conn = db.get_connection()?;
            // Secondary id key keeps pages stable across equal timestamps
            let rows = games::table
                .order((games::created_at.desc(), games::id.asc()))
                .offset(offset)
                .limit(limit)
                .load::<GameModel>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(models.into_iter().map(Game::from).collect())
    }

    async fn count(&self) -> AppResult<i64> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<i64> {
            let mut conn = db.get_connection()?;
            let n = games::table.count().get_result::<i64>(&mut conn)?;
            Ok(n)
        })
        .await?
    }
}
