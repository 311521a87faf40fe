use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::entities::{Category, Game, Review};
use crate::schema::{categories, games, reviews};

// Read models only. The write path belongs to the external CRUD service,
// so there are no Insertable/AsChangeset counterparts here.

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = categories)]
pub struct CategoryModel {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = games)]
pub struct GameModel {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub company_id: Uuid,
    pub category_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Queryable, Identifiable, Associations, Debug, Clone)]
#[diesel(belongs_to(GameModel, foreign_key = game_id))]
#[diesel(table_name = reviews)]
pub struct ReviewModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub game_id: Uuid,
    pub rating: i32,
    pub body: Option<String>,
    pub hours_played: Option<i32>,
    pub recommended: Option<bool>,
    pub created_at: DateTime<Utc>,
}

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category {
            id: model.id,
            name: model.name,
            created_at: model.created_at,
        }
    }
}

impl From<GameModel> for Game {
    fn from(model: GameModel) -> Self {
        Game {
            id: model.id,
            title: model.title,
            description: model.description,
            release_date: model.release_date,
            company_id: model.company_id,
            category_id: model.category_id,
            created_at: model.created_at,
        }
    }
}

impl From<ReviewModel> for Review {
    fn from(model: ReviewModel) -> Self {
        Review {
            id: model.id,
            user_id: model.user_id,
            game_id: model.game_id,
            rating: model.rating,
            body: model.body,
            hours_played: model.hours_played,
            recommended: model.recommended,
            created_at: model.created_at,
        }
    }
}
