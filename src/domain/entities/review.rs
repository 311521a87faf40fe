use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user's review of one game. `rating` is an integer in [1,5],
/// validated by the write path before it ever reaches this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub user_id: Uuid,
    pub game_id: Uuid,
    pub rating: i32,
    pub body: Option<String>,
    pub hours_played: Option<i32>,
    pub recommended: Option<bool>,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn new(user_id: Uuid, game_id: Uuid, rating: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            game_id,
            rating,
            body: None,
            hours_played: None,
            recommended: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_hours_played(mut self, hours: i32) -> Self {
        self.hours_played = Some(hours);
        self
    }

    pub fn with_recommended(mut self, recommended: bool) -> Self {
        self.recommended = Some(recommended);
        self
    }
}
