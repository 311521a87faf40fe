use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog entry. Rows are owned and mutated by the external CRUD
/// service; this crate only reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub company_id: Uuid,
    pub category_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Game {
    pub fn new(
        title: String,
        description: String,
        release_date: NaiveDate,
        company_id: Uuid,
        category_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            release_date,
            company_id,
            category_id,
            created_at: Utc::now(),
        }
    }
}
