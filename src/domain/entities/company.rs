use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Publisher/developer record. Owns zero or more games.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub country: String,
    pub created_at: DateTime<Utc>,
}

impl Company {
    pub fn new(name: String, country: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            country,
            created_at: Utc::now(),
        }
    }
}
