use serde::{Deserialize, Serialize};

use crate::domain::entities::{Category, Game};

/// Reduction of a review set: arithmetic mean rating (two decimals) and
/// set size. Computed on every read, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    pub average: f32,
    pub count: usize,
}

impl RatingSummary {
    /// The summary of an empty review set: 0.0 average, not NaN.
    pub const EMPTY: RatingSummary = RatingSummary {
        average: 0.0,
        count: 0,
    };
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedGame {
    pub game: Game,
    pub average_rating: f32,
    pub review_count: usize,
}

/// Category ranking entry. The average is pooled over the union of all
/// reviews of all games in the category; `review_count` is the pool size.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCategory {
    pub category: Category,
    pub average_rating: f32,
    pub review_count: usize,
}
