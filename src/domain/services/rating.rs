use std::cmp::Ordering;
use std::collections::HashMap;

use uuid::Uuid;

use crate::domain::entities::Review;
use crate::domain::repositories::GameWithReviews;
use crate::domain::value_objects::RatingSummary;

/// Two decimals, rounded half away from zero (`f32::round` semantics).
/// The rule is an observable API contract: [5,4,5] averages to 4.67.
fn round_two_decimals(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

/// Reduce a review set to its arithmetic mean rating and size. An empty
/// set yields `{average: 0.0, count: 0}`; never NaN, never an error.
pub fn aggregate_ratings<'a, I>(reviews: I) -> RatingSummary
where
    I: IntoIterator<Item = &'a Review>,
{
    let (sum, count) = reviews
        .into_iter()
        .fold((0i64, 0usize), |(sum, count), review| {
            (sum + i64::from(review.rating), count + 1)
        });

    if count == 0 {
        return RatingSummary::EMPTY;
    }

    RatingSummary {
        average: round_two_decimals(sum as f32 / count as f32),
        count,
    }
}

/// Flatten the review sets of every game in a category into one pool.
/// Kept separate from the query that fetches the nested shape so the
/// pooled average stays testable without I/O.
pub fn pool_category_reviews(games: &[GameWithReviews]) -> impl Iterator<Item = &Review> {
    games.iter().flat_map(|entry| entry.reviews.iter())
}

/// Group a flat review list by game id.
pub fn group_reviews_by_game(reviews: Vec<Review>) -> HashMap<Uuid, Vec<Review>> {
    let mut grouped: HashMap<Uuid, Vec<Review>> = HashMap::new();
    for review in reviews {
        grouped.entry(review.game_id).or_default().push(review);
    }
    grouped
}

/// Deterministic ranking order: average descending, then review count
/// descending, then id ascending.
pub fn compare_ranked(a: &(Uuid, RatingSummary), b: &(Uuid, RatingSummary)) -> Ordering {
    b.1.average
        .total_cmp(&a.1.average)
        .then_with(|| b.1.count.cmp(&a.1.count))
        .then_with(|| a.0.cmp(&b.0))
}

/// Aggregate each per-game review group, sort, and truncate. Entities
/// with zero reviews never appear here since the groups derive from the
/// review set itself.
pub fn rank_review_groups(
    groups: &HashMap<Uuid, Vec<Review>>,
    limit: Option<usize>,
) -> Vec<(Uuid, RatingSummary)> {
    let mut ranked: Vec<(Uuid, RatingSummary)> = groups
        .iter()
        .map(|(id, reviews)| (*id, aggregate_ratings(reviews)))
        .collect();

    ranked.sort_by(compare_ranked);
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }

    ranked
}
