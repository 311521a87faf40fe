use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;
use uuid::Uuid;

use playdex::application::services::CatalogService;
use playdex::domain::entities::{Game, Review};
use playdex::domain::repositories::{GameRepository, ReviewRepository};
use playdex::shared::errors::{AppError, AppResult};

mock! {
    GameRepo {}

    #[async_trait]
    impl GameRepository for GameRepo {
        async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Game>>;
        async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Game>>;
        async fn find_by_category(
            &self,
            category_id: &Uuid,
            excluding: Option<Uuid>,
        ) -> AppResult<Vec<Game>>;
        async fn list(&self, offset: i64, limit: i64) -> AppResult<Vec<Game>>;
        async fn count(&self) -> AppResult<i64>;
    }
}

mock! {
    ReviewRepo {}

    #[async_trait]
    impl ReviewRepository for ReviewRepo {
        async fn get_reviews_grouped_by_game(&self) -> AppResult<HashMap<Uuid, Vec<Review>>>;
        async fn find_by_game_ids(&self, game_ids: &[Uuid]) -> AppResult<Vec<Review>>;
        async fn find_by_game(
            &self,
            game_id: &Uuid,
            offset: i64,
            limit: i64,
        ) -> AppResult<Vec<Review>>;
        async fn count_by_game(&self, game_id: &Uuid) -> AppResult<i64>;
    }
}

fn sample_game() -> Game {
    Game::new(
        "Astral Drift".to_string(),
        "Astral Drift description".to_string(),
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        Uuid::new_v4(),
        Uuid::new_v4(),
    )
}

fn sample_reviews(game_id: Uuid, ratings: &[i32]) -> Vec<Review> {
    ratings
        .iter()
        .map(|r| {
            Review::new(Uuid::new_v4(), game_id, *r).with_body(format!("{} star experience", r))
        })
        .collect()
}

fn service(game_repo: MockGameRepo, review_repo: MockReviewRepo) -> CatalogService {
    CatalogService::new(Arc::new(game_repo), Arc::new(review_repo))
}

#[tokio::test]
async fn game_with_rating_aggregates_current_reviews() {
    let game = sample_game();
    let game_id = game.id;

    let mut game_repo = MockGameRepo::new();
    game_repo
        .expect_find_by_id()
        .returning(move |_| Ok(Some(game.clone())));

    let mut review_repo = MockReviewRepo::new();
    review_repo
        .expect_find_by_game_ids()
        .returning(move |ids| Ok(sample_reviews(ids[0], &[5, 4])));

    let ranked = service(game_repo, review_repo)
        .get_game_with_rating(&game_id)
        .await
        .unwrap();

    assert_eq!(ranked.game.id, game_id);
    assert_eq!(ranked.average_rating, 4.5);
    assert_eq!(ranked.review_count, 2);
}

#[tokio::test]
async fn game_nobody_reviewed_reads_as_zero() {
    let game = sample_game();
    let game_id = game.id;

    let mut game_repo = MockGameRepo::new();
    game_repo
        .expect_find_by_id()
        .returning(move |_| Ok(Some(game.clone())));

    let mut review_repo = MockReviewRepo::new();
    review_repo
        .expect_find_by_game_ids()
        .returning(|_| Ok(Vec::new()));

    let ranked = service(game_repo, review_repo)
        .get_game_with_rating(&game_id)
        .await
        .unwrap();

    assert_eq!(ranked.average_rating, 0.0);
    assert_eq!(ranked.review_count, 0);
}

#[tokio::test]
async fn missing_game_is_not_found() {
    let mut game_repo = MockGameRepo::new();
    game_repo.expect_find_by_id().returning(|_| Ok(None));

    let err = service(game_repo, MockReviewRepo::new())
        .get_game_with_rating(&Uuid::new_v4())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn list_games_rejects_page_zero_before_touching_the_store() {
    // No expectations set: the store must not be called at all
    let err = service(MockGameRepo::new(), MockReviewRepo::new())
        .list_games(0, 10)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::ValidationError(ref msg) if msg == "Page must be greater than 0"
    ));
}

#[tokio::test]
async fn list_games_rejects_limit_zero() {
    let err = service(MockGameRepo::new(), MockReviewRepo::new())
        .list_games(1, 0)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::ValidationError(ref msg) if msg == "Limit must be greater than 0"
    ));
}

#[tokio::test]
async fn list_games_past_the_end_is_an_empty_page() {
    let mut game_repo = MockGameRepo::new();
    game_repo.expect_count().returning(|| Ok(3));
    // No `list` expectation: the short-circuit must skip the row query

    let games = service(game_repo, MockReviewRepo::new())
        .list_games(2, 10)
        .await
        .unwrap();

    assert!(games.is_empty());
}

#[tokio::test]
async fn list_games_passes_derived_offset_to_the_store() {
    let mut game_repo = MockGameRepo::new();
    game_repo.expect_count().returning(|| Ok(25));
    game_repo
        .expect_list()
        .withf(|offset, limit| *offset == 10 && *limit == 5)
        .returning(|_, _| Ok(vec![sample_game()]));

    let games = service(game_repo, MockReviewRepo::new())
        .list_games(3, 5)
        .await
        .unwrap();

    assert_eq!(games.len(), 1);
}

#[tokio::test]
async fn review_listing_for_missing_game_is_not_found() {
    let mut game_repo = MockGameRepo::new();
    game_repo.expect_find_by_id().returning(|_| Ok(None));

    let err = service(game_repo, MockReviewRepo::new())
        .list_game_reviews(&Uuid::new_v4(), 1, 10)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn review_listing_short_circuits_past_the_end() {
    let game = sample_game();
    let game_id = game.id;

    let mut game_repo = MockGameRepo::new();
    game_repo
        .expect_find_by_id()
        .returning(move |_| Ok(Some(game.clone())));

    let mut review_repo = MockReviewRepo::new();
    review_repo.expect_count_by_game().returning(|_| Ok(4));

    let reviews = service(game_repo, review_repo)
        .list_game_reviews(&game_id, 3, 2)
        .await
        .unwrap();

    assert!(reviews.is_empty());
}

#[tokio::test]
async fn review_listing_pages_through_the_set() {
    let game = sample_game();
    let game_id = game.id;

    let mut game_repo = MockGameRepo::new();
    game_repo
        .expect_find_by_id()
        .returning(move |_| Ok(Some(game.clone())));

    let mut review_repo = MockReviewRepo::new();
    review_repo.expect_count_by_game().returning(|_| Ok(4));
    review_repo
        .expect_find_by_game()
        .withf(|_, offset, limit| *offset == 2 && *limit == 2)
        .returning(|game_id, _, _| Ok(sample_reviews(*game_id, &[3, 4])));

    let reviews = service(game_repo, review_repo)
        .list_game_reviews(&game_id, 2, 2)
        .await
        .unwrap();

    assert_eq!(reviews.len(), 2);
    assert!(reviews.iter().all(|r| r.game_id == game_id));
}
