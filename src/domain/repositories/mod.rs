mod category_repository;
mod game_repository;
mod review_repository;

pub use category_repository::{CategoryRepository, CategoryWithGames, GameWithReviews};
pub use game_repository::GameRepository;
pub use review_repository::ReviewRepository;
