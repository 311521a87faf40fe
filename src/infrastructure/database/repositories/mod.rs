mod category_repository_impl;
mod game_repository_impl;
mod review_repository_impl;

pub use category_repository_impl::CategoryRepositoryImpl;
pub use game_repository_impl::GameRepositoryImpl;
pub use review_repository_impl::ReviewRepositoryImpl;
