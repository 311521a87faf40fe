mod catalog_service;
mod ranking_service;

pub use catalog_service::CatalogService;
pub use ranking_service::{RankingService, DEFAULT_RANKING_LIMIT};
