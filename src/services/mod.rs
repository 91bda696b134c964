//! Business logic services

pub mod directors;
pub mod genres;
pub mod import;
pub mod movies;
pub mod recommendation;
pub mod reviews;

use crate::{config::RecommendationConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub movies: movies::MoviesService,
    pub directors: directors::DirectorsService,
    pub genres: genres::GenresService,
    pub reviews: reviews::ReviewsService,
    pub recommendation: recommendation::RecommendationService,
    pub import: import::ImportService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, recommendation_config: RecommendationConfig) -> Self {
        Self {
            movies: movies::MoviesService::new(repository.clone()),
            directors: directors::DirectorsService::new(repository.clone()),
            genres: genres::GenresService::new(repository.clone()),
            reviews: reviews::ReviewsService::new(repository.clone()),
            recommendation: recommendation::RecommendationService::new(
                repository.clone(),
                recommendation_config,
            ),
            import: import::ImportService::new(repository),
        }
    }
}
