//! Repository layer for database operations

pub mod directors;
pub mod genres;
pub mod movies;
pub mod reviews;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub movies: movies::MoviesRepository,
    pub directors: directors::DirectorsRepository,
    pub genres: genres::GenresRepository,
    pub reviews: reviews::ReviewsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            movies: movies::MoviesRepository::new(pool.clone()),
            directors: directors::DirectorsRepository::new(pool.clone()),
            genres: genres::GenresRepository::new(pool.clone()),
            reviews: reviews::ReviewsRepository::new(pool.clone()),
            pool,
        }
    }
}
