//! Movies service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::movie::{Movie, MovieDto},
    repository::Repository,
};

#[derive(Clone)]
pub struct MoviesService {
    repository: Repository,
}

impl MoviesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// One page of movies in id order with the total count
    pub async fn list_paged(
        &self,
        page_number: i64,
        page_size: i64,
    ) -> AppResult<(Vec<Movie>, i64)> {
        if page_size < 1 {
            return Err(AppError::Validation(
                "Page size must be at least 1".to_string(),
            ));
        }
        self.repository.movies.list_paged(page_number, page_size).await
    }

    /// Get movie by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Movie> {
        self.repository.movies.get_by_id(id).await
    }

    pub async fn list_by_genre_name(&self, name: &str) -> AppResult<Vec<Movie>> {
        self.repository.movies.list_by_genre_name(name).await
    }

    pub async fn list_by_director_name(&self, name: &str) -> AppResult<Vec<Movie>> {
        self.repository.movies.list_by_director_name(name).await
    }

    pub async fn list_by_year(&self, year: i32) -> AppResult<Vec<Movie>> {
        self.repository.movies.list_by_year(year).await
    }

    pub async fn list_years(&self) -> AppResult<Vec<i32>> {
        self.repository.movies.list_years().await
    }

    pub async fn trending(&self) -> AppResult<Vec<Movie>> {
        self.repository.movies.trending().await
    }

    pub async fn best_by_genre(&self, name: &str) -> AppResult<Vec<Movie>> {
        self.repository.movies.best_by_genre(name).await
    }

    pub async fn best_by_director(&self, name: &str) -> AppResult<Vec<Movie>> {
        self.repository.movies.best_by_director(name).await
    }

    pub async fn search(&self, query: &str) -> AppResult<Vec<Movie>> {
        self.repository.movies.search(query).await
    }

    /// Create a movie linked to one genre and one director.
    ///
    /// Rejects duplicates by trimmed case-folded title and verifies both
    /// referenced rows exist before the transactional insert.
    pub async fn create(
        &self,
        data: &MovieDto,
        genre_id: i32,
        director_id: i32,
    ) -> AppResult<Movie> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if data.title.trim().is_empty() {
            return Err(AppError::Validation("Title cannot be empty".to_string()));
        }

        if self
            .repository
            .movies
            .find_by_title(&data.title)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict("Movie already exists".to_string()));
        }

        self.repository.genres.get_by_id(genre_id).await?;
        self.repository.directors.get_by_id(director_id).await?;

        let movie = Movie {
            id: 0,
            title: data.title.trim().to_string(),
            release_year: data.release_year,
            description: data.description.clone(),
            rating: data.rating,
        };

        self.repository.movies.create(&movie, genre_id, director_id).await
    }

    /// Full replace of scalar fields. The path id wins over any id in the body.
    pub async fn update(&self, id: i32, data: &MovieDto) -> AppResult<Movie> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        // Verify the target exists before touching it
        self.repository.movies.get_by_id(id).await?;

        let movie = Movie {
            id,
            title: data.title.clone(),
            release_year: data.release_year,
            description: data.description.clone(),
            rating: data.rating,
        };

        self.repository.movies.update(&movie).await
    }

    /// Delete a movie; junction rows cascade at the schema level
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.movies.delete(id).await
    }
}
