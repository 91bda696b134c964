//! Genres service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::genre::{Genre, GenreDto},
    repository::Repository,
};

#[derive(Clone)]
pub struct GenresService {
    repository: Repository,
}

impl GenresService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Genre>> {
        self.repository.genres.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Genre> {
        self.repository.genres.get_by_id(id).await
    }

    pub async fn list_by_movie(&self, movie_id: i32) -> AppResult<Vec<Genre>> {
        self.repository.genres.list_by_movie(movie_id).await
    }

    /// Create a genre; duplicate by trimmed case-folded name is rejected
    pub async fn create(&self, data: &GenreDto) -> AppResult<Genre> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let name = data.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Name cannot be empty".to_string()));
        }

        if self.repository.genres.find_by_name(name).await?.is_some() {
            return Err(AppError::Conflict("Genre already exists".to_string()));
        }

        self.repository.genres.create(name).await
    }

    /// Full replace of genre fields
    pub async fn update(&self, id: i32, data: &GenreDto) -> AppResult<Genre> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.repository.genres.get_by_id(id).await?;

        let genre = Genre {
            id,
            name: data.name.clone(),
        };

        self.repository.genres.update(&genre).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.genres.delete(id).await
    }
}
