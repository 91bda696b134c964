//! Directors service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::director::{Director, DirectorDto},
    repository::Repository,
};

#[derive(Clone)]
pub struct DirectorsService {
    repository: Repository,
}

impl DirectorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Director>> {
        self.repository.directors.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Director> {
        self.repository.directors.get_by_id(id).await
    }

    pub async fn list_by_movie(&self, movie_id: i32) -> AppResult<Vec<Director>> {
        self.repository.directors.list_by_movie(movie_id).await
    }

    /// Create a director; duplicate by trimmed case-folded name is rejected
    pub async fn create(&self, data: &DirectorDto) -> AppResult<Director> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let name = data.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Name cannot be empty".to_string()));
        }

        if self.repository.directors.find_by_name(name).await?.is_some() {
            return Err(AppError::Conflict("Director already exists".to_string()));
        }

        self.repository
            .directors
            .create(name, data.nationality.as_deref())
            .await
    }

    /// Full replace of director fields
    pub async fn update(&self, id: i32, data: &DirectorDto) -> AppResult<Director> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.repository.directors.get_by_id(id).await?;

        let director = Director {
            id,
            name: data.name.clone(),
            nationality: data.nationality.clone(),
        };

        self.repository.directors.update(&director).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.directors.delete(id).await
    }
}
