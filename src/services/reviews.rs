//! Reviews service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::review::{Review, ReviewDto},
    repository::Repository,
};

#[derive(Clone)]
pub struct ReviewsService {
    repository: Repository,
}

impl ReviewsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Review>> {
        self.repository.reviews.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Review> {
        self.repository.reviews.get_by_id(id).await
    }

    pub async fn list_by_movie(&self, movie_id: i32) -> AppResult<Vec<Review>> {
        self.repository.reviews.list_by_movie(movie_id).await
    }

    /// Create a review for a movie. The movie must exist; nothing is
    /// inserted otherwise.
    pub async fn create(&self, movie_id: i32, data: &ReviewDto) -> AppResult<Review> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.repository.movies.get_by_id(movie_id).await?;

        let review = Review {
            id: 0,
            movie_id,
            reviewer_name: data.reviewer_name.clone(),
            rating: data.rating,
            comment: data.comment.clone(),
        };

        self.repository.reviews.create(&review).await
    }

    /// Full replace of review fields; the owning movie cannot be changed
    pub async fn update(&self, id: i32, data: &ReviewDto) -> AppResult<Review> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let existing = self.repository.reviews.get_by_id(id).await?;

        let review = Review {
            id,
            movie_id: existing.movie_id,
            reviewer_name: data.reviewer_name.clone(),
            rating: data.rating,
            comment: data.comment.clone(),
        };

        self.repository.reviews.update(&review).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.reviews.delete(id).await
    }
}
