//! Reviews repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::review::Review,
};

const REVIEW_COLUMNS: &str = "id, movie_id, reviewer_name, rating, comment";

#[derive(Clone)]
pub struct ReviewsRepository {
    pool: Pool<Postgres>,
}

impl ReviewsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all reviews in id order
    pub async fn list(&self) -> AppResult<Vec<Review>> {
        let reviews = sqlx::query_as::<_, Review>(&format!(
            "SELECT {} FROM reviews ORDER BY id",
            REVIEW_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(reviews)
    }

    /// Get review by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Review> {
        sqlx::query_as::<_, Review>(&format!(
            "SELECT {} FROM reviews WHERE id = $1",
            REVIEW_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Review {} not found", id)))
    }

    /// Reviews belonging to a movie
    pub async fn list_by_movie(&self, movie_id: i32) -> AppResult<Vec<Review>> {
        let reviews = sqlx::query_as::<_, Review>(&format!(
            "SELECT {} FROM reviews WHERE movie_id = $1 ORDER BY id",
            REVIEW_COLUMNS
        ))
        .bind(movie_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(reviews)
    }

    /// Create a review. The caller must have verified the movie exists.
    pub async fn create(&self, review: &Review) -> AppResult<Review> {
        let created = sqlx::query_as::<_, Review>(&format!(
            "INSERT INTO reviews (movie_id, reviewer_name, rating, comment) \
             VALUES ($1, $2, $3, $4) RETURNING {}",
            REVIEW_COLUMNS
        ))
        .bind(review.movie_id)
        .bind(&review.reviewer_name)
        .bind(review.rating)
        .bind(&review.comment)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    /// Full replace of review fields
    pub async fn update(&self, review: &Review) -> AppResult<Review> {
        sqlx::query_as::<_, Review>(&format!(
            "UPDATE reviews SET reviewer_name = $1, rating = $2, comment = $3 \
             WHERE id = $4 RETURNING {}",
            REVIEW_COLUMNS
        ))
        .bind(&review.reviewer_name)
        .bind(review.rating)
        .bind(&review.comment)
        .bind(review.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Review {} not found", review.id)))
    }

    /// Delete a review
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Review {} not found", id)));
        }

        Ok(())
    }
}
